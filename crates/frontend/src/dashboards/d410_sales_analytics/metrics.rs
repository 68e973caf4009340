//! KPI values derived from the trend series.
//!
//! Pure functions; the same input always renders the same card.

use crate::shared::date_utils::{inclusive_days, parse_iso_date};
use contracts::dashboards::d410_sales_analytics::TrendPoint;

pub const GROWTH_SUBTITLE: &str = "vs first half of period";

/// Percentage text plus the caption under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiValue {
    pub pct: String,
    pub subtitle: String,
}

impl KpiValue {
    fn new(pct: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            pct: pct.into(),
            subtitle: subtitle.into(),
        }
    }

    /// Numeric part of `pct` for the win-rate gauge, e.g. "+35%" -> 35
    pub fn as_number(&self) -> i64 {
        self.pct
            .trim_end_matches('%')
            .trim_start_matches('+')
            .parse()
            .unwrap_or(0)
    }
}

/// Half-up rounding (ties go toward +inf), the way the dashboard always displayed it
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Revenue of the second half of the period compared with the first half.
///
/// A first half with no revenue cannot yield a ratio; it is shown as "+100%"
/// when the second half sold anything, "0%" otherwise.
pub fn sales_growth(trends: &[TrendPoint]) -> KpiValue {
    match trends.len() {
        0 => return KpiValue::new("0%", "No trend data"),
        1 => return KpiValue::new("0%", "Single data point"),
        _ => {}
    }

    let mid = trends.len() / 2;
    let first_half: f64 = trends[..mid].iter().map(|p| p.revenue).sum();
    let second_half: f64 = trends[mid..].iter().map(|p| p.revenue).sum();

    if first_half == 0.0 {
        let pct = if second_half > 0.0 { "+100%" } else { "0%" };
        return KpiValue::new(pct, GROWTH_SUBTITLE);
    }

    let change = (second_half - first_half) / first_half * 100.0;
    let sign = if change >= 0.0 { "+" } else { "" };
    KpiValue::new(format!("{}{}%", sign, round_half_up(change)), GROWTH_SUBTITLE)
}

/// Share of calendar days in `[start, end]` that have a data point.
///
/// Assumes daily buckets: one trend point per day with sales. Clamped to 100%
/// when the series has more points than the range has days.
pub fn win_rate(trends: &[TrendPoint], start: Option<&str>, end: Option<&str>) -> KpiValue {
    const FALLBACK_SUBTITLE: &str = "of days in period";

    let (Some(start), Some(end)) = (start.and_then(parse_iso_date), end.and_then(parse_iso_date))
    else {
        return KpiValue::new("0%", FALLBACK_SUBTITLE);
    };

    let total_days = inclusive_days(start, end);
    if total_days <= 0 {
        return KpiValue::new("0%", FALLBACK_SUBTITLE);
    }

    let days_with_sales = trends.len() as f64;
    let pct = round_half_up(days_with_sales / total_days as f64 * 100.0).min(100);
    KpiValue::new(format!("{}%", pct), format!("of {} days in period", total_days))
}

/// Sum of revenue over the series ("Total in period")
pub fn total_revenue(trends: &[TrendPoint]) -> f64 {
    trends.iter().map(|p| p.revenue).sum()
}

/// Revenue values for KPI sparklines; a single zero keeps the chart drawable
pub fn sparkline(trends: &[TrendPoint]) -> Vec<f64> {
    if trends.is_empty() {
        return vec![0.0];
    }
    trends.iter().map(|p| p.revenue).collect()
}

/// Percentage of `value` in `total`; 0 when nothing was sold
pub fn revenue_share(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(revenues: &[f64]) -> Vec<TrendPoint> {
        revenues
            .iter()
            .enumerate()
            .map(|(i, r)| TrendPoint {
                date: format!("2024-01-{:02}", i + 1),
                revenue: *r,
            })
            .collect()
    }

    #[test]
    fn test_growth_empty_and_single() {
        assert_eq!(sales_growth(&[]), KpiValue::new("0%", "No trend data"));
        assert_eq!(
            sales_growth(&series(&[500.0])),
            KpiValue::new("0%", "Single data point")
        );
    }

    #[test]
    fn test_growth_doubling_halves() {
        let kpi = sales_growth(&series(&[100.0, 100.0, 300.0, 300.0]));
        assert_eq!(kpi, KpiValue::new("+200%", "vs first half of period"));
    }

    #[test]
    fn test_growth_odd_length_puts_middle_in_second_half() {
        // mid = 1: first = [100], second = [50, 100]
        let kpi = sales_growth(&series(&[100.0, 50.0, 100.0]));
        assert_eq!(kpi.pct, "+50%");
    }

    #[test]
    fn test_growth_decline_has_no_plus() {
        let kpi = sales_growth(&series(&[400.0, 100.0]));
        assert_eq!(kpi.pct, "-75%");
    }

    #[test]
    fn test_growth_zero_first_half() {
        assert_eq!(sales_growth(&series(&[0.0, 0.0, 10.0, 5.0])).pct, "+100%");
        assert_eq!(sales_growth(&series(&[0.0, 0.0])).pct, "0%");
        assert_eq!(
            sales_growth(&series(&[0.0, 0.0])).subtitle,
            "vs first half of period"
        );
    }

    #[test]
    fn test_growth_rounds_half_up() {
        // change = +12.5%
        assert_eq!(sales_growth(&series(&[200.0, 225.0])).pct, "+13%");
        // change = -12.5% rounds toward +inf
        assert_eq!(sales_growth(&series(&[200.0, 175.0])).pct, "-12%");
        // tiny decline rounds to zero without a minus sign
        assert_eq!(sales_growth(&series(&[1000.0, 999.0])).pct, "0%");
    }

    #[test]
    fn test_growth_is_deterministic() {
        let data = series(&[120.0, 80.0, 95.0, 130.0, 60.0]);
        assert_eq!(sales_growth(&data), sales_growth(&data));
    }

    #[test]
    fn test_win_rate_half_of_days() {
        let kpi = win_rate(&series(&[1.0; 5]), Some("2024-01-01"), Some("2024-01-10"));
        assert_eq!(kpi, KpiValue::new("50%", "of 10 days in period"));
    }

    #[test]
    fn test_win_rate_clamped_to_100() {
        let kpi = win_rate(&series(&[1.0; 12]), Some("2024-01-01"), Some("2024-01-10"));
        assert_eq!(kpi.pct, "100%");
    }

    #[test]
    fn test_win_rate_missing_or_inverted_range() {
        let fallback = KpiValue::new("0%", "of days in period");
        assert_eq!(win_rate(&series(&[1.0]), None, Some("2024-01-10")), fallback);
        assert_eq!(win_rate(&series(&[1.0]), Some("2024-01-10"), None), fallback);
        assert_eq!(win_rate(&series(&[1.0]), Some(""), Some("2024-01-10")), fallback);
        assert_eq!(
            win_rate(&series(&[1.0]), Some("2024-01-10"), Some("2024-01-01")),
            fallback
        );
    }

    #[test]
    fn test_win_rate_single_day_range() {
        let kpi = win_rate(&series(&[3.0]), Some("2024-02-29"), Some("2024-02-29"));
        assert_eq!(kpi, KpiValue::new("100%", "of 1 days in period"));
    }

    #[test]
    fn test_win_rate_rounding() {
        // 1 / 3 = 33.33%
        let kpi = win_rate(&series(&[1.0]), Some("2024-01-01"), Some("2024-01-03"));
        assert_eq!(kpi.pct, "33%");
        // 1 / 8 = 12.5% -> 13%
        let kpi = win_rate(&series(&[1.0]), Some("2024-01-01"), Some("2024-01-08"));
        assert_eq!(kpi.pct, "13%");
    }

    #[test]
    fn test_total_revenue_and_sparkline() {
        let data = series(&[10.0, 20.5, 0.0]);
        assert_eq!(total_revenue(&data), 30.5);
        assert_eq!(sparkline(&data), vec![10.0, 20.5, 0.0]);
        assert_eq!(sparkline(&[]), vec![0.0]);
    }

    #[test]
    fn test_kpi_as_number() {
        assert_eq!(KpiValue::new("+35%", "").as_number(), 35);
        assert_eq!(KpiValue::new("-12%", "").as_number(), -12);
        assert_eq!(KpiValue::new("0%", "").as_number(), 0);
    }

    #[test]
    fn test_revenue_share() {
        assert_eq!(revenue_share(25.0, 100.0), 25.0);
        assert_eq!(revenue_share(0.0, 100.0), 0.0);
        assert_eq!(revenue_share(10.0, 0.0), 0.0);
    }
}
