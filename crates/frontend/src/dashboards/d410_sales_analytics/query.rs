//! Sales filter state and its translation into `/sales/*` query strings

use crate::shared::date_utils::{default_period, parse_iso_date};
use crate::shared::pagination::Pagination;
use chrono::NaiveDate;
use contracts::dashboards::d410_sales_analytics::{SalesQuery, TrendGranularity};

/// Categories offered on the trends/products/regions pages.
/// The overview shows whatever the backend returns.
pub const SALES_CATEGORY_ALLOW_LIST: [&str; 6] = [
    "Computers&Accessories",
    "Electronics",
    "Home&Kitchen",
    "HomeImprovement",
    "MusicalInstruments",
    "OfficeProducts",
];

/// Filters shared by every sales page. Every setter resets the table page.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesFilters {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub region: Option<String>,
    pub pagination: Pagination,
}

impl SalesFilters {
    /// Last month up to `today`, no category or region
    pub fn for_today(today: NaiveDate, rows_per_page: usize) -> Self {
        let (start, end) = default_period(today);
        Self {
            start_date: Some(start),
            end_date: Some(end),
            category: None,
            region: None,
            pagination: Pagination::new(rows_per_page),
        }
    }

    /// Date inputs hand over raw strings; blank or unparsable clears the bound
    pub fn set_start_date(&mut self, raw: &str) {
        self.start_date = parse_iso_date(raw);
        self.pagination.reset();
    }

    pub fn set_end_date(&mut self, raw: &str) {
        self.end_date = parse_iso_date(raw);
        self.pagination.reset();
    }

    /// Empty selection ("All") clears the filter
    pub fn set_category(&mut self, raw: &str) {
        self.category = non_blank(raw);
        self.pagination.reset();
    }

    pub fn set_region(&mut self, raw: &str) {
        self.region = non_blank(raw);
        self.pagination.reset();
    }

    pub fn set_rows_per_page(&mut self, rows: usize) {
        self.pagination.set_rows_per_page(rows);
    }

    /// Query for summary, product-wise, region-wise and category-wise
    pub fn to_query(&self) -> SalesQuery {
        SalesQuery {
            start_date: self.start_date,
            end_date: self.end_date,
            category: self.category.clone(),
            region: self.region.clone(),
            granularity: None,
        }
    }

    /// `/sales/trends` additionally carries the bucket size
    pub fn trends_query(&self, granularity: TrendGranularity) -> SalesQuery {
        SalesQuery {
            granularity: Some(granularity),
            ..self.to_query()
        }
    }

    /// Range as strings for the win-rate KPI
    pub fn range_strings(&self) -> (Option<String>, Option<String>) {
        (
            self.start_date.map(|d| d.format("%Y-%m-%d").to_string()),
            self.end_date.map(|d| d.format("%Y-%m-%d").to_string()),
        )
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trim dropdown options and drop blanks; order is kept as returned
pub fn display_options(options: &[String]) -> Vec<String> {
    options
        .iter()
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

/// Backend categories restricted to the allow-list, in allow-list order
pub fn allowed_categories(options: &[String]) -> Vec<String> {
    let available = display_options(options);
    SALES_CATEGORY_ALLOW_LIST
        .iter()
        .filter(|c| available.iter().any(|a| a == *c))
        .map(|c| c.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn filters() -> SalesFilters {
        SalesFilters::for_today(d(2024, 3, 15), 10)
    }

    #[test]
    fn test_default_period_is_last_month() {
        let f = filters();
        assert_eq!(f.start_date, Some(d(2024, 2, 15)));
        assert_eq!(f.end_date, Some(d(2024, 3, 15)));
        assert_eq!(f.category, None);
        assert_eq!(f.pagination.page, 0);
    }

    #[test]
    fn test_category_change_resets_page() {
        let mut f = filters();
        f.pagination.set_page(3);
        f.set_category("Electronics");
        assert_eq!(f.category.as_deref(), Some("Electronics"));
        assert_eq!(f.pagination.page, 0);
    }

    #[test]
    fn test_every_setter_resets_page() {
        let setters: [fn(&mut SalesFilters); 4] = [
            |f| f.set_region("North"),
            |f| f.set_start_date("2024-01-01"),
            |f| f.set_end_date("2024-01-31"),
            |f| f.set_rows_per_page(25),
        ];
        for set in setters {
            let mut f = filters();
            f.pagination.set_page(2);
            set(&mut f);
            assert_eq!(f.pagination.page, 0);
        }
    }

    #[test]
    fn test_blank_selection_clears_filter() {
        let mut f = filters();
        f.set_region("South");
        f.set_region("  ");
        assert_eq!(f.region, None);
        f.set_start_date("");
        assert_eq!(f.start_date, None);
    }

    #[test]
    fn test_query_omits_unset_and_granularity() {
        let mut f = filters();
        f.set_category("Electronics");
        let query = f.to_query();
        assert_eq!(query.region, None);
        assert_eq!(query.granularity, None);
        assert_eq!(
            serde_qs::to_string(&query).unwrap(),
            "startDate=2024-02-15&endDate=2024-03-15&category=Electronics"
        );
    }

    #[test]
    fn test_trends_query_carries_type() {
        let query = filters().trends_query(TrendGranularity::Weekly);
        assert_eq!(
            serde_qs::to_string(&query).unwrap(),
            "startDate=2024-02-15&endDate=2024-03-15&type=weekly"
        );
    }

    #[test]
    fn test_range_strings() {
        let (start, end) = filters().range_strings();
        assert_eq!(start.as_deref(), Some("2024-02-15"));
        assert_eq!(end.as_deref(), Some("2024-03-15"));
    }

    #[test]
    fn test_display_options_trims_and_drops_blanks() {
        let raw = vec![" North ".to_string(), "".to_string(), "  ".to_string(), "West".to_string()];
        assert_eq!(display_options(&raw), vec!["North", "West"]);
    }

    #[test]
    fn test_allowed_categories_filters_unknown() {
        let raw = vec![
            "Toys".to_string(),
            "Electronics ".to_string(),
            "Computers&Accessories".to_string(),
        ];
        assert_eq!(
            allowed_categories(&raw),
            vec!["Computers&Accessories", "Electronics"]
        );
    }
}
