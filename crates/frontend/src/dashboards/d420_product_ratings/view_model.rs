//! Display strings for the ratings list and chart inputs

use super::query::rating_label;
use crate::shared::components::charts::{truncate_label, Datum};
use crate::shared::components::table::{format_number_in, format_optional_decimal};
use contracts::dashboards::d420_product_ratings::{RatingRow, TopReviewedProduct};

const MISSING: &str = "—";

/// Top-reviewed chart shows at most this many bars
pub const TOP_REVIEWED_BARS: usize = 15;
pub const TOP_REVIEWED_LABEL_CHARS: usize = 25;

/// One table row, every cell already formatted
#[derive(Debug, Clone, PartialEq)]
pub struct RatingRowView {
    pub key: String,
    pub product: String,
    pub category: String,
    pub rating: String,
    pub reviews: String,
    pub discount: String,
    pub preview: String,
}

fn text_or_missing(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(MISSING)
        .to_string()
}

impl From<&RatingRow> for RatingRowView {
    fn from(row: &RatingRow) -> Self {
        Self {
            key: row.id.to_string(),
            product: text_or_missing(&row.product_name),
            category: text_or_missing(&row.category),
            rating: format_optional_decimal(row.rating),
            reviews: row
                .rating_count
                .map(|c| format_number_in(c as f64))
                .unwrap_or_else(|| MISSING.to_string()),
            discount: format!("{}%", format_optional_decimal(row.discount_percent())),
            preview: text_or_missing(&row.review_preview),
        }
    }
}

/// `(value, label)` pairs for the rating dropdown: ("4", "4+")
pub fn rating_options(ratings: &[f64]) -> Vec<(String, String)> {
    ratings
        .iter()
        .filter(|r| r.is_finite())
        .map(|r| (r.to_string(), rating_label(*r)))
        .collect()
}

pub fn top_reviewed_chart(rows: &[TopReviewedProduct]) -> Vec<Datum> {
    rows.iter()
        .take(TOP_REVIEWED_BARS)
        .map(|p| Datum::new(truncate_label(&p.name, TOP_REVIEWED_LABEL_CHARS), p.review_count as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d420_product_ratings::RowKey;

    fn row() -> RatingRow {
        RatingRow {
            id: RowKey::Int(42),
            product_name: Some("USB-C Cable".into()),
            category: None,
            rating: Some(4.26),
            rating_count: Some(24269),
            discount_percentage: Some(0.64),
            review_preview: Some("  ".into()),
        }
    }

    #[test]
    fn test_row_view_formats_cells() {
        let view = RatingRowView::from(&row());
        assert_eq!(view.key, "42");
        assert_eq!(view.product, "USB-C Cable");
        assert_eq!(view.category, "—");
        assert_eq!(view.rating, "4.3");
        assert_eq!(view.reviews, "24,269");
        assert_eq!(view.discount, "64.0%");
        assert_eq!(view.preview, "—");
    }

    #[test]
    fn test_discount_above_one_is_already_percent() {
        let mut r = row();
        r.discount_percentage = Some(35.0);
        assert_eq!(RatingRowView::from(&r).discount, "35.0%");
        r.discount_percentage = None;
        assert_eq!(RatingRowView::from(&r).discount, "—%");
    }

    #[test]
    fn test_rating_options() {
        assert_eq!(
            rating_options(&[4.0, 3.5]),
            vec![("4".to_string(), "4+".to_string()), ("3.5".to_string(), "3.5+".to_string())]
        );
    }

    #[test]
    fn test_top_reviewed_chart_is_capped() {
        let rows: Vec<TopReviewedProduct> = (0..20)
            .map(|i| TopReviewedProduct {
                name: format!("A very long product name number {}", i),
                review_count: 100 - i,
            })
            .collect();
        let data = top_reviewed_chart(&rows);
        assert_eq!(data.len(), TOP_REVIEWED_BARS);
        assert_eq!(data[0].label.chars().count(), TOP_REVIEWED_LABEL_CHARS);
        assert!(data[0].label.ends_with('…'));
        assert_eq!(data[0].value, 100.0);
    }
}
