use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::validation::{in_range, non_negative, Validate};

pub const MAX_RATING: f64 = 5.0;

/// Query string for `/ratings/*`. Unset filters are skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// 1-based
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// `GET /ratings/products-per-category`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProductCount {
    pub category: String,
    pub count: u64,
}

impl Validate for CategoryProductCount {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// `GET /ratings/top-reviewed`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopReviewedProduct {
    pub name: String,
    pub review_count: u64,
}

impl Validate for TopReviewedProduct {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// `GET /ratings/discount-distribution`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountBucket {
    pub bucket: String,
    pub count: u64,
}

impl Validate for DiscountBucket {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// `GET /ratings/category-avg-rating`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAvgRating {
    pub category: String,
    pub avg_rating: f64,
}

impl Validate for CategoryAvgRating {
    fn validate(&self) -> Result<(), String> {
        in_range(self.avg_rating, 0.0, MAX_RATING, "avg_rating")
    }
}

/// Row id comes back as a number or a string depending on the import source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowKey {
    Int(i64),
    Text(String),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Int(v) => write!(f, "{}", v),
            RowKey::Text(v) => f.write_str(v),
        }
    }
}

/// One row of `GET /ratings/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRow {
    pub id: RowKey,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub rating_count: Option<u64>,
    /// Either a fraction (0.35) or a percentage (35) depending on the source file
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    #[serde(default)]
    pub review_preview: Option<String>,
}

impl RatingRow {
    /// Discount as a percentage regardless of how the source stored it
    pub fn discount_percent(&self) -> Option<f64> {
        self.discount_percentage
            .map(|d| if d <= 1.0 { d * 100.0 } else { d })
    }
}

impl Validate for RatingRow {
    fn validate(&self) -> Result<(), String> {
        if let Some(rating) = self.rating {
            in_range(rating, 0.0, MAX_RATING, "rating")?;
        }
        if let Some(discount) = self.discount_percentage {
            non_negative(discount, "discount_percentage")?;
        }
        Ok(())
    }
}

/// Paginated `GET /ratings/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingsPage {
    pub data: Vec<RatingRow>,
    pub total: u64,
    /// 1-based
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl Default for RatingsPage {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            page: 1,
            limit: 10,
            total_pages: 0,
        }
    }
}

impl Validate for RatingsPage {
    fn validate(&self) -> Result<(), String> {
        if self.page == 0 {
            return Err("page is 1-based, got 0".to_string());
        }
        self.data.validate()
    }
}

/// `GET /ratings/filters`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingsFilterOptions {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub ratings: Vec<f64>,
}

impl Validate for RatingsFilterOptions {
    fn validate(&self) -> Result<(), String> {
        self.ratings
            .iter()
            .try_for_each(|r| in_range(*r, 0.0, MAX_RATING, "ratings"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_query_skips_unset() {
        let query = RatingsQuery {
            category: Some("Electronics".into()),
            page: Some(2),
            limit: Some(10),
            ..Default::default()
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"category": "Electronics", "page": 2, "limit": 10})
        );
    }

    #[test]
    fn test_ratings_page_decodes_camel_case() {
        let raw = r#"{
            "data": [{"id": 7, "product_name": "Cable", "rating": 4.1, "rating_count": 1200}],
            "total": 31, "page": 1, "limit": 10, "totalPages": 4
        }"#;
        let page: RatingsPage = serde_json::from_str(raw).unwrap();
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.data[0].id, RowKey::Int(7));
        assert_eq!(page.data[0].category, None);
        assert!(page.validate().is_ok());
    }

    #[test]
    fn test_row_key_accepts_strings() {
        let row: RatingRow = serde_json::from_str(r#"{"id": "B07JW9H4J1"}"#).unwrap();
        assert_eq!(row.id.to_string(), "B07JW9H4J1");
    }

    #[test]
    fn test_discount_fraction_is_scaled() {
        let mut row: RatingRow = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        row.discount_percentage = Some(0.64);
        assert!((row.discount_percent().unwrap() - 64.0).abs() < 1e-9);
        row.discount_percentage = Some(43.0);
        assert_eq!(row.discount_percent(), Some(43.0));
        row.discount_percentage = None;
        assert_eq!(row.discount_percent(), None);
    }

    #[test]
    fn test_rating_out_of_range_fails() {
        let row: RatingRow = serde_json::from_str(r#"{"id": 1, "rating": 7.5}"#).unwrap();
        assert!(row.validate().is_err());
    }
}
