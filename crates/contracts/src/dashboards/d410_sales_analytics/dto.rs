use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::validation::{non_negative, Validate};

/// Bucket size for `/sales/trends`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendGranularity {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl TrendGranularity {
    pub const ALL: [TrendGranularity; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

/// Query string shared by every `/sales/*` read endpoint.
/// Unset filters are skipped, never sent as empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Only meaningful for `/sales/trends`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub granularity: Option<TrendGranularity>,
}

/// `GET /sales/summary`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub total_revenue: f64,
    pub total_quantity: f64,
}

impl Validate for SalesSummary {
    fn validate(&self) -> Result<(), String> {
        non_negative(self.total_revenue, "totalRevenue")?;
        non_negative(self.total_quantity, "totalQuantity")
    }
}

/// One bucket of `GET /sales/trends`, ascending by date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    pub revenue: f64,
}

impl Validate for TrendPoint {
    fn validate(&self) -> Result<(), String> {
        non_negative(self.revenue, "revenue")
    }
}

/// `GET /sales/region-wise`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRevenue {
    pub region: String,
    pub revenue: f64,
}

impl Validate for RegionRevenue {
    fn validate(&self) -> Result<(), String> {
        non_negative(self.revenue, "revenue")
    }
}

/// `GET /sales/product-wise`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRevenue {
    pub product_name: String,
    pub revenue: f64,
}

impl Validate for ProductRevenue {
    fn validate(&self) -> Result<(), String> {
        non_negative(self.revenue, "revenue")
    }
}

/// `GET /sales/category-wise`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: f64,
}

impl Validate for CategoryRevenue {
    fn validate(&self) -> Result<(), String> {
        non_negative(self.revenue, "revenue")
    }
}

/// Distinct values for the category/region dropdowns.
/// Assembled from `/sales/categories` and `/sales/regions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesFilterOptions {
    pub categories: Vec<String>,
    pub regions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_skips_unset_filters() {
        let query = SalesQuery {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31),
            category: None,
            region: Some("North".into()),
            granularity: None,
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"startDate": "2024-01-01", "endDate": "2024-01-31", "region": "North"})
        );
    }

    #[test]
    fn test_granularity_serialized_as_type() {
        let query = SalesQuery {
            granularity: Some(TrendGranularity::Weekly),
            ..Default::default()
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, serde_json::json!({"type": "weekly"}));
    }

    #[test]
    fn test_summary_uses_camel_case() {
        let summary: SalesSummary =
            serde_json::from_str(r#"{"totalRevenue": 1500.5, "totalQuantity": 12}"#).unwrap();
        assert_eq!(summary.total_revenue, 1500.5);
        assert_eq!(summary.total_quantity, 12.0);
        assert!(summary.validate().is_ok());
    }

    #[test]
    fn test_negative_revenue_fails_validation() {
        let points: Vec<TrendPoint> =
            serde_json::from_str(r#"[{"date":"2024-01-01","revenue":10},{"date":"2024-01-02","revenue":-5}]"#)
                .unwrap();
        assert!(points.validate().is_err());
    }

    #[test]
    fn test_missing_revenue_is_a_decode_error() {
        let parsed = serde_json::from_str::<Vec<ProductRevenue>>(r#"[{"product_name":"Cable"}]"#);
        assert!(parsed.is_err());
    }
}
