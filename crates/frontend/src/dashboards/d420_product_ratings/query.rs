//! Ratings filter state and query assembly

use crate::shared::pagination::Pagination;
use contracts::dashboards::d420_product_ratings::RatingsQuery;

/// Filters of the ratings page. `search` holds the debounced value only;
/// the raw text box content never reaches a query.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingsFilters {
    pub category: Option<String>,
    /// Raw dropdown value, "" for "All"
    pub rating: String,
    pub search: Option<String>,
    pub pagination: Pagination,
}

impl Default for RatingsFilters {
    fn default() -> Self {
        Self::new(10)
    }
}

impl RatingsFilters {
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            category: None,
            rating: String::new(),
            search: None,
            pagination: Pagination::new(rows_per_page),
        }
    }

    pub fn set_category(&mut self, raw: &str) {
        let trimmed = raw.trim();
        self.category = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self.pagination.reset();
    }

    pub fn set_rating(&mut self, raw: &str) {
        self.rating = raw.trim().to_string();
        self.pagination.reset();
    }

    /// Called with the debounced search text
    pub fn set_search(&mut self, debounced: &str) {
        let trimmed = debounced.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self.pagination.reset();
    }

    pub fn set_rows_per_page(&mut self, rows: usize) {
        self.pagination.set_rows_per_page(rows);
    }

    /// Minimum rating, only when the dropdown value is a finite number
    pub fn rating_min(&self) -> Option<f64> {
        self.rating
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }

    /// Query shared by the four charts: no paging
    pub fn chart_query(&self) -> RatingsQuery {
        RatingsQuery {
            category: self.category.clone(),
            rating_min: self.rating_min(),
            search: self.search.clone(),
            page: None,
            limit: None,
        }
    }

    pub fn top_reviewed_query(&self, limit: u32) -> RatingsQuery {
        RatingsQuery {
            limit: Some(limit),
            ..self.chart_query()
        }
    }

    /// `/ratings/list` takes a 1-based page
    pub fn list_query(&self) -> RatingsQuery {
        RatingsQuery {
            page: Some(self.pagination.api_page()),
            limit: Some(self.pagination.rows_per_page as u32),
            ..self.chart_query()
        }
    }
}

/// Dropdown label for a minimum rating: 4 -> "4+", 3.5 -> "3.5+"
pub fn rating_label(value: f64) -> String {
    format!("{}+", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_min_parses_finite_only() {
        let mut f = RatingsFilters::default();
        assert_eq!(f.rating_min(), None);
        f.set_rating("4");
        assert_eq!(f.rating_min(), Some(4.0));
        f.set_rating("3.5");
        assert_eq!(f.rating_min(), Some(3.5));
        f.set_rating("abc");
        assert_eq!(f.rating_min(), None);
        f.set_rating("NaN");
        assert_eq!(f.rating_min(), None);
        f.set_rating("inf");
        assert_eq!(f.rating_min(), None);
    }

    #[test]
    fn test_list_query_is_one_based() {
        let mut f = RatingsFilters::default();
        f.pagination.set_page(2);
        let query = f.list_query();
        assert_eq!(query.page, Some(3));
        assert_eq!(query.limit, Some(10));
        assert_eq!(serde_qs::to_string(&query).unwrap(), "page=3&limit=10");
    }

    #[test]
    fn test_chart_query_has_no_paging() {
        let mut f = RatingsFilters::default();
        f.set_category("Electronics");
        f.set_rating("4");
        f.set_search("charger");
        let query = f.chart_query();
        assert_eq!(query.rating_min, Some(4.0));
        assert_eq!(query.page, None);
        assert_eq!(query.limit, None);
        let qs = serde_qs::to_string(&query).unwrap();
        assert!(qs.starts_with("category=Electronics&ratingMin=4"));
        assert!(qs.ends_with("&search=charger"));
    }

    #[test]
    fn test_top_reviewed_limit() {
        let query = RatingsFilters::default().top_reviewed_query(20);
        assert_eq!(query.limit, Some(20));
        assert_eq!(query.page, None);
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let setters: [fn(&mut RatingsFilters); 4] = [
            |f| f.set_category("Electronics"),
            |f| f.set_rating("3"),
            |f| f.set_search("charger"),
            |f| f.set_rows_per_page(50),
        ];
        for set in setters {
            let mut f = RatingsFilters::default();
            f.pagination.set_page(4);
            set(&mut f);
            assert_eq!(f.pagination.page, 0);
        }
    }

    #[test]
    fn test_blank_search_and_category_are_omitted() {
        let mut f = RatingsFilters::default();
        f.set_search("   ");
        f.set_category("");
        assert_eq!(f.search, None);
        assert_eq!(f.category, None);
        assert_eq!(serde_qs::to_string(&f.chart_query()).unwrap(), "");
    }

    #[test]
    fn test_rating_label() {
        assert_eq!(rating_label(4.0), "4+");
        assert_eq!(rating_label(3.5), "3.5+");
    }
}
