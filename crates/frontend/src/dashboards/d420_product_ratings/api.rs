use super::query::RatingsFilters;
use super::state::{RatingsPayload, RatingsSlot};
use crate::shared::api_utils::{get_json, get_json_plain};
use crate::shared::error::ApiError;
use contracts::dashboards::d420_product_ratings::{
    CategoryAvgRating, CategoryProductCount, DiscountBucket, RatingsFilterOptions, RatingsPage,
    RatingsQuery, TopReviewedProduct,
};

const BASE: &str = "/ratings";

pub async fn get_products_per_category(
    query: &RatingsQuery,
) -> Result<Vec<CategoryProductCount>, ApiError> {
    get_json(&format!("{}/products-per-category", BASE), query).await
}

pub async fn get_top_reviewed(query: &RatingsQuery) -> Result<Vec<TopReviewedProduct>, ApiError> {
    get_json(&format!("{}/top-reviewed", BASE), query).await
}

pub async fn get_discount_distribution(
    query: &RatingsQuery,
) -> Result<Vec<DiscountBucket>, ApiError> {
    get_json(&format!("{}/discount-distribution", BASE), query).await
}

pub async fn get_category_avg_rating(
    query: &RatingsQuery,
) -> Result<Vec<CategoryAvgRating>, ApiError> {
    get_json(&format!("{}/category-avg-rating", BASE), query).await
}

/// Страница списка товаров (page с 1)
pub async fn get_list(query: &RatingsQuery) -> Result<RatingsPage, ApiError> {
    get_json(&format!("{}/list", BASE), query).await
}

pub async fn get_filter_options() -> Result<RatingsFilterOptions, ApiError> {
    get_json_plain(&format!("{}/filters", BASE)).await
}

/// Fetch one slot with the current filters
pub async fn fetch_slot(
    slot: RatingsSlot,
    filters: &RatingsFilters,
    top_reviewed_limit: u32,
) -> Result<RatingsPayload, ApiError> {
    match slot {
        RatingsSlot::ProductsPerCategory => get_products_per_category(&filters.chart_query())
            .await
            .map(RatingsPayload::ProductsPerCategory),
        RatingsSlot::TopReviewed => get_top_reviewed(&filters.top_reviewed_query(top_reviewed_limit))
            .await
            .map(RatingsPayload::TopReviewed),
        RatingsSlot::DiscountDistribution => get_discount_distribution(&filters.chart_query())
            .await
            .map(RatingsPayload::DiscountDistribution),
        RatingsSlot::CategoryAvgRating => get_category_avg_rating(&filters.chart_query())
            .await
            .map(RatingsPayload::CategoryAvgRating),
        RatingsSlot::List => get_list(&filters.list_query()).await.map(RatingsPayload::List),
        RatingsSlot::FilterOptions => get_filter_options()
            .await
            .map(RatingsPayload::FilterOptions),
    }
}
