use super::query::SalesFilters;
use super::state::{SalesPayload, SalesSlot};
use crate::shared::api_utils::{get_json, get_json_plain};
use crate::shared::error::ApiError;
use contracts::dashboards::d410_sales_analytics::{
    CategoryRevenue, ProductRevenue, RegionRevenue, SalesQuery, SalesSummary,
    TrendGranularity, TrendPoint,
};

const BASE: &str = "/sales";

/// Получить итоги за период
pub async fn get_summary(query: &SalesQuery) -> Result<SalesSummary, ApiError> {
    get_json(&format!("{}/summary", BASE), query).await
}

/// Выручка по датам; `query.granularity` задаёт размер корзины
pub async fn get_trends(query: &SalesQuery) -> Result<Vec<TrendPoint>, ApiError> {
    get_json(&format!("{}/trends", BASE), query).await
}

pub async fn get_product_wise(query: &SalesQuery) -> Result<Vec<ProductRevenue>, ApiError> {
    get_json(&format!("{}/product-wise", BASE), query).await
}

pub async fn get_region_wise(query: &SalesQuery) -> Result<Vec<RegionRevenue>, ApiError> {
    get_json(&format!("{}/region-wise", BASE), query).await
}

pub async fn get_category_wise(query: &SalesQuery) -> Result<Vec<CategoryRevenue>, ApiError> {
    get_json(&format!("{}/category-wise", BASE), query).await
}

/// Категории для фильтра
pub async fn get_categories() -> Result<Vec<String>, ApiError> {
    get_json_plain(&format!("{}/categories", BASE)).await
}

/// Регионы для фильтра
pub async fn get_regions() -> Result<Vec<String>, ApiError> {
    get_json_plain(&format!("{}/regions", BASE)).await
}

/// Fetch one slot with the current filters
pub async fn fetch_slot(
    slot: SalesSlot,
    filters: &SalesFilters,
    granularity: TrendGranularity,
) -> Result<SalesPayload, ApiError> {
    match slot {
        SalesSlot::Summary => get_summary(&filters.to_query()).await.map(SalesPayload::Summary),
        SalesSlot::Trends => get_trends(&filters.trends_query(granularity))
            .await
            .map(SalesPayload::Trends),
        SalesSlot::ProductWise => get_product_wise(&filters.to_query())
            .await
            .map(SalesPayload::ProductWise),
        SalesSlot::RegionWise => get_region_wise(&filters.to_query())
            .await
            .map(SalesPayload::RegionWise),
        SalesSlot::CategoryWise => get_category_wise(&filters.to_query())
            .await
            .map(SalesPayload::CategoryWise),
        SalesSlot::Categories => get_categories().await.map(SalesPayload::Categories),
        SalesSlot::Regions => get_regions().await.map(SalesPayload::Regions),
    }
}
