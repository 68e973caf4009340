mod dashboard;
mod filters;
mod products;
mod regions;
mod trends;

pub use dashboard::SalesOverviewDashboard;
pub use products::ProductSalesPage;
pub use regions::RegionSalesPage;
pub use trends::RevenueTrendsPage;

use super::actions;
use super::state::{SalesAction, SalesFilterChange, SalesSlot, SalesState};
use crate::layout::global_context::use_app_store;
use contracts::dashboards::d410_sales_analytics::TrendGranularity;
use leptos::prelude::*;

/// Refetch `slots` on mount and whenever `key` of the sales state changes.
/// Writes made by the fetch itself do not change the key.
fn use_sales_refresh<K>(slots: &'static [SalesSlot], key: fn(&SalesState) -> K)
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    let sales = use_app_store().sales;
    let watched = Memo::new(move |_| sales.with(key));
    Effect::new(move |_| {
        watched.track();
        actions::refresh(sales, slots);
    });
}

/// Filter options are reloaded on every page visit and after each upload
fn use_sales_filter_options() {
    use_sales_refresh(&SalesSlot::FILTER_OPTIONS, |s| s.upload_generation);
}

/// Pages showing the trend series start from daily buckets
fn reset_granularity() {
    let sales = use_app_store().sales;
    actions::dispatch(
        sales,
        SalesAction::Filter(SalesFilterChange::Granularity(TrendGranularity::Daily)),
    );
}
