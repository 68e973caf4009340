use crate::dashboards::{
    ProductRatingsDashboard, ProductSalesPage, RegionSalesPage, RevenueTrendsPage,
    SalesOverviewDashboard,
};
use crate::layout::global_context::{use_app_store, DashboardPage};
use leptos::prelude::*;

/// Renders the page selected in the sidebar. Switching pages unmounts the
/// previous one; each page fetches what it shows on mount.
#[component]
pub fn Center() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div data-zone="center" class="app-main__content" style="flex: 1; overflow: auto;">
            {move || match store.active_page.get() {
                DashboardPage::SalesOverview => view! { <SalesOverviewDashboard /> }.into_any(),
                DashboardPage::Trends => view! { <RevenueTrendsPage /> }.into_any(),
                DashboardPage::Products => view! { <ProductSalesPage /> }.into_any(),
                DashboardPage::Regions => view! { <RegionSalesPage /> }.into_any(),
                DashboardPage::Ratings => view! { <ProductRatingsDashboard /> }.into_any(),
            }}
        </div>
    }
}
