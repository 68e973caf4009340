use super::super::metrics::{sales_growth, sparkline, win_rate, KpiValue};
use super::super::state::SalesSlot;
use super::filters::SalesFilterBar;
use super::{reset_granularity, use_sales_filter_options, use_sales_refresh};
use crate::layout::global_context::use_app_store;
use crate::shared::components::charts::{BarChart, ChartPanel, Datum, LineChart, PieChart};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{GaugeCard, KpiCard, StatCard};
use crate::shared::components::table::{format_inr, format_inr_compact, format_number_in};
use crate::shared::components::upload_panel::{ErrorBanner, UploadPanel};
use crate::shared::date_utils::format_axis_date;
use crate::shared::upload::UploadDomain;
use leptos::prelude::*;

/// Bars shown in the overview product chart
const TOP_PRODUCTS: usize = 10;

#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let sales = use_app_store().sales;

    reset_granularity();
    use_sales_filter_options();
    use_sales_refresh(&SalesSlot::OVERVIEW, |s| {
        (s.filters.to_query(), s.granularity, s.upload_generation)
    });

    let loading = move |slot: SalesSlot| Signal::derive(move || sales.with(|s| s.is_loading(slot)));
    let busy = Signal::derive(move || sales.with(|s| s.loading.any(&SalesSlot::OVERVIEW)));

    let total_revenue = Signal::derive(move || sales.with(|s| format_inr(s.data.summary.total_revenue)));
    let total_quantity =
        Signal::derive(move || sales.with(|s| format_number_in(s.data.summary.total_quantity)));

    let growth = Memo::new(move |_| sales.with(|s| sales_growth(&s.data.trends)));
    let win = Memo::new(move |_| {
        sales.with(|s| {
            let (start, end) = s.filters.range_strings();
            win_rate(&s.data.trends, start.as_deref(), end.as_deref())
        })
    });
    let spark = Signal::derive(move || sales.with(|s| sparkline(&s.data.trends)));
    let pct = |kpi: Memo<KpiValue>| Signal::derive(move || kpi.with(|k| k.pct.clone()));
    let caption = |kpi: Memo<KpiValue>| Signal::derive(move || kpi.with(|k| k.subtitle.clone()));

    let trend_data = Signal::derive(move || {
        sales.with(|s| {
            s.data
                .trends
                .iter()
                .map(|p| Datum::new(format_axis_date(&p.date), p.revenue))
                .collect::<Vec<_>>()
        })
    });
    let product_data = Signal::derive(move || {
        sales.with(|s| {
            s.data
                .product_wise
                .iter()
                .take(TOP_PRODUCTS)
                .map(|p| Datum::new(p.product_name.clone(), p.revenue))
                .collect::<Vec<_>>()
        })
    });
    let region_data = Signal::derive(move || {
        sales.with(|s| {
            s.data
                .region_wise
                .iter()
                .map(|r| Datum::new(r.region.clone(), r.revenue))
                .collect::<Vec<_>>()
        })
    });
    let category_data = Signal::derive(move || {
        sales.with(|s| {
            s.data
                .category_wise
                .iter()
                .map(|c| Datum::new(c.category.clone(), c.revenue))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page page--dashboard">
            <PageHeader
                title="Sales Analytics"
                subtitle="Revenue, quantity and trends for the selected period".to_string()
                icon_name="layout-dashboard"
                busy=busy
            >
                <UploadPanel domain=UploadDomain::Sales default_replace=true />
            </PageHeader>

            <ErrorBanner domain=UploadDomain::Sales />
            <SalesFilterBar />

            <div class="stat-grid">
                <StatCard
                    label="Total Revenue"
                    icon_name="trending-up"
                    value=total_revenue
                    loading=loading(SalesSlot::Summary)
                />
                <StatCard
                    label="Total Quantity"
                    icon_name="package"
                    value=total_quantity
                    loading=loading(SalesSlot::Summary)
                />
                <KpiCard
                    label="Sales Growth"
                    icon_name="trending-up"
                    pct=pct(growth)
                    subtitle=caption(growth)
                    trend=spark
                />
                <GaugeCard
                    label="Win Rate"
                    icon_name="star"
                    pct=pct(win)
                    percent=Signal::derive(move || win.with(|k| k.as_number()))
                    subtitle=caption(win)
                />
            </div>

            <div class="chart-grid">
                <ChartPanel title="Revenue Over Time" loading=loading(SalesSlot::Trends)>
                    <LineChart data=trend_data format_value=format_inr />
                </ChartPanel>
                <ChartPanel title="Top Products by Revenue" loading=loading(SalesSlot::ProductWise)>
                    <BarChart data=product_data format_value=format_inr_compact />
                </ChartPanel>
                <ChartPanel title="Revenue by Region" loading=loading(SalesSlot::RegionWise)>
                    <PieChart data=region_data format_value=format_inr />
                </ChartPanel>
                <ChartPanel title="Revenue by Category" loading=loading(SalesSlot::CategoryWise)>
                    <BarChart data=category_data multicolor=true format_value=format_inr_compact />
                </ChartPanel>
            </div>
        </div>
    }
}
