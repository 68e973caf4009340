use super::super::metrics::revenue_share;
use super::super::state::SalesSlot;
use super::filters::SalesFilterBar;
use super::{use_sales_filter_options, use_sales_refresh};
use crate::layout::global_context::use_app_store;
use crate::shared::components::charts::{ChartPanel, Datum, PieChart};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{format_inr, TableCellMoney, TableCellPercent};
use crate::shared::components::upload_panel::ErrorBanner;
use crate::shared::upload::UploadDomain;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RegionSalesPage() -> impl IntoView {
    let sales = use_app_store().sales;

    use_sales_filter_options();
    use_sales_refresh(&[SalesSlot::RegionWise], |s| (s.filters.to_query(), s.upload_generation));

    let loading = Signal::derive(move || sales.with(|s| s.is_loading(SalesSlot::RegionWise)));
    let chart_data = Signal::derive(move || {
        sales.with(|s| {
            s.data
                .region_wise
                .iter()
                .map(|r| Datum::new(r.region.clone(), r.revenue))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page">
            <PageHeader
                title="Regional Sales"
                subtitle="Revenue split by region".to_string()
                icon_name="map-pin"
                busy=loading
            />

            <ErrorBanner domain=UploadDomain::Sales />
            <SalesFilterBar restrict_categories=true />

            <div class="chart-grid chart-grid--split">
                <ChartPanel title="Revenue by Region" loading=loading>
                    <PieChart data=chart_data format_value=format_inr />
                </ChartPanel>

                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=160.0>"Region"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Revenue"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Share"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || sales.with(|s| {
                                let total: f64 = s.data.region_wise.iter().map(|r| r.revenue).sum();
                                s.data.region_wise.iter().map(|r| {
                                    let region = r.region.clone();
                                    let revenue = r.revenue;
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{region}</TableCellLayout></TableCell>
                                            <TableCellMoney value=revenue />
                                            <TableCellPercent value={revenue_share(revenue, total)} />
                                        </TableRow>
                                    }
                                }).collect_view()
                            })}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}
