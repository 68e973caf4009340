use super::super::actions;
use super::super::state::{SalesAction, SalesFilterChange, SalesSlot};
use super::filters::SalesFilterBar;
use super::{use_sales_filter_options, use_sales_refresh};
use crate::layout::global_context::use_app_store;
use crate::shared::components::charts::{BarChart, ChartPanel, Datum};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{format_inr_compact, TableCellMoney};
use crate::shared::components::upload_panel::ErrorBanner;
use crate::shared::config::config;
use crate::shared::upload::UploadDomain;
use leptos::prelude::*;
use thaw::*;

const CHART_PRODUCTS: usize = 15;

#[component]
pub fn ProductSalesPage() -> impl IntoView {
    let sales = use_app_store().sales;

    use_sales_filter_options();
    use_sales_refresh(&[SalesSlot::ProductWise], |s| (s.filters.to_query(), s.upload_generation));

    let loading = Signal::derive(move || sales.with(|s| s.is_loading(SalesSlot::ProductWise)));
    let chart_data = Signal::derive(move || {
        sales.with(|s| {
            s.data
                .product_wise
                .iter()
                .take(CHART_PRODUCTS)
                .map(|p| Datum::new(p.product_name.clone(), p.revenue))
                .collect::<Vec<_>>()
        })
    });

    // Client-side paging over the fetched rows
    let page = Signal::derive(move || sales.with(|s| s.filters.pagination.page));
    let page_size = Signal::derive(move || sales.with(|s| s.filters.pagination.rows_per_page));
    let total_count = Signal::derive(move || sales.with(|s| s.data.product_wise.len()));
    let total_pages = Signal::derive(move || {
        sales.with(|s| s.filters.pagination.total_pages(s.data.product_wise.len()))
    });
    let change = move |c: SalesFilterChange| actions::dispatch(sales, SalesAction::Filter(c));

    view! {
        <div class="page">
            <PageHeader
                title="Product Sales"
                subtitle="Revenue per product".to_string()
                icon_name="package"
                busy=loading
            />

            <ErrorBanner domain=UploadDomain::Sales />
            <SalesFilterBar restrict_categories=true />

            <ChartPanel title="Top Products by Revenue" loading=loading>
                <BarChart data=chart_data label_max_chars=20 format_value=format_inr_compact />
            </ChartPanel>

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=60.0>"#"</TableHeaderCell>
                            <TableHeaderCell min_width=320.0>"Product"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Revenue"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || sales.with(|s| {
                            let pagination = s.filters.pagination;
                            let offset = pagination.page * pagination.rows_per_page;
                            pagination.slice(&s.data.product_wise).iter().enumerate().map(|(i, p)| {
                                let name = p.product_name.clone();
                                let revenue = p.revenue;
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{offset + i + 1}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{name}</TableCellLayout></TableCell>
                                        <TableCellMoney value=revenue />
                                    </TableRow>
                                }
                            }).collect_view()
                        })}
                    </TableBody>
                </Table>
                <PaginationControls
                    current_page=page
                    total_pages=total_pages
                    total_count=total_count
                    page_size=page_size
                    on_page_change=Callback::new(move |p| change(SalesFilterChange::Page(p)))
                    on_page_size_change=Callback::new(move |n| change(SalesFilterChange::RowsPerPage(n)))
                    page_size_options=config().rows_per_page_options.clone()
                />
            </div>
        </div>
    }
}
