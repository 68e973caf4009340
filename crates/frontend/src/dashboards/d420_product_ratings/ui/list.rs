use super::super::actions;
use super::super::state::{RatingsAction, RatingsFilterChange, RatingsSlot};
use super::super::view_model::RatingRowView;
use crate::layout::global_context::use_app_store;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use leptos::prelude::*;
use thaw::*;

/// Server-paginated product list
#[component]
pub fn RatingsList() -> impl IntoView {
    let ratings = use_app_store().ratings;
    let change = move |c: RatingsFilterChange| actions::dispatch(ratings, RatingsAction::Filter(c));

    let loading = Signal::derive(move || ratings.with(|s| s.loading.is_loading(RatingsSlot::List)));
    let rows = Memo::new(move |_| {
        ratings.with(|s| s.data.list.data.iter().map(RatingRowView::from).collect::<Vec<_>>())
    });
    let page = Signal::derive(move || ratings.with(|s| s.filters.pagination.page));
    let page_size = Signal::derive(move || ratings.with(|s| s.filters.pagination.rows_per_page));
    let total_count = Signal::derive(move || ratings.with(|s| s.data.list.total as usize));
    let total_pages = Signal::derive(move || ratings.with(|s| s.data.list.total_pages as usize));

    view! {
        <section class="chart-panel">
            <header class="chart-panel__header">
                <h3 class="chart-panel__title">"Product list"</h3>
            </header>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="panel-spinner"><Spinner /></div> }
            >
                <div class="table-wrapper">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=280.0>"Product"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Category"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"Rating"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Reviews"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Discount %"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Review preview"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|row| row.key.clone()
                                children=move |row: RatingRowView| {
                                    let product_title = row.product.clone();
                                    let preview_title = row.preview.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell attr:title=product_title>
                                                <TableCellLayout truncate=true>{row.product}</TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{row.category}</TableCellLayout></TableCell>
                                            <TableCell class="text-right"><TableCellLayout>{row.rating}</TableCellLayout></TableCell>
                                            <TableCell class="text-right"><TableCellLayout>{row.reviews}</TableCellLayout></TableCell>
                                            <TableCell class="text-right"><TableCellLayout>{row.discount}</TableCellLayout></TableCell>
                                            <TableCell attr:title=preview_title>
                                                <TableCellLayout truncate=true>{row.preview}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <PaginationControls
                        current_page=page
                        total_pages=total_pages
                        total_count=total_count
                        page_size=page_size
                        on_page_change=Callback::new(move |p| change(RatingsFilterChange::Page(p)))
                        on_page_size_change=Callback::new(move |n| change(RatingsFilterChange::RowsPerPage(n)))
                        page_size_options=config().rows_per_page_options.clone()
                    />
                </div>
            </Show>
        </section>
    }
}
