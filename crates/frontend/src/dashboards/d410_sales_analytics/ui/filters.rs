use super::super::actions;
use super::super::query::{allowed_categories, display_options};
use super::super::state::{SalesAction, SalesFilterChange};
use crate::layout::global_context::use_app_store;
use crate::shared::components::date_input::{DateInput, FilterSelect};
use crate::shared::date_utils::format_iso_date;
use leptos::prelude::*;
use thaw::*;

fn as_options(values: Vec<String>) -> Vec<(String, String)> {
    values.into_iter().map(|v| (v.clone(), v)).collect()
}

/// Date range, category and region. Sub-pages pass `restrict_categories`
/// to limit the category list to the known allow-list.
#[component]
pub fn SalesFilterBar(#[prop(optional)] restrict_categories: bool) -> impl IntoView {
    let sales = use_app_store().sales;
    let change = move |c: SalesFilterChange| actions::dispatch(sales, SalesAction::Filter(c));

    let start = Signal::derive(move || {
        sales.with(|s| s.filters.start_date.map(format_iso_date).unwrap_or_default())
    });
    let end = Signal::derive(move || {
        sales.with(|s| s.filters.end_date.map(format_iso_date).unwrap_or_default())
    });
    let category = Signal::derive(move || sales.with(|s| s.filters.category.clone().unwrap_or_default()));
    let region = Signal::derive(move || sales.with(|s| s.filters.region.clone().unwrap_or_default()));

    let categories = Signal::derive(move || {
        sales.with(|s| {
            let options = &s.data.filter_options.categories;
            as_options(if restrict_categories {
                allowed_categories(options)
            } else {
                display_options(options)
            })
        })
    });
    let regions = Signal::derive(move || {
        sales.with(|s| as_options(display_options(&s.data.filter_options.regions)))
    });

    view! {
        <div class="filter-bar">
            <Flex gap=FlexGap::Medium align=FlexAlign::End>
                <DateInput
                    label="Start date"
                    value=start
                    on_change=Callback::new(move |v| change(SalesFilterChange::StartDate(v)))
                />
                <DateInput
                    label="End date"
                    value=end
                    on_change=Callback::new(move |v| change(SalesFilterChange::EndDate(v)))
                />
                <FilterSelect
                    label="Category"
                    value=category
                    options=categories
                    all_label="All Categories"
                    on_change=Callback::new(move |v| change(SalesFilterChange::Category(v)))
                />
                <FilterSelect
                    label="Region"
                    value=region
                    options=regions
                    all_label="All Regions"
                    on_change=Callback::new(move |v| change(SalesFilterChange::Region(v)))
                />
            </Flex>
        </div>
    }
}
