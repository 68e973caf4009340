use super::super::actions;
use super::super::state::{RatingsAction, RatingsFilterChange, RatingsSlot, RatingsState};
use super::super::view_model::{rating_options, top_reviewed_chart};
use super::list::RatingsList;
use crate::layout::global_context::{use_app_store, DashboardPage};
use crate::shared::components::charts::{BarChart, ChartPanel, Datum, CHART_COLORS};
use crate::shared::components::date_input::FilterSelect;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::upload_panel::{ErrorBanner, UploadPanel};
use crate::shared::config::config;
use crate::shared::debounce::use_debounced;
use crate::shared::icons::icon;
use crate::shared::upload::UploadDomain;
use contracts::dashboards::d420_product_ratings::MAX_RATING;
use leptos::prelude::*;
use thaw::*;

const EMPTY_HINT: &str = "No ratings data yet. Upload a CSV or Excel file (e.g. Dataset.xlsx with product_id, product_name, category, rating, rating_count, discount_percentage) to see charts and table.";

/// Refetch `slots` on mount and whenever `key` of the ratings state changes
fn use_ratings_refresh<K>(slots: &'static [RatingsSlot], key: fn(&RatingsState) -> K)
where
    K: Clone + PartialEq + Send + Sync + 'static,
{
    let ratings = use_app_store().ratings;
    let watched = Memo::new(move |_| ratings.with(key));
    Effect::new(move |_| {
        watched.track();
        actions::refresh(ratings, slots);
    });
}

fn format_rating(value: f64) -> String {
    format!("{:.1}", value)
}

fn count_chart<T>(rows: &[T], f: impl Fn(&T) -> Datum) -> Vec<Datum> {
    rows.iter().map(f).collect()
}

#[component]
pub fn ProductRatingsDashboard() -> impl IntoView {
    let store = use_app_store();
    let ratings = store.ratings;
    let change = move |c: RatingsFilterChange| actions::dispatch(ratings, RatingsAction::Filter(c));

    use_ratings_refresh(&[RatingsSlot::FilterOptions], |s| s.upload_generation);
    use_ratings_refresh(&RatingsSlot::CHARTS, |s| (s.filters.chart_query(), s.upload_generation));
    use_ratings_refresh(&[RatingsSlot::List], |s| (s.filters.list_query(), s.upload_generation));

    // Raw text box; only the debounced value reaches the filters
    let search_input = RwSignal::new(
        ratings.with_untracked(|s| s.filters.search.clone().unwrap_or_default()),
    );
    let search = use_debounced(search_input, config().search_debounce_ms);
    Effect::new(move |_| {
        let text = search.get();
        let applied = ratings.with_untracked(|s| s.filters.search.clone().unwrap_or_default());
        if text.trim() != applied {
            change(RatingsFilterChange::Search(text));
        }
    });

    let category = Signal::derive(move || ratings.with(|s| s.filters.category.clone().unwrap_or_default()));
    let rating = Signal::derive(move || ratings.with(|s| s.filters.rating.clone()));
    let categories = Signal::derive(move || {
        ratings.with(|s| {
            s.data
                .filter_options
                .categories
                .iter()
                .map(|c| (c.clone(), c.clone()))
                .collect::<Vec<_>>()
        })
    });
    let ratings_options = Signal::derive(move || ratings.with(|s| rating_options(&s.data.filter_options.ratings)));

    let charts_loading = Signal::derive(move || ratings.with(|s| s.charts_loading()));
    let nothing_to_show = Signal::derive(move || ratings.with(|s| s.data.is_empty()));

    let per_category = Signal::derive(move || {
        ratings.with(|s| {
            count_chart(&s.data.products_per_category, |r| Datum::new(r.category.clone(), r.count as f64))
        })
    });
    let top_reviewed = Signal::derive(move || ratings.with(|s| top_reviewed_chart(&s.data.top_reviewed)));
    let discounts = Signal::derive(move || {
        ratings.with(|s| {
            count_chart(&s.data.discount_distribution, |b| Datum::new(b.bucket.clone(), b.count as f64))
        })
    });
    let avg_rating = Signal::derive(move || {
        ratings.with(|s| {
            count_chart(&s.data.category_avg_rating, |r| Datum::new(r.category.clone(), r.avg_rating))
        })
    });

    let go_to_sales = move |_: leptos::ev::MouseEvent| store.navigate(DashboardPage::SalesOverview);

    view! {
        <div class="page">
            <PageHeader
                title="Product Ratings"
                subtitle="Upload product & review data (CSV/Excel)".to_string()
                icon_name="star"
            >
                <UploadPanel domain=UploadDomain::Ratings />
            </PageHeader>

            <ErrorBanner domain=UploadDomain::Ratings />

            <div class="filter-bar">
                <Flex gap=FlexGap::Medium align=FlexAlign::End>
                    <div class="filter-field filter-field--search">
                        {icon("search")}
                        <Input value=search_input placeholder="Search by product name" />
                    </div>
                    <FilterSelect
                        label="Category"
                        value=category
                        options=categories
                        on_change=Callback::new(move |v| change(RatingsFilterChange::Category(v)))
                    />
                    <FilterSelect
                        label="Rating"
                        value=rating
                        options=ratings_options
                        on_change=Callback::new(move |v| change(RatingsFilterChange::Rating(v)))
                    />
                </Flex>
            </div>

            {move || {
                if charts_loading.get() {
                    view! { <div class="panel-spinner"><Spinner /></div> }.into_any()
                } else if nothing_to_show.get() {
                    view! {
                        <div class="empty-state">
                            <p class="empty-state__text">{EMPTY_HINT}</p>
                            <Button appearance=ButtonAppearance::Primary on_click=go_to_sales>
                                "Go to Sales Analytics"
                                {icon("chevron-right")}
                            </Button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="chart-grid">
                            <ChartPanel title="Products per category">
                                <BarChart data=per_category />
                            </ChartPanel>
                            <ChartPanel title="Top reviewed products">
                                <BarChart
                                    data=top_reviewed
                                    color={CHART_COLORS[1]}
                                    label_max_chars=25
                                />
                            </ChartPanel>
                            <ChartPanel title="Discount distribution">
                                <BarChart data=discounts multicolor=true />
                            </ChartPanel>
                            <ChartPanel title="Category-wise average rating">
                                <BarChart
                                    data=avg_rating
                                    value_max=MAX_RATING
                                    color={CHART_COLORS[3]}
                                    format_value=format_rating
                                />
                            </ChartPanel>
                        </div>
                        <RatingsList />
                        <div class="page-footer-link">
                            <Button appearance=ButtonAppearance::Secondary on_click=go_to_sales>
                                "Go to Sales Analytics"
                                {icon("chevron-right")}
                            </Button>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
