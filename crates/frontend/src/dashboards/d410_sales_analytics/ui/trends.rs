use super::super::actions;
use super::super::metrics::total_revenue;
use super::super::state::{SalesAction, SalesFilterChange, SalesSlot};
use super::filters::SalesFilterBar;
use super::{reset_granularity, use_sales_filter_options, use_sales_refresh};
use crate::layout::global_context::use_app_store;
use crate::shared::components::charts::{ChartPanel, Datum, LineChart};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{format_inr, TableCellMoney};
use crate::shared::components::upload_panel::ErrorBanner;
use crate::shared::date_utils::format_axis_date;
use crate::shared::upload::UploadDomain;
use contracts::dashboards::d410_sales_analytics::TrendGranularity;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RevenueTrendsPage() -> impl IntoView {
    let sales = use_app_store().sales;

    reset_granularity();
    use_sales_filter_options();
    use_sales_refresh(&[SalesSlot::Trends], |s| {
        (s.filters.trends_query(s.granularity), s.upload_generation)
    });

    let loading = Signal::derive(move || sales.with(|s| s.is_loading(SalesSlot::Trends)));
    let granularity = Signal::derive(move || sales.with(|s| s.granularity));
    let total = Signal::derive(move || sales.with(|s| format_inr(total_revenue(&s.data.trends))));
    let chart_data = Signal::derive(move || {
        sales.with(|s| {
            s.data
                .trends
                .iter()
                .map(|p| Datum::new(format_axis_date(&p.date), p.revenue))
                .collect::<Vec<_>>()
        })
    });

    let toggle = TrendGranularity::ALL
        .into_iter()
        .map(|g| {
            let appearance = Signal::derive(move || {
                if granularity.get() == g {
                    ButtonAppearance::Primary
                } else {
                    ButtonAppearance::Secondary
                }
            });
            view! {
                <Button
                    appearance=appearance
                    size=ButtonSize::Small
                    on_click=move |_| {
                        actions::dispatch(sales, SalesAction::Filter(SalesFilterChange::Granularity(g)))
                    }
                >
                    {g.label()}
                </Button>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <PageHeader
                title="Revenue Trends"
                subtitle="Revenue bucketed by day, week or month".to_string()
                icon_name="trending-up"
                busy=loading
            >
                <Flex gap=FlexGap::Small>{toggle}</Flex>
            </PageHeader>

            <ErrorBanner domain=UploadDomain::Sales />
            <SalesFilterBar restrict_categories=true />

            <div class="trend-total">
                <span class="trend-total__label">"Total in period"</span>
                <span class="trend-total__value">{move || total.get()}</span>
            </div>

            <ChartPanel title="Revenue" loading=loading>
                <LineChart data=chart_data format_value=format_inr />
            </ChartPanel>

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=140.0>"Period"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Revenue"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || sales.with(|s| {
                            s.data.trends.iter().map(|p| {
                                let date = p.date.clone();
                                let revenue = p.revenue;
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{date}</TableCellLayout></TableCell>
                                        <TableCellMoney value=revenue />
                                    </TableRow>
                                }
                            }).collect_view()
                        })}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
