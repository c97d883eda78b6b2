use crate::dashboards::sales_overview::charts::{
    category_revenue_chart, monthly_revenue_chart, top_products_chart,
};
use crate::dashboards::sales_overview::coordinator::{RequestCoordinator, RequestStatus};
use crate::shared::components::charts::ChartView;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data_context::DataContext;
use crate::shared::number_format::{format_brl, format_count};
use chrono::NaiveDate;
use contracts::dashboards::sales_overview::FilterPeriod;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonGroup};

/// Sales overview dashboard: metric cards and charts for the uploaded
/// CSV, filtered by the selected time window.
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let data = use_context::<DataContext>().expect("DataContext not provided in context");
    let coordinator =
        use_context::<RequestCoordinator>().expect("RequestCoordinator not provided in context");

    // Raw date-input values; parsed bounds flow through the filter
    // transitions, which decide when a request fires.
    let range_start = RwSignal::new(String::new());
    let range_end = RwSignal::new(String::new());

    let apply_range = move || {
        let start =
            NaiveDate::parse_from_str(&range_start.get_untracked(), "%Y-%m-%d").ok();
        let end = NaiveDate::parse_from_str(&range_end.get_untracked(), "%Y-%m-%d").ok();
        coordinator.set_range(start, end);
    };

    let active_mode = move || coordinator.filter.get().mode;

    let mode_buttons = move || {
        let active = active_mode();
        [
            ("Full period", FilterPeriod::All),
            ("This month", FilterPeriod::ThisMonth),
            ("Last 7 days", FilterPeriod::Last7Days),
            ("Custom", FilterPeriod::Custom),
        ]
        .into_iter()
        .map(|(label, mode)| {
            let appearance = if active == mode {
                ButtonAppearance::Primary
            } else {
                ButtonAppearance::Secondary
            };
            view! {
                <Button appearance=appearance on_click=move |_| coordinator.select_mode(mode)>
                    {label}
                </Button>
            }
        })
        .collect_view()
    };

    view! {
        <div class="page page--dashboard">
            <div class="page__header">
                <h2 class="page__title">"Sales overview"</h2>
                <p class="page__subtitle">
                    "Insights computed by the backend from the uploaded CSV."
                </p>
            </div>

            <div class="dashboard__filters">
                <ButtonGroup>{mode_buttons}</ButtonGroup>

                {move || {
                    (active_mode() == FilterPeriod::Custom)
                        .then(|| {
                            view! {
                                <div class="dashboard__range">
                                    <DateInput
                                        value=Signal::derive(move || range_start.get())
                                        on_change=move |value| {
                                            range_start.set(value);
                                            apply_range();
                                        }
                                    />
                                    <span class="dashboard__range-separator">"–"</span>
                                    <DateInput
                                        value=Signal::derive(move || range_end.get())
                                        on_change=move |value| {
                                            range_end.set(value);
                                            apply_range();
                                        }
                                    />
                                </div>
                            }
                        })
                }}
            </div>

            {move || {
                if let RequestStatus::Failed(message) = coordinator.status.get() {
                    Some(view! { <div class="alert alert--error">{message}</div> })
                } else {
                    None
                }
            }}

            {move || {
                data.metrics
                    .get()
                    .map(|metrics| {
                        view! {
                            <section class="dashboard__cards">
                                <StatCard
                                    label="Total revenue"
                                    value=format_brl(metrics.total_revenue)
                                />
                                <StatCard label="Orders" value=format_count(metrics.orders) />
                                <StatCard
                                    label="Customers"
                                    value=format_count(metrics.customers)
                                />
                                <StatCard
                                    label="Average ticket"
                                    value=format_brl(metrics.avg_ticket)
                                />
                            </section>

                            <section class="dashboard__charts">
                                <div class="chart-card">
                                    <h3 class="chart-card__title">"Revenue by category"</h3>
                                    <ChartView bundle=category_revenue_chart(&metrics) />
                                </div>
                                <div class="chart-card">
                                    <h3 class="chart-card__title">"Revenue by month"</h3>
                                    <ChartView bundle=monthly_revenue_chart(&metrics) />
                                </div>
                                <div class="chart-card chart-card--wide">
                                    <h3 class="chart-card__title">"Top 10 products"</h3>
                                    <ChartView bundle=top_products_chart(&metrics) />
                                </div>
                            </section>
                        }
                    })
            }}

            {move || {
                if data.metrics.get().is_some() {
                    return None;
                }
                let placeholder = if coordinator.status.get() == RequestStatus::Loading {
                    "Loading metrics..."
                } else {
                    "Upload a CSV to see the dashboard."
                };
                Some(view! { <div class="dashboard__empty">{placeholder}</div> })
            }}
        </div>
    }
}
