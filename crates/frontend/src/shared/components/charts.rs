//! Inline-SVG chart views for the dashboard.
//!
//! Render a [`ChartBundle`] as a static SVG. The views are not reactive
//! themselves; the dashboard re-creates them whenever the metrics
//! snapshot changes.

use crate::dashboards::sales_overview::charts::{ChartBundle, ChartKind, LabelFormat};
use crate::shared::number_format::format_brl;
use leptos::prelude::*;

const SERIES_COLOR: &str = "#22c55e";

const PLOT_WIDTH: f64 = 640.0;
const PLOT_HEIGHT: f64 = 240.0;
const MARGIN_LEFT: f64 = 16.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 28.0;
const ROW_HEIGHT: f64 = 28.0;

fn format_value_label(value: f64, format: LabelFormat) -> String {
    match format {
        LabelFormat::Currency => format_brl(value),
    }
}

#[component]
pub fn ChartView(bundle: ChartBundle) -> impl IntoView {
    if bundle.values.is_empty() {
        return view! { <div class="chart chart--empty">"No data for this period."</div> }
            .into_any();
    }
    match bundle.kind {
        ChartKind::Bar => bar_chart(bundle).into_any(),
        ChartKind::Line => line_chart(bundle).into_any(),
        ChartKind::HorizontalBar => horizontal_bar_chart(bundle).into_any(),
    }
}

/// Scale ceiling: the maximum value, or 1 so empty-ish data still has a
/// finite scale.
fn axis_max(values: &[f64], floor: f64) -> f64 {
    let max = values.iter().cloned().fold(floor, f64::max);
    if max > floor {
        max
    } else {
        floor + 1.0
    }
}

fn bar_chart(bundle: ChartBundle) -> impl IntoView {
    let floor = bundle.y_min.unwrap_or(0.0);
    let max = axis_max(&bundle.values, floor);
    let inner_width = PLOT_WIDTH - MARGIN_LEFT;
    let inner_height = PLOT_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let slot = inner_width / bundle.values.len() as f64;
    let bar_width = slot * 0.6;
    let view_box = format!("0 0 {} {}", PLOT_WIDTH, PLOT_HEIGHT);
    let format = bundle.label_format;

    let bars = bundle
        .categories
        .iter()
        .zip(bundle.values.iter())
        .enumerate()
        .map(|(i, (category, value))| {
            let height = (value - floor) / (max - floor) * inner_height;
            let x = MARGIN_LEFT + i as f64 * slot + (slot - bar_width) / 2.0;
            let y = MARGIN_TOP + inner_height - height;
            let center = x + bar_width / 2.0;
            let baseline = PLOT_HEIGHT - MARGIN_BOTTOM;
            view! {
                <g>
                    <rect
                        x=format!("{:.1}", x)
                        y=format!("{:.1}", y)
                        width=format!("{:.1}", bar_width)
                        height=format!("{:.1}", height)
                        fill=SERIES_COLOR
                    />
                    <text
                        x=format!("{:.1}", center)
                        y=format!("{:.1}", y - 6.0)
                        text-anchor="middle"
                        font-size="10"
                    >
                        {format_value_label(*value, format)}
                    </text>
                    <text
                        x=format!("{:.1}", center)
                        y=format!("{:.1}", baseline + 16.0)
                        text-anchor="middle"
                        font-size="11"
                    >
                        {category.clone()}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg class="chart chart--bar" viewBox=view_box preserveAspectRatio="xMidYMid meet">
            {bars}
        </svg>
    }
}

fn line_chart(bundle: ChartBundle) -> impl IntoView {
    let floor = bundle.y_min.unwrap_or(0.0);
    let max = axis_max(&bundle.values, floor);
    let inner_width = PLOT_WIDTH - MARGIN_LEFT;
    let inner_height = PLOT_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let count = bundle.values.len();
    let step = if count > 1 {
        inner_width / (count - 1) as f64
    } else {
        0.0
    };
    let view_box = format!("0 0 {} {}", PLOT_WIDTH, PLOT_HEIGHT);
    let format = bundle.label_format;

    let point_at = move |i: usize, value: f64| {
        let x = if count > 1 {
            MARGIN_LEFT + i as f64 * step
        } else {
            MARGIN_LEFT + inner_width / 2.0
        };
        let y = MARGIN_TOP + inner_height - (value - floor) / (max - floor) * inner_height;
        (x, y)
    };

    let points = bundle
        .values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let (x, y) = point_at(i, *value);
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ");

    let markers = bundle
        .categories
        .iter()
        .zip(bundle.values.iter())
        .enumerate()
        .map(|(i, (category, value))| {
            let (x, y) = point_at(i, *value);
            let baseline = PLOT_HEIGHT - MARGIN_BOTTOM;
            view! {
                <g>
                    <circle
                        cx=format!("{:.1}", x)
                        cy=format!("{:.1}", y)
                        r="4"
                        fill=SERIES_COLOR
                        stroke="white"
                        stroke-width="2"
                    />
                    <text
                        x=format!("{:.1}", x)
                        y=format!("{:.1}", y - 8.0)
                        text-anchor="middle"
                        font-size="10"
                    >
                        {format_value_label(*value, format)}
                    </text>
                    <text
                        x=format!("{:.1}", x)
                        y=format!("{:.1}", baseline + 16.0)
                        text-anchor="middle"
                        font-size="11"
                    >
                        {category.clone()}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg class="chart chart--line" viewBox=view_box preserveAspectRatio="xMidYMid meet">
            <polyline
                points=points
                fill="none"
                stroke=SERIES_COLOR
                stroke-width="2"
            />
            {markers}
        </svg>
    }
}

fn horizontal_bar_chart(bundle: ChartBundle) -> impl IntoView {
    let max = axis_max(&bundle.values, 0.0);
    let label_width = 160.0;
    let inner_width = PLOT_WIDTH - label_width - 8.0;
    let height = bundle.values.len() as f64 * ROW_HEIGHT;
    let view_box = format!("0 0 {} {}", PLOT_WIDTH, height);
    let format = bundle.label_format;

    let rows = bundle
        .categories
        .iter()
        .zip(bundle.values.iter())
        .enumerate()
        .map(|(i, (category, value))| {
            let bar_length = value / max * inner_width;
            let y = i as f64 * ROW_HEIGHT;
            let middle = y + ROW_HEIGHT / 2.0 + 4.0;
            view! {
                <g>
                    <text
                        x=format!("{:.1}", label_width - 8.0)
                        y=format!("{:.1}", middle)
                        text-anchor="end"
                        font-size="11"
                    >
                        {category.clone()}
                    </text>
                    <rect
                        x=format!("{:.1}", label_width)
                        y=format!("{:.1}", y + 6.0)
                        width=format!("{:.1}", bar_length)
                        height=format!("{:.1}", ROW_HEIGHT - 12.0)
                        fill=SERIES_COLOR
                    />
                    <text
                        x=format!("{:.1}", label_width + bar_length + 6.0)
                        y=format!("{:.1}", middle)
                        font-size="10"
                    >
                        {format_value_label(*value, format)}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg class="chart chart--horizontal" viewBox=view_box preserveAspectRatio="xMidYMid meet">
            {rows}
        </svg>
    }
}
