//! Chart data derivation for the sales overview dashboard.
//!
//! Pure functions from a [`SalesMetrics`] snapshot to render-ready
//! bundles. No side effects, no failure modes.

use contracts::dashboards::sales_overview::SalesMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    HorizontalBar,
}

/// How value and axis labels are rendered. Presentation metadata only;
/// the numeric data is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFormat {
    Currency,
}

/// One chart, ready for the SVG chart views: categories and values are
/// index-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBundle {
    pub kind: ChartKind,
    pub series_name: &'static str,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    /// Pinned axis floor (`Some(0.0)` for the monthly line chart).
    pub y_min: Option<f64>,
    pub label_format: LabelFormat,
}

/// Revenue by category as a bar chart. Categories are sorted
/// lexicographically ascending and the values reindexed to match.
pub fn category_revenue_chart(metrics: &SalesMetrics) -> ChartBundle {
    let mut entries = metrics.revenue_by_category.clone();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    let (categories, values) = split_entries(entries);

    ChartBundle {
        kind: ChartKind::Bar,
        series_name: "Revenue",
        categories,
        values,
        y_min: None,
        label_format: LabelFormat::Currency,
    }
}

/// Revenue by month as a line chart. Insertion order is preserved (the
/// backend emits months chronologically); the y axis is pinned to 0.
pub fn monthly_revenue_chart(metrics: &SalesMetrics) -> ChartBundle {
    let (categories, values) = split_entries(metrics.revenue_by_month.clone());

    ChartBundle {
        kind: ChartKind::Line,
        series_name: "Revenue",
        categories,
        values,
        y_min: Some(0.0),
        label_format: LabelFormat::Currency,
    }
}

/// Top products as a horizontal bar chart. Insertion order is preserved
/// (the backend emits products in rank order, best first).
pub fn top_products_chart(metrics: &SalesMetrics) -> ChartBundle {
    let (categories, values) = split_entries(metrics.top_products.clone());

    ChartBundle {
        kind: ChartKind::HorizontalBar,
        series_name: "Revenue",
        categories,
        values,
        y_min: None,
        label_format: LabelFormat::Currency,
    }
}

fn split_entries(entries: Vec<(String, f64)>) -> (Vec<String>, Vec<f64>) {
    entries.into_iter().unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> SalesMetrics {
        SalesMetrics {
            total_revenue: 170.0,
            orders: 3,
            customers: 2,
            avg_ticket: 56.67,
            revenue_by_category: vec![("Books".to_string(), 50.0), ("Art".to_string(), 120.0)],
            revenue_by_month: vec![
                ("2024-03".to_string(), 70.0),
                ("2024-01".to_string(), 40.0),
                ("2024-02".to_string(), 60.0),
            ],
            top_products: vec![("Pen".to_string(), 90.0), ("Notebook".to_string(), 60.0)],
        }
    }

    #[test]
    fn test_category_chart_sorts_and_reindexes() {
        let chart = category_revenue_chart(&metrics());
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.categories, vec!["Art", "Books"]);
        assert_eq!(chart.values, vec![120.0, 50.0]);
    }

    #[test]
    fn test_monthly_chart_preserves_order_and_pins_floor() {
        let chart = monthly_revenue_chart(&metrics());
        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(chart.categories, vec!["2024-03", "2024-01", "2024-02"]);
        assert_eq!(chart.values, vec![70.0, 40.0, 60.0]);
        assert_eq!(chart.y_min, Some(0.0));
    }

    #[test]
    fn test_top_products_chart_preserves_rank_order() {
        let chart = top_products_chart(&metrics());
        assert_eq!(chart.kind, ChartKind::HorizontalBar);
        assert_eq!(chart.categories, vec!["Pen", "Notebook"]);
        assert_eq!(chart.values, vec![90.0, 60.0]);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let m = metrics();
        assert_eq!(category_revenue_chart(&m), category_revenue_chart(&m));
        assert_eq!(monthly_revenue_chart(&m), monthly_revenue_chart(&m));
        assert_eq!(top_products_chart(&m), top_products_chart(&m));
    }
}
