use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Time-window strategy for restricting which sales rows contribute
/// to the computed metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterPeriod {
    All,
    ThisMonth,
    Last7Days,
    Custom,
}

impl FilterPeriod {
    /// Canonical value for the `period` query parameter.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            FilterPeriod::All => "all",
            FilterPeriod::ThisMonth => "this_month",
            FilterPeriod::Last7Days => "last_7_days",
            FilterPeriod::Custom => "custom",
        }
    }
}

/// Fully-specified filter, ready to be encoded into the request URL.
///
/// `start_date`/`end_date` are set only for [`FilterPeriod::Custom`];
/// the constructors enforce that pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterQuery {
    pub period: FilterPeriod,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl FilterQuery {
    /// Filter for a predefined period (no explicit date bounds).
    pub fn period(period: FilterPeriod) -> Self {
        Self {
            period,
            start_date: None,
            end_date: None,
        }
    }

    /// Custom range filter with both bounds.
    pub fn custom(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            period: FilterPeriod::Custom,
            start_date: Some(start_date),
            end_date: Some(end_date),
        }
    }

    /// Render the query string, `?` included.
    ///
    /// Dates are calendar dates in `yyyy-MM-dd`, taken from the filter
    /// bounds, never from the current time.
    pub fn query_string(&self) -> String {
        let mut query = format!("?period={}", self.period.as_query_value());
        if self.period == FilterPeriod::Custom {
            if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
                query.push_str(&format!(
                    "&start_date={}&end_date={}",
                    start.format("%Y-%m-%d"),
                    end.format("%Y-%m-%d")
                ));
            }
        }
        query
    }
}

/// Aggregated result set returned by the backend for one file + filter.
///
/// The breakdown mappings are JSON objects whose key order carries
/// meaning: months are chronological, top products are rank order
/// (best first, capped at 10 by the backend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesMetrics {
    pub total_revenue: f64,
    pub orders: u64,
    pub customers: u64,
    pub avg_ticket: f64,
    #[serde(with = "crate::shared::ordered_map")]
    pub revenue_by_category: Vec<(String, f64)>,
    #[serde(with = "crate::shared::ordered_map")]
    pub revenue_by_month: Vec<(String, f64)>,
    #[serde(with = "crate::shared::ordered_map")]
    pub top_products: Vec<(String, f64)>,
}

/// Success body of the upload/filter endpoint. The backend may attach
/// other fields (e.g. the raw records); they are ignored here.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadSalesResponse {
    pub metrics: SalesMetrics,
}

/// Error body of the upload/filter endpoint. The `error` field is
/// optional; callers fall back to a generic message when it is absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
