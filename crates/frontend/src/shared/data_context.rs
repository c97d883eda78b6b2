use contracts::dashboards::sales_overview::SalesMetrics;
use leptos::prelude::*;

/// Shared dashboard state, provided to the whole app via context.
///
/// Single writer per field by convention: the request coordinator owns
/// `metrics` and `is_data_loaded`, the upload flow owns `uploaded_file`.
#[derive(Clone, Copy)]
pub struct DataContext {
    /// Last successfully fetched metrics. `None` before any upload and
    /// while a refresh is in flight.
    pub metrics: RwSignal<Option<SalesMetrics>>,
    /// The CSV selected by the user. `web_sys::File` is not Send, so the
    /// signal lives in local storage.
    pub uploaded_file: RwSignal<Option<web_sys::File>, LocalStorage>,
    /// Gates whether the dashboard renders content or its empty state.
    pub is_data_loaded: RwSignal<bool>,
}

impl DataContext {
    pub fn new() -> Self {
        Self {
            metrics: RwSignal::new(None),
            uploaded_file: RwSignal::new_local(None),
            is_data_loaded: RwSignal::new(false),
        }
    }
}

impl Default for DataContext {
    fn default() -> Self {
        Self::new()
    }
}
