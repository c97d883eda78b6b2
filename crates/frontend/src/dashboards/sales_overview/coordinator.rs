//! Request lifecycle for the sales overview dashboard.
//!
//! One coordinator drives one outstanding metrics dataset: it clears the
//! snapshot before each refresh (the dashboard never shows metrics
//! computed under a different filter than the selected one), resolves to
//! `Succeeded` or `Failed`, and always re-asserts the data-loaded flag so
//! the UI cannot hang in a loading view.

use super::api;
use super::filter::FilterState;
use crate::shared::data_context::DataContext;
use crate::shared::toast::{ToastSeverity, ToastService};
use contracts::dashboards::sales_overview::{FilterPeriod, FilterQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestStatus {
    Idle,
    Loading,
    Succeeded,
    Failed(String),
}

/// Issues monotonically increasing request ids and tells whether a
/// resolution still corresponds to the newest issued request. Overlapping
/// requests are not cancelled; a superseded resolution is discarded
/// wholesale instead, so the last issued request wins regardless of
/// arrival order.
#[derive(Debug, Default)]
pub(crate) struct SequenceGate {
    latest: u64,
}

impl SequenceGate {
    pub(crate) fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub(crate) fn is_current(&self, seq: u64) -> bool {
        self.latest == seq
    }
}

#[derive(Clone, Copy)]
pub struct RequestCoordinator {
    data: DataContext,
    toast: ToastService,
    pub status: RwSignal<RequestStatus>,
    pub filter: RwSignal<FilterState>,
    gate: StoredValue<SequenceGate>,
}

impl RequestCoordinator {
    pub fn new(data: DataContext, toast: ToastService) -> Self {
        Self {
            data,
            toast,
            status: RwSignal::new(RequestStatus::Idle),
            filter: RwSignal::new(FilterState::new()),
            gate: StoredValue::new(SequenceGate::default()),
        }
    }

    /// Run a mode-selection transition and apply the resulting query, if
    /// the transition completed one.
    pub fn select_mode(&self, mode: FilterPeriod) {
        let query = self.filter.try_update(|f| f.select_mode(mode)).flatten();
        if let Some(query) = query {
            self.apply(query);
        }
    }

    /// Run a range-update transition and apply the resulting query, if
    /// the transition completed one.
    pub fn set_range(
        &self,
        start: Option<chrono::NaiveDate>,
        end: Option<chrono::NaiveDate>,
    ) {
        let query = self.filter.try_update(|f| f.set_range(start, end)).flatten();
        if let Some(query) = query {
            self.apply(query);
        }
    }

    /// Fetch metrics for the filter as currently selected, without
    /// transitioning it.
    ///
    /// An incomplete custom range cannot produce a request, so the
    /// filter resets to the full period through a transition first and
    /// the mode highlight follows the data.
    pub fn apply_current(&self) {
        let query = self.filter.with_untracked(|f| f.current_query());
        match query {
            Some(query) => self.apply(query),
            None => self.select_mode(FilterPeriod::All),
        }
    }

    /// Issue one metrics request for a fully-specified filter.
    ///
    /// Without an uploaded file this is a no-op apart from an advisory
    /// toast: no request, snapshot and data-loaded flag untouched.
    pub fn apply(&self, query: FilterQuery) {
        let Some(file) = self.data.uploaded_file.get_untracked() else {
            self.toast.notify(
                "Notice",
                "No CSV file has been uploaded to filter.",
                ToastSeverity::Default,
            );
            return;
        };

        let seq = self
            .gate
            .try_update_value(|gate| gate.issue())
            .unwrap_or_default();

        self.data.is_data_loaded.set(false);
        self.data.metrics.set(None);
        self.status.set(RequestStatus::Loading);

        let coordinator = *self;
        spawn_local(async move {
            let outcome = api::upload_sales(&file, &query).await;
            coordinator.resolve(seq, outcome);
        });
    }

    fn resolve(
        &self,
        seq: u64,
        outcome: Result<contracts::dashboards::sales_overview::SalesMetrics, String>,
    ) {
        // A newer request was issued while this one was in flight; its
        // resolution must not clobber the newer request's state.
        let is_current = self
            .gate
            .try_with_value(|gate| gate.is_current(seq))
            .unwrap_or(false);
        if !is_current {
            return;
        }

        match outcome {
            Ok(metrics) => {
                self.data.metrics.set(Some(metrics));
                self.status.set(RequestStatus::Succeeded);
            }
            Err(message) => {
                log::error!("Sales metrics request failed: {}", message);
                self.toast
                    .notify("Filter failed", &message, ToastSeverity::Destructive);
                self.status.set(RequestStatus::Failed(message));
            }
        }

        self.data.is_data_loaded.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::sales_overview::SalesMetrics;

    fn metrics() -> SalesMetrics {
        SalesMetrics {
            total_revenue: 100.0,
            orders: 2,
            customers: 1,
            avg_ticket: 50.0,
            revenue_by_category: vec![("Books".to_string(), 100.0)],
            revenue_by_month: vec![("2024-01".to_string(), 100.0)],
            top_products: vec![("Atlas".to_string(), 100.0)],
        }
    }

    #[test]
    fn test_sequence_gate_issues_increasing_ids() {
        let mut gate = SequenceGate::default();
        let first = gate.issue();
        let second = gate.issue();
        assert!(second > first);
    }

    #[test]
    fn test_sequence_gate_discards_superseded_resolutions() {
        let mut gate = SequenceGate::default();
        let first = gate.issue();
        let second = gate.issue();
        // First request resolves late: it is stale, the second wins even
        // if it resolved earlier.
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn test_successful_resolution_replaces_snapshot_and_reasserts_flag() {
        let data = DataContext::new();
        let coordinator = RequestCoordinator::new(data, ToastService::new());

        let seq = coordinator
            .gate
            .try_update_value(|gate| gate.issue())
            .unwrap();
        data.is_data_loaded.set(false);
        data.metrics.set(None);

        coordinator.resolve(seq, Ok(metrics()));

        assert!(data.is_data_loaded.get());
        assert_eq!(data.metrics.get(), Some(metrics()));
        assert_eq!(coordinator.status.get(), RequestStatus::Succeeded);
    }

    #[test]
    fn test_failed_resolution_reasserts_flag_with_absent_snapshot() {
        let data = DataContext::new();
        let toast = ToastService::new();
        let coordinator = RequestCoordinator::new(data, toast);

        let seq = coordinator
            .gate
            .try_update_value(|gate| gate.issue())
            .unwrap();
        data.is_data_loaded.set(false);
        data.metrics.set(None);
        coordinator.status.set(RequestStatus::Loading);

        coordinator.resolve(seq, Err("file is missing required columns".to_string()));

        // Not stuck loading: the flag recovers even though the fetch failed.
        assert!(data.is_data_loaded.get());
        assert_eq!(data.metrics.get(), None);
        assert_eq!(
            coordinator.status.get(),
            RequestStatus::Failed("file is missing required columns".to_string())
        );
        assert_eq!(toast.active_titles(), vec!["Filter failed"]);
    }

    #[test]
    fn test_apply_without_file_is_advisory_noop() {
        let data = DataContext::new();
        let toast = ToastService::new();
        let coordinator = RequestCoordinator::new(data, toast);

        data.is_data_loaded.set(true);
        data.metrics.set(Some(metrics()));

        coordinator.apply(FilterQuery::period(FilterPeriod::Last7Days));

        // No request was issued and the existing snapshot survives.
        assert!(coordinator.gate.try_with_value(|gate| gate.is_current(0)).unwrap());
        assert!(data.is_data_loaded.get());
        assert_eq!(data.metrics.get(), Some(metrics()));
        assert_eq!(coordinator.status.get(), RequestStatus::Idle);
        assert_eq!(toast.active_titles(), vec!["Notice"]);
    }

    #[test]
    fn test_apply_current_resets_incomplete_custom_range_to_full_period() {
        let data = DataContext::new();
        let coordinator = RequestCoordinator::new(data, ToastService::new());

        coordinator.select_mode(FilterPeriod::Custom);
        coordinator.set_range(chrono::NaiveDate::from_ymd_opt(2024, 1, 1), None);

        coordinator.apply_current();

        // The incomplete range cannot be requested; mode and data agree
        // on the full period again.
        assert_eq!(
            coordinator.filter.get_untracked().mode,
            FilterPeriod::All
        );
    }

    #[test]
    fn test_stale_resolution_leaves_state_untouched() {
        let data = DataContext::new();
        let coordinator = RequestCoordinator::new(data, ToastService::new());

        let stale = coordinator
            .gate
            .try_update_value(|gate| gate.issue())
            .unwrap();
        coordinator.gate.try_update_value(|gate| gate.issue());
        data.is_data_loaded.set(false);
        data.metrics.set(None);
        coordinator.status.set(RequestStatus::Loading);

        coordinator.resolve(stale, Ok(metrics()));

        assert!(!data.is_data_loaded.get());
        assert_eq!(data.metrics.get(), None);
        assert_eq!(coordinator.status.get(), RequestStatus::Loading);
    }
}
