//! Filter state machine for the sales overview dashboard.
//!
//! Transitions are plain functions returning `Option<FilterQuery>`:
//! `Some` means "this user action completed a filter change, issue
//! exactly one request now". Request triggering is therefore driven by
//! explicit transitions, not by watching combined reactive state.

use chrono::NaiveDate;
use contracts::dashboards::sales_overview::{FilterPeriod, FilterQuery};

/// Currently active filter mode plus the custom-range bounds.
///
/// The bounds are meaningful only in [`FilterPeriod::Custom`] mode, and
/// a request is never triggered from a partial range.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub mode: FilterPeriod,
    pub range_start: Option<NaiveDate>,
    pub range_end: Option<NaiveDate>,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            mode: FilterPeriod::All,
            range_start: None,
            range_end: None,
        }
    }

    /// Switch the active mode.
    ///
    /// Non-custom modes complete a filter change by themselves. Custom
    /// mode completes only once both bounds are known, which includes
    /// re-selecting Custom while a full range from a previous selection
    /// is still set.
    pub fn select_mode(&mut self, mode: FilterPeriod) -> Option<FilterQuery> {
        self.mode = mode;
        if mode == FilterPeriod::Custom {
            self.custom_query()
        } else {
            Some(FilterQuery::period(mode))
        }
    }

    /// Replace the custom bounds.
    ///
    /// Fires only when the active mode is Custom and both bounds are
    /// present; partial updates store the bound and wait.
    pub fn set_range(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Option<FilterQuery> {
        self.range_start = start;
        self.range_end = end;
        if self.mode != FilterPeriod::Custom {
            return None;
        }
        self.custom_query()
    }

    /// The query the current selection stands for, without transitioning.
    ///
    /// `None` only for Custom mode with an incomplete range, which
    /// cannot produce a request.
    pub fn current_query(&self) -> Option<FilterQuery> {
        if self.mode == FilterPeriod::Custom {
            self.custom_query()
        } else {
            Some(FilterQuery::period(self.mode))
        }
    }

    fn custom_query(&self) -> Option<FilterQuery> {
        match (self.range_start, self.range_end) {
            (Some(start), Some(end)) => Some(FilterQuery::custom(start, end)),
            _ => None,
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_non_custom_modes_fire_immediately() {
        let mut state = FilterState::new();
        for mode in [
            FilterPeriod::All,
            FilterPeriod::ThisMonth,
            FilterPeriod::Last7Days,
        ] {
            let query = state.select_mode(mode).unwrap();
            assert_eq!(query, FilterQuery::period(mode));
            assert!(query.start_date.is_none());
            assert!(query.end_date.is_none());
        }
    }

    #[test]
    fn test_selecting_custom_without_bounds_does_not_fire() {
        let mut state = FilterState::new();
        assert_eq!(state.select_mode(FilterPeriod::Custom), None);
        assert_eq!(state.mode, FilterPeriod::Custom);
    }

    #[test]
    fn test_partial_range_does_not_fire() {
        let mut state = FilterState::new();
        state.select_mode(FilterPeriod::Custom);
        assert_eq!(state.set_range(Some(date(2024, 1, 1)), None), None);
    }

    #[test]
    fn test_completing_range_fires_once_with_both_dates() {
        let mut state = FilterState::new();
        state.select_mode(FilterPeriod::Custom);
        state.set_range(Some(date(2024, 1, 1)), None);

        let query = state
            .set_range(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)))
            .unwrap();
        assert_eq!(
            query.query_string(),
            "?period=custom&start_date=2024-01-01&end_date=2024-01-31"
        );
    }

    #[test]
    fn test_range_change_outside_custom_mode_does_not_fire() {
        let mut state = FilterState::new();
        assert_eq!(
            state.set_range(Some(date(2024, 1, 1)), Some(date(2024, 1, 31))),
            None
        );
    }

    #[test]
    fn test_current_query_reflects_selected_mode() {
        let mut state = FilterState::new();
        assert_eq!(
            state.current_query(),
            Some(FilterQuery::period(FilterPeriod::All))
        );

        state.select_mode(FilterPeriod::ThisMonth);
        assert_eq!(
            state.current_query(),
            Some(FilterQuery::period(FilterPeriod::ThisMonth))
        );

        state.select_mode(FilterPeriod::Custom);
        assert_eq!(state.current_query(), None);

        state.set_range(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)));
        assert_eq!(
            state.current_query(),
            Some(FilterQuery::custom(date(2024, 1, 1), date(2024, 1, 31)))
        );
    }

    #[test]
    fn test_reselecting_custom_with_full_range_fires() {
        let mut state = FilterState::new();
        state.select_mode(FilterPeriod::Custom);
        state.set_range(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)));

        state.select_mode(FilterPeriod::All);
        let query = state.select_mode(FilterPeriod::Custom).unwrap();
        assert_eq!(query.period, FilterPeriod::Custom);
        assert_eq!(query.start_date, Some(date(2024, 1, 1)));
    }
}
