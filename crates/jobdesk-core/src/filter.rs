//! Filter state controller.

use tokio::sync::watch;
use tracing::{debug, warn};

use jobdesk_api::{ApiError, FilterField, FilterState, JobsClient};

/// Values offered by the job type, location and tag dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownOptions {
    pub job_types: Vec<String>,
    pub locations: Vec<String>,
    pub tags: Vec<String>,
}

/// Owns the current [`FilterState`] and publishes every change.
///
/// Subscribers get a `watch::Receiver`; a change is only published when a
/// value actually differs, so re-selecting the current option is silent.
#[derive(Debug)]
pub struct FilterController {
    state: watch::Sender<FilterState>,
    options: DropdownOptions,
    options_loading: bool,
    options_loaded: bool,
    advanced_open: bool,
}

impl Default for FilterController {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterController {
    /// Start from the default state (newest first, nothing filtered).
    pub fn new() -> Self {
        Self::with_state(FilterState::default())
    }

    /// Start from a caller-supplied state.
    pub fn with_state(initial: FilterState) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            state,
            options: DropdownOptions::default(),
            options_loading: false,
            options_loaded: false,
            advanced_open: false,
        }
    }

    /// Receive every future change of the filter state.
    pub fn subscribe(&self) -> watch::Receiver<FilterState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FilterState {
        self.state.borrow().clone()
    }

    /// Set one field. Returns whether subscribers were notified.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) -> bool {
        let value = value.into();
        let changed = self.state.send_if_modified(|state| {
            let slot = state.get_mut(field);
            if *slot == value {
                return false;
            }
            *slot = value;
            true
        });
        if changed {
            debug!(field = field.name(), "filter changed");
        }
        changed
    }

    /// Replace the whole state at once (one notification at most).
    pub fn replace(&mut self, next: FilterState) -> bool {
        self.state.send_if_modified(|state| {
            if *state == next {
                return false;
            }
            *state = next;
            true
        })
    }

    /// Clear one field, as the "×" on an active-filter chip does.
    pub fn clear(&mut self, field: FilterField) -> bool {
        self.set(field, String::new())
    }

    /// Restore the defaults, including the sort order.
    pub fn reset(&mut self) -> bool {
        self.replace(FilterState::default())
    }

    /// Number of non-empty filters, `sort` excluded.
    pub fn active_filter_count(&self) -> usize {
        self.state.borrow().active_filter_count()
    }

    /// Non-empty filters, `sort` excluded, in display order.
    pub fn active_filters(&self) -> Vec<(FilterField, String)> {
        let state = self.state.borrow();
        FilterField::ALL
            .into_iter()
            .filter(|f| *f != FilterField::Sort)
            .filter_map(|f| {
                let value = state.get(f);
                (!value.is_empty()).then(|| (f, value.to_string()))
            })
            .collect()
    }

    /// Show or hide the location/tag row. Returns the new visibility.
    pub fn toggle_advanced(&mut self) -> bool {
        self.advanced_open = !self.advanced_open;
        self.advanced_open
    }

    pub fn advanced_open(&self) -> bool {
        self.advanced_open
    }

    pub fn options(&self) -> &DropdownOptions {
        &self.options
    }

    /// True while the dropdown lookups are in flight.
    pub fn options_loading(&self) -> bool {
        self.options_loading
    }

    pub fn options_loaded(&self) -> bool {
        self.options_loaded
    }

    /// Fetch the dropdown values, once per mount.
    ///
    /// The three lookups run concurrently and fail independently: a failed
    /// lookup leaves its own dropdown empty and does not affect the others.
    pub async fn load_options(&mut self, client: &JobsClient) {
        if self.options_loaded {
            return;
        }

        self.options_loading = true;
        let (job_types, locations, tags) =
            tokio::join!(client.job_types(), client.locations(), client.tags());

        self.options = DropdownOptions {
            job_types: or_empty(job_types),
            locations: or_empty(locations),
            tags: or_empty(tags),
        };
        self.options_loading = false;
        self.options_loaded = true;
    }
}

fn or_empty(result: Result<Vec<String>, ApiError>) -> Vec<String> {
    result.unwrap_or_else(|e| {
        warn!(operation = ?e.operation(), error = %e, "dropdown lookup failed");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::client;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_defaults() {
        let filters = FilterController::new();
        assert_eq!(filters.state(), FilterState::default());
        assert_eq!(filters.active_filter_count(), 0);
        assert!(filters.active_filters().is_empty());
    }

    #[test]
    fn test_set_notifies_subscribers() {
        let mut filters = FilterController::new();
        let mut rx = filters.subscribe();
        assert!(!rx.has_changed().unwrap());

        assert!(filters.set(FilterField::Search, "actuary"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().search, "actuary");
    }

    #[test]
    fn test_setting_same_value_is_silent() {
        let mut filters = FilterController::new();
        filters.set(FilterField::Location, "Remote");
        let mut rx = filters.subscribe();

        assert!(!filters.set(FilterField::Location, "Remote"));
        assert!(!filters.replace(filters.state()));
        assert!(!rx.has_changed().unwrap());

        // A copy built field by field in another order is still equal
        let same = FilterState {
            sort: "posting_date_desc".to_string(),
            location: "Remote".to_string(),
            ..FilterState::unfiltered()
        };
        assert!(!filters.replace(same));
        assert!(!rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().location, "Remote");
    }

    #[test]
    fn test_active_filters_exclude_sort() {
        let mut filters = FilterController::new();
        filters.set(FilterField::Sort, "company_asc");
        filters.set(FilterField::Tag, "Python");
        filters.set(FilterField::JobType, "Contract");

        assert_eq!(filters.active_filter_count(), 2);
        assert_eq!(
            filters.active_filters(),
            vec![
                (FilterField::JobType, "Contract".to_string()),
                (FilterField::Tag, "Python".to_string()),
            ]
        );
    }

    #[test]
    fn test_clear_and_reset() {
        let mut filters = FilterController::new();
        filters.set(FilterField::Search, "pricing");
        filters.set(FilterField::Tag, "Life");
        filters.set(FilterField::Sort, "title_asc");

        assert!(filters.clear(FilterField::Tag));
        assert_eq!(filters.state().tag, "");
        assert_eq!(filters.active_filter_count(), 1);

        assert!(filters.reset());
        assert_eq!(filters.state(), FilterState::default());
        assert!(!filters.reset());
    }

    #[test]
    fn test_toggle_advanced() {
        let mut filters = FilterController::new();
        assert!(!filters.advanced_open());
        assert!(filters.toggle_advanced());
        assert!(!filters.toggle_advanced());
    }

    #[tokio::test]
    async fn test_failed_lookup_does_not_block_others() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/jobs/job-types"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": ["Contract", "Full-time"] })),
            )
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/jobs/locations"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "db down" })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/jobs/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": ["Life", "Python"] })))
            .mount(&mock_server)
            .await;

        let mut filters = FilterController::new();
        filters.load_options(&client(&mock_server)).await;

        assert!(!filters.options_loading());
        assert_eq!(
            filters.options(),
            &DropdownOptions {
                job_types: vec!["Contract".to_string(), "Full-time".to_string()],
                locations: vec![],
                tags: vec!["Life".to_string(), "Python".to_string()],
            }
        );
    }

    #[tokio::test]
    async fn test_options_load_once() {
        let mock_server = MockServer::start().await;

        for route in ["/jobs/job-types", "/jobs/locations", "/jobs/tags"] {
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let mut filters = FilterController::new();
        let client = client(&mock_server);
        filters.load_options(&client).await;
        filters.load_options(&client).await;

        assert!(filters.options_loaded());
    }
}
