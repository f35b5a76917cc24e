//! Job list orchestration: fetching, view modes and list reconciliation.

use std::fmt;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use jobdesk_api::{ApiError, FilterState, Job, JobsClient};

/// Backend reachability as reported by the health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiStatus {
    #[default]
    Checking,
    Connected,
    Disconnected,
}

impl ApiStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApiStatus::Checking => "checking",
            ApiStatus::Connected => "connected",
            ApiStatus::Disconnected => "disconnected",
        }
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which screen is showing. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Add,
    Edit(Job),
}

/// A list request that has been issued but not yet applied.
///
/// Obtained from [`ListOrchestrator::begin_fetch`]; running it does not need
/// the orchestrator, so a host can release its lock while the request is in
/// flight.
#[derive(Debug)]
pub struct PendingFetch {
    generation: u64,
    filters: FilterState,
    client: JobsClient,
}

impl PendingFetch {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Perform the request.
    pub async fn run(self) -> CompletedFetch {
        let result = self.client.list_jobs(&self.filters).await;
        CompletedFetch {
            generation: self.generation,
            result,
        }
    }
}

/// Result of a [`PendingFetch`], ready for [`ListOrchestrator::finish_fetch`].
#[derive(Debug)]
pub struct CompletedFetch {
    generation: u64,
    result: Result<Vec<Job>, ApiError>,
}

impl CompletedFetch {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Owns the displayed job collection and the list/add/edit view mode.
///
/// The collection always reflects the last successful fetch for the most
/// recently requested filters. Each fetch is tagged with a generation and
/// only the newest generation may be applied, so a slow response for an
/// older filter can never overwrite a newer one.
#[derive(Debug)]
pub struct ListOrchestrator {
    client: JobsClient,
    filters: watch::Receiver<FilterState>,
    jobs: Vec<Job>,
    loading: bool,
    error: Option<String>,
    api_status: ApiStatus,
    view: ViewMode,
    latest_generation: u64,
    mounted: bool,
}

impl ListOrchestrator {
    /// Create an orchestrator that re-fetches whenever `filters` changes.
    pub fn new(client: JobsClient, filters: watch::Receiver<FilterState>) -> Self {
        Self {
            client,
            filters,
            jobs: Vec::new(),
            loading: false,
            error: None,
            api_status: ApiStatus::Checking,
            view: ViewMode::List,
            latest_generation: 0,
            mounted: false,
        }
    }

    pub fn client(&self) -> &JobsClient {
        &self.client
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn api_status(&self) -> ApiStatus {
        self.api_status
    }

    pub fn view(&self) -> &ViewMode {
        &self.view
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// An empty result is not an error: nothing loading, no error, no jobs.
    pub fn is_empty_result(&self) -> bool {
        !self.loading && self.error.is_none() && self.jobs.is_empty()
    }

    /// Check the backend and load the initial list.
    ///
    /// The list is unfiltered unless filters were already set before the
    /// mount, in which case it is fetched for them. Both requests run
    /// concurrently; a failed check only marks the API as disconnected and
    /// never holds back the list.
    pub async fn mount(&mut self) {
        let current = self.filters.borrow_and_update().clone();
        let initial = if current == FilterState::default() {
            FilterState::unfiltered()
        } else {
            current
        };
        let pending = self.begin_fetch(initial);
        let (health, fetched) = tokio::join!(self.client.health_check(), pending.run());

        self.apply_health(health);
        self.finish_fetch(fetched);
        self.mounted = true;
    }

    /// Run the health check on its own.
    pub async fn check_health(&mut self) {
        let health = self.client.health_check().await;
        self.apply_health(health);
    }

    fn apply_health(&mut self, health: Result<(), ApiError>) {
        self.api_status = match health {
            Ok(()) => ApiStatus::Connected,
            Err(e) => {
                warn!(error = %e, "API health check failed");
                ApiStatus::Disconnected
            }
        };
    }

    /// Start a list request for `filters`.
    ///
    /// Sets the loading flag and the error is cleared; the current jobs stay
    /// in place until the request completes.
    pub fn begin_fetch(&mut self, filters: FilterState) -> PendingFetch {
        self.latest_generation += 1;
        self.loading = true;
        self.error = None;
        debug!(generation = self.latest_generation, ?filters, "fetching jobs");

        PendingFetch {
            generation: self.latest_generation,
            filters,
            client: self.client.clone(),
        }
    }

    /// Apply a completed request. Returns false if a newer request has been
    /// issued since, in which case the result is dropped.
    ///
    /// On success the collection is replaced; on failure the previous
    /// collection is kept and the error message is exposed.
    pub fn finish_fetch(&mut self, done: CompletedFetch) -> bool {
        if done.generation != self.latest_generation {
            debug!(
                generation = done.generation,
                latest = self.latest_generation,
                "dropping stale job list response"
            );
            return false;
        }

        self.loading = false;
        match done.result {
            Ok(jobs) => {
                debug!(count = jobs.len(), "loaded jobs");
                self.jobs = jobs;
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "failed to load jobs");
                self.error = Some(e.message().to_string());
            }
        }
        true
    }

    /// Fetch and apply in one step.
    pub async fn fetch(&mut self, filters: FilterState) -> bool {
        let done = self.begin_fetch(filters).run().await;
        self.finish_fetch(done)
    }

    /// Take the filter state if it changed since the last call.
    pub fn take_filter_change(&mut self) -> Option<FilterState> {
        if self.filters.has_changed().unwrap_or(false) {
            Some(self.filters.borrow_and_update().clone())
        } else {
            None
        }
    }

    /// Re-fetch if the filters changed. Returns whether a fetch was applied.
    pub async fn sync_filters(&mut self) -> bool {
        match self.take_filter_change() {
            Some(filters) => self.fetch(filters).await,
            None => false,
        }
    }

    pub fn show_list(&mut self) {
        self.view = ViewMode::List;
    }

    pub fn show_add(&mut self) {
        self.view = ViewMode::Add;
    }

    pub fn show_edit(&mut self, job: Job) {
        self.view = ViewMode::Edit(job);
    }

    /// Switch to edit mode for `id`, using the loaded copy when there is one
    /// and fetching it otherwise.
    pub async fn open_edit(&mut self, id: i64) -> Result<Job, ApiError> {
        let job = match self.jobs.iter().find(|j| j.id == id) {
            Some(job) => job.clone(),
            None => self.client.get_job(id).await?,
        };
        self.show_edit(job.clone());
        Ok(job)
    }

    /// Reconcile a saved job into the list and return to list mode.
    ///
    /// In add mode the job goes to the head of the list; in edit mode it
    /// replaces the entry with the same id, leaving the others in order.
    pub fn on_job_saved(&mut self, job: Job) {
        match self.view {
            ViewMode::Add => {
                info!(id = job.id, title = %job.title, "job created");
                self.jobs.insert(0, job);
            }
            ViewMode::Edit(_) => {
                info!(id = job.id, title = %job.title, "job updated");
                if let Some(slot) = self.jobs.iter_mut().find(|j| j.id == job.id) {
                    *slot = job;
                }
            }
            ViewMode::List => {}
        }
        self.view = ViewMode::List;
    }

    /// Remove exactly the deleted job from the list.
    pub fn on_job_deleted(&mut self, id: i64) {
        self.jobs.retain(|j| j.id != id);
    }
}
