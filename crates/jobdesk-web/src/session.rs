//! Per-browser desk state.

use std::collections::HashMap;

use jobdesk_api::{Job, JobsClient};
use jobdesk_core::{FilterController, InlineDelete, JobFormController, ListOrchestrator};

/// Everything the desk page shows, owned by the controllers that drive it.
#[derive(Debug)]
pub struct Session {
    pub(crate) filters: FilterController,
    pub(crate) list: ListOrchestrator,
    pub(crate) form: Option<JobFormController>,
    pub(crate) inline_deletes: HashMap<i64, InlineDelete>,
    notice: Option<String>,
    alerts: Vec<String>,
}

impl Session {
    pub fn new(client: JobsClient) -> Self {
        let filters = FilterController::new();
        let list = ListOrchestrator::new(client, filters.subscribe());
        Self {
            filters,
            list,
            form: None,
            inline_deletes: HashMap::new(),
            notice: None,
            alerts: Vec::new(),
        }
    }

    pub fn filters(&self) -> &FilterController {
        &self.filters
    }

    pub fn list(&self) -> &ListOrchestrator {
        &self.list
    }

    /// First visit: health check, initial list and dropdown values, all at
    /// once.
    pub async fn mount(&mut self) {
        let client = self.list.client().clone();
        tokio::join!(self.list.mount(), self.filters.load_options(&client));
    }

    /// A job from the current list.
    pub fn job(&self, id: i64) -> Option<&Job> {
        self.list.jobs().iter().find(|j| j.id == id)
    }

    /// Switch to add mode with an empty form.
    pub fn start_add(&mut self) {
        self.form = Some(JobFormController::create(self.list.client().clone()));
        self.list.show_add();
    }

    /// Switch to edit mode for `job`.
    pub fn start_edit(&mut self, job: &Job) {
        self.form = Some(JobFormController::edit(self.list.client().clone(), job));
        self.list.show_edit(job.clone());
    }

    /// Leave add/edit mode, discarding the form.
    pub fn back_to_list(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.cancel();
        }
        self.form = None;
        self.list.show_list();
    }

    /// Drop a deleted job from the list along with any delete panel for it.
    pub fn forget_job(&mut self, id: i64) {
        self.inline_deletes.remove(&id);
        self.list.on_job_deleted(id);
    }

    /// Close every inline delete panel. Reopening one starts fresh.
    pub fn close_delete_panels(&mut self) {
        self.inline_deletes.clear();
    }

    /// One-shot message shown above the list on the next render.
    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Blocking alerts to raise in the browser on the next render.
    pub fn push_alerts(&mut self, alerts: impl IntoIterator<Item = String>) {
        self.alerts.extend(alerts);
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }
}
