//! Delete confirmation strategies.
//!
//! Two interchangeable ways to guard `DELETE /jobs/{id}`:
//!
//! - [`InlineDelete`]: activation opens a confirmation panel; a second,
//!   explicit [`InlineDelete::confirm`] performs the delete.
//! - [`PromptDelete`]: activation asks a [`Confirmation`] source for a yes/no
//!   answer and deletes immediately on yes.
//!
//! Both report success as [`DeleteOutcome::Deleted`] carrying the job id, and
//! both refuse to start a second delete while one is in flight.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::{info, warn};

use jobdesk_api::{ApiError, Job, JobsClient};

use crate::in_flight::InFlight;

/// What happened when a delete control was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The backend deleted the job with this id.
    Deleted(i64),
    /// The inline panel is open, waiting for confirm or cancel.
    AwaitingConfirmation,
    /// The user declined; nothing was sent.
    Cancelled,
    /// The delete request failed with this message.
    Failed(String),
    /// A delete for this control is already in flight.
    Busy,
}

/// A delete control bound to one job.
#[async_trait]
pub trait DeleteStrategy: Send {
    /// The job this control deletes.
    fn job(&self) -> &Job;

    /// True while the delete request is in flight.
    fn is_loading(&self) -> bool;

    /// First activation of the control (the "Delete" button).
    async fn activate(&mut self, client: &JobsClient) -> DeleteOutcome;
}

/// Source of the yes/no answer for [`PromptDelete`].
pub trait Confirmation: Send + Sync {
    /// Ask whether `job` should be deleted.
    fn confirm(&self, job: &Job) -> bool;

    /// Report a failed delete to the user.
    fn alert(&self, message: &str);
}

/// Question asked before a one-step delete.
pub fn delete_prompt(job: &Job) -> String {
    format!(
        "Are you sure you want to delete \"{}\" at {}?",
        job.title, job.company
    )
}

/// Alert shown when a one-step delete fails.
pub fn failure_alert(message: &str) -> String {
    format!("Failed to delete job: {message}")
}

async fn perform_delete(client: &JobsClient, job: &Job) -> Result<i64, ApiError> {
    client.delete_job(job.id).await?;
    info!(id = job.id, title = %job.title, "job deleted");
    Ok(job.id)
}

/// Two-step delete with an inline confirmation panel.
#[derive(Debug, Clone)]
pub struct InlineDelete {
    job: Job,
    open: bool,
    loading: bool,
    error: Option<String>,
}

impl InlineDelete {
    pub fn new(job: Job) -> Self {
        Self {
            job,
            open: false,
            loading: false,
            error: None,
        }
    }

    /// Whether the confirmation panel is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Error from the last failed confirm, shown inside the panel.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Reveal the panel. Never touches the network.
    pub fn open(&mut self) -> DeleteOutcome {
        if self.loading {
            return DeleteOutcome::Busy;
        }
        self.open = true;
        self.error = None;
        DeleteOutcome::AwaitingConfirmation
    }

    /// Confirm from the open panel: send the delete.
    ///
    /// On failure the panel stays open with the error shown.
    pub async fn confirm(&mut self, client: &JobsClient) -> DeleteOutcome {
        if self.loading {
            return DeleteOutcome::Busy;
        }
        if !self.open {
            return DeleteOutcome::Cancelled;
        }

        self.error = None;
        let result = {
            let _in_flight = InFlight::start(&mut self.loading);
            perform_delete(client, &self.job).await
        };

        match result {
            Ok(id) => {
                self.open = false;
                DeleteOutcome::Deleted(id)
            }
            Err(e) => {
                warn!(id = self.job.id, error = %e, "failed to delete job");
                let message = e.message().to_string();
                self.error = Some(message.clone());
                DeleteOutcome::Failed(message)
            }
        }
    }

    /// Dismiss the panel without calling the backend. Ignored while the
    /// delete is in flight.
    pub fn cancel(&mut self) -> DeleteOutcome {
        if self.loading {
            return DeleteOutcome::Busy;
        }
        self.open = false;
        self.error = None;
        DeleteOutcome::Cancelled
    }
}

#[async_trait]
impl DeleteStrategy for InlineDelete {
    fn job(&self) -> &Job {
        &self.job
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    async fn activate(&mut self, _client: &JobsClient) -> DeleteOutcome {
        self.open()
    }
}

/// One-step delete guarded by a blocking yes/no prompt.
#[derive(Debug)]
pub struct PromptDelete<C> {
    job: Job,
    confirmation: C,
    loading: bool,
}

impl<C: Confirmation> PromptDelete<C> {
    pub fn new(job: Job, confirmation: C) -> Self {
        Self {
            job,
            confirmation,
            loading: false,
        }
    }

    pub fn confirmation(&self) -> &C {
        &self.confirmation
    }
}

#[async_trait]
impl<C: Confirmation> DeleteStrategy for PromptDelete<C> {
    fn job(&self) -> &Job {
        &self.job
    }

    fn is_loading(&self) -> bool {
        self.loading
    }

    async fn activate(&mut self, client: &JobsClient) -> DeleteOutcome {
        if self.loading {
            return DeleteOutcome::Busy;
        }
        if !self.confirmation.confirm(&self.job) {
            return DeleteOutcome::Cancelled;
        }

        let result = {
            let _in_flight = InFlight::start(&mut self.loading);
            perform_delete(client, &self.job).await
        };

        match result {
            Ok(id) => DeleteOutcome::Deleted(id),
            Err(e) => {
                warn!(id = self.job.id, error = %e, "failed to delete job");
                let message = e.message().to_string();
                self.confirmation.alert(&failure_alert(&message));
                DeleteOutcome::Failed(message)
            }
        }
    }
}

/// A [`Confirmation`] whose answer is already known, such as a browser
/// `confirm()` result carried in a form post. Alerts are queued for the
/// caller to display.
#[derive(Debug, Default)]
pub struct PreAnswered {
    accepted: bool,
    alerts: Mutex<Vec<String>>,
}

impl PreAnswered {
    pub fn new(accepted: bool) -> Self {
        Self {
            accepted,
            alerts: Mutex::new(Vec::new()),
        }
    }

    /// Drain the alerts raised so far.
    pub fn take_alerts(&self) -> Vec<String> {
        match self.alerts.lock() {
            Ok(mut alerts) => std::mem::take(&mut *alerts),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Confirmation for PreAnswered {
    fn confirm(&self, _job: &Job) -> bool {
        self.accepted
    }

    fn alert(&self, message: &str) {
        match self.alerts.lock() {
            Ok(mut alerts) => alerts.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}
