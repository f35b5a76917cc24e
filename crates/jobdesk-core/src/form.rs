//! Create/edit job form.

use std::collections::BTreeMap;
use std::str::FromStr;

use tracing::{info, warn};

use jobdesk_api::{Job, JobPayload, JobType, JobsClient};

use crate::in_flight::InFlight;

/// One input of the job form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Title,
    Company,
    Location,
    JobType,
    Tags,
    PostingDate,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Title,
        FormField::Company,
        FormField::Location,
        FormField::JobType,
        FormField::Tags,
        FormField::PostingDate,
    ];

    /// Form input name, matching the JSON field name.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Company => "company",
            FormField::Location => "location",
            FormField::JobType => "job_type",
            FormField::Tags => "tags",
            FormField::PostingDate => "posting_date",
        }
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| format!("unknown form field: {s}"))
    }
}

/// Editable copy of a job, every field kept as the string the user typed.
///
/// `tags` is a single comma-delimited string while editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobForm {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub tags: String,
    pub posting_date: String,
}

impl Default for JobForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            location: String::new(),
            job_type: JobType::default().as_str().to_string(),
            tags: String::new(),
            posting_date: String::new(),
        }
    }
}

impl JobForm {
    /// Populate from an existing job for editing.
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            job_type: job.job_type.as_str().to_string(),
            tags: job.tags.join(", "),
            posting_date: job
                .posting_day()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Company => &self.company,
            FormField::Location => &self.location,
            FormField::JobType => &self.job_type,
            FormField::Tags => &self.tags,
            FormField::PostingDate => &self.posting_date,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Company => &mut self.company,
            FormField::Location => &mut self.location,
            FormField::JobType => &mut self.job_type,
            FormField::Tags => &mut self.tags,
            FormField::PostingDate => &mut self.posting_date,
        }
    }

    /// Split the tags input on commas, trimming and dropping empty segments.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Check the required fields. Empty result means the form is valid.
    pub fn validate(&self) -> BTreeMap<FormField, String> {
        let mut errors = BTreeMap::new();

        if self.title.trim().is_empty() {
            errors.insert(FormField::Title, "Job title is required".to_string());
        }
        if self.company.trim().is_empty() {
            errors.insert(FormField::Company, "Company name is required".to_string());
        }
        if self.location.trim().is_empty() {
            errors.insert(FormField::Location, "Location is required".to_string());
        }
        if self.job_type.parse::<JobType>().is_err() {
            errors.insert(FormField::JobType, "Please select a valid job type".to_string());
        }

        errors
    }

    /// Build the request body, or `None` if the form does not validate.
    pub fn to_payload(&self) -> Option<JobPayload> {
        let job_type = self.job_type.parse().ok()?;
        if !self.validate().is_empty() {
            return None;
        }

        let posting_date = self.posting_date.trim();
        Some(JobPayload {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            job_type,
            tags: self.tag_list(),
            posting_date: (!posting_date.is_empty()).then(|| posting_date.to_string()),
        })
    }
}

/// Per-field validation messages plus one general (request) error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<FormField, String>,
    general: Option<String>,
}

impl FormErrors {
    pub fn field(&self, field: FormField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn general(&self) -> Option<&str> {
        self.general.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.general.is_none()
    }

    /// Fields that currently carry an error, in form order.
    pub fn fields(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.fields.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Whether the form creates a new job or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: i64 },
}

/// Result of [`JobFormController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Saved; the record is forwarded to the caller.
    Saved(Job),
    /// Validation failed; no request was sent.
    Invalid,
    /// The request failed; the message is also the form's general error.
    Failed(String),
    /// A submit is already in flight.
    Busy,
}

/// Form state for creating or editing one job.
#[derive(Debug)]
pub struct JobFormController {
    client: JobsClient,
    mode: FormMode,
    form: JobForm,
    errors: FormErrors,
    loading: bool,
    success_message: Option<String>,
}

impl JobFormController {
    /// Empty form for a new job.
    pub fn create(client: JobsClient) -> Self {
        Self {
            client,
            mode: FormMode::Create,
            form: JobForm::default(),
            errors: FormErrors::default(),
            loading: false,
            success_message: None,
        }
    }

    /// Form populated from `job` for editing.
    pub fn edit(client: JobsClient, job: &Job) -> Self {
        Self {
            mode: FormMode::Edit { id: job.id },
            form: JobForm::from_job(job),
            ..Self::create(client)
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn form(&self) -> &JobForm {
        &self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    /// Update one input. A changed value clears that field's error only.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        let slot = self.form.get_mut(field);
        if *slot != value {
            *slot = value;
            self.errors.fields.remove(&field);
        }
    }

    /// Run validation, replacing the field errors. Returns true if valid.
    pub fn validate(&mut self) -> bool {
        self.errors.fields = self.form.validate();
        self.errors.fields.is_empty()
    }

    /// Validate and send the form.
    ///
    /// Create mode resets the form after a successful save; edit mode keeps
    /// it populated with the saved values.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.loading {
            return SubmitOutcome::Busy;
        }
        if !self.validate() {
            return SubmitOutcome::Invalid;
        }
        let Some(payload) = self.form.to_payload() else {
            return SubmitOutcome::Invalid;
        };

        self.errors = FormErrors::default();
        self.success_message = None;

        let result = {
            let _in_flight = InFlight::start(&mut self.loading);
            match self.mode {
                FormMode::Create => self.client.create_job(&payload).await,
                FormMode::Edit { id } => self.client.update_job(id, &payload).await,
            }
        };

        match result {
            Ok(job) => {
                match self.mode {
                    FormMode::Create => {
                        info!(id = job.id, "job saved");
                        self.success_message = Some("Job created successfully!".to_string());
                        self.form = JobForm::default();
                    }
                    FormMode::Edit { .. } => {
                        info!(id = job.id, "job saved");
                        self.success_message = Some("Job updated successfully!".to_string());
                        self.form = JobForm::from_job(&job);
                    }
                }
                SubmitOutcome::Saved(job)
            }
            Err(e) => {
                warn!(error = %e, "failed to save job");
                let message = e.message().to_string();
                self.errors.general = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Abandon the form: clear inputs, errors and messages.
    pub fn cancel(&mut self) {
        self.form = JobForm::default();
        self.errors = FormErrors::default();
        self.success_message = None;
    }
}
