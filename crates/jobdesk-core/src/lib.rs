//! Headless controllers behind the jobdesk UI.
//!
//! Each controller owns the state of one part of the screen and is driven
//! by user intents; rendering is left to the host:
//!
//! - [`FilterController`]: search/sort/type/location/tag values, published
//!   to subscribers through a `watch` channel
//! - [`ListOrchestrator`]: the job collection, loading/error flags, API
//!   status and the list/add/edit view mode
//! - [`JobFormController`]: create/edit form state, validation and submit
//! - [`InlineDelete`] and [`PromptDelete`]: the two delete confirmation
//!   strategies behind [`DeleteStrategy`]
//!
//! All network access goes through a [`jobdesk_api::JobsClient`] passed in
//! by the caller.

mod delete;
mod filter;
mod form;
mod in_flight;
mod list;

#[cfg(test)]
pub(crate) mod testing;

pub use delete::{
    Confirmation, DeleteOutcome, DeleteStrategy, InlineDelete, PreAnswered, PromptDelete,
    delete_prompt, failure_alert,
};
pub use filter::{DropdownOptions, FilterController};
pub use form::{FormErrors, FormField, FormMode, JobForm, JobFormController, SubmitOutcome};
pub use list::{ApiStatus, CompletedFetch, ListOrchestrator, PendingFetch, ViewMode};

pub use jobdesk_api::{FilterField, FilterState, Job, JobType, JobsClient, SortOrder};
