//! REST client for the jobdesk job-listing backend.
//!
//! This crate is the only place that talks HTTP. It provides:
//!
//! - **Client**: [`JobsClient`], one method per backend endpoint, constructed
//!   explicitly with a base URL and passed to whoever needs it
//! - **Model**: [`Job`], [`JobType`], [`JobPayload`]
//! - **Filters**: [`FilterState`] and its query-string serialization
//! - **Errors**: [`ApiError`], which always carries a human-readable message

mod client;
mod error;
mod filters;
mod types;

pub use client::{DEFAULT_BASE_URL, JobsClient};
pub use error::{ApiError, Operation};
pub use filters::{FilterField, FilterState, SortOrder};
pub use types::{Job, JobPayload, JobType, parse_posting_date};
