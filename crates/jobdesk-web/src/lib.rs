//! Browser UI for managing job listings.
//!
//! Serves a single desk page that lists, filters, creates, edits and
//! deletes jobs held by the REST backend. Page state lives in one in-memory
//! [`Session`] driven by the `jobdesk-core` controllers; every form posts
//! back and redirects to the desk.

mod error;
mod render;
mod routes;
mod session;

pub use error::WebError;
pub use routes::{AppState, create_router};
pub use session::Session;
