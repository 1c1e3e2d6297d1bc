//! HTTP API module for the Duty-Time Reconciliation Engine.
//!
//! This module provides the REST endpoint for generating duty reports from
//! pre-fetched attendance, leave, holiday and break collections.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReportRequest;
pub use response::ApiError;
pub use state::AppState;
