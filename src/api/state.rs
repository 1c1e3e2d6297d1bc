//! Application state for the Duty-Time Reconciliation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::DutyPolicy;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// currently the validated duty policy.
#[derive(Clone)]
pub struct AppState {
    /// The duty policy applied to every report.
    policy: Arc<DutyPolicy>,
}

impl AppState {
    /// Creates a new application state with the given duty policy.
    pub fn new(policy: DutyPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Returns a reference to the duty policy.
    pub fn policy(&self) -> &DutyPolicy {
        &self.policy
    }
}
