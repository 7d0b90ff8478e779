//! Tracing integration for outcomes.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["tracing"] }
//! ```

use core::fmt::Display;

use crate::types::{Outcome, ValueOutcome};

/// Emits a `tracing` event for failed outcomes and passes the outcome through.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::traits::TraceOutcomeExt;
///
/// let config = load_config().trace_error("loading configuration");
/// ```
pub trait TraceOutcomeExt: Sized {
    /// Logs the error at `WARN` level, labelled with `label`.
    fn trace_error(self, label: &str) -> Self;

    /// Logs the value at `DEBUG` level, labelled with `label`.
    fn trace_value(self, label: &str) -> Self;
}

impl<T: core::fmt::Debug, E: Display> TraceOutcomeExt for Outcome<T, E> {
    fn trace_error(self, label: &str) -> Self {
        if let Some(error) = self.try_get_error() {
            tracing::warn!(label, error = %error, "outcome failed");
        }
        self
    }

    fn trace_value(self, label: &str) -> Self {
        if let Some(value) = self.try_get_value() {
            tracing::debug!(label, value = ?value, "outcome succeeded");
        }
        self
    }
}

impl<T: core::fmt::Debug, E: Display> TraceOutcomeExt for ValueOutcome<T, E> {
    fn trace_error(self, label: &str) -> Self {
        if let ValueOutcome::Error(error) = &self {
            tracing::warn!(label, error = %error, "outcome failed");
        }
        self
    }

    fn trace_value(self, label: &str) -> Self {
        if let ValueOutcome::Ok(value) = &self {
            tracing::debug!(label, value = ?value, "outcome succeeded");
        }
        self
    }
}
