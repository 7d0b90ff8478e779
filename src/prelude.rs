//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     try_catch(|| raw.parse::<u16>())
//! }
//!
//! assert_eq!(parse_port("8080").value(), Ok(&8080));
//! assert!(parse_port("http").is_error());
//! ```

// Macros
pub use crate::{catch, fail};

// Core types
pub use crate::types::{
    AggregateException, Exception, Outcome, ResultError, ResultsList, UnitOutcome,
    UnitValueOutcome, ValueOutcome,
};

// Factories
pub use crate::factory::{
    fail_ref, ok, ok_ref, ok_unit, try_catch, try_catch_action, try_catch_ref, try_catch_value,
    try_catch_with,
};

// Traits
pub use crate::traits::{Fallible, ValueBearing};

#[cfg(feature = "tracing")]
pub use crate::traits::TraceOutcomeExt;

#[cfg(feature = "async")]
pub use crate::async_ext::{try_catch_async, try_catch_ref_async};
