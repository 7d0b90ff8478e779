//! Capability traits shared by every outcome shape.
//!
//! - [`Fallible`]: success/failure state and the error
//! - [`ValueBearing`]: the success value and cross-shape equality
//! - [`TraceOutcomeExt`]: logging of failures (requires the `tracing` feature)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{Fallible, ValueBearing};
//! use outcome_rail::{Outcome, ResultError};
//!
//! fn describe<R>(outcome: &R) -> String
//! where
//!     R: ValueBearing<Value = i32>,
//!     R::Error: std::fmt::Display,
//! {
//!     match (outcome.value(), outcome.error()) {
//!         (Ok(value), _) => format!("value {value}"),
//!         (_, Ok(error)) => format!("error {error}"),
//!         (Err(_), Err(_)) => unreachable!(),
//!     }
//! }
//!
//! assert_eq!(describe(&Outcome::<i32, &str>::ok(3)), "value 3");
//! assert_eq!(describe(&Err::<i32, &str>("boom")), "error boom");
//! assert_eq!(Outcome::<i32, &str>::ok(3).error(), Err(ResultError::NoError));
//! ```

pub mod fallible;
#[cfg(feature = "tracing")]
pub mod trace_outcome;
pub mod value_bearing;

pub use fallible::Fallible;
#[cfg(feature = "tracing")]
pub use trace_outcome::TraceOutcomeExt;
pub use value_bearing::ValueBearing;
