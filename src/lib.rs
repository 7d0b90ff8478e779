//! Outcome types for Rust: a success value or an error, with exception capture,
//! combinators, and aggregation.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building and transforming outcomes
//!
//! ```
//! use outcome_rail::{Exception, Outcome};
//!
//! let doubled = Outcome::<i32>::ok(5).map(|x| x * 2);
//! assert_eq!(doubled.value(), Ok(&10));
//!
//! let failed: Outcome<i32> = Outcome::fail(Exception::msg("x"));
//! assert_eq!(failed.or_default(99), 99);
//! ```
//!
//! ## Capturing failures
//!
//! ```
//! use outcome_rail::factory::try_catch;
//!
//! let outcome = try_catch(|| std::fs::read_to_string("/definitely/not/here"));
//! assert!(outcome.is_error_and(|e| e.is::<std::io::Error>()));
//! ```
//!
//! ## Aggregating
//!
//! ```
//! use outcome_rail::{Outcome, ResultsList};
//!
//! let list = ResultsList::from(vec![Outcome::ok(1), Outcome::ok(2)]);
//! assert_eq!(list.to_values(true).ok(), Some(vec![1, 2]));
//! ```

#[macro_use]
mod macros;

/// Type conversions between outcome shapes and `Result`
pub mod convert;
/// Read-only environment lookups returning inline outcomes
pub mod env;
/// Constructors and exception-catching adapters
pub mod factory;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capability traits shared by every outcome shape
pub mod traits;
/// Outcome types, `Exception`, and aggregation
pub mod types;

/// Async adapters (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use traits::{Fallible, ValueBearing};
pub use types::{
    AggregateException, ErrorVec, Exception, Outcome, PanicError, ResultError, ResultsList,
    UnitOutcome, UnitValueOutcome, ValueOutcome,
};
