//! Outcome types and the errors they carry.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Exception, Outcome, ValueOutcome};
//!
//! let shared: Outcome<i32> = Outcome::ok(7);
//! let inline: ValueOutcome<i32> = shared.clone().into_value_outcome();
//! let back: Outcome<i32> = inline.into_outcome();
//!
//! assert_eq!(back, shared);
//! assert_eq!(back.value(), Ok(&7));
//! ```
use smallvec::SmallVec;

pub mod aggregate;
pub mod exception;
pub mod outcome;
pub mod result_error;
pub mod results_list;
pub mod value_outcome;

pub use aggregate::*;
pub use exception::*;
pub use outcome::*;
pub use result_error::*;
pub use results_list::*;
pub use value_outcome::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for one element, the common case for a combined failure.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
