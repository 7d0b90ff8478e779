//! Constructors and exception-catching adapters.
//!
//! The plain names (`ok`, `fail`, `try_catch`, ...) build shared [`Outcome`]s;
//! the `*_ref` names build inline [`ValueOutcome`]s.
//!
//! A wrapped callback "throws" by returning `Err` or by panicking. Either way
//! the adapter returns a failed outcome instead of propagating.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::factory::{try_catch, try_catch_value};
//!
//! let parsed = try_catch(|| "42".parse::<i32>());
//! assert_eq!(parsed.value(), Ok(&42));
//!
//! let bad = try_catch(|| "forty-two".parse::<i32>());
//! assert!(bad.is_error());
//!
//! let answer = try_catch_value(|| 42);
//! assert_eq!(answer.value(), Ok(&42));
//! ```

use std::panic::{self, AssertUnwindSafe};

use crate::types::{Exception, Outcome, UnitOutcome, UnitValueOutcome, ValueOutcome};

#[inline]
pub fn ok<T>(value: T) -> Outcome<T> {
    Outcome::ok(value)
}

#[inline]
pub fn ok_unit() -> UnitOutcome {
    Outcome::ok(())
}

/// Builds a failed outcome from an [`Exception`] or any error type.
#[inline]
pub fn fail<T, X>(error: X) -> Outcome<T>
where
    X: Into<Exception>,
{
    Outcome::fail(error.into())
}

/// Runs `f`; an `Err` or a panic becomes a failed outcome.
///
/// ```
/// use outcome_rail::factory::try_catch;
/// use outcome_rail::PanicError;
///
/// let outcome = try_catch(|| -> Result<i32, std::io::Error> { panic!("boom") });
/// let error = outcome.error().unwrap();
/// assert_eq!(error.downcast_ref::<PanicError>().unwrap().message(), "boom");
/// ```
pub fn try_catch<T, X, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, X>,
    X: Into<Exception>,
{
    catch_exception(f).into()
}

/// Runs an infallible callback; only a panic becomes a failure.
pub fn try_catch_value<T, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    catch_exception(|| Ok::<T, Exception>(f())).into()
}

/// Runs a callback that returns nothing; only a panic becomes a failure.
///
/// ```
/// use outcome_rail::factory::try_catch_action;
///
/// let mut log = Vec::new();
/// assert!(try_catch_action(|| log.push("ran")).is_ok());
/// assert!(try_catch_action(|| panic!("refused")).is_error());
/// ```
pub fn try_catch_action<F>(f: F) -> UnitOutcome
where
    F: FnOnce(),
{
    try_catch_value(f)
}

/// Like [`try_catch`], mapping a caught exception into a typed error.
///
/// ```
/// use outcome_rail::factory::try_catch_with;
///
/// let outcome = try_catch_with(|| "x".parse::<u8>(), |exception| exception.to_string());
/// assert!(outcome.is_error_and(|message| message.contains("invalid digit")));
/// ```
pub fn try_catch_with<T, E, X, F, G>(f: F, error_factory: G) -> Outcome<T, E>
where
    F: FnOnce() -> Result<T, X>,
    X: Into<Exception>,
    G: FnOnce(Exception) -> E,
{
    catch_exception(f).map_err(error_factory).into()
}

#[inline]
pub fn ok_ref<T>(value: T) -> ValueOutcome<T> {
    ValueOutcome::Ok(value)
}

#[inline]
pub fn ok_unit_ref() -> UnitValueOutcome {
    ValueOutcome::Ok(())
}

#[inline]
pub fn fail_ref<T, X>(error: X) -> ValueOutcome<T>
where
    X: Into<Exception>,
{
    ValueOutcome::Error(error.into())
}

/// Inline counterpart of [`try_catch`].
pub fn try_catch_ref<T, X, F>(f: F) -> ValueOutcome<T>
where
    F: FnOnce() -> Result<T, X>,
    X: Into<Exception>,
{
    catch_exception(f).into()
}

/// Inline counterpart of [`try_catch_value`].
pub fn try_catch_value_ref<T, F>(f: F) -> ValueOutcome<T>
where
    F: FnOnce() -> T,
{
    catch_exception(|| Ok::<T, Exception>(f())).into()
}

/// Inline counterpart of [`try_catch_with`].
pub fn try_catch_ref_with<T, E, X, F, G>(f: F, error_factory: G) -> ValueOutcome<T, E>
where
    F: FnOnce() -> Result<T, X>,
    X: Into<Exception>,
    G: FnOnce(Exception) -> E,
{
    catch_exception(f).map_err(error_factory).into()
}

/// Invokes `f` inside a panic boundary. Nothing but the call itself sits in
/// the boundary.
pub(crate) fn catch_exception<T, X, F>(f: F) -> Result<T, Exception>
where
    F: FnOnce() -> Result<T, X>,
    X: Into<Exception>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result.map_err(Into::into),
        Err(payload) => {
            let exception = Exception::from_panic(payload);
            trace_debug!(error = %exception, "captured panic from wrapped callback");
            Err(exception)
        },
    }
}
