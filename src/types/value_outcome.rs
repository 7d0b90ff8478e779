use core::future::{ready, Ready};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{Exception, Outcome, ResultError};

/// Inline outcome: either a success value or an error, stored by value.
///
/// `ValueOutcome` is the allocation-free member of the family. It is a plain
/// enum (`Copy` whenever `T` and `E` are), its combinators consume `self`, and
/// closures receive the payload by value. [`Outcome`] carries the same two
/// states behind a shared pointer; conversions in both directions are lossless.
///
/// The error type defaults to [`Exception`].
///
/// # Examples
///
/// ```
/// use outcome_rail::ValueOutcome;
///
/// let parsed: ValueOutcome<i32, String> = ValueOutcome::ok(21);
/// let doubled = parsed.map(|x| x * 2);
/// assert_eq!(doubled.value(), Ok(&42));
///
/// let missing: ValueOutcome<i32, String> = ValueOutcome::fail("missing".to_string());
/// assert_eq!(missing.or_default(7), 7);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ValueOutcome<T, E = Exception> {
    Ok(T),
    Error(E),
}

/// Inline outcome without a success payload.
pub type UnitValueOutcome<E = Exception> = ValueOutcome<(), E>;

impl<T, E> ValueOutcome<T, E> {
    #[inline]
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    #[inline]
    pub fn fail(error: E) -> Self {
        Self::Error(error)
    }

    /// Builds a success, rejecting an absent value.
    #[inline]
    pub fn try_ok(value: Option<T>) -> Result<Self, ResultError> {
        value
            .map(Self::Ok)
            .ok_or(ResultError::AbsentArgument { name: "value" })
    }

    /// Builds a failure, rejecting an absent error.
    #[inline]
    pub fn try_fail(error: Option<E>) -> Result<Self, ResultError> {
        error
            .map(Self::Error)
            .ok_or(ResultError::AbsentArgument { name: "error" })
    }

    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        !self.is_ok()
    }

    /// Borrows the success value, or reports [`ResultError::NoValue`].
    #[inline]
    pub fn value(&self) -> Result<&T, ResultError> {
        self.try_get_value().ok_or(ResultError::NoValue)
    }

    /// Borrows the error, or reports [`ResultError::NoError`].
    #[inline]
    pub fn error(&self) -> Result<&E, ResultError> {
        self.try_get_error().ok_or(ResultError::NoError)
    }

    #[inline]
    pub fn try_get_value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    #[inline]
    pub fn try_get_error(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> ValueOutcome<&T, &E> {
        match self {
            Self::Ok(value) => ValueOutcome::Ok(value),
            Self::Error(error) => ValueOutcome::Error(error),
        }
    }

    /// Returns the value, panicking with `message` if the outcome failed.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is an error.
    #[track_caller]
    pub fn expect(self, message: &str) -> T
    where
        E: core::fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(error) => panic!("{message}: {error:?}"),
        }
    }

    /// Returns the error, panicking with `message` if the outcome succeeded.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    #[track_caller]
    pub fn expect_error(self, message: &str) -> E
    where
        T: core::fmt::Debug,
    {
        match self {
            Self::Ok(value) => panic!("{message}: {value:?}"),
            Self::Error(error) => error,
        }
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> ValueOutcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => ValueOutcome::Ok(f(value)),
            Self::Error(error) => ValueOutcome::Error(error),
        }
    }

    #[inline]
    pub fn map_error<G, F>(self, f: F) -> ValueOutcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => ValueOutcome::Ok(value),
            Self::Error(error) => ValueOutcome::Error(f(error)),
        }
    }

    /// Maps both channels at once.
    #[inline]
    pub fn map_both<U, G, F, H>(self, map: F, map_error: H) -> ValueOutcome<U, G>
    where
        F: FnOnce(T) -> U,
        H: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(value) => ValueOutcome::Ok(map(value)),
            Self::Error(error) => ValueOutcome::Error(map_error(error)),
        }
    }

    #[inline]
    pub fn and_then<U, F>(self, f: F) -> ValueOutcome<U, E>
    where
        F: FnOnce(T) -> ValueOutcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Error(error) => ValueOutcome::Error(error),
        }
    }

    /// Keeps a success, otherwise replaces the failure with a success of `value`.
    #[inline]
    pub fn or(self, value: T) -> Self {
        match self {
            Self::Ok(_) => self,
            Self::Error(_) => Self::Ok(value),
        }
    }

    #[inline]
    pub fn or_with<F>(self, factory: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Ok(_) => self,
            Self::Error(_) => Self::Ok(factory()),
        }
    }

    /// Unwraps the value or falls back to `value`.
    #[inline]
    pub fn or_default(self, value: T) -> T {
        match self {
            Self::Ok(inner) => inner,
            Self::Error(_) => value,
        }
    }

    #[inline]
    pub fn or_default_with<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => factory(),
        }
    }

    /// Keeps a failure, otherwise replaces the success with a failure of `error`.
    #[inline]
    pub fn or_error(self, error: E) -> Self {
        match self {
            Self::Error(_) => self,
            Self::Ok(_) => Self::Error(error),
        }
    }

    #[inline]
    pub fn or_error_with<F>(self, factory: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Error(_) => self,
            Self::Ok(_) => Self::Error(factory()),
        }
    }

    /// Unwraps the error or falls back to `error`.
    #[inline]
    pub fn or_error_default(self, error: E) -> E {
        match self {
            Self::Error(inner) => inner,
            Self::Ok(_) => error,
        }
    }

    #[inline]
    pub fn or_error_default_with<F>(self, factory: F) -> E
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Error(error) => error,
            Self::Ok(_) => factory(),
        }
    }

    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    #[inline]
    pub fn inspect_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Error(error) = &self {
            f(error);
        }
        self
    }

    #[must_use]
    #[inline]
    pub fn is_ok_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Error(_) => false,
        }
    }

    #[must_use]
    #[inline]
    pub fn is_error_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Error(error) => predicate(error),
        }
    }

    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Error(error) => Err(error),
        }
    }

    /// Unwraps the value, reporting [`ResultError::NoValue`] on failure.
    #[inline]
    pub fn into_value(self) -> Result<T, ResultError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Error(_) => Err(ResultError::NoValue),
        }
    }

    #[inline]
    pub fn into_error(self) -> Result<E, ResultError> {
        match self {
            Self::Ok(_) => Err(ResultError::NoError),
            Self::Error(error) => Ok(error),
        }
    }

    /// Moves the outcome behind a shared pointer.
    #[inline]
    pub fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from(self)
    }

    /// Wraps the outcome in an already-completed future.
    #[inline]
    pub fn into_ready(self) -> Ready<Self> {
        ready(self)
    }
}

impl<T> ValueOutcome<T, Exception> {
    /// Wraps any error type as a failure.
    #[inline]
    pub fn fail_with<X>(error: X) -> Self
    where
        X: Into<Exception>,
    {
        Self::Error(error.into())
    }
}

impl<T> Default for ValueOutcome<T, Exception> {
    /// A default outcome has no value and is therefore a failure.
    fn default() -> Self {
        Self::Error(Exception::new(ResultError::NoValue))
    }
}

impl<T> From<Option<T>> for ValueOutcome<T, Exception> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Ok(value),
            None => Self::default(),
        }
    }
}

impl<T, E> From<Result<T, E>> for ValueOutcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<T, E> From<ValueOutcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: ValueOutcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Collects successes until the first failure, which becomes the outcome.
impl<T, E, V> FromIterator<ValueOutcome<T, E>> for ValueOutcome<V, E>
where
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = ValueOutcome<T, E>>>(iter: I) -> Self {
        let mut failure = None;
        let values: V = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                ValueOutcome::Ok(value) => Some(value),
                ValueOutcome::Error(error) => {
                    failure = Some(error);
                    None
                },
            })
            .collect();

        match failure {
            Some(error) => Self::Error(error),
            None => Self::Ok(values),
        }
    }
}
