//! Shared, immutable outcome with reference semantics.
//!
//! [`Outcome`] is the default member of the family: cloning it copies a pointer,
//! every combinator borrows `self`, and combinators that leave the outcome
//! untouched hand back the very same allocation.

use core::fmt::{self, Debug};
use core::future::{ready, Ready};
use core::hash::{Hash, Hasher};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{Exception, ResultError, ValueOutcome};

/// The outcome of an operation: a success value or an error, never both.
///
/// The error type defaults to [`Exception`], so `Outcome<T>` is the
/// exception-backed form and `Outcome<T, E>` the typed-error form of the same
/// type. The state lives behind an [`Arc`]; an `Outcome` is never mutated after
/// construction and is `Send + Sync` whenever its payloads are.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Exception, Outcome};
///
/// let answer: Outcome<i32> = Outcome::ok(5);
/// assert_eq!(answer.map(|x| x * 2).value(), Ok(&10));
///
/// let failed: Outcome<i32> = Outcome::fail(Exception::msg("x"));
/// assert_eq!(failed.or_default(99), 99);
/// ```
///
/// Combinators that return the outcome unchanged share its allocation:
///
/// ```
/// use outcome_rail::Outcome;
///
/// let ok: Outcome<i32, String> = Outcome::ok(1);
/// assert!(ok.or(2).ptr_eq(&ok));
/// assert!(ok.inspect(|value| assert_eq!(*value, 1)).ptr_eq(&ok));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Outcome<T, E = Exception> {
    state: Arc<ValueOutcome<T, E>>,
}

/// Outcome without a success payload.
pub type UnitOutcome<E = Exception> = Outcome<(), E>;

impl<T, E> Outcome<T, E> {
    #[inline]
    pub fn ok(value: T) -> Self {
        Self { state: Arc::new(ValueOutcome::Ok(value)) }
    }

    #[inline]
    pub fn fail(error: E) -> Self {
        Self { state: Arc::new(ValueOutcome::Error(error)) }
    }

    /// Builds a success, rejecting an absent value at construction time.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, ResultError};
    ///
    /// let absent = Outcome::<i32, String>::try_ok(None);
    /// assert_eq!(absent.err(), Some(ResultError::AbsentArgument { name: "value" }));
    /// ```
    #[inline]
    pub fn try_ok(value: Option<T>) -> Result<Self, ResultError> {
        value
            .map(Self::ok)
            .ok_or(ResultError::AbsentArgument { name: "value" })
    }

    /// Builds a failure, rejecting an absent error at construction time.
    #[inline]
    pub fn try_fail(error: Option<E>) -> Result<Self, ResultError> {
        error
            .map(Self::fail)
            .ok_or(ResultError::AbsentArgument { name: "error" })
    }

    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.state.is_ok()
    }

    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        self.state.is_error()
    }

    /// Borrows the success value, or reports [`ResultError::NoValue`].
    #[inline]
    pub fn value(&self) -> Result<&T, ResultError> {
        self.state.value()
    }

    /// Borrows the error, or reports [`ResultError::NoError`].
    #[inline]
    pub fn error(&self) -> Result<&E, ResultError> {
        self.state.error()
    }

    #[inline]
    pub fn try_get_value(&self) -> Option<&T> {
        self.state.try_get_value()
    }

    #[inline]
    pub fn try_get_error(&self) -> Option<&E> {
        self.state.try_get_error()
    }

    /// Borrows the underlying state, e.g. for pattern matching.
    ///
    /// ```
    /// use outcome_rail::{Outcome, ValueOutcome};
    ///
    /// let outcome: Outcome<u8, &str> = Outcome::fail("nope");
    /// match outcome.as_value_outcome() {
    ///     ValueOutcome::Ok(_) => unreachable!(),
    ///     ValueOutcome::Error(error) => assert_eq!(*error, "nope"),
    /// }
    /// ```
    #[inline]
    pub fn as_value_outcome(&self) -> &ValueOutcome<T, E> {
        &self.state
    }

    #[inline]
    pub fn as_result(&self) -> Result<&T, &E> {
        self.as_value_outcome().as_ref().into_result()
    }

    /// Returns `true` if both handles share one allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    /// Borrows the value, panicking with `message` if the outcome failed.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is an error.
    #[track_caller]
    pub fn expect(&self, message: &str) -> &T
    where
        E: Debug,
    {
        match &*self.state {
            ValueOutcome::Ok(value) => value,
            ValueOutcome::Error(error) => panic!("{message}: {error:?}"),
        }
    }

    /// Borrows the error, panicking with `message` if the outcome succeeded.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    #[track_caller]
    pub fn expect_error(&self, message: &str) -> &E
    where
        T: Debug,
    {
        match &*self.state {
            ValueOutcome::Ok(value) => panic!("{message}: {value:?}"),
            ValueOutcome::Error(error) => error,
        }
    }

    /// Applies `f` to the value; a failure is propagated without calling `f`.
    #[inline]
    pub fn map<U, F>(&self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(&T) -> U,
        E: Clone,
    {
        match &*self.state {
            ValueOutcome::Ok(value) => Outcome::ok(f(value)),
            ValueOutcome::Error(error) => Outcome::fail(error.clone()),
        }
    }

    #[inline]
    pub fn map_error<G, F>(&self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(&E) -> G,
        T: Clone,
    {
        match &*self.state {
            ValueOutcome::Ok(value) => Outcome::ok(value.clone()),
            ValueOutcome::Error(error) => Outcome::fail(f(error)),
        }
    }

    /// Transforms the success with `map` and the failure with `map_error`.
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::fail("bad");
    /// let mapped = failed.map_both(|x| x + 1, |e| e.len());
    /// assert_eq!(mapped.error(), Ok(&3));
    /// ```
    #[inline]
    pub fn map_both<U, G, F, H>(&self, map: F, map_error: H) -> Outcome<U, G>
    where
        F: FnOnce(&T) -> U,
        H: FnOnce(&E) -> G,
    {
        match &*self.state {
            ValueOutcome::Ok(value) => Outcome::ok(map(value)),
            ValueOutcome::Error(error) => Outcome::fail(map_error(error)),
        }
    }

    #[inline]
    pub fn and_then<U, F>(&self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(&T) -> Outcome<U, E>,
        E: Clone,
    {
        match &*self.state {
            ValueOutcome::Ok(value) => f(value),
            ValueOutcome::Error(error) => Outcome::fail(error.clone()),
        }
    }

    /// Returns `self` if it succeeded, otherwise a new success of `value`.
    #[inline]
    pub fn or(&self, value: T) -> Self {
        if self.is_ok() {
            self.clone()
        } else {
            Self::ok(value)
        }
    }

    /// Like [`or`](Self::or), but `factory` only runs on the failure path.
    #[inline]
    pub fn or_with<F>(&self, factory: F) -> Self
    where
        F: FnOnce() -> T,
    {
        if self.is_ok() {
            self.clone()
        } else {
            Self::ok(factory())
        }
    }

    /// Unwraps the value or falls back to `value`.
    #[inline]
    pub fn or_default(&self, value: T) -> T
    where
        T: Clone,
    {
        match &*self.state {
            ValueOutcome::Ok(inner) => inner.clone(),
            ValueOutcome::Error(_) => value,
        }
    }

    #[inline]
    pub fn or_default_with<F>(&self, factory: F) -> T
    where
        F: FnOnce() -> T,
        T: Clone,
    {
        match &*self.state {
            ValueOutcome::Ok(value) => value.clone(),
            ValueOutcome::Error(_) => factory(),
        }
    }

    /// Returns `self` if it already failed, otherwise a failure of `error`.
    ///
    /// This is the error-channel mirror of [`or`](Self::or): a success is
    /// replaced, a failure is kept as it is.
    #[inline]
    pub fn or_error(&self, error: E) -> Self {
        if self.is_error() {
            self.clone()
        } else {
            Self::fail(error)
        }
    }

    #[inline]
    pub fn or_error_with<F>(&self, factory: F) -> Self
    where
        F: FnOnce() -> E,
    {
        if self.is_error() {
            self.clone()
        } else {
            Self::fail(factory())
        }
    }

    /// Unwraps the error or falls back to `error`.
    #[inline]
    pub fn or_error_default(&self, error: E) -> E
    where
        E: Clone,
    {
        match &*self.state {
            ValueOutcome::Ok(_) => error,
            ValueOutcome::Error(inner) => inner.clone(),
        }
    }

    #[inline]
    pub fn or_error_default_with<F>(&self, factory: F) -> E
    where
        F: FnOnce() -> E,
        E: Clone,
    {
        match &*self.state {
            ValueOutcome::Ok(_) => factory(),
            ValueOutcome::Error(error) => error.clone(),
        }
    }

    /// Runs `f` on the value, if any, and returns `self` unchanged.
    #[inline]
    pub fn inspect<F>(&self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = self.try_get_value() {
            f(value);
        }
        self.clone()
    }

    /// Runs `f` on the error, if any, and returns `self` unchanged.
    #[inline]
    pub fn inspect_error<F>(&self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Some(error) = self.try_get_error() {
            f(error);
        }
        self.clone()
    }

    #[must_use]
    #[inline]
    pub fn is_ok_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        self.try_get_value().is_some_and(predicate)
    }

    /// Returns `true` only for a failure whose error satisfies `predicate`.
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let failed: Outcome<i32, String> = Outcome::fail("bad".to_string());
    /// assert!(failed.is_error_and(|e| e == "bad"));
    ///
    /// let ok: Outcome<i32, String> = Outcome::ok(1);
    /// assert!(!ok.is_error_and(|_| true));
    /// ```
    #[must_use]
    #[inline]
    pub fn is_error_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&E) -> bool,
    {
        self.try_get_error().is_some_and(predicate)
    }

    /// Moves the state out, cloning only if the allocation is shared.
    #[inline]
    pub fn into_value_outcome(self) -> ValueOutcome<T, E>
    where
        T: Clone,
        E: Clone,
    {
        Arc::unwrap_or_clone(self.state)
    }

    /// Converts into a standard `Result`, ready for `?`.
    ///
    /// ```
    /// use outcome_rail::{Exception, Outcome};
    ///
    /// fn half(input: Outcome<i32>) -> Result<i32, Exception> {
    ///     let value = input.into_result()?;
    ///     Ok(value / 2)
    /// }
    ///
    /// assert_eq!(half(Outcome::ok(8)).ok(), Some(4));
    /// assert!(half(Outcome::fail(Exception::msg("no input"))).is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E>
    where
        T: Clone,
        E: Clone,
    {
        self.into_value_outcome().into_result()
    }

    /// Unwraps the value, reporting [`ResultError::NoValue`] on failure.
    #[inline]
    pub fn into_value(self) -> Result<T, ResultError>
    where
        T: Clone,
        E: Clone,
    {
        self.into_value_outcome().into_value()
    }

    /// Unwraps the error, reporting [`ResultError::NoError`] on success.
    #[inline]
    pub fn into_error(self) -> Result<E, ResultError>
    where
        T: Clone,
        E: Clone,
    {
        self.into_value_outcome().into_error()
    }

    /// Wraps the outcome in an already-completed future.
    #[inline]
    pub fn into_ready(self) -> Ready<Self> {
        ready(self)
    }
}

impl<T> Outcome<T, Exception> {
    #[inline]
    pub fn from_exception(exception: Exception) -> Self {
        Self::fail(exception)
    }

    /// Wraps any error type as a failure.
    #[inline]
    pub fn fail_with<X>(error: X) -> Self
    where
        X: Into<Exception>,
    {
        Self::fail(error.into())
    }
}

impl<T> Default for Outcome<T, Exception> {
    /// A default outcome has no value and is therefore a failure.
    fn default() -> Self {
        Self::fail(Exception::new(ResultError::NoValue))
    }
}

impl<T, E> Clone for Outcome<T, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self { state: Arc::clone(&self.state) }
    }
}

impl<T: Debug, E: Debug> Debug for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.state, f)
    }
}

impl<T: PartialEq, E: PartialEq> PartialEq for Outcome<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.state == *other.state
    }
}

impl<T: Eq, E: Eq> Eq for Outcome<T, E> {}

/// An absent comparand equals any failed outcome and no successful one.
///
/// ```
/// use outcome_rail::Outcome;
///
/// let failed: Outcome<i32, &str> = Outcome::fail("e");
/// assert!(failed == None);
/// assert!(Outcome::<i32, &str>::ok(1) != None);
/// ```
impl<T: PartialEq, E: PartialEq> PartialEq<Option<Outcome<T, E>>> for Outcome<T, E> {
    fn eq(&self, other: &Option<Outcome<T, E>>) -> bool {
        match other {
            Some(other) => self == other,
            None => self.is_error(),
        }
    }
}

impl<T: Hash, E: Hash> Hash for Outcome<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

impl<T> From<Option<T>> for Outcome<T, Exception> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::ok(value),
            None => Self::default(),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        ValueOutcome::from(result).into()
    }
}

impl<T: Clone, E: Clone> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> From<ValueOutcome<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(state: ValueOutcome<T, E>) -> Self {
        Self { state: Arc::new(state) }
    }
}

impl<T: Clone, E: Clone> From<Outcome<T, E>> for ValueOutcome<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_value_outcome()
    }
}

/// Collects successes until the first failure, which becomes the outcome.
///
/// ```
/// use outcome_rail::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> = vec![Outcome::ok(1), Outcome::ok(2)].into_iter().collect();
/// assert_eq!(all.value(), Ok(&vec![1, 2]));
///
/// let first_failure: Outcome<Vec<i32>, &str> =
///     vec![Outcome::ok(1), Outcome::fail("a"), Outcome::fail("b")].into_iter().collect();
/// assert_eq!(first_failure.error(), Ok(&"a"));
/// ```
impl<T, E, V> FromIterator<Outcome<T, E>> for Outcome<V, E>
where
    T: Clone,
    E: Clone,
    V: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Outcome::into_value_outcome)
            .collect::<ValueOutcome<V, E>>()
            .into_outcome()
    }
}
