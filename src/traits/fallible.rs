use crate::types::{Outcome, ResultError, ValueOutcome};

/// Read access shared by every outcome shape: success or failure, and the error.
///
/// Generic code written against `Fallible` accepts [`Outcome`],
/// [`ValueOutcome`] and the standard `Result` alike.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::Fallible;
/// use outcome_rail::{Outcome, ValueOutcome};
///
/// fn failures<R: Fallible>(items: &[R]) -> usize {
///     items.iter().filter(|item| item.is_error()).count()
/// }
///
/// assert_eq!(failures(&[Outcome::<i32, &str>::ok(1), Outcome::fail("x")]), 1);
/// assert_eq!(failures(&[ValueOutcome::<i32, &str>::fail("y")]), 1);
/// assert_eq!(failures(&[Ok::<i32, &str>(1)]), 0);
/// ```
pub trait Fallible {
    type Error;

    fn is_ok(&self) -> bool;

    /// Always the negation of [`is_ok`](Fallible::is_ok).
    #[inline]
    fn is_error(&self) -> bool {
        !self.is_ok()
    }

    fn try_get_error(&self) -> Option<&Self::Error>;

    /// Borrows the error, or reports [`ResultError::NoError`] on success.
    #[inline]
    fn error(&self) -> Result<&Self::Error, ResultError> {
        self.try_get_error().ok_or(ResultError::NoError)
    }
}

impl<T, E> Fallible for Outcome<T, E> {
    type Error = E;

    #[inline]
    fn is_ok(&self) -> bool {
        Outcome::is_ok(self)
    }

    #[inline]
    fn try_get_error(&self) -> Option<&E> {
        Outcome::try_get_error(self)
    }
}

impl<T, E> Fallible for ValueOutcome<T, E> {
    type Error = E;

    #[inline]
    fn is_ok(&self) -> bool {
        ValueOutcome::is_ok(self)
    }

    #[inline]
    fn try_get_error(&self) -> Option<&E> {
        ValueOutcome::try_get_error(self)
    }
}

impl<T, E> Fallible for Result<T, E> {
    type Error = E;

    #[inline]
    fn is_ok(&self) -> bool {
        Result::is_ok(self)
    }

    #[inline]
    fn try_get_error(&self) -> Option<&E> {
        self.as_ref().err()
    }
}
