use crate::traits::Fallible;
use crate::types::{Outcome, ResultError, ValueOutcome};

/// A [`Fallible`] that carries a value on success.
pub trait ValueBearing: Fallible {
    type Value;

    fn try_get_value(&self) -> Option<&Self::Value>;

    /// Borrows the value, or reports [`ResultError::NoValue`] on failure.
    #[inline]
    fn value(&self) -> Result<&Self::Value, ResultError> {
        self.try_get_value().ok_or(ResultError::NoValue)
    }

    /// Compares two value-bearing outcomes of possibly different shapes: equal
    /// values when both succeeded, equal errors when both failed.
    ///
    /// ```
    /// use outcome_rail::traits::ValueBearing;
    /// use outcome_rail::{Outcome, ValueOutcome};
    ///
    /// let shared: Outcome<i32, &str> = Outcome::ok(7);
    /// let inline: ValueOutcome<i32, &str> = ValueOutcome::ok(7);
    /// assert!(shared.outcome_eq(&inline));
    /// assert!(!shared.outcome_eq(&Err::<i32, &str>("e")));
    /// ```
    fn outcome_eq<R>(&self, other: &R) -> bool
    where
        R: ValueBearing<Value = Self::Value, Error = Self::Error> + ?Sized,
        Self::Value: PartialEq,
        Self::Error: PartialEq,
    {
        match (self.try_get_value(), other.try_get_value()) {
            (Some(left), Some(right)) => left == right,
            (None, None) => self.try_get_error() == other.try_get_error(),
            _ => false,
        }
    }
}

impl<T, E> ValueBearing for Outcome<T, E> {
    type Value = T;

    #[inline]
    fn try_get_value(&self) -> Option<&T> {
        Outcome::try_get_value(self)
    }
}

impl<T, E> ValueBearing for ValueOutcome<T, E> {
    type Value = T;

    #[inline]
    fn try_get_value(&self) -> Option<&T> {
        ValueOutcome::try_get_value(self)
    }
}

impl<T, E> ValueBearing for Result<T, E> {
    type Value = T;

    #[inline]
    fn try_get_value(&self) -> Option<&T> {
        self.as_ref().ok()
    }
}
