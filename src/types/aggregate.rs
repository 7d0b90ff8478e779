use core::fmt::{self, Display};
use std::error::Error as StdError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{ErrorVec, Exception};

/// Several failures combined into one error.
///
/// # Examples
///
/// ```
/// use outcome_rail::{AggregateException, Exception};
///
/// let combined = AggregateException::new([Exception::msg("a"), Exception::msg("b")]);
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined.to_string(), "One or more errors occurred. (a) (b)");
///
/// let empty = AggregateException::new([]);
/// assert_eq!(empty.to_string(), "No errors present");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AggregateException {
    errors: ErrorVec<Exception>,
}

impl AggregateException {
    pub fn new<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Exception>,
    {
        Self { errors: errors.into_iter().collect() }
    }

    #[inline]
    pub fn errors(&self) -> &[Exception] {
        &self.errors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn into_errors(self) -> ErrorVec<Exception> {
        self.errors
    }
}

impl Display for AggregateException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("No errors present");
        }

        f.write_str("One or more errors occurred.")?;
        for error in &self.errors {
            write!(f, " ({error})")?;
        }
        Ok(())
    }
}

impl StdError for AggregateException {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.errors
            .first()
            .map(|error| error.as_error() as &(dyn StdError + 'static))
    }
}

impl FromIterator<Exception> for AggregateException {
    fn from_iter<I: IntoIterator<Item = Exception>>(iter: I) -> Self {
        Self::new(iter)
    }
}
