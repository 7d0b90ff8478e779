use core::fmt::{self, Display};

/// Misuse of an outcome: reading the side that is not present, or building an
/// outcome from an absent payload.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, ResultError};
///
/// let failed: Outcome<i32, &str> = Outcome::fail("boom");
/// assert_eq!(failed.value(), Err(ResultError::NoValue));
///
/// let ok: Outcome<i32, &str> = Outcome::ok(1);
/// assert_eq!(ok.error(), Err(ResultError::NoError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultError {
    /// The value was read from a failed outcome.
    NoValue,
    /// The error was read from a successful outcome.
    NoError,
    /// An outcome was constructed from an absent payload.
    AbsentArgument { name: &'static str },
}

impl Display for ResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoValue => f.write_str("No value present"),
            Self::NoError => f.write_str("No error present"),
            Self::AbsentArgument { name } => {
                write!(f, "Value cannot be absent (parameter '{name}')")
            },
        }
    }
}

impl std::error::Error for ResultError {}
