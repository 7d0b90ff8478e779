//! Read-only environment variable lookups with a non-throwing surface.
//!
//! Every lookup returns a [`ValueOutcome`] instead of an `Err` to unwrap.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::env;
//!
//! let missing = env::try_get("OUTCOME_RAIL_DOC_SURELY_UNSET");
//! assert!(missing.is_error());
//! assert_eq!(env::get_or("OUTCOME_RAIL_DOC_SURELY_UNSET", "fallback"), "fallback");
//! ```

use core::fmt::{self, Display};
use core::str::FromStr;
use std::env::VarError;

use crate::factory::try_catch_ref;
use crate::types::{Exception, ValueOutcome};

/// Why an environment lookup failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    NotPresent { name: String },
    NotUnicode { name: String },
    Parse { name: String, message: String },
}

impl EnvError {
    fn from_var(name: &str, error: VarError) -> Self {
        let name = name.to_string();
        match error {
            VarError::NotPresent => Self::NotPresent { name },
            VarError::NotUnicode(_) => Self::NotUnicode { name },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::NotPresent { name } | Self::NotUnicode { name } | Self::Parse { name, .. } => {
                name
            },
        }
    }
}

impl Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPresent { name } => write!(f, "environment variable '{name}' is not set"),
            Self::NotUnicode { name } => {
                write!(f, "environment variable '{name}' is not valid unicode")
            },
            Self::Parse { name, message } => {
                write!(f, "environment variable '{name}' could not be parsed: {message}")
            },
        }
    }
}

impl std::error::Error for EnvError {}

/// Looks up `name`.
pub fn try_get(name: &str) -> ValueOutcome<String> {
    try_catch_ref(|| std::env::var(name).map_err(|error| EnvError::from_var(name, error)))
}

/// Looks up `name` and parses it into `T`.
///
/// ```
/// use outcome_rail::env::{self, EnvError};
///
/// let port = env::try_get_parsed::<u16>("OUTCOME_RAIL_DOC_SURELY_UNSET");
/// assert!(port.is_error_and(|e| e.downcast_ref::<EnvError>().is_some()));
/// ```
pub fn try_get_parsed<T>(name: &str) -> ValueOutcome<T>
where
    T: FromStr,
    T::Err: Display,
{
    try_get(name).and_then(|raw| {
        raw.parse::<T>()
            .map_err(|error| {
                let message = error.to_string();
                Exception::new(EnvError::Parse { name: name.to_string(), message })
            })
            .into()
    })
}

/// Looks up `name`, falling back to `default` when it is missing or unreadable.
pub fn get_or(name: &str, default: impl Into<String>) -> String {
    try_get(name).or_default_with(|| default.into())
}

/// `true` if `name` is set to a unicode value.
pub fn contains(name: &str) -> bool {
    try_get(name).is_ok()
}
