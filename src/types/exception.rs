//! Type-erased, shareable error value carried by the default outcome family.
//!
//! [`Exception`] plays the role of a "throwable": any `std::error::Error` can be
//! turned into one, cloning it is a reference-count bump, and two exceptions
//! compare equal only when they are the same captured instance.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A shared, immutable, type-erased error.
///
/// `Exception` does not implement [`std::error::Error`] itself, so every error
/// type converts into it with `?` or `.into()`.
///
/// # Examples
///
/// ```
/// use outcome_rail::Exception;
///
/// let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "slow disk");
/// let exception = Exception::from(io);
///
/// assert!(exception.is::<std::io::Error>());
/// assert_eq!(exception.to_string(), "slow disk");
///
/// let copy = exception.clone();
/// assert_eq!(copy, exception);
/// assert_ne!(Exception::msg("slow disk"), exception);
/// ```
#[derive(Clone)]
pub struct Exception {
    inner: Arc<dyn StdError + Send + Sync + 'static>,
}

impl Exception {
    /// Wraps a concrete error.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self { inner: Arc::new(error) }
    }

    /// Creates an exception that only carries a message.
    #[inline]
    pub fn msg<M: Display>(message: M) -> Self {
        Self::new(MessageError(message.to_string()))
    }

    /// Takes ownership of an already boxed error.
    #[inline]
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self { inner: Arc::from(error) }
    }

    /// Converts a panic payload (as returned by `catch_unwind`) into an exception
    /// wrapping [`PanicError`].
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self::new(PanicError::from_payload(payload))
    }

    /// Returns `true` if the wrapped error is of type `E`.
    #[inline]
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.inner.is::<E>()
    }

    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Borrows the wrapped error as a trait object.
    #[inline]
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }

    #[inline]
    pub fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }

    /// Returns `true` if both handles point at the same captured error.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<E> From<E> for Exception
where
    E: StdError + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl AsRef<dyn StdError + Send + Sync + 'static> for Exception {
    #[inline]
    fn as_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.as_error()
    }
}

impl Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.inner, f)
    }
}

impl Debug for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.inner, f)
    }
}

impl PartialEq for Exception {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Exception {}

impl Hash for Exception {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.inner) as *const (), state);
    }
}

// Serialized as the display message only; the concrete type does not survive.
#[cfg(feature = "serde")]
impl Serialize for Exception {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Exception {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let message = String::deserialize(deserializer)?;
        Ok(Self::msg(message))
    }
}

#[derive(Debug)]
struct MessageError(String);

impl Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for MessageError {}

/// A panic captured by one of the `try_catch` adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanicError {
    message: String,
}

impl PanicError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Extracts the message from a `&str` or `String` payload.
    pub fn from_payload(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast_ref::<&'static str>() {
                Some(message) => (*message).to_string(),
                None => String::from("panic with a non-string payload"),
            },
        };
        Self { message }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for PanicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked: {}", self.message)
    }
}

impl StdError for PanicError {}
