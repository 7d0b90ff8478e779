/// Runs a block inside [`try_catch`](crate::factory::try_catch), so `?` can be
/// used on any error type and panics are captured.
///
/// # Examples
///
/// ```
/// use outcome_rail::catch;
///
/// let sum = catch! {
///     let a: i32 = "40".parse()?;
///     let b: i32 = "2".parse()?;
///     a + b
/// };
/// assert_eq!(sum.value(), Ok(&42));
///
/// let broken = catch! {
///     let a: i32 = "forty".parse()?;
///     a
/// };
/// assert!(broken.is_error());
/// ```
#[macro_export]
macro_rules! catch {
    ($($body:tt)*) => {
        $crate::factory::try_catch(|| -> ::core::result::Result<_, $crate::Exception> {
            ::core::result::Result::Ok({ $($body)* })
        })
    };
}

/// Builds a failed [`Outcome`](crate::Outcome) with a formatted message.
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, Outcome};
///
/// let id = 7;
/// let outcome: Outcome<()> = fail!("user {id} not found");
/// assert_eq!(outcome.error().unwrap().to_string(), "user 7 not found");
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::Outcome::from_exception($crate::Exception::msg(::std::format!($($arg)*)))
    };
}

// Expands to a `tracing::debug!` event when the `tracing` feature is enabled.
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}
