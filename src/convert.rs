use std::error::Error as StdError;

use crate::types::{Exception, Outcome, ResultsList, UnitOutcome, ValueOutcome};

#[inline]
pub fn outcome_to_value_outcome<T, E>(outcome: Outcome<T, E>) -> ValueOutcome<T, E>
where
    T: Clone,
    E: Clone,
{
    outcome.into_value_outcome()
}

#[inline]
pub fn value_outcome_to_outcome<T, E>(outcome: ValueOutcome<T, E>) -> Outcome<T, E> {
    outcome.into_outcome()
}

#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    result.into()
}

#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E>
where
    T: Clone,
    E: Clone,
{
    outcome.into_result()
}

/// Drops the success value, keeping only the state and the error.
#[inline]
pub fn discard_value<T, E>(outcome: &Outcome<T, E>) -> UnitOutcome<E>
where
    E: Clone,
{
    outcome.map(|_| ())
}

/// Widens a typed error into an [`Exception`].
#[inline]
pub fn erase_error<T, E>(outcome: &Outcome<T, E>) -> Outcome<T>
where
    T: Clone,
    E: StdError + Clone + Send + Sync + 'static,
{
    outcome.map_error(|error| Exception::new(error.clone()))
}

/// Narrows an exception-backed outcome to a typed error.
///
/// Gives the outcome back unchanged when the exception is not an `E`.
pub fn downcast_error<T, E>(outcome: Outcome<T>) -> Result<Outcome<T, E>, Outcome<T>>
where
    T: Clone,
    E: StdError + Clone + 'static,
{
    let typed = match outcome.try_get_error() {
        None => outcome.try_get_value().cloned().map(Outcome::ok),
        Some(exception) => exception.downcast_ref::<E>().cloned().map(Outcome::fail),
    };
    typed.ok_or(outcome)
}

#[inline]
pub fn collect_outcomes<T, I>(outcomes: I) -> ResultsList<T>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    outcomes.into_iter().collect()
}

/// Splits outcomes into success values and errors, each in original order.
pub fn partition_outcomes<T, E, I>(outcomes: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = ValueOutcome<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for outcome in outcomes {
        match outcome {
            ValueOutcome::Ok(value) => values.push(value),
            ValueOutcome::Error(error) => errors.push(error),
        }
    }
    (values, errors)
}
