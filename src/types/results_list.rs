use crate::types::{AggregateException, Outcome};

/// An ordered collection of [`Outcome`]s that can be reduced to either all the
/// success values or one combined failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Exception, Outcome, ResultsList};
///
/// let list: ResultsList<i32> = [Outcome::ok(1), Outcome::ok(2), Outcome::fail(Exception::msg("e"))]
///     .into_iter()
///     .collect();
///
/// assert!(list.is_error());
/// assert_eq!(list.to_values(false).ok(), Some(vec![1, 2]));
/// assert_eq!(list.to_values(true).map_err(|e| e.len()), Err(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsList<T> {
    results: Vec<Outcome<T>>,
}

impl<T> ResultsList<T> {
    #[inline]
    pub fn new() -> Self {
        Self { results: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, outcome: Outcome<T>) {
        self.results.push(outcome);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Outcome<T>> {
        self.results.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Outcome<T>] {
        &self.results
    }

    /// `true` if any element failed.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.results.iter().any(Outcome::is_error)
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        !self.is_error()
    }

    /// Returns the success values in their original order.
    ///
    /// With `throw_on_error` set, any failure turns the whole call into an
    /// [`AggregateException`] of every failure. Otherwise failed entries are
    /// skipped.
    pub fn to_values(&self, throw_on_error: bool) -> Result<Vec<T>, AggregateException>
    where
        T: Clone,
    {
        if throw_on_error && self.is_error() {
            return Err(self.to_aggregate_exception());
        }

        let values: Vec<T> = self
            .results
            .iter()
            .filter_map(|outcome| outcome.try_get_value().cloned())
            .collect();

        trace_debug!(
            kept = values.len(),
            dropped = self.results.len() - values.len(),
            "reduced results list to values"
        );

        Ok(values)
    }

    /// Collects every failure into one [`AggregateException`].
    pub fn to_aggregate_exception(&self) -> AggregateException {
        self.results
            .iter()
            .filter_map(|outcome| outcome.try_get_error().cloned())
            .collect()
    }

    #[inline]
    pub fn into_inner(self) -> Vec<Outcome<T>> {
        self.results
    }
}

impl<T> Default for ResultsList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<Outcome<T>>> for ResultsList<T> {
    #[inline]
    fn from(results: Vec<Outcome<T>>) -> Self {
        Self { results }
    }
}

impl<T> FromIterator<Outcome<T>> for ResultsList<T> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        Self { results: iter.into_iter().collect() }
    }
}

impl<T> Extend<Outcome<T>> for ResultsList<T> {
    fn extend<I: IntoIterator<Item = Outcome<T>>>(&mut self, iter: I) {
        self.results.extend(iter);
    }
}

impl<T> IntoIterator for ResultsList<T> {
    type Item = Outcome<T>;
    type IntoIter = std::vec::IntoIter<Outcome<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResultsList<T> {
    type Item = &'a Outcome<T>;
    type IntoIter = core::slice::Iter<'a, Outcome<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
