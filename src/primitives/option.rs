//! Exhaustive dispatch for `Option`.
//!
//! The standard [`Option`] already is the canonical presence/absence type and
//! carries the whole combinator family (`map`, `and_then`, `ok_or`,
//! `inspect`, `unwrap_or`, ...). [`OptionExt`] adds the one primitive it
//! lacks as a method: a single call that runs exactly one of two handlers.

/// A reusable pair of handlers for [`OptionExt::match_with`].
///
/// Implement this on a type when the same dispatch is needed in several
/// places; use [`OptionExt::fold`] for one-off closures.
pub trait OptionPattern<T, O> {
    /// Called with the value when the option is `Some`.
    fn some(self, value: T) -> O;
    /// Called when the option is `None`.
    fn none(self) -> O;
}

/// Extension methods for [`Option`].
///
/// # Example
///
/// ```rust
/// use litmus::OptionExt;
///
/// let label = Some(3).fold(|n| format!("{} items", n), || "empty".to_string());
/// assert_eq!(label, "3 items");
///
/// let label = None::<i32>.fold(|n| format!("{} items", n), || "empty".to_string());
/// assert_eq!(label, "empty");
/// ```
pub trait OptionExt<T> {
    /// Runs `on_some` with the value or `on_none`, exactly once, and returns
    /// its result.
    fn fold<O, S, N>(self, on_some: S, on_none: N) -> O
    where
        S: FnOnce(T) -> O,
        N: FnOnce() -> O;

    /// Dispatches to the matching arm of `pattern`.
    fn match_with<O, P>(self, pattern: P) -> O
    where
        P: OptionPattern<T, O>;
}

impl<T> OptionExt<T> for Option<T> {
    fn fold<O, S, N>(self, on_some: S, on_none: N) -> O
    where
        S: FnOnce(T) -> O,
        N: FnOnce() -> O,
    {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    fn match_with<O, P>(self, pattern: P) -> O
    where
        P: OptionPattern<T, O>,
    {
        match self {
            Some(value) => pattern.some(value),
            None => pattern.none(),
        }
    }
}
