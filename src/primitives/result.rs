//! Exhaustive dispatch for `Result`.
//!
//! Like [`OptionExt`](super::OptionExt), [`ResultExt`] only adds the
//! two-handler dispatch; everything else comes from the standard [`Result`].

/// A reusable pair of handlers for [`ResultExt::match_with`].
pub trait ResultPattern<T, E, O> {
    /// Called with the value when the result is `Ok`.
    fn ok(self, value: T) -> O;
    /// Called with the error when the result is `Err`.
    fn err(self, error: E) -> O;
}

/// Extension methods for [`Result`].
///
/// # Example
///
/// ```rust
/// use litmus::{structs, ResultExt, Struct, Value};
///
/// let summary = structs::number()
///     .validate(&Value::from("x"))
///     .fold(|n| format!("ok: {}", n), |e| format!("{} error", e.kind()));
/// assert_eq!(summary, "assignment error");
/// ```
pub trait ResultExt<T, E> {
    /// Runs `on_ok` with the value or `on_err` with the error, exactly once,
    /// and returns its result.
    fn fold<O, S, F>(self, on_ok: S, on_err: F) -> O
    where
        S: FnOnce(T) -> O,
        F: FnOnce(E) -> O;

    /// Dispatches to the matching arm of `pattern`.
    fn match_with<O, P>(self, pattern: P) -> O
    where
        P: ResultPattern<T, E, O>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn fold<O, S, F>(self, on_ok: S, on_err: F) -> O
    where
        S: FnOnce(T) -> O,
        F: FnOnce(E) -> O,
    {
        match self {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    fn match_with<O, P>(self, pattern: P) -> O
    where
        P: ResultPattern<T, E, O>,
    {
        match self {
            Ok(value) => pattern.ok(value),
            Err(error) => pattern.err(error),
        }
    }
}
