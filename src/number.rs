//! Small numeric helpers.

use rand::Rng;

/// Returns a random number in `[min, max)`.
///
/// A reversed range is allowed and yields a number in `(max, min]`.
pub fn random(min: f64, max: f64) -> f64 {
    rand::rng().random::<f64>() * (max - min) + min
}

/// Restricts `value` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: when `min > max` the result is `max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Generates `from, from + step, ...` up to but excluding `to`.
///
/// Empty when `to <= from` or when `step` is not positive. Stops early once
/// `step` is too small to change the current value.
pub fn range(from: f64, to: f64, step: f64) -> Vec<f64> {
    if to <= from || step <= 0.0 || !step.is_finite() {
        return Vec::new();
    }

    let mut values = Vec::new();
    let mut current = from;
    while current < to {
        values.push(current);
        let next = current + step;
        if next <= current {
            break;
        }
        current = next;
    }
    values
}
