//! Arithmetic mean of four numbers.

/// Compute the arithmetic mean of four numbers.
///
/// Inputs are widened to `f64` before dividing, so integer inputs give the
/// true mean rather than a truncated quotient.
pub fn average<T: Into<f64>>(a: T, b: T, c: T, d: T) -> f64 {
    (a.into() + b.into() + c.into() + d.into()) / 4.0
}
