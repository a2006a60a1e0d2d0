use crate::mean::average;
use std::fmt;

/// Four inputs together with their average.
///
/// Displays as the one-line summary printed by the binary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report<T> {
    pub inputs: [T; 4],
    pub average: f64,
}

impl<T: Copy + Into<f64>> Report<T> {
    pub fn new(inputs: [T; 4]) -> Self {
        let [a, b, c, d] = inputs;
        Self {
            inputs,
            average: average(a, b, c, d),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Report<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = &self.inputs;
        // Debug keeps the fractional part of whole floats (`25.0`, not `25`).
        write!(
            f,
            "The average of {a}, {b}, {c}, and {d} is: {:?}",
            self.average
        )
    }
}
