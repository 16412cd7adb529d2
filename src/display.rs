//! Cosmetic formatting of contestant names and probabilities.

use std::fmt::{Display, Formatter};

/// Replaces underscores and hyphens with spaces, collapsing runs of whitespace.
pub fn pretty_name(name: &str) -> String {
    name.replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// A probability rendered as a percentage to two decimal places.
pub struct DisplayPercent(pub f64);

impl Display for DisplayPercent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.0 * 100.0)
    }
}
