//! Display formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a backend-supplied price with exactly two decimal places.
#[must_use]
pub fn format_price(value: f64) -> String {
    format!("{value:.2}")
}
