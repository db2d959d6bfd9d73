//! Formatting helpers for presenting scores.

/// Number as served, without rounding: `86.0` → `"86"`, `86.5` → `"86.5"`.
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// Percentage label, e.g. `"86%"`. Out-of-range values are shown as given.
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}
