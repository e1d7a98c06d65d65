//! Axis label formatting.

/// Format with at most two decimals, trimming trailing zeros.
///
/// `1.5` → `"1.5"`, `2.0` → `"2"`, `0.333` → `"0.33"`. Values that round to
/// zero print as `"0"`, never `"-0"`.
#[must_use]
pub fn format_label(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
