use std::fmt::Write;

use crate::distribution::{Distribution, DistributionGroup};
use crate::error::Result;
use crate::render::format_label;

use super::{ColorMode, DistributionFormatter, ansi};

const DEFAULT_BAR_WIDTH: usize = 40;

/// Table of bucket ranges and counts with a `#` bar per bucket.
pub struct TextFormatter {
    use_colors: bool,
    bar_width: usize,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.for_stdout(),
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    /// Width in characters of the bar for the fullest bucket.
    #[must_use]
    pub const fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }

    fn range_label<T>(group: &DistributionGroup<T>) -> String {
        let close = if group.is_upper_closed() { ']' } else { ')' };
        format!(
            "[{}, {}{close}",
            format_label(group.min_range()),
            format_label(group.max_range())
        )
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn bar(&self, count: usize, max_count: usize) -> String {
        if max_count == 0 {
            return String::new();
        }
        let len = (count as f64 / max_count as f64 * self.bar_width as f64).round() as usize;
        let bar = "#".repeat(len);
        if self.use_colors && !bar.is_empty() {
            format!("{}{bar}{}", ansi::GREEN, ansi::RESET)
        } else {
            bar
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn share(count: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        }
    }
}

impl DistributionFormatter for TextFormatter {
    fn format<T>(&self, distribution: &Distribution<T>) -> Result<String> {
        let labels: Vec<String> = distribution.iter().map(Self::range_label).collect();
        let range_width = labels
            .iter()
            .map(String::len)
            .max()
            .unwrap_or(0)
            .max("Range".len());
        let total = distribution.total_count();
        let max_count = distribution.max_count();

        let mut output = String::new();
        let header = format!("{:<range_width$}  {:>7}  {:>7}", "Range", "Count", "Share");
        if self.use_colors {
            writeln!(output, "{}{header}{}", ansi::BOLD, ansi::RESET).ok();
        } else {
            writeln!(output, "{header}").ok();
        }

        for (label, group) in labels.iter().zip(distribution) {
            let count = group.len();
            let line = format!(
                "{label:<range_width$}  {count:>7}  {:>6.2}%  {}",
                Self::share(count, total),
                self.bar(count, max_count)
            );
            writeln!(output, "{}", line.trim_end()).ok();
        }

        writeln!(output).ok();
        writeln!(
            output,
            "Summary: {total} items in {} buckets, range {} to {}",
            distribution.len(),
            format_label(distribution.min_range()),
            format_label(distribution.max_range())
        )
        .ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
