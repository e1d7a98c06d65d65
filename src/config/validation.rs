//! Configuration semantic validation.
//!
//! Checks values that parse fine but cannot produce a chart.

use crate::config::Config;
use crate::render::{MIN_HEIGHT, MIN_WIDTH};
use crate::{NumdistError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns `Config` describing the first invalid field.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_binning_section(config)?;
    validate_input_section(config)?;
    validate_render_section(config)?;
    validate_gradient_section(config)?;
    Ok(())
}

fn validate_binning_section(config: &Config) -> Result<()> {
    let binning = &config.binning;
    if binning.bins == 0 {
        return Err(NumdistError::Config(
            "binning.bins must be at least 1".to_string(),
        ));
    }

    match (binning.min, binning.max) {
        (Some(min), Some(max)) if !min.is_finite() || !max.is_finite() || max <= min => {
            Err(NumdistError::Config(format!(
                "binning.max ({max}) must be greater than binning.min ({min})"
            )))
        }
        (Some(_), None) | (None, Some(_)) => Err(NumdistError::Config(
            "binning.min and binning.max must be set together".to_string(),
        )),
        _ => Ok(()),
    }
}

fn validate_input_section(config: &Config) -> Result<()> {
    if config.input.delimiter.as_deref() == Some("") {
        return Err(NumdistError::Config(
            "input.delimiter must not be empty (omit it to split on whitespace)".to_string(),
        ));
    }
    Ok(())
}

fn validate_render_section(config: &Config) -> Result<()> {
    let render = &config.render;
    if render.width < MIN_WIDTH || render.height < MIN_HEIGHT {
        return Err(NumdistError::Config(format!(
            "render size {}x{} is below the minimum {MIN_WIDTH}x{MIN_HEIGHT}",
            render.width, render.height
        )));
    }
    if render.axis_segments == 0 {
        return Err(NumdistError::Config(
            "render.axis_segments must be at least 1".to_string(),
        ));
    }
    if render.font_size == 0 {
        return Err(NumdistError::Config(
            "render.font_size must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn validate_gradient_section(config: &Config) -> Result<()> {
    for (name, lab) in [("start", config.gradient.start), ("end", config.gradient.end)] {
        if ![lab.l, lab.a, lab.b].iter().all(|v| v.is_finite()) {
            return Err(NumdistError::Config(format!(
                "gradient.{name} must have finite l, a and b values"
            )));
        }
        if !(0.0..=100.0).contains(&lab.l) {
            return Err(NumdistError::Config(format!(
                "gradient.{name}.l must be between 0 and 100, got {}",
                lab.l
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
