use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, NumdistError, Result};

use super::context::{Diagnostics, fail};

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    let diagnostics = Diagnostics::from_cli(cli);
    match run_init_impl(args) {
        Ok(()) => {
            if !diagnostics.is_quiet() {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => fail(&e, diagnostics.color(), EXIT_CONFIG_ERROR),
    }
}

/// Writes the configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(NumdistError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# numdist configuration file
# Command-line flags override every value here.

[binning]
# Number of equal-width buckets (default: 10)
bins = 10

# Key range. Set both or neither; when unset the range spans the data.
# The upper bound is inclusive.
# min = 0.0
# max = 100.0

[input]
# 0-based field holding the numeric key
column = 0

# Field separator (default: any whitespace)
# delimiter = ","

[render]
# Image size in pixels (minimum 400x200)
width = 900
height = 400

# Label the value axis with counts instead of fractions of the total
absolute_axis = false

# Number of horizontal gridlines on the value axis
axis_segments = 5

# Label size in pixels
font_size = 10

# Chart colors as #rrggbb
background = "#ffffff"
frame = "#000000"
text = "#000000"
gridline = "#000000"

# Bar colors are interpolated in CIE L*a*b* space.
# The first bucket gets `end`, the last gets `start`.
[gradient]
start = { l = 65.0, a = 65.0, b = -15.0 }
end = { l = 25.0, a = -40.0, b = -35.0 }
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
