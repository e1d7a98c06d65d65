use crate::cli::{BinArgs, Cli};
use crate::config::Config;
use crate::distribution::Distribution;
use crate::output::{ColorMode, DistributionFormatter, JsonFormatter, OutputFormat, TextFormatter};
use crate::{EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR, EXIT_SUCCESS, Result};

use super::context::{
    BinningPlan, Diagnostics, fail, load_checked_config, read_samples, write_output,
};

#[must_use]
pub fn run_bin(args: &BinArgs, cli: &Cli) -> i32 {
    let diagnostics = Diagnostics::from_cli(cli);
    let config = match load_checked_config(
        args.binning.config.as_deref(),
        cli.no_config,
        &diagnostics,
    ) {
        Ok(config) => config,
        Err(e) => return fail(&e, diagnostics.color(), EXIT_CONFIG_ERROR),
    };

    match run_bin_impl(args, &config, &diagnostics) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => fail(&e, diagnostics.color(), EXIT_INPUT_ERROR),
    }
}

/// Bins the input and prints (or writes) the bucket report.
///
/// # Errors
/// Returns an error if the input cannot be read or binned, or the report
/// cannot be written.
pub(crate) fn run_bin_impl(args: &BinArgs, config: &Config, diagnostics: &Diagnostics) -> Result<()> {
    let plan = BinningPlan::resolve(config, &args.binning)?;
    let samples = read_samples(&args.binning, &plan.column, diagnostics)?;
    let distribution = plan.bin(samples, diagnostics)?;

    // Files never get escape codes.
    let color = if args.output.is_some() {
        ColorMode::Never
    } else {
        diagnostics.color()
    };
    let report = format_distribution(&distribution, args.format, color)?;
    write_output(args.output.as_deref(), &report, diagnostics.is_quiet())
}

/// Format a distribution as a text table or JSON summary.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_distribution<T>(
    distribution: &Distribution<T>,
    format: OutputFormat,
    color: ColorMode,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color).format(distribution),
        OutputFormat::Json => {
            let json = JsonFormatter.format(distribution)?;
            Ok(format!("{json}\n"))
        }
    }
}

#[cfg(test)]
#[path = "bin_tests.rs"]
mod tests;
