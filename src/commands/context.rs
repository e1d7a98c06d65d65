use std::fs;
use std::path::Path;

use crate::cli::{BinningArgs, Cli};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult, validate_config_semantics};
use crate::distribution::{self, Distribution, KeyRange};
use crate::input::{self, KeyColumn, Sample};
use crate::output::{ColorMode, ErrorOutput};
use crate::{NumdistError, Result};

/// Stderr diagnostics gated on `--verbose` / `--quiet`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Diagnostics {
    verbose: u8,
    quiet: bool,
    color: ColorMode,
}

impl Diagnostics {
    pub(crate) const fn new(verbose: u8, quiet: bool, color: ColorMode) -> Self {
        Self {
            verbose,
            quiet,
            color,
        }
    }

    pub(crate) const fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.verbose, cli.quiet, cli.color.mode())
    }

    pub(crate) const fn color(&self) -> ColorMode {
        self.color
    }

    pub(crate) const fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Shown with `-v`.
    pub(crate) fn info(&self, message: &str) {
        if self.verbose >= 1 && !self.quiet {
            eprintln!("{message}");
        }
    }

    /// Shown with `-vv`.
    pub(crate) fn debug(&self, message: &str) {
        if self.verbose >= 2 && !self.quiet {
            eprintln!("  {message}");
        }
    }

    pub(crate) fn warn(&self, message: &str, suggestion: Option<&str>) {
        if !self.quiet {
            ErrorOutput::new(self.color).print_warning_with_detail(message, None, suggestion);
        }
    }
}

/// Load configuration from `config_path`, or discover it.
///
/// # Errors
/// Returns an error if the config file cannot be read or parsed.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Load and validate configuration, logging where it came from.
///
/// # Errors
/// Returns an error if the config cannot be loaded or fails validation.
pub(crate) fn load_checked_config(
    config_path: Option<&Path>,
    no_config: bool,
    diagnostics: &Diagnostics,
) -> Result<Config> {
    let loaded = load_config(config_path, no_config)?;
    match &loaded.source {
        Some(path) => diagnostics.info(&format!("Using config: {}", path.display())),
        None => diagnostics.info("Using default configuration"),
    }
    validate_config_semantics(&loaded.config)?;
    Ok(loaded.config)
}

/// Binning parameters after applying CLI overrides to the config.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BinningPlan {
    pub bins: usize,
    pub range: Option<KeyRange>,
    pub column: KeyColumn,
}

impl BinningPlan {
    /// CLI arguments take precedence over the config file.
    ///
    /// # Errors
    /// Returns `InvalidRange` for unusable bounds.
    pub(crate) fn resolve(config: &Config, args: &BinningArgs) -> Result<Self> {
        let bins = args.bins.unwrap_or(config.binning.bins);
        let range = match (args.min, args.max) {
            (Some(min), Some(max)) => Some(KeyRange::new(min, max)?),
            _ => config.binning.range()?,
        };
        let column = KeyColumn::new(
            args.column.unwrap_or(config.input.column),
            args.delimiter.clone().or_else(|| config.input.delimiter.clone()),
        );
        if column.delimiter() == Some("") {
            return Err(NumdistError::Config(
                "delimiter must not be empty".to_string(),
            ));
        }
        Ok(Self {
            bins,
            range,
            column,
        })
    }

    /// Bin `samples`, warning about any that fall outside an explicit range.
    ///
    /// # Errors
    /// Returns the binner's error for empty input or a bad range or bin count.
    /// Samples the binner drops: keys outside the explicit range, and NaN.
    pub(crate) fn skipped(&self, samples: &[Sample]) -> Vec<Sample> {
        samples
            .iter()
            .filter(|sample| match self.range {
                Some(range) => !range.contains(sample.key),
                None => sample.key.is_nan(),
            })
            .copied()
            .collect()
    }

    pub(crate) fn bin(
        &self,
        samples: Vec<Sample>,
        diagnostics: &Diagnostics,
    ) -> Result<Distribution<Sample>> {
        let read = samples.len();
        let skipped = self.skipped(&samples);
        let distribution = match self.range {
            Some(range) => {
                distribution::bin(samples, |s| s.key, range.min(), range.max(), self.bins)?
            }
            None => distribution::bin_auto(samples, |s| s.key, self.bins)?,
        };

        if !skipped.is_empty() {
            diagnostics.warn(
                &format!(
                    "{} of {read} items fall outside the key range and were skipped",
                    skipped.len()
                ),
                Some("Widen --min/--max, or omit both to derive the range from the data"),
            );
            for sample in &skipped {
                diagnostics.debug(&format!("line {}: key {} skipped", sample.line, sample.key));
            }
        }
        diagnostics.info(&format!(
            "Binned {} items into {} buckets over [{}, {}]",
            distribution.total_count(),
            distribution.len(),
            distribution.min_range(),
            distribution.max_range()
        ));
        Ok(distribution)
    }
}

/// Read samples from the input named in `args` (stdin when absent or `-`).
///
/// # Errors
/// Returns an error if the input cannot be read or a key does not parse.
pub(crate) fn read_samples(
    args: &BinningArgs,
    column: &KeyColumn,
    diagnostics: &Diagnostics,
) -> Result<Vec<Sample>> {
    let source = args
        .input
        .as_deref()
        .filter(|p| p.as_os_str() != input::STDIN_MARKER);
    match source {
        Some(path) => diagnostics.info(&format!("Reading {}", path.display())),
        None => diagnostics.info("Reading standard input"),
    }

    let reader = input::open_input(source)?;
    let samples = input::read_samples(reader, column)?;
    diagnostics.debug(&format!("{} records parsed", samples.len()));
    Ok(samples)
}

/// Write output to a file or stdout.
///
/// `quiet` only silences stdout; file writes always happen.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        create_parent_dirs(path)?;
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

pub(crate) fn create_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Report `error` on stderr and return `exit_code`.
pub(crate) fn fail(error: &NumdistError, color: ColorMode, exit_code: i32) -> i32 {
    ErrorOutput::new(color).report(error);
    exit_code
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
