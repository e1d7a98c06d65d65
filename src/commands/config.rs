use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{
    Config, ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult,
    validate_config_semantics,
};
use crate::output::OutputFormat;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, NumdistError, Result};

use super::context::{Diagnostics, fail, load_config};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let diagnostics = Diagnostics::from_cli(cli);
    let result = match &args.action {
        ConfigAction::Validate { config } => {
            run_config_validate_impl(config.as_deref()).map(|path| {
                format!("Configuration is valid: {}\n", path.display())
            })
        }
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), *format, cli.no_config)
        }
    };

    match result {
        Ok(output) => {
            if !diagnostics.is_quiet() {
                print!("{output}");
            }
            EXIT_SUCCESS
        }
        Err(e) => fail(&e, diagnostics.color(), EXIT_CONFIG_ERROR),
    }
}

/// Validates a configuration file, returning the path that was checked.
///
/// Without an explicit path the usual discovery applies, and finding no
/// file is an error.
///
/// # Errors
/// Returns an error if no file is found, it contains invalid TOML, or has
/// semantic errors.
pub(crate) fn run_config_validate_impl(config_path: Option<&Path>) -> Result<std::path::PathBuf> {
    let loader = FileConfigLoader::new();
    let loaded = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    let Some(source) = loaded.source else {
        return Err(NumdistError::Config(format!(
            "No configuration file found (looked for {LOCAL_CONFIG_NAME} and the user config directory)"
        )));
    };

    validate_config_semantics(&loaded.config)?;
    Ok(source)
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: OutputFormat,
    no_config: bool,
) -> Result<String> {
    let loaded = load_config(config_path, no_config)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => format_config_text(&loaded),
    }
}

/// Effective configuration as TOML, headed by where it came from.
///
/// # Errors
/// Returns an error if the configuration cannot be serialized.
pub(crate) fn format_config_text(loaded: &LoadResult) -> Result<String> {
    let body = toml_string(&loaded.config)?;
    let source = loaded
        .source
        .as_ref()
        .map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());
    Ok(format!("# Effective configuration ({source})\n\n{body}"))
}

fn toml_string(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).map_err(|e| NumdistError::Config(e.to_string()))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
