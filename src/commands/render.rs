use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::cli::{Cli, RenderArgs};
use crate::config::Config;
use crate::render::{DistributionRenderer, Layout, RenderOptions};
use crate::{EXIT_CONFIG_ERROR, EXIT_INPUT_ERROR, EXIT_SUCCESS, Result};

use super::context::{
    BinningPlan, Diagnostics, create_parent_dirs, fail, load_checked_config, read_samples,
};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    let diagnostics = Diagnostics::from_cli(cli);
    let config = match load_checked_config(
        args.binning.config.as_deref(),
        cli.no_config,
        &diagnostics,
    ) {
        Ok(config) => config,
        Err(e) => return fail(&e, diagnostics.color(), EXIT_CONFIG_ERROR),
    };

    match run_render_impl(args, &config, &diagnostics) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => fail(&e, diagnostics.color(), EXIT_INPUT_ERROR),
    }
}

/// Config render settings with `--width`, `--height` and `--absolute` applied.
#[must_use]
pub fn render_options(config: &Config, args: &RenderArgs) -> RenderOptions {
    let mut options = config.render_options();
    if let Some(width) = args.width {
        options.width = width;
    }
    if let Some(height) = args.height {
        options.height = height;
    }
    options.absolute_axis |= args.absolute;
    options
}

/// Bins the input and writes the chart as PNG.
///
/// # Errors
/// Returns an error if the size is invalid, the input cannot be read or
/// binned, or the image cannot be written.
pub(crate) fn run_render_impl(
    args: &RenderArgs,
    config: &Config,
    diagnostics: &Diagnostics,
) -> Result<()> {
    let options = render_options(config, args);
    // Reject the canvas before consuming stdin.
    Layout::new(options.width, options.height)?;

    let plan = BinningPlan::resolve(config, &args.binning)?;
    let samples = read_samples(&args.binning, &plan.column, diagnostics)?;
    let distribution = plan.bin(samples, diagnostics)?;

    let image: RgbImage = DistributionRenderer::new(options).render(&distribution)?;
    save_png(&image, &args.output)?;

    if !diagnostics.is_quiet() {
        println!(
            "Rendered {} items in {} buckets to {} ({}x{})",
            distribution.total_count(),
            distribution.len(),
            args.output.display(),
            image.width(),
            image.height()
        );
    }
    Ok(())
}

fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    create_parent_dirs(path)?;
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
