use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::NumdistError;
use crate::cli::BinningArgs;
use crate::output::ColorMode;

fn quiet() -> Diagnostics {
    Diagnostics::new(0, true, ColorMode::Never)
}

fn args(input: Option<PathBuf>, output: PathBuf) -> RenderArgs {
    RenderArgs {
        binning: BinningArgs {
            input,
            ..BinningArgs::default()
        },
        output,
        width: None,
        height: None,
        absolute: false,
    }
}

fn write_data(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("data.txt");
    let data: String = (0..100).map(|i| format!("{}\n", i % 13)).collect();
    fs::write(&path, data).unwrap();
    path
}

#[test]
fn options_follow_config_by_default() {
    let mut config = Config::default();
    config.render.width = 700;
    config.render.absolute_axis = true;

    let options = render_options(&config, &args(None, PathBuf::from("x.png")));
    assert_eq!(options.width, 700);
    assert_eq!(options.height, 400);
    assert!(options.absolute_axis);
}

#[test]
fn cli_flags_override_config() {
    let mut render_args = args(None, PathBuf::from("x.png"));
    render_args.width = Some(1024);
    render_args.height = Some(512);
    render_args.absolute = true;

    let options = render_options(&Config::default(), &render_args);
    assert_eq!((options.width, options.height), (1024, 512));
    assert!(options.absolute_axis);
}

#[test]
fn writes_png_of_requested_size() {
    let dir = TempDir::new().unwrap();
    let input = write_data(&dir);
    let output = dir.path().join("charts").join("out.png");

    let mut render_args = args(Some(input), output.clone());
    render_args.width = Some(640);
    render_args.height = Some(320);

    run_render_impl(&render_args, &Config::default(), &quiet()).unwrap();

    let image = image::open(&output).unwrap();
    assert_eq!((image.width(), image.height()), (640, 320));
}

#[test]
fn rejects_small_canvas_before_reading_input() {
    let dir = TempDir::new().unwrap();
    let mut render_args = args(
        Some(dir.path().join("missing.txt")),
        dir.path().join("out.png"),
    );
    render_args.width = Some(399);

    let err = run_render_impl(&render_args, &Config::default(), &quiet()).unwrap_err();
    assert!(matches!(
        err,
        NumdistError::InvalidResolution {
            width: 399,
            height: 400
        }
    ));
    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn bad_key_reports_line() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("data.txt");
    fs::write(&input, "1\n2\nthree\n").unwrap();

    let err = run_render_impl(
        &args(Some(input), dir.path().join("out.png")),
        &Config::default(),
        &quiet(),
    )
    .unwrap_err();
    assert!(matches!(err, NumdistError::Parse { line: 3, .. }));
}
