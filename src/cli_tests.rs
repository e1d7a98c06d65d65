use std::path::PathBuf;

use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

// ============================================================================
// render
// ============================================================================

mod render_tests {
    use super::*;

    #[test]
    fn minimal_render_reads_stdin() {
        let cli = Cli::parse_from(["numdist", "render", "-o", "chart.png"]);
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.output, PathBuf::from("chart.png"));
                assert_eq!(args.binning, BinningArgs::default());
                assert_eq!(args.width, None);
                assert!(!args.absolute);
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn render_requires_output() {
        assert!(Cli::try_parse_from(["numdist", "render", "data.txt"]).is_err());
    }

    #[test]
    fn render_with_all_options() {
        let cli = Cli::parse_from([
            "numdist",
            "render",
            "data.csv",
            "-o",
            "out.png",
            "--bins",
            "20",
            "--min",
            "-5",
            "--max",
            "5.5",
            "--column",
            "2",
            "--delimiter",
            ",",
            "--width",
            "1200",
            "--height",
            "600",
            "--absolute",
            "-c",
            "custom.toml",
        ]);
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.binning.input, Some(PathBuf::from("data.csv")));
                assert_eq!(args.binning.bins, Some(20));
                assert_eq!(args.binning.min, Some(-5.0));
                assert_eq!(args.binning.max, Some(5.5));
                assert_eq!(args.binning.column, Some(2));
                assert_eq!(args.binning.delimiter.as_deref(), Some(","));
                assert_eq!(args.binning.config, Some(PathBuf::from("custom.toml")));
                assert_eq!(args.width, Some(1200));
                assert_eq!(args.height, Some(600));
                assert!(args.absolute);
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn min_without_max_is_rejected() {
        let result = Cli::try_parse_from(["numdist", "render", "-o", "x.png", "--min", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn max_without_min_is_rejected() {
        let result = Cli::try_parse_from(["numdist", "bin", "--max", "1"]);
        assert!(result.is_err());
    }
}

// ============================================================================
// bin
// ============================================================================

mod bin_tests {
    use super::*;

    #[test]
    fn bin_defaults() {
        let cli = Cli::parse_from(["numdist", "bin"]);
        match cli.command {
            Commands::Bin(args) => {
                assert_eq!(args.format, OutputFormat::Text);
                assert_eq!(args.output, None);
                assert_eq!(args.binning.input, None);
            }
            _ => panic!("Expected Bin command"),
        }
    }

    #[test]
    fn bin_json_to_file() {
        let cli = Cli::parse_from(["numdist", "bin", "-", "-f", "json", "-o", "out.json", "-b", "4"]);
        match cli.command {
            Commands::Bin(args) => {
                assert_eq!(args.binning.input, Some(PathBuf::from("-")));
                assert_eq!(args.format, OutputFormat::Json);
                assert_eq!(args.output, Some(PathBuf::from("out.json")));
                assert_eq!(args.binning.bins, Some(4));
            }
            _ => panic!("Expected Bin command"),
        }
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["numdist", "bin", "--format", "xml"]).is_err());
    }
}

// ============================================================================
// init / config
// ============================================================================

mod config_tests {
    use super::*;

    #[test]
    fn init_defaults() {
        let cli = Cli::parse_from(["numdist", "init"]);
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.output, PathBuf::from(".numdist.toml"));
                assert!(!args.force);
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn init_with_force() {
        let cli = Cli::parse_from(["numdist", "init", "-o", "my.toml", "--force"]);
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.output, PathBuf::from("my.toml"));
                assert!(args.force);
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn config_validate_with_path() {
        let cli = Cli::parse_from(["numdist", "config", "validate", "-c", "x.toml"]);
        match cli.command {
            Commands::Config(ConfigArgs {
                action: ConfigAction::Validate { config },
            }) => assert_eq!(config, Some(PathBuf::from("x.toml"))),
            _ => panic!("Expected Config Validate command"),
        }
    }

    #[test]
    fn config_show_json() {
        let cli = Cli::parse_from(["numdist", "config", "show", "--format", "json"]);
        match cli.command {
            Commands::Config(ConfigArgs {
                action: ConfigAction::Show { config, format },
            }) => {
                assert_eq!(config, None);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Expected Config Show command"),
        }
    }
}

// ============================================================================
// Global flags
// ============================================================================

mod global_tests {
    use super::*;

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["numdist", "bin", "-vv", "--quiet", "--color", "never", "--no-config"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(cli.no_config);
    }

    #[test]
    fn color_choice_maps_to_mode() {
        assert_eq!(ColorChoice::Auto.mode(), ColorMode::Auto);
        assert_eq!(ColorChoice::Always.mode(), ColorMode::Always);
        assert_eq!(ColorChoice::Never.mode(), ColorMode::Never);
    }
}
