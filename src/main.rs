use clap::Parser;

use numdist::cli::{Cli, Commands};
use numdist::commands::{run_bin, run_config, run_init, run_render};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Bin(args) => run_bin(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
