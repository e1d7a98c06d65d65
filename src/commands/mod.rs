mod bin;
mod config;
mod context;
mod init;
mod render;

pub use bin::{format_distribution, run_bin};
pub use config::run_config;
pub use init::{generate_config_template, run_init, run_init_impl};
pub use render::{render_options, run_render};
