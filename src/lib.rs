pub mod cli;
pub mod commands;
pub mod config;
pub mod distribution;
pub mod error;
pub mod input;
pub mod output;
pub mod render;

pub use error::{NumdistError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INPUT_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
