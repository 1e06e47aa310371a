mod args;
mod commands;
pub mod config;
pub mod prompt;
pub mod source;
mod views;

pub use args::{Cli, OutputFormat};
pub use commands::run;
