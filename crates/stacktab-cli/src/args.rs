use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stacktab")]
#[command(about = "Break CSV material totals into shulker boxes, stacks, and items", long_about = None)]
#[command(version)]
pub struct Cli {
    /// CSV file to read. Prompted for interactively when omitted.
    pub file: Option<PathBuf>,

    /// Rows shown per page
    #[arg(long, default_value = "5")]
    pub page_size: usize,

    /// Stop at stacks and items, without the shulker-box column
    #[arg(long)]
    pub flat: bool,

    /// TOML file with per-item stack-size overrides
    #[arg(long)]
    pub stack_sizes: Option<PathBuf>,

    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Paged terminal table
    Plain,
    /// All rows as a JSON array, no paging
    Json,
}
