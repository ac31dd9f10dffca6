//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paginate a JSON array
#[derive(Parser, Debug)]
#[command(name = crate::NAME, version = crate::VERSION)]
#[command(author, about, long_about = None)]
pub struct Cli {
    /// Input file holding a JSON array (reads stdin when absent)
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Page size, overrides the configuration file
    #[arg(short, long, global = true)]
    pub page_size: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the elements of one page
    Page {
        /// 1-based page number (defaults to the configured start page)
        page: Option<usize>,
    },

    /// Print one page with its pagination metadata
    Details {
        /// 1-based page number (defaults to the configured start page)
        page: Option<usize>,
    },

    /// Print total count, total pages and page size
    Summary,

    /// Print every page with metadata
    All,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
