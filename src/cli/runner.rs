//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::PaginatorConfig;
use crate::error::{Error, Result, ResultExt};
use crate::pagination::JsonPaginator;
use serde_json::{json, Value};
use std::fs;
use std::io::Read;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let input = self.load_input()?;
        for msg in self.execute(&input)? {
            self.output_message(&msg);
        }
        Ok(())
    }

    /// Execute the command against raw JSON input, returning the messages to print
    pub fn execute(&self, input: &str) -> Result<Vec<Value>> {
        let config = self.load_config()?;
        let mut paginator = JsonPaginator::from_json_str(input)?;
        paginator.set_page_size(self.cli.page_size.unwrap_or(config.page_size))?;

        tracing::debug!(
            "Loaded {} items, page_size={}",
            paginator.total_count(),
            paginator.page_size()
        );

        match &self.cli.command {
            Commands::Page { page } => {
                let page = page.unwrap_or(config.start_page);
                let result = paginator.paginate(page)?;
                Ok(vec![Value::Array(result)])
            }
            Commands::Details { page } => {
                let page = page.unwrap_or(config.start_page);
                let details = paginator.paginate_with_details(page)?;
                Ok(vec![serde_json::to_value(details)?])
            }
            Commands::Summary => Ok(vec![json!({
                "total_count": paginator.total_count(),
                "total_pages": paginator.page_count(),
                "page_size": paginator.page_size(),
            })]),
            Commands::All => {
                // An empty collection still has a (blank) first page
                let last = paginator.page_count().max(1);
                (1..=last)
                    .map(|page| -> Result<Value> {
                        let details = paginator.paginate_with_details(page)?;
                        Ok(serde_json::to_value(details)?)
                    })
                    .collect()
            }
        }
    }

    /// Load configuration, falling back to defaults
    fn load_config(&self) -> Result<PaginatorConfig> {
        match &self.cli.config {
            Some(path) => PaginatorConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display())),
            None => Ok(PaginatorConfig::default()),
        }
    }

    /// Read the input file, or stdin when none was given
    pub fn load_input(&self) -> Result<String> {
        if let Some(path) = &self.cli.input {
            if !path.exists() {
                return Err(Error::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            return Ok(fs::read_to_string(path)?);
        }

        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    }

    /// Output a message to stdout
    fn output_message(&self, msg: &Value) {
        println!("{}", render(self.cli.format, msg));
    }
}

/// Format a message for output
pub fn render(format: OutputFormat, msg: &Value) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(msg).unwrap_or_default(),
        OutputFormat::Pretty => serde_json::to_string_pretty(msg).unwrap_or_default(),
    }
}
