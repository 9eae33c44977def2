//! Prints a stored match.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use runtime::{FileMatchRepository, MatchRepository};

use super::OutputFormat;
use crate::config::CliConfig;

/// Print the scorecard of a stored match
#[derive(Parser)]
pub struct Show {
    /// Match id (as given in the script setup)
    #[arg(value_name = "MATCH_ID")]
    match_id: String,

    /// Custom data directory (defaults to platform-specific location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "scorecard")]
    format: OutputFormat,
}

impl Show {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let data_dir = config.resolve_data_dir(self.data_dir);
        let repo = FileMatchRepository::new(&data_dir)?;

        let state = repo
            .load(&self.match_id)
            .with_context(|| format!("Failed to load match {:?}", self.match_id))?
            .with_context(|| {
                format!(
                    "Match {:?} not found in {}",
                    self.match_id,
                    data_dir.display()
                )
            })?;

        self.format.print(&state)
    }
}
