//! Lists stored matches.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use runtime::{FileMatchRepository, MatchRepository};

use crate::config::CliConfig;

/// List stored matches
#[derive(Parser)]
pub struct List {
    /// Custom data directory (defaults to platform-specific location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl List {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let data_dir = config.resolve_data_dir(self.data_dir);
        let repo = FileMatchRepository::new(&data_dir)?;
        let ids = repo.list_ids()?;

        if ids.is_empty() {
            println!("No stored matches in {}", data_dir.display());
            return Ok(());
        }

        for id in ids {
            match repo.load(&id) {
                Ok(Some(state)) => {
                    let summary = state.result.clone().unwrap_or_else(|| state.status.to_string());
                    println!(
                        "{id:<20} {} v {}  {}",
                        state.team_a.short_name, state.team_b.short_name, summary
                    );
                }
                Ok(None) => {}
                Err(e) => println!("{id:<20} unreadable: {e}"),
            }
        }
        Ok(())
    }
}
