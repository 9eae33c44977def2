//! Subcommands.

mod list;
mod replay;
mod show;

pub use list::List;
pub use replay::Replay;
pub use show::Show;

/// How a match is printed.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable scorecard
    Scorecard,
    /// Full snapshot as pretty-printed JSON
    Json,
}

impl OutputFormat {
    pub fn print(self, state: &scoring_core::Match) -> anyhow::Result<()> {
        match self {
            OutputFormat::Scorecard => print!("{}", crate::scorecard::render(state)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(state)?),
        }
        Ok(())
    }
}
