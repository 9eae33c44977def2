//! Replays a scoring script through the runtime.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::broadcast;
use tracing::{info, warn};

use runtime::{
    Event, FileMatchRepository, MatchEvent, MatchRepository, Runtime, RuntimeConfig,
    RuntimeError, Topic,
};
use scoring_core::{Match, Signals};

use super::OutputFormat;
use crate::config::CliConfig;
use crate::script::{Control, Script, Step};

/// Replay a scoring script and store the resulting match
#[derive(Parser)]
pub struct Replay {
    /// Path to the JSON script (setup plus events)
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Custom data directory (defaults to platform-specific location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Do not store the match
    #[arg(long)]
    no_save: bool,

    /// Log rejected events and carry on instead of stopping
    #[arg(long)]
    keep_going: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "scorecard")]
    format: OutputFormat,
}

impl Replay {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let script = Script::load(&self.script)?;

        let repository: Option<Arc<dyn MatchRepository>> = if self.no_save {
            None
        } else {
            let data_dir = config.resolve_data_dir(self.data_dir);
            let repo = FileMatchRepository::new(&data_dir).with_context(|| {
                format!("Failed to open data directory: {}", data_dir.display())
            })?;
            info!("Storing matches in {}", data_dir.display());
            let repo: Arc<dyn MatchRepository> = Arc::new(repo);
            Some(repo)
        };

        let state = run_script(script, &config.runtime, repository, self.keep_going).await?;
        self.format.print(&state)
    }
}

/// Feeds every scripted step to a fresh runtime and returns the final
/// snapshot. Storage (if any) has caught up by the time this returns.
pub async fn run_script(
    script: Script,
    config: &RuntimeConfig,
    repository: Option<Arc<dyn MatchRepository>>,
    keep_going: bool,
) -> Result<Arc<Match>> {
    let mut builder = Runtime::builder()
        .config(config.clone())
        .new_match(script.setup);
    if let Some(repository) = repository {
        builder = builder.repository(repository);
    }
    let runtime = builder.build().await?;
    let handle = runtime.handle();
    let commentary = tokio::spawn(commentary(handle.subscribe(Topic::Match)));

    let mut failure = None;
    for (index, step) in script.events.into_iter().enumerate() {
        let number = index + 1;
        match step {
            Step::Control(Control::Undo) => {
                if handle.undo().await?.is_none() {
                    warn!("event #{number}: nothing to undo");
                }
            }
            Step::Action(action) => {
                let name = action.name();
                match handle.submit(action).await {
                    Ok(_) => {}
                    Err(RuntimeError::Rejected(e)) if keep_going => {
                        warn!("event #{number} ({name}) rejected: {e}");
                    }
                    Err(e) => {
                        failure = Some(
                            anyhow::Error::new(e)
                                .context(format!("event #{number} ({name}) failed")),
                        );
                        break;
                    }
                }
            }
        }
    }

    let state = handle.snapshot().await?;
    drop(handle);
    runtime.shutdown().await?;
    commentary.await.context("commentary task failed")?;

    match failure {
        Some(error) => Err(error),
        None => Ok(state),
    }
}

/// Logs over, wicket and result milestones until the runtime shuts down.
async fn commentary(mut events: broadcast::Receiver<Event>) {
    loop {
        match events.recv().await {
            Ok(Event::Match(event)) => narrate(&event),
            Ok(_) => {}
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!("commentary skipped {skipped} events");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

fn narrate(event: &MatchEvent) {
    match event {
        MatchEvent::ActionApplied {
            signals, snapshot, ..
        } if signals.contains(Signals::WICKET_FELL) => {
            let innings = snapshot.current_innings();
            if let Some(wicket) = innings.fall_of_wickets.last() {
                info!(
                    "Wicket! {} {} ({}/{})",
                    wicket.player_out_id,
                    crate::scorecard::describe_dismissal(wicket),
                    innings.score,
                    innings.wickets
                );
            }
        }
        MatchEvent::OverComplete {
            over_number,
            bowler_id,
            summary,
            ..
        } => {
            info!("End of over {} ({}): {}", over_number + 1, bowler_id, summary);
        }
        MatchEvent::InningsComplete {
            target: Some(target),
        } => {
            info!("Innings complete, target {target}");
        }
        MatchEvent::MatchComplete {
            result: Some(result),
            ..
        } => {
            info!("{result}");
        }
        MatchEvent::Undone { remaining, .. } => {
            info!("Undo ({remaining} more available)");
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use runtime::InMemoryMatchRepository;
    use scoring_core::MatchStatus;

    use super::*;

    const DEMO: &str = include_str!("../../demos/final.json");

    #[tokio::test]
    async fn demo_script_plays_to_a_result_and_is_stored() {
        let script = Script::from_json(DEMO).unwrap();
        let repo = Arc::new(InMemoryMatchRepository::new());
        let sink: Arc<dyn MatchRepository> = repo.clone();

        let state = run_script(script, &RuntimeConfig::default(), Some(sink), false)
            .await
            .unwrap();

        assert_eq!(state.status, MatchStatus::Completed);
        assert_eq!(state.innings1.score, 21);
        assert_eq!(state.innings1.wickets, 1);
        assert_eq!(state.target, Some(22));
        assert_eq!(state.result.as_deref(), Some("Bravo won by 10 wickets"));

        let stored = repo.load("final").unwrap().expect("stored");
        assert_eq!(stored, *state);
    }

    #[tokio::test]
    async fn replayed_match_lands_in_the_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileMatchRepository::new(dir.path()).unwrap();
        let sink: Arc<dyn MatchRepository> = Arc::new(repo);

        let script = Script::from_json(DEMO).unwrap();
        let state = run_script(script, &RuntimeConfig::default(), Some(sink), false)
            .await
            .unwrap();

        let reopened = FileMatchRepository::new(dir.path()).unwrap();
        assert_eq!(reopened.list_ids().unwrap(), vec!["final".to_string()]);
        let stored = reopened.load("final").unwrap().expect("stored");
        assert_eq!(stored, *state);
    }

    #[tokio::test]
    async fn rejected_event_stops_the_replay() {
        let json = r#"{
            "setup": {
                "id": "m", "teamA": { "id": "a", "name": "A" }, "teamB": { "id": "b", "name": "B" },
                "overs": 1, "tossWinnerId": "a", "decision": "bat"
            },
            "events": [
                { "type": "delivery", "runs": 1 }
            ]
        }"#;
        let script = Script::from_json(json).unwrap();

        let err = run_script(script, &RuntimeConfig::default(), None, false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("event #1 (delivery)"));
    }

    #[tokio::test]
    async fn keep_going_skips_rejected_events() {
        let json = r#"{
            "setup": {
                "id": "m", "teamA": { "id": "a", "name": "A" }, "teamB": { "id": "b", "name": "B" },
                "overs": 1, "tossWinnerId": "a", "decision": "bat"
            },
            "events": [
                { "type": "delivery", "runs": 1 },
                { "type": "lineup", "strikerId": "a1", "nonStrikerId": "a2", "bowlerId": "b1" },
                { "type": "delivery", "runs": 3 },
                { "type": "undo" },
                { "type": "undo" },
                { "type": "undo" }
            ]
        }"#;
        let script = Script::from_json(json).unwrap();

        let state = run_script(script, &RuntimeConfig::default(), None, true)
            .await
            .unwrap();
        assert_eq!(state.status, MatchStatus::Upcoming);
    }
}
