//! Scoring scripts: a match setup followed by the operator's events.
//!
//! ```json
//! {
//!   "setup": { "id": "final", "teamA": {...}, "teamB": {...}, "overs": 20,
//!              "tossWinnerId": "a", "decision": "bat" },
//!   "events": [
//!     { "type": "lineup", "strikerId": "a1", "nonStrikerId": "a2", "bowlerId": "b1" },
//!     { "type": "delivery", "runs": 4 },
//!     { "type": "delivery", "extra": { "kind": "wide", "extraRuns": 1 } },
//!     { "type": "undo" }
//!   ]
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use scoring_core::{Action, MatchSetup};

#[derive(Debug, Deserialize)]
pub struct Script {
    pub setup: MatchSetup,
    #[serde(default)]
    pub events: Vec<Step>,
}

/// One line of the script.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Control(Control),
    Action(Action),
}

/// Operator controls handled by the runtime rather than the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Control {
    Undo,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse scoring script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?;
        Self::from_json(&json)
    }
}
