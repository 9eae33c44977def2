//! CLI configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use runtime::RuntimeConfig;
use scoring_core::ScoringConfig;

/// Configuration shared by every subcommand.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub runtime: RuntimeConfig,
    /// Overrides the platform data directory.
    pub data_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SCORER_DATA_DIR` - Directory for stored matches (default: platform-specific)
    /// - `SCORER_SQUAD_SIZE` - Squad size for sides without a player list (default: 11)
    /// - `SCORER_EVENT_BUFFER` - Event capacity per topic (default: 100)
    /// - `SCORER_COMMAND_BUFFER` - Scoring command queue size (default: 32)
    /// - `SCORER_SYNC_BUFFER` - Snapshots queued for storage (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(size) = read_env::<u32>("SCORER_SQUAD_SIZE") {
            config.runtime.scoring = ScoringConfig::with_default_squad_size(size);
        }
        if let Some(capacity) = read_env::<usize>("SCORER_EVENT_BUFFER") {
            config.runtime.event_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("SCORER_COMMAND_BUFFER") {
            config.runtime.command_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("SCORER_SYNC_BUFFER") {
            config.runtime.sync_buffer_size = capacity.max(1);
        }

        config.data_dir = env::var("SCORER_DATA_DIR").ok().map(PathBuf::from);

        config
    }

    /// Data directory: explicit flag, then environment, then platform default.
    pub fn resolve_data_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.data_dir.clone())
            .unwrap_or_else(crate::dirs::data_dir)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
