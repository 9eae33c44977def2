//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific data directory for stored matches
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/scorer/matches`
/// - Linux: `~/.local/share/scorer/matches` (or `$XDG_DATA_HOME/scorer/matches`)
/// - Windows: `%APPDATA%\scorer\matches`
/// - Fallback: `./scorer_data/matches`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "scorer")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./scorer_data"))
        .join("matches")
}
