//! On-disk locations and JSON file helpers for gameweek snapshots and teams.
//!
//! Files live under the user cache directory:
//! - `fpl-live/gameweek-{n}.json`: a gameweek snapshot
//! - `fpl-live/team-{entry}.json`: a manager's current squad

use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::cli::types::{EntryId, Gameweek};
use crate::error::Result;


pub const CACHE_DIR_NAME: &str = "fpl-live";

/// Path: ~/.cache/fpl-live
pub fn cache_base() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join(CACHE_DIR_NAME)
}

/// Path: ~/.cache/fpl-live/gameweek-{gameweek}.json
pub fn snapshot_path(gameweek: Gameweek) -> PathBuf {
    cache_base().join(format!("gameweek-{}.json", gameweek))
}

/// Path: ~/.cache/fpl-live/team-{entry}.json
pub fn team_path(entry: EntryId) -> PathBuf {
    cache_base().join(format!("team-{}.json", entry))
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Read and deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!(path = %path.display(), "reading json");
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Serialize a value as pretty JSON and write it to `path`.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    write_string(path, &contents)?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote json");
    Ok(())
}
