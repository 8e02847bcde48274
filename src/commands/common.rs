//! Input resolution shared across commands.
//!
//! Snapshot and team files are read from an explicit path when one is given,
//! otherwise from the cache directory.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::{
    cli::{SnapshotSource, TeamSource},
    core::{read_json, snapshot_path, team_path, write_json},
    error::FplError,
    fpl::types::{GameweekSnapshot, MyTeam},
    squad::Lineup,
    EntryId, Result, ENTRY_ID_ENV_VAR,
};

/// Use the given entry ID, or fall back to `FPL_ENTRY_ID`.
pub fn resolve_entry_id(entry: Option<EntryId>) -> Result<EntryId> {
    entry
        .or_else(|| {
            std::env::var(ENTRY_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<EntryId>().ok())
        })
        .ok_or_else(|| FplError::MissingEntryId {
            env_var: ENTRY_ID_ENV_VAR.to_string(),
        })
}

pub fn snapshot_file(source: &SnapshotSource) -> PathBuf {
    source
        .snapshot
        .clone()
        .unwrap_or_else(|| snapshot_path(source.gameweek))
}

pub fn team_file(source: &TeamSource) -> Result<PathBuf> {
    match &source.team {
        Some(path) => Ok(path.clone()),
        None => Ok(team_path(resolve_entry_id(source.entry)?)),
    }
}

/// Load the gameweek snapshot named by `source`.
pub fn load_snapshot(source: &SnapshotSource) -> Result<GameweekSnapshot> {
    let path = snapshot_file(source);
    let snapshot: GameweekSnapshot = read_json(&path)?;

    if source.snapshot.is_none() && snapshot.gameweek != source.gameweek {
        warn!(
            requested = %source.gameweek,
            found = %snapshot.gameweek,
            path = %path.display(),
            "cached snapshot is for a different gameweek"
        );
    }
    debug!(
        gameweek = %snapshot.gameweek,
        elements = snapshot.elements.len(),
        fixtures = snapshot.fixtures.len(),
        entries = snapshot.entries.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

/// Load and validate the squad named by `source`.
pub fn load_team(source: &TeamSource) -> Result<Lineup> {
    let path = team_file(source)?;
    let team: MyTeam = read_json(&path)?;
    Ok(team.picks)
}

/// Write `lineup` in the same `{"picks": [...]}` shape it is read from.
pub fn save_team(path: &Path, lineup: &Lineup) -> Result<()> {
    write_json(
        path,
        &MyTeam {
            picks: lineup.clone(),
        },
    )
}
