//! Squad model and the rules that operate on it.
//!
//! - `formation`: formation counting and legality
//! - `autosub`: automatic substitution of non-playing starters
//! - `captaincy`: captain / vice-captain multiplier resolution
//! - `editor`: manager-driven lineup edits

pub mod autosub;
pub mod captaincy;
pub mod editor;
pub mod formation;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{
    cli::types::{PlayerId, Position},
    error::{FplError, Result},
};
use formation::{Formation, STARTING_XI};

pub use autosub::{resolve_auto_subs, resolve_lineup_auto_subs, AutoSubOutcome, Substitution};
pub use captaincy::{resolve_captaincy, CaptainBonus, CaptainRole};
pub use editor::{apply_edit, reorder_bench, set_captain, set_vice_captain, substitute, EditRequest};
pub use formation::is_valid_formation;

/// Players in a full squad.
pub const SQUAD_SIZE: usize = 15;

/// Bench slot reserved for the backup goalkeeper.
pub const BENCH_GOALKEEPER_SLOT: u8 = 12;

/// One player in a manager's squad.
///
/// Field names on the wire follow the FPL picks payload, where `position`
/// is the squad slot (1-15) and `element_type` the playing position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pick {
    #[serde(rename = "element")]
    pub player_id: PlayerId,
    #[serde(rename = "element_type")]
    pub role: Position,
    #[serde(rename = "position")]
    pub slot: u8,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_vice_captain: bool,
}

impl Pick {
    pub fn new(player_id: PlayerId, role: Position, slot: u8) -> Self {
        Self {
            player_id,
            role,
            slot,
            is_captain: false,
            is_vice_captain: false,
        }
    }

    /// Slots 1-11 start, 12-15 sit on the bench.
    pub fn is_starter(&self) -> bool {
        (1..=STARTING_XI as u8).contains(&self.slot)
    }

    pub fn is_bench(&self) -> bool {
        !self.is_starter()
    }
}

/// A validated 15-player squad, ordered by slot.
///
/// Construction checks every squad invariant, so code holding a `Lineup`
/// can rely on slot 12 being the bench goalkeeper and on there being
/// exactly one captain and one vice-captain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Pick>", into = "Vec<Pick>")]
pub struct Lineup {
    picks: Vec<Pick>,
}

impl Lineup {
    pub fn new(mut picks: Vec<Pick>) -> Result<Self> {
        picks.sort_by_key(|p| p.slot);
        validate(&picks)?;
        Ok(Self { picks })
    }

    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    pub fn into_picks(self) -> Vec<Pick> {
        self.picks
    }

    pub fn starters(&self) -> &[Pick] {
        &self.picks[..STARTING_XI]
    }

    /// Bench goalkeeper followed by the outfield bench in priority order.
    pub fn bench(&self) -> &[Pick] {
        &self.picks[STARTING_XI..]
    }

    pub fn bench_goalkeeper(&self) -> &Pick {
        &self.picks[BENCH_GOALKEEPER_SLOT as usize - 1]
    }

    pub fn outfield_bench(&self) -> &[Pick] {
        &self.picks[BENCH_GOALKEEPER_SLOT as usize..]
    }

    pub fn get(&self, player_id: PlayerId) -> Option<&Pick> {
        self.picks.iter().find(|p| p.player_id == player_id)
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.get(player_id).is_some()
    }

    pub fn captain(&self) -> Option<&Pick> {
        self.picks.iter().find(|p| p.is_captain)
    }

    pub fn vice_captain(&self) -> Option<&Pick> {
        self.picks.iter().find(|p| p.is_vice_captain)
    }

    pub fn formation(&self) -> Formation {
        Formation::from_positions(self.starters().iter().map(|p| p.role))
    }
}

impl TryFrom<Vec<Pick>> for Lineup {
    type Error = FplError;

    fn try_from(picks: Vec<Pick>) -> Result<Self> {
        Lineup::new(picks)
    }
}

impl From<Lineup> for Vec<Pick> {
    fn from(lineup: Lineup) -> Self {
        lineup.picks
    }
}

fn invalid(reason: impl Into<String>) -> FplError {
    FplError::InvalidLineup {
        reason: reason.into(),
    }
}

/// Checks squad invariants on picks already sorted by slot.
fn validate(picks: &[Pick]) -> Result<()> {
    if picks.len() != SQUAD_SIZE {
        return Err(invalid(format!(
            "expected {} players, got {}",
            SQUAD_SIZE,
            picks.len()
        )));
    }

    for (i, pick) in picks.iter().enumerate() {
        if pick.slot as usize != i + 1 {
            return Err(invalid(format!(
                "slots must run 1 to {} without gaps, found {} at position {}",
                SQUAD_SIZE,
                pick.slot,
                i + 1
            )));
        }
    }

    let mut seen = HashSet::new();
    if let Some(dup) = picks.iter().find(|p| !seen.insert(p.player_id)) {
        return Err(invalid(format!("player {} appears twice", dup.player_id)));
    }

    if picks[BENCH_GOALKEEPER_SLOT as usize - 1].role != Position::Goalkeeper {
        return Err(invalid(format!(
            "slot {} must hold the bench goalkeeper",
            BENCH_GOALKEEPER_SLOT
        )));
    }
    if let Some(extra) = picks[BENCH_GOALKEEPER_SLOT as usize..]
        .iter()
        .find(|p| p.role == Position::Goalkeeper)
    {
        return Err(invalid(format!(
            "goalkeeper {} can't sit in outfield bench slot {}",
            extra.player_id, extra.slot
        )));
    }

    let formation = Formation::from_positions(picks[..STARTING_XI].iter().map(|p| p.role));
    if !formation.is_valid() {
        return Err(invalid(format!("starting formation {} is not legal", formation)));
    }

    let captains = picks.iter().filter(|p| p.is_captain).count();
    let vice_captains = picks.iter().filter(|p| p.is_vice_captain).count();
    if captains != 1 || vice_captains != 1 {
        return Err(invalid(format!(
            "expected one captain and one vice-captain, got {} and {}",
            captains, vice_captains
        )));
    }
    if let Some(both) = picks.iter().find(|p| p.is_captain && p.is_vice_captain) {
        return Err(invalid(format!(
            "player {} can't be captain and vice-captain",
            both.player_id
        )));
    }

    Ok(())
}
