//! Captain and vice-captain multipliers.

use serde::Serialize;
use tracing::{debug, warn};

use super::Pick;
use crate::cli::types::PlayerId;

pub const CAPTAIN_MULTIPLIER: u8 = 2;
pub const TRIPLE_CAPTAIN_MULTIPLIER: u8 = 4;

/// Which armband ended up earning the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptainRole {
    Captain,
    ViceCaptain,
}

/// The player whose score is multiplied, and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaptainBonus {
    pub player_id: PlayerId,
    pub role: CaptainRole,
    pub multiplier: u8,
    /// The player's unmultiplied score.
    pub base_points: i32,
}

impl CaptainBonus {
    /// Multiplied score.
    pub fn points(&self) -> i32 {
        self.base_points * i32::from(self.multiplier)
    }

    /// Points on top of what the player already scores as a starter.
    pub fn extra_points(&self) -> i32 {
        self.base_points * (i32::from(self.multiplier) - 1)
    }
}

/// Resolve who receives the captain's multiplier.
///
/// The captain keeps the armband if they are still among the corrected
/// starters; otherwise it passes to the vice-captain. If neither is left the
/// bonus is forfeited and `None` is returned.
pub fn resolve_captaincy<F>(
    corrected_xi: &[Pick],
    captain: PlayerId,
    vice_captain: PlayerId,
    triple_captain: bool,
    score_of: F,
) -> Option<CaptainBonus>
where
    F: Fn(PlayerId) -> i32,
{
    let multiplier = if triple_captain {
        TRIPLE_CAPTAIN_MULTIPLIER
    } else {
        CAPTAIN_MULTIPLIER
    };
    let present = |id: PlayerId| corrected_xi.iter().any(|p| p.player_id == id);

    let (player_id, role) = if present(captain) {
        (captain, CaptainRole::Captain)
    } else if present(vice_captain) {
        debug!(%captain, %vice_captain, "captain substituted out, vice-captain takes the armband");
        (vice_captain, CaptainRole::ViceCaptain)
    } else {
        warn!(%captain, %vice_captain, "captain and vice-captain both out, captaincy bonus forfeited");
        return None;
    };

    Some(CaptainBonus {
        player_id,
        role,
        multiplier,
        base_points: score_of(player_id),
    })
}
