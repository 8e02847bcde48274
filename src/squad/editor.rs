//! Manager-driven lineup edits.
//!
//! Every operation takes the current lineup by reference and returns a new
//! one. A rejected edit leaves nothing half-applied.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use super::{formation::Formation, formation::STARTING_XI, Lineup, Pick};
use crate::{
    cli::types::{PlayerId, Position},
    error::{EditError, Result},
};

#[cfg(test)]
mod tests;

/// Most bench/starter swaps allowed in one request.
pub const MAX_SUBSTITUTIONS: usize = 4;

/// A batch of changes to apply to a lineup in one go.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRequest {
    #[serde(default)]
    pub players_in: Vec<PlayerId>,
    #[serde(default)]
    pub players_out: Vec<PlayerId>,
    #[serde(default)]
    pub captain: Option<PlayerId>,
    #[serde(default)]
    pub vice_captain: Option<PlayerId>,
}

/// Apply captaincy changes, then substitutions. Fails without partial effect.
pub fn apply_edit(lineup: &Lineup, request: &EditRequest) -> Result<Lineup> {
    let mut edited = lineup.clone();
    if let Some(captain) = request.captain {
        edited = set_captain(&edited, captain)?;
    }
    if let Some(vice_captain) = request.vice_captain {
        edited = set_vice_captain(&edited, vice_captain)?;
    }
    substitute(&edited, &request.players_in, &request.players_out)
}

/// Swap bench players in for starters, pairing the lists by index.
///
/// A same-position swap just exchanges the two slots. When positions differ
/// the captaincy flags stay with the slot, so the incoming player inherits
/// them, and the starters are re-sorted by position before every slot is
/// renumbered 1 to 15.
pub fn substitute(
    lineup: &Lineup,
    players_in: &[PlayerId],
    players_out: &[PlayerId],
) -> Result<Lineup> {
    check_request(lineup, players_in, players_out)?;

    // Index `i` always holds slot `i + 1`
    let mut picks = lineup.picks().to_vec();

    for (&out_id, &in_id) in players_out.iter().zip(players_in) {
        let out_i = index_of(&picks, out_id)?;
        let in_i = index_of(&picks, in_id)?;
        let same_position = picks[out_i].role == picks[in_i].role;

        picks.swap(out_i, in_i);

        if !same_position {
            let (captain, vice) = (picks[out_i].is_captain, picks[out_i].is_vice_captain);
            picks[out_i].is_captain = picks[in_i].is_captain;
            picks[out_i].is_vice_captain = picks[in_i].is_vice_captain;
            picks[in_i].is_captain = captain;
            picks[in_i].is_vice_captain = vice;

            // Stable, so players keep their order within a position
            picks[..STARTING_XI].sort_by_key(|p| p.role);
        }
        debug!(player_out = %out_id, player_in = %in_id, same_position, "substitution");
    }

    // The backup goalkeeper always heads the bench
    picks[STARTING_XI..].sort_by_key(|p| p.role != Position::Goalkeeper);
    renumber(&mut picks);

    let formation = Formation::from_positions(picks[..STARTING_XI].iter().map(|p| p.role));
    if !formation.is_valid() {
        return Err(EditError::IllegalFormation(formation).into());
    }

    Lineup::new(picks)
}

/// Make `player_id` captain.
///
/// If they were vice-captain, the previous captain becomes vice-captain.
pub fn set_captain(lineup: &Lineup, player_id: PlayerId) -> Result<Lineup> {
    set_armband(lineup, player_id, Armband::Captain)
}

/// Make `player_id` vice-captain.
///
/// If they were captain, the previous vice-captain becomes captain.
pub fn set_vice_captain(lineup: &Lineup, player_id: PlayerId) -> Result<Lineup> {
    set_armband(lineup, player_id, Armband::ViceCaptain)
}

/// Swap the substitution priority of two outfield bench players.
pub fn reorder_bench(lineup: &Lineup, first: PlayerId, second: PlayerId) -> Result<Lineup> {
    let mut picks = lineup.picks().to_vec();
    let a = bench_index(&picks, first)?;
    let b = bench_index(&picks, second)?;

    picks.swap(a, b);
    renumber(&mut picks);
    debug!(%first, %second, "bench reordered");

    Lineup::new(picks)
}

#[derive(Debug, Clone, Copy)]
enum Armband {
    Captain,
    ViceCaptain,
}

fn set_armband(lineup: &Lineup, player_id: PlayerId, armband: Armband) -> Result<Lineup> {
    let mut picks = lineup.picks().to_vec();
    let chosen = index_of(&picks, player_id)?;
    let holds = |p: &Pick| match armband {
        Armband::Captain => p.is_captain,
        Armband::ViceCaptain => p.is_vice_captain,
    };

    let Some(current) = picks.iter().position(holds) else {
        return Lineup::new(picks);
    };
    if current == chosen {
        return Ok(lineup.clone());
    }

    if picks[chosen].is_captain || picks[chosen].is_vice_captain {
        // Chosen player holds the other armband: trade both with the current holder
        let (captain, vice) = (picks[chosen].is_captain, picks[chosen].is_vice_captain);
        picks[chosen].is_captain = picks[current].is_captain;
        picks[chosen].is_vice_captain = picks[current].is_vice_captain;
        picks[current].is_captain = captain;
        picks[current].is_vice_captain = vice;
    } else {
        match armband {
            Armband::Captain => {
                picks[current].is_captain = false;
                picks[chosen].is_captain = true;
            }
            Armband::ViceCaptain => {
                picks[current].is_vice_captain = false;
                picks[chosen].is_vice_captain = true;
            }
        }
    }
    debug!(player = %player_id, ?armband, "armband changed");

    Lineup::new(picks)
}

fn check_request(lineup: &Lineup, players_in: &[PlayerId], players_out: &[PlayerId]) -> Result<()> {
    let count = players_in.len().max(players_out.len());
    if count > MAX_SUBSTITUTIONS {
        return Err(EditError::TooManySubstitutions {
            count,
            max: MAX_SUBSTITUTIONS,
        }
        .into());
    }
    if players_in.len() != players_out.len() {
        return Err(EditError::UnbalancedSubstitution {
            players_in: players_in.len(),
            players_out: players_out.len(),
        }
        .into());
    }

    for list in [players_in, players_out] {
        let mut seen = HashSet::new();
        if let Some(&dup) = list.iter().find(|&&id| !seen.insert(id)) {
            return Err(EditError::DuplicatePlayer(dup).into());
        }
    }

    let outgoing: HashSet<PlayerId> = players_out.iter().copied().collect();
    if let Some(&both) = players_in.iter().find(|id| outgoing.contains(id)) {
        return Err(EditError::NotDisjoint(both).into());
    }

    for &id in players_out {
        match lineup.get(id) {
            None => return Err(EditError::NotInSquad(id).into()),
            Some(pick) if !pick.is_starter() => return Err(EditError::NotAStarter(id).into()),
            Some(_) => {}
        }
    }
    for &id in players_in {
        match lineup.get(id) {
            None => return Err(EditError::NotInSquad(id).into()),
            Some(pick) if !pick.is_bench() => return Err(EditError::NotOnBench(id).into()),
            Some(_) => {}
        }
    }

    Ok(())
}

fn index_of(picks: &[Pick], player_id: PlayerId) -> Result<usize> {
    picks
        .iter()
        .position(|p| p.player_id == player_id)
        .ok_or_else(|| EditError::NotInSquad(player_id).into())
}

fn bench_index(picks: &[Pick], player_id: PlayerId) -> Result<usize> {
    let idx = index_of(picks, player_id)?;
    let pick = &picks[idx];
    if !pick.is_bench() {
        return Err(EditError::NotOnBench(player_id).into());
    }
    if pick.role == Position::Goalkeeper {
        return Err(EditError::BenchGoalkeeperFixed(player_id).into());
    }
    Ok(idx)
}

fn renumber(picks: &mut [Pick]) {
    for (i, pick) in picks.iter_mut().enumerate() {
        pick.slot = (i + 1) as u8;
    }
}
