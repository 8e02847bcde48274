//! Live gameweek scoring for a manager's entry.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::cli::types::{Chip, EntryId, Gameweek, PlayerId};
use crate::fpl::types::{EntryPicks, HistoryRow, LiveIndex};
use crate::squad::{
    formation::Formation, resolve_captaincy, resolve_lineup_auto_subs, CaptainBonus, Substitution,
};


/// Live score of one entry, with the parts that make it up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveScore {
    pub entry: EntryId,
    pub chip: Option<Chip>,
    pub formation: Formation,
    /// Players whose points count, after automatic substitutions
    pub starters: Vec<PlayerId>,
    pub substitutions: Vec<Substitution>,
    pub captain: Option<CaptainBonus>,
    /// Sum of the counted players' points before the captain multiplier
    pub starting_points: i32,
    pub transfer_cost: i32,
    pub total: i32,
}

impl LiveScore {
    pub fn captain_points(&self) -> i32 {
        self.captain.map(|c| c.extra_points()).unwrap_or(0)
    }
}

/// Score one entry against live player stats.
///
/// Players missing from `live` count as not having played.
pub fn live_score(entry: &EntryPicks, live: &LiveIndex) -> LiveScore {
    let played = |id: PlayerId| live.get(&id).map(|s| s.played()).unwrap_or(false);
    let points = |id: PlayerId| live.get(&id).map(|s| s.total_points).unwrap_or(0);

    let lineup = &entry.picks;
    let outcome = resolve_lineup_auto_subs(lineup, played, entry.bench_boost());

    let captain = match (lineup.captain(), lineup.vice_captain()) {
        (Some(c), Some(v)) => resolve_captaincy(
            &outcome.starters,
            c.player_id,
            v.player_id,
            entry.triple_captain(),
            points,
        ),
        _ => None,
    };

    let starting_points: i32 = outcome.starters.iter().map(|p| points(p.player_id)).sum();
    let transfer_cost = entry.transfer_cost();
    let captain_extra = captain.map(|c| c.extra_points()).unwrap_or(0);
    let total = starting_points + captain_extra - transfer_cost;

    let formation = if entry.bench_boost() {
        lineup.formation()
    } else {
        Formation::from_positions(outcome.starters.iter().map(|p| p.role))
    };

    debug!(
        entry = %entry.entry,
        subs = outcome.substitutions.len(),
        starting_points,
        captain_extra,
        transfer_cost,
        total,
        "scored entry"
    );

    LiveScore {
        entry: entry.entry,
        chip: entry.active_chip,
        formation,
        starters: outcome.starter_ids(),
        substitutions: outcome.substitutions,
        captain,
        starting_points,
        transfer_cost,
        total,
    }
}

/// Score many entries in parallel; output order matches input order.
pub fn live_scores(entries: &[EntryPicks], live: &LiveIndex) -> Vec<LiveScore> {
    entries.par_iter().map(|e| live_score(e, live)).collect()
}

/// Season total: net points of every gameweek before `current`, plus the
/// live score for `current`.
pub fn live_total_points(history: &[HistoryRow], current: Gameweek, live_score: i32) -> i32 {
    let previous: i32 = history
        .iter()
        .filter(|row| row.event < current)
        .map(|row| row.points - row.event_transfers_cost)
        .sum();
    previous + live_score
}
