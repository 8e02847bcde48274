use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::cli::types::{Chip, EntryId, Gameweek, PlayerId};
use crate::squad::Lineup;


/// Live stats for one player, from `/event/{gw}/live`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStats {
    #[serde(default)]
    pub minutes: u16,
    #[serde(default)]
    pub total_points: i32,
    #[serde(default)]
    pub bps: i32,
    /// Confirmed bonus; stays 0 until the fixture's bonus is settled
    #[serde(default)]
    pub bonus: u8,
}

impl LiveStats {
    pub fn played(&self) -> bool {
        self.minutes > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveElement {
    pub id: PlayerId,
    pub stats: LiveStats,
}

/// Live stats keyed by player.
pub type LiveIndex = BTreeMap<PlayerId, LiveStats>;

pub fn build_live_index(elements: &[LiveElement]) -> LiveIndex {
    elements
        .iter()
        .map(|e| (e.id, e.stats.clone()))
        .collect()
}

/// One `{element, value}` row of a fixture stat table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub element: PlayerId,
    pub value: i32,
}

/// A fixture stat such as `bps` or `bonus`, split by side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureStat {
    pub identifier: String,
    #[serde(rename = "h", default)]
    pub home: Vec<StatEntry>,
    #[serde(rename = "a", default)]
    pub away: Vec<StatEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: u32,
    #[serde(default)]
    pub event: Option<Gameweek>,
    pub team_h: u32,
    pub team_a: u32,
    /// `null` until kickoff is confirmed
    #[serde(default)]
    pub started: Option<bool>,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub stats: Vec<FixtureStat>,
}

impl Fixture {
    pub fn has_started(&self) -> bool {
        self.started.unwrap_or(false)
    }

    /// In play or awaiting confirmation of its result.
    pub fn in_progress(&self) -> bool {
        self.has_started() && !self.finished
    }

    pub fn stat(&self, identifier: &str) -> Option<&FixtureStat> {
        self.stats.iter().find(|s| s.identifier == identifier)
    }
}

/// Points history row from `/entry/{id}/history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub event: Gameweek,
    pub points: i32,
    #[serde(default)]
    pub event_transfers_cost: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryHistory {
    #[serde(default)]
    pub event_transfers_cost: i32,
}

/// A manager's picks for one gameweek.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPicks {
    pub entry: EntryId,
    #[serde(default)]
    pub active_chip: Option<Chip>,
    #[serde(default)]
    pub entry_history: EntryHistory,
    pub picks: Lineup,
    /// Earlier gameweeks, for season totals
    #[serde(default)]
    pub history: Vec<HistoryRow>,
}

impl EntryPicks {
    pub fn bench_boost(&self) -> bool {
        self.active_chip == Some(Chip::BenchBoost)
    }

    pub fn triple_captain(&self) -> bool {
        self.active_chip == Some(Chip::TripleCaptain)
    }

    pub fn transfer_cost(&self) -> i32 {
        self.entry_history.event_transfers_cost
    }
}

/// Everything needed to score a gameweek offline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameweekSnapshot {
    pub gameweek: Gameweek,
    #[serde(default)]
    pub elements: Vec<LiveElement>,
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
    #[serde(default)]
    pub entries: Vec<EntryPicks>,
}

/// A manager's current squad, as stored by the `my-team` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyTeam {
    pub picks: Lineup,
}
