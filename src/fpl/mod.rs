//! FPL gameweek data and live scoring.
//!
//! - `types`: serde contracts for live stats, fixtures and entries
//! - `bonus`: bonus point allocation from BPS
//! - `live`: live entry scores built on the squad rules

pub mod bonus;
pub mod live;
pub mod types;

pub use bonus::{allocate_bonus, apply_provisional_bonus, BonusAward, MatchBps, SideAwards};
pub use live::{live_score, live_scores, live_total_points, LiveScore};
pub use types::{
    build_live_index, EntryPicks, Fixture, GameweekSnapshot, LiveElement, LiveIndex, LiveStats,
    MyTeam,
};
