//! Command implementations for the fpl-live CLI

pub mod bonus;
pub mod common;
pub mod lineup;
pub mod live_score;

pub use common::{load_snapshot, load_team, resolve_entry_id};
