//! Type-safe wrappers and enums for Fantasy Premier League data.

pub mod chip;
pub mod ids;
pub mod position;
pub mod time;

pub use chip::Chip;
pub use ids::{EntryId, PlayerId};
pub use position::Position;
pub use time::{Gameweek, GAMEWEEKS_PER_SEASON};
