//! FPL Live Library
//!
//! Live scoring and squad editing for Fantasy Premier League, working from
//! plain JSON data: gameweek snapshots of live player stats, fixtures and
//! manager picks.
//!
//! ## Features
//!
//! - **Bonus Points**: Tie-aware 3/2/1 bonus from a match's BPS, confirmed or provisional
//! - **Automatic Substitutions**: Bench players replace non-playing starters while keeping a legal formation
//! - **Captaincy**: Captain and vice-captain multipliers, including the triple captain chip
//! - **Live Scores**: Whole-entry scores with chips and transfer hits, many entries in parallel
//! - **Squad Editing**: Bench/starter swaps and armband changes, validated as a whole
//!
//! ## Quick Start
//!
//! ```rust
//! use fpl_live::{fpl::allocate_bonus, PlayerId};
//! use std::collections::BTreeMap;
//!
//! let bps: BTreeMap<PlayerId, i32> = [(1, 30), (2, 25), (3, 25), (4, 10)]
//!     .into_iter()
//!     .map(|(id, v)| (PlayerId::new(id), v))
//!     .collect();
//!
//! let bonus = allocate_bonus(&bps);
//! assert_eq!(bonus[&PlayerId::new(1)], 3);
//! assert_eq!(bonus[&PlayerId::new(2)], 2);
//! assert_eq!(bonus[&PlayerId::new(3)], 2);
//! assert!(!bonus.contains_key(&PlayerId::new(4)));
//! ```
//!
//! ## Environment Configuration
//!
//! Set your entry ID to avoid passing it in every squad command:
//! ```bash
//! export FPL_ENTRY_ID=91928
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fpl;
pub mod squad;
pub mod telemetry;

// Re-export commonly used types
pub use cli::types::{Chip, EntryId, Gameweek, PlayerId, Position};
pub use error::{EditError, FplError, Result};
pub use squad::{formation::Formation, Lineup, Pick};

pub const ENTRY_ID_ENV_VAR: &str = "FPL_ENTRY_ID";
