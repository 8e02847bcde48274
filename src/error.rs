//! Error types for the FPL live-scoring library

use thiserror::Error;

use crate::{cli::types::ids::PlayerId, squad::formation::Formation};


pub type Result<T> = std::result::Result<T, FplError>;

#[derive(Error, Debug)]
pub enum FplError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Entry ID not provided and {env_var} environment variable not set")]
    MissingEntryId { env_var: String },

    #[error("Entry {entry} not found in snapshot")]
    EntryNotFound { entry: u32 },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Gameweek must be a number between 1 and 38, got {gameweek}")]
    InvalidGameweek { gameweek: u16 },

    #[error("Unknown chip: {chip}")]
    InvalidChip { chip: String },

    #[error("Invalid lineup: {reason}")]
    InvalidLineup { reason: String },

    #[error("Edit rejected: {0}")]
    Edit(#[from] EditError),
}

/// Reasons a squad edit is rejected. The lineup is never partially changed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("can only substitute a maximum of {max} players, got {count}")]
    TooManySubstitutions { count: usize, max: usize },

    #[error("number of players substituted in ({players_in}) must equal number substituted out ({players_out})")]
    UnbalancedSubstitution {
        players_in: usize,
        players_out: usize,
    },

    #[error("player {0} can't be both substituted in and out")]
    NotDisjoint(PlayerId),

    #[error("player {0} is listed more than once")]
    DuplicatePlayer(PlayerId),

    #[error("player {0} isn't in the squad")]
    NotInSquad(PlayerId),

    #[error("player {0} is not a starter")]
    NotAStarter(PlayerId),

    #[error("player {0} is not on the bench")]
    NotOnBench(PlayerId),

    #[error("player {0} is the bench goalkeeper and can't be reordered")]
    BenchGoalkeeperFixed(PlayerId),

    #[error("resulting formation {0} is not legal")]
    IllegalFormation(Formation),
}
