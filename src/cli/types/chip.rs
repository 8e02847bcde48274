//! Gameweek chips a manager can play.

use crate::error::FplError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A chip active for one gameweek.
///
/// Wire names match the `active_chip` field of the picks endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chip {
    #[serde(rename = "3xc")]
    TripleCaptain,
    #[serde(rename = "bboost")]
    BenchBoost,
    #[serde(rename = "wildcard")]
    Wildcard,
    #[serde(rename = "freehit")]
    FreeHit,
}

impl Chip {
    /// Short code shown next to a gameweek score.
    pub fn code(&self) -> &'static str {
        match self {
            Chip::TripleCaptain => "TC",
            Chip::BenchBoost => "BB",
            Chip::Wildcard => "WC",
            Chip::FreeHit => "FH",
        }
    }
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Chip {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "3xc" | "tc" => Ok(Chip::TripleCaptain),
            "bboost" | "bb" => Ok(Chip::BenchBoost),
            "wildcard" | "wc" => Ok(Chip::Wildcard),
            "freehit" | "fh" => Ok(Chip::FreeHit),
            _ => Err(FplError::InvalidChip {
                chip: s.to_string(),
            }),
        }
    }
}
