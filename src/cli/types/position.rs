//! Fantasy Premier League playing positions.

use crate::error::FplError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playing position of a squad member.
///
/// The FPL API calls this the player's `element_type`, numbered 1 to 4.
/// Serialized as that number so picks and bootstrap rows deserialize directly.
///
/// # Examples
///
/// ```rust
/// use fpl_live::Position;
///
/// let gk = Position::try_from(1).unwrap();
/// assert_eq!(gk, Position::Goalkeeper);
/// assert_eq!(gk.to_string(), "GKP");
/// assert_eq!(u8::from(Position::Forward), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Full position name, as shown on the FPL site.
    pub fn name(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        }
    }
}

impl TryFrom<u8> for Position {
    type Error = FplError;

    fn try_from(element_type: u8) -> Result<Self, Self::Error> {
        match element_type {
            1 => Ok(Position::Goalkeeper),
            2 => Ok(Position::Defender),
            3 => Ok(Position::Midfielder),
            4 => Ok(Position::Forward),
            _ => Err(FplError::InvalidPosition {
                position: element_type.to_string(),
            }),
        }
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> u8 {
        match position {
            Position::Goalkeeper => 1,
            Position::Defender => 2,
            Position::Midfielder => 3,
            Position::Forward => 4,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::Goalkeeper => "GKP",
            Position::Defender => "DEF",
            Position::Midfielder => "MID",
            Position::Forward => "FWD",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GK" | "GKP" | "GOALKEEPER" => Ok(Position::Goalkeeper),
            "DEF" | "DEFENDER" => Ok(Position::Defender),
            "MID" | "MIDFIELDER" => Ok(Position::Midfielder),
            "FWD" | "FORWARD" => Ok(Position::Forward),
            _ => Err(FplError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
