//! Gameweek type for the Fantasy Premier League season.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of gameweeks in a Premier League season.
pub const GAMEWEEKS_PER_SEASON: u16 = 38;

/// Type-safe wrapper for gameweek numbers (1 to 38).
///
/// # Examples
///
/// ```rust
/// use fpl_live::Gameweek;
///
/// let gw = Gameweek::new(12).unwrap();
/// assert_eq!(gw.as_u16(), 12);
/// assert!(Gameweek::new(39).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Gameweek(u16);

impl Gameweek {
    pub fn new(gameweek: u16) -> Result<Self> {
        if (1..=GAMEWEEKS_PER_SEASON).contains(&gameweek) {
            Ok(Self(gameweek))
        } else {
            Err(FplError::InvalidGameweek { gameweek })
        }
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Gameweek {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u16> for Gameweek {
    type Error = FplError;

    fn try_from(gameweek: u16) -> Result<Self> {
        Self::new(gameweek)
    }
}

impl From<Gameweek> for u16 {
    fn from(gameweek: Gameweek) -> u16 {
        gameweek.0
    }
}

impl fmt::Display for Gameweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gameweek {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.parse()?)
    }
}
