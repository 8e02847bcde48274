//! Formation counting and legality.

use serde::Serialize;
use std::fmt;

use crate::cli::types::Position;

/// Number of players in a starting eleven.
pub const STARTING_XI: usize = 11;

/// Count of each position among a set of starters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Formation {
    pub goalkeepers: usize,
    pub defenders: usize,
    pub midfielders: usize,
    pub forwards: usize,
}

impl Formation {
    pub fn from_positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        positions
            .into_iter()
            .fold(Formation::default(), |mut formation, position| {
                match position {
                    Position::Goalkeeper => formation.goalkeepers += 1,
                    Position::Defender => formation.defenders += 1,
                    Position::Midfielder => formation.midfielders += 1,
                    Position::Forward => formation.forwards += 1,
                }
                formation
            })
    }

    pub fn total(&self) -> usize {
        self.goalkeepers + self.defenders + self.midfielders + self.forwards
    }

    /// One goalkeeper, 3-5 defenders, 2-5 midfielders, 1-3 forwards, eleven in total.
    pub fn is_valid(&self) -> bool {
        self.goalkeepers == 1
            && (3..=5).contains(&self.defenders)
            && (2..=5).contains(&self.midfielders)
            && (1..=3).contains(&self.forwards)
            && self.total() == STARTING_XI
    }
}

/// Outfield shape, e.g. `4-4-2`.
impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.defenders, self.midfielders, self.forwards)
    }
}

/// Whether the given starting positions form a legal formation.
pub fn is_valid_formation(positions: &[Position]) -> bool {
    Formation::from_positions(positions.iter().copied()).is_valid()
}
