use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::cli::types::PlayerId;
use crate::fpl::types::{Fixture, LiveIndex, StatEntry};

#[cfg(test)]
mod tests;

/// Bonus for a single player, in the `{element, value}` shape the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusAward {
    pub element: PlayerId,
    pub value: u8,
}

/// Bonus awards of one fixture, split by side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideAwards {
    #[serde(rename = "h")]
    pub home: Vec<BonusAward>,
    #[serde(rename = "a")]
    pub away: Vec<BonusAward>,
}

impl SideAwards {
    pub fn is_empty(&self) -> bool {
        self.home.is_empty() && self.away.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BonusAward> {
        self.home.iter().chain(self.away.iter())
    }
}

/// BPS table of one match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchBps {
    pub home: Vec<StatEntry>,
    pub away: Vec<StatEntry>,
}

impl MatchBps {
    /// Allocate bonus across both sides, then split the awards back by side.
    ///
    /// Tiers belong to the match: a home and an away player tied on the top
    /// score share the three points just like two team-mates would.
    pub fn provisional_bonus(&self) -> SideAwards {
        let pooled: BTreeMap<PlayerId, i32> = self
            .home
            .iter()
            .chain(self.away.iter())
            .map(|e| (e.element, e.value))
            .collect();
        let awards = allocate_bonus(&pooled);

        let side = |entries: &[StatEntry]| -> Vec<BonusAward> {
            let mut side: Vec<BonusAward> = entries
                .iter()
                .filter_map(|e| {
                    awards.get(&e.element).map(|&value| BonusAward {
                        element: e.element,
                        value,
                    })
                })
                .collect();
            side.sort_by(|a, b| b.value.cmp(&a.value).then(a.element.cmp(&b.element)));
            side.dedup();
            side
        };

        SideAwards {
            home: side(&self.home),
            away: side(&self.away),
        }
    }
}

/// Award 3/2/1 bonus points from BPS values.
///
/// Only positive BPS counts. Ties share a tier and use up the tiers below
/// it: two players level on top both get 3 and the next score gets 2, while
/// three or more level on top take all the bonus between them. A tie for
/// second after a clear winner gets 2 each and no 1 is awarded.
pub fn allocate_bonus(bps: &BTreeMap<PlayerId, i32>) -> BTreeMap<PlayerId, u8> {
    let mut values: Vec<i32> = bps.values().copied().filter(|&v| v > 0).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));
    values.dedup();

    let holders = |value: i32| -> Vec<PlayerId> {
        bps.iter()
            .filter(|&(_, &v)| v == value)
            .map(|(&id, _)| id)
            .collect()
    };

    let mut awards = BTreeMap::new();
    let Some(&first) = values.first() else {
        return awards;
    };

    let top = holders(first);
    for &id in &top {
        awards.insert(id, 3);
    }

    match (top.len(), values.get(1)) {
        (1, Some(&second)) => {
            let runners_up = holders(second);
            for &id in &runners_up {
                awards.insert(id, 2);
            }
            if let (1, Some(&third)) = (runners_up.len(), values.get(2)) {
                for id in holders(third) {
                    awards.insert(id, 1);
                }
            }
        }
        (2, Some(&second)) => {
            for id in holders(second) {
                awards.insert(id, 2);
            }
        }
        _ => {}
    }

    awards
}

impl Fixture {
    pub fn match_bps(&self) -> MatchBps {
        self.stat("bps")
            .map(|s| MatchBps {
                home: s.home.clone(),
                away: s.away.clone(),
            })
            .unwrap_or_default()
    }

    /// Confirmed bonus from the fixture's `bonus` table.
    pub fn official_bonus(&self) -> SideAwards {
        let convert = |entries: &[StatEntry]| -> Vec<BonusAward> {
            entries
                .iter()
                .filter_map(|e| {
                    u8::try_from(e.value)
                        .ok()
                        .filter(|&v| v > 0)
                        .map(|value| BonusAward {
                            element: e.element,
                            value,
                        })
                })
                .collect()
        };

        self.stat("bonus")
            .map(|s| SideAwards {
                home: convert(&s.home),
                away: convert(&s.away),
            })
            .unwrap_or_default()
    }

    /// Bonus for this fixture.
    ///
    /// Finished fixtures report the confirmed bonus. A fixture in play
    /// reports the bonus its current BPS would earn when `provisional` is
    /// set. Anything else has no bonus yet.
    pub fn bonus(&self, provisional: bool) -> SideAwards {
        if self.finished {
            self.official_bonus()
        } else if self.has_started() && provisional {
            self.match_bps().provisional_bonus()
        } else {
            SideAwards::default()
        }
    }
}

/// Fold provisional bonus into live stats for fixtures still in play.
///
/// Players whose bonus is already confirmed are left alone. Returns a new
/// index; the input is not modified.
pub fn apply_provisional_bonus(live: &LiveIndex, fixtures: &[Fixture]) -> LiveIndex {
    let mut updated = live.clone();

    for fixture in fixtures.iter().filter(|f| f.in_progress()) {
        for award in fixture.bonus(true).iter() {
            if let Some(stats) = updated.get_mut(&award.element) {
                if stats.bonus == 0 {
                    stats.bonus = award.value;
                    stats.total_points += i32::from(award.value);
                    debug!(fixture = fixture.id, player = %award.element, bonus = award.value, "provisional bonus");
                }
            }
        }
    }

    updated
}
