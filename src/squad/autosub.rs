//! Automatic substitutions for starters who did not play.

use serde::Serialize;
use tracing::debug;

use super::{formation::Formation, Lineup, Pick};
use crate::cli::types::{PlayerId, Position};

/// One automatic substitution: `player_out` started, `player_in` replaced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Substitution {
    pub player_out: PlayerId,
    pub player_in: PlayerId,
}

/// The players whose scores count, plus the substitutions that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoSubOutcome {
    pub starters: Vec<Pick>,
    pub substitutions: Vec<Substitution>,
}

impl AutoSubOutcome {
    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.starters.iter().any(|p| p.player_id == player_id)
    }

    pub fn starter_ids(&self) -> Vec<PlayerId> {
        self.starters.iter().map(|p| p.player_id).collect()
    }
}

/// Replace non-playing starters with bench players.
///
/// Starters are corrected in the order given and the outfield bench is
/// scanned in the order given; both orders decide which substitute comes on
/// when several could. A non-playing goalkeeper is swapped for the bench
/// goalkeeper if the latter played. An outfield substitute is only kept if
/// the resulting eleven is still a legal formation. A starter nobody can
/// legally replace stays in the side and scores nothing.
///
/// With bench boost active every squad member counts and nothing is swapped.
pub fn resolve_auto_subs<F>(
    starting_xi: &[Pick],
    bench: &[Pick],
    bench_goalkeeper: Option<&Pick>,
    played: F,
    bench_boost: bool,
) -> AutoSubOutcome
where
    F: Fn(PlayerId) -> bool,
{
    if bench_boost {
        let mut starters = starting_xi.to_vec();
        starters.extend(bench_goalkeeper.cloned());
        starters.extend(bench.iter().cloned());
        starters.sort_by_key(|p| p.slot);
        return AutoSubOutcome {
            starters,
            substitutions: Vec::new(),
        };
    }

    let mut xi = starting_xi.to_vec();
    let mut substitutions = Vec::new();
    let mut bench_used = vec![false; bench.len()];
    let mut keeper_used = false;

    for idx in 0..xi.len() {
        let starter = xi[idx].clone();
        if played(starter.player_id) {
            continue;
        }

        if starter.role == Position::Goalkeeper {
            match bench_goalkeeper {
                Some(keeper) if !keeper_used && played(keeper.player_id) => {
                    debug!(player_out = %starter.player_id, player_in = %keeper.player_id, "goalkeeper substitution");
                    xi[idx] = keeper.clone();
                    keeper_used = true;
                    substitutions.push(Substitution {
                        player_out: starter.player_id,
                        player_in: keeper.player_id,
                    });
                }
                _ => debug!(player = %starter.player_id, "no goalkeeper available to come on"),
            }
            continue;
        }

        let mut replaced = false;
        for (b, candidate) in bench.iter().enumerate() {
            if bench_used[b] || candidate.role == Position::Goalkeeper || !played(candidate.player_id) {
                continue;
            }

            xi[idx] = candidate.clone();
            let formation = Formation::from_positions(xi.iter().map(|p| p.role));
            if formation.is_valid() {
                debug!(player_out = %starter.player_id, player_in = %candidate.player_id, %formation, "automatic substitution");
                bench_used[b] = true;
                substitutions.push(Substitution {
                    player_out: starter.player_id,
                    player_in: candidate.player_id,
                });
                replaced = true;
                break;
            }

            debug!(candidate = %candidate.player_id, %formation, "substitute would break formation");
            xi[idx] = starter.clone();
        }

        if !replaced {
            debug!(player = %starter.player_id, "no eligible substitute, starter stays");
        }
    }

    AutoSubOutcome {
        starters: xi,
        substitutions,
    }
}

/// [`resolve_auto_subs`] over a validated squad.
pub fn resolve_lineup_auto_subs<F>(lineup: &Lineup, played: F, bench_boost: bool) -> AutoSubOutcome
where
    F: Fn(PlayerId) -> bool,
{
    resolve_auto_subs(
        lineup.starters(),
        lineup.outfield_bench(),
        Some(lineup.bench_goalkeeper()),
        played,
        bench_boost,
    )
}
