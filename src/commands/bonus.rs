//! Bonus command implementation

use serde::Serialize;
use tracing::info;

use crate::{
    cli::SnapshotSource,
    fpl::{types::GameweekSnapshot, SideAwards},
    Result,
};

use super::common::load_snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusStatus {
    Confirmed,
    Provisional,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureBonus {
    pub fixture: u32,
    pub team_h: u32,
    pub team_a: u32,
    pub status: BonusStatus,
    pub awards: SideAwards,
}

/// Bonus of every fixture that has kicked off, in snapshot order.
pub fn fixture_bonuses(snapshot: &GameweekSnapshot) -> Vec<FixtureBonus> {
    snapshot
        .fixtures
        .iter()
        .filter(|f| f.finished || f.has_started())
        .map(|f| FixtureBonus {
            fixture: f.id,
            team_h: f.team_h,
            team_a: f.team_a,
            status: if f.finished {
                BonusStatus::Confirmed
            } else {
                BonusStatus::Provisional
            },
            awards: f.bonus(true),
        })
        .collect()
}

/// Handle the bonus command
pub fn handle_bonus(source: &SnapshotSource, as_json: bool) -> Result<()> {
    let snapshot = load_snapshot(source)?;
    let bonuses = fixture_bonuses(&snapshot);
    info!(gameweek = %snapshot.gameweek, fixtures = bonuses.len(), "computed bonus");

    if as_json {
        println!("{}", serde_json::to_string_pretty(&bonuses)?);
        return Ok(());
    }

    println!("Gameweek {} bonus", snapshot.gameweek);
    for bonus in &bonuses {
        let status = match bonus.status {
            BonusStatus::Confirmed => "confirmed",
            BonusStatus::Provisional => "provisional",
        };
        println!(
            "Fixture {} ({} v {}), {}:",
            bonus.fixture, bonus.team_h, bonus.team_a, status
        );
        if bonus.awards.is_empty() {
            println!("    none");
        }
        for award in bonus.awards.iter() {
            println!("    {}: {}", award.element, award.value);
        }
    }

    Ok(())
}
