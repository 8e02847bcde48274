//! Live score command implementation

use serde::Serialize;
use tracing::info;

use crate::{
    cli::SnapshotSource,
    error::FplError,
    fpl::{
        apply_provisional_bonus, build_live_index, live_scores, live_total_points,
        types::{EntryPicks, GameweekSnapshot},
        LiveScore,
    },
    Chip, EntryId, Result,
};

use super::common::load_snapshot;

/// One line of live output: the gameweek score plus the season total when
/// the entry carries its history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveReport {
    #[serde(flatten)]
    pub score: LiveScore,
    pub season_total: Option<i32>,
}

/// Score the entries of a snapshot.
///
/// With `entry` set only that entry is scored; it is an error if the
/// snapshot does not contain it. A `chip` replaces each entry's active chip.
pub fn score_snapshot(
    snapshot: &GameweekSnapshot,
    entry: Option<EntryId>,
    provisional_bonus: bool,
    chip: Option<Chip>,
) -> Result<Vec<LiveReport>> {
    let mut live = build_live_index(&snapshot.elements);
    if provisional_bonus {
        live = apply_provisional_bonus(&live, &snapshot.fixtures);
    }

    let mut selected: Vec<EntryPicks> = match entry {
        Some(id) => {
            let found: Vec<EntryPicks> = snapshot
                .entries
                .iter()
                .filter(|e| e.entry == id)
                .cloned()
                .collect();
            if found.is_empty() {
                return Err(FplError::EntryNotFound { entry: id.as_u32() });
            }
            found
        }
        None => snapshot.entries.clone(),
    };
    if let Some(chip) = chip {
        for entry in &mut selected {
            entry.active_chip = Some(chip);
        }
    }

    let reports = selected
        .iter()
        .zip(live_scores(&selected, &live))
        .map(|(entry, score)| LiveReport {
            season_total: (!entry.history.is_empty())
                .then(|| live_total_points(&entry.history, snapshot.gameweek, score.total)),
            score,
        })
        .collect();

    Ok(reports)
}

/// Handle the live command
pub fn handle_live(
    source: &SnapshotSource,
    entry: Option<EntryId>,
    confirmed_only: bool,
    chip: Option<Chip>,
    as_json: bool,
) -> Result<()> {
    let snapshot = load_snapshot(source)?;
    let reports = score_snapshot(&snapshot, entry, !confirmed_only, chip)?;
    info!(gameweek = %snapshot.gameweek, entries = reports.len(), "scored gameweek");

    if as_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!("Gameweek {} live scores", snapshot.gameweek);
    for report in &reports {
        println!("{}", format_report(report));
        for sub in &report.score.substitutions {
            println!("    sub: {} -> {}", sub.player_out, sub.player_in);
        }
    }

    Ok(())
}

pub fn format_report(report: &LiveReport) -> String {
    let score = &report.score;
    let mut line = format!(
        "Entry {}: {} pts ({})",
        score.entry, score.total, score.formation
    );
    if let Some(chip) = score.chip {
        line.push_str(&format!(" [{}]", chip.code()));
    }
    match score.captain {
        Some(c) => line.push_str(&format!(" C {} x{}", c.player_id, c.multiplier)),
        None => line.push_str(" no captain"),
    }
    if score.transfer_cost > 0 {
        line.push_str(&format!(" (-{} hit)", score.transfer_cost));
    }
    if let Some(total) = report.season_total {
        line.push_str(&format!(", season {}", total));
    }
    line
}
