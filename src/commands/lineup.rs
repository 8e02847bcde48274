//! Squad commands: formation check, substitutions and captaincy.

use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

use crate::{
    cli::TeamSource,
    core::read_json,
    squad::{
        apply_edit, formation::Formation, is_valid_formation, reorder_bench, set_captain,
        set_vice_captain, EditRequest, Lineup, Pick,
    },
    PlayerId, Result,
};

use super::common::{load_team, save_team, team_file};

/// Squad file read without squad validation, so broken lineups can still be
/// inspected.
#[derive(Debug, Deserialize)]
struct RawTeam {
    picks: Vec<Pick>,
}

/// Formation of the picks in starting slots, and whether it is legal.
pub fn starting_formation(picks: &[Pick]) -> (Formation, bool) {
    let roles: Vec<_> = picks
        .iter()
        .filter(|p| p.is_starter())
        .map(|p| p.role)
        .collect();
    (
        Formation::from_positions(roles.iter().copied()),
        is_valid_formation(&roles),
    )
}

/// Handle the formation command
pub fn handle_formation(team: &TeamSource) -> Result<()> {
    let path = team_file(team)?;
    let raw: RawTeam = read_json(&path)?;
    let (formation, legal) = starting_formation(&raw.picks);

    println!(
        "Formation: {} ({})",
        formation,
        if legal { "legal" } else { "illegal" }
    );
    if let Err(e) = Lineup::new(raw.picks) {
        println!("Squad problem: {}", e);
    }

    Ok(())
}

pub struct SubstituteParams {
    pub players_in: Vec<PlayerId>,
    pub players_out: Vec<PlayerId>,
    pub captain: Option<PlayerId>,
    pub vice_captain: Option<PlayerId>,
    pub output: Option<PathBuf>,
    pub as_json: bool,
}

/// Handle the substitute command
pub fn handle_substitute(team: &TeamSource, params: SubstituteParams) -> Result<()> {
    let lineup = load_team(team)?;
    let request = EditRequest {
        players_in: params.players_in,
        players_out: params.players_out,
        captain: params.captain,
        vice_captain: params.vice_captain,
    };

    let edited = apply_edit(&lineup, &request)?;
    info!(
        swaps = request.players_in.len(),
        formation = %edited.formation(),
        "edit applied"
    );

    finish(&edited, params.output, params.as_json)
}

/// Handle the captain command
pub fn handle_captain(
    team: &TeamSource,
    player: PlayerId,
    vice: bool,
    output: Option<PathBuf>,
    as_json: bool,
) -> Result<()> {
    let lineup = load_team(team)?;
    let edited = if vice {
        set_vice_captain(&lineup, player)?
    } else {
        set_captain(&lineup, player)?
    };
    info!(%player, vice, "armband changed");

    finish(&edited, output, as_json)
}

/// Handle the bench command
pub fn handle_bench(
    team: &TeamSource,
    first: PlayerId,
    second: PlayerId,
    output: Option<PathBuf>,
    as_json: bool,
) -> Result<()> {
    let lineup = load_team(team)?;
    let edited = reorder_bench(&lineup, first, second)?;
    info!(%first, %second, "bench reordered");

    finish(&edited, output, as_json)
}

fn finish(lineup: &Lineup, output: Option<PathBuf>, as_json: bool) -> Result<()> {
    if let Some(path) = output {
        save_team(&path, lineup)?;
        println!("Squad written to {}", path.display());
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(lineup)?);
    } else {
        print!("{}", format_lineup(lineup));
    }
    Ok(())
}

/// Text rendering of a squad: formation, then one line per slot.
pub fn format_lineup(lineup: &Lineup) -> String {
    let mut out = format!("Formation: {}\n", lineup.formation());
    for pick in lineup.picks() {
        let armband = if pick.is_captain {
            " (C)"
        } else if pick.is_vice_captain {
            " (V)"
        } else {
            ""
        };
        let marker = if pick.is_bench() { "bench " } else { "" };
        out.push_str(&format!(
            "{:>2}. {}{} {}{}\n",
            pick.slot, marker, pick.role, pick.player_id, armband
        ));
    }
    out
}
