//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use fpl_live::{
    cli::{Commands, FplLive},
    commands::{
        bonus::handle_bonus,
        lineup::{
            handle_bench, handle_captain, handle_formation, handle_substitute, SubstituteParams,
        },
        live_score::handle_live,
    },
    telemetry::{init_logging, level_for_verbosity},
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = FplLive::parse();
    init_logging(level_for_verbosity(app.verbose))?;

    match app.command {
        Commands::Live {
            source,
            entry,
            confirmed_only,
            chip,
            json,
        } => handle_live(&source, entry, confirmed_only, chip, json)?,

        Commands::Bonus { source, json } => handle_bonus(&source, json)?,

        Commands::Formation { team } => handle_formation(&team)?,

        Commands::Substitute {
            team,
            players_in,
            players_out,
            captain,
            vice_captain,
            output,
            json,
        } => handle_substitute(
            &team,
            SubstituteParams {
                players_in,
                players_out,
                captain,
                vice_captain,
                output,
                as_json: json,
            },
        )?,

        Commands::Bench {
            team,
            first,
            second,
            output,
            json,
        } => handle_bench(&team, first, second, output, json)?,

        Commands::Captain {
            team,
            player,
            vice,
            output,
            json,
        } => handle_captain(&team, player, vice, output, json)?,
    }

    Ok(())
}
