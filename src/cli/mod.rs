//! CLI argument definitions and parsing.

pub mod types;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{Chip, EntryId, Gameweek, PlayerId};

/// Where to read a gameweek snapshot from
#[derive(Debug, Args)]
pub struct SnapshotSource {
    /// Gameweek (1-38); selects the cached `gameweek-{n}.json`.
    #[clap(long, short, default_value_t = Gameweek::default())]
    pub gameweek: Gameweek,

    /// Read the snapshot from this file instead of the cache directory.
    #[clap(long)]
    pub snapshot: Option<PathBuf>,
}

/// Where to read a manager's squad from
#[derive(Debug, Args)]
pub struct TeamSource {
    /// Squad JSON file (`{"picks": [...]}`).
    #[clap(long, short)]
    pub team: Option<PathBuf>,

    /// Entry ID (or set `FPL_ENTRY_ID` env var); selects the cached `team-{entry}.json`.
    #[clap(long, short)]
    pub entry: Option<EntryId>,
}

#[derive(Debug, Parser)]
#[clap(name = "fpl-live", about = "Fantasy Premier League live scoring and squad editing")]
pub struct FplLive {
    /// Increase log output (-v info, -vv debug). `RUST_LOG` overrides.
    #[clap(long, short, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Live score of every entry in a gameweek snapshot.
    ///
    /// Applies automatic substitutions, captaincy and chips, and folds in
    /// provisional bonus for fixtures still in play.
    Live {
        #[clap(flatten)]
        source: SnapshotSource,

        /// Only score this entry.
        #[clap(long, short)]
        entry: Option<EntryId>,

        /// Skip provisional bonus; count only confirmed bonus.
        #[clap(long)]
        confirmed_only: bool,

        /// Score as if this chip were active: 3xc, bboost, wildcard or freehit.
        #[clap(long)]
        chip: Option<Chip>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Bonus awards per fixture, confirmed or provisional.
    Bonus {
        #[clap(flatten)]
        source: SnapshotSource,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Print a squad's starting formation and whether it is legal.
    Formation {
        #[clap(flatten)]
        team: TeamSource,
    },

    /// Swap bench players into the starting XI.
    ///
    /// The edit is checked as a whole; nothing changes if any part is invalid.
    Substitute {
        #[clap(flatten)]
        team: TeamSource,

        /// Bench player coming in (repeatable, paired in order with --out).
        #[clap(long = "in")]
        players_in: Vec<PlayerId>,

        /// Starter going out (repeatable).
        #[clap(long = "out")]
        players_out: Vec<PlayerId>,

        /// New captain.
        #[clap(long)]
        captain: Option<PlayerId>,

        /// New vice-captain.
        #[clap(long)]
        vice_captain: Option<PlayerId>,

        /// Write the edited squad to this file.
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Output the edited squad as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Swap the substitution priority of two outfield bench players.
    Bench {
        #[clap(flatten)]
        team: TeamSource,

        /// First bench player.
        #[clap(long)]
        first: PlayerId,

        /// Second bench player.
        #[clap(long)]
        second: PlayerId,

        /// Write the edited squad to this file.
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Output the edited squad as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Give a player the captain's (or with --vice, the vice-captain's) armband.
    Captain {
        #[clap(flatten)]
        team: TeamSource,

        /// Player receiving the armband.
        #[clap(long, short)]
        player: PlayerId,

        /// Set the vice-captain instead of the captain.
        #[clap(long)]
        vice: bool,

        /// Write the edited squad to this file.
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Output the edited squad as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
