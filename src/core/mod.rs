//! Core utilities shared by the command handlers:
//! - `cache`: cache directory layout and JSON file helpers

pub mod cache;

pub use cache::{read_json, snapshot_path, team_path, write_json, write_string};
