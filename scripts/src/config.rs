use std::{env, fs, path::PathBuf};

use anyhow::Context;
use arena_bracket::{parse_matches, Match};

pub const SNAPSHOT_ENV: &str = "BRACKET_SNAPSHOT";
pub const DEFAULT_SNAPSHOT: &str = "bracket.json";

pub struct Config {
    pub snapshot: PathBuf,
}

impl Config {
    /// The command line path wins over `BRACKET_SNAPSHOT`, which wins over the default.
    pub fn new(snapshot_arg: Option<String>) -> Self {
        let snapshot = snapshot_arg
            .or_else(|| env::var(SNAPSHOT_ENV).ok())
            .unwrap_or_else(|| DEFAULT_SNAPSHOT.to_string());

        Config {
            snapshot: PathBuf::from(snapshot),
        }
    }

    pub fn load_matches(&self) -> anyhow::Result<Vec<Match>> {
        let data = fs::read(&self.snapshot)
            .with_context(|| format!("failed to read snapshot {}", self.snapshot.display()))?;
        let matches = parse_matches(data)
            .with_context(|| format!("invalid snapshot {}", self.snapshot.display()))?;

        log::info!(
            "loaded {} matches from {}",
            matches.len(),
            self.snapshot.display()
        );

        Ok(matches)
    }
}
