//! Command-line configuration. `Cli` is what clap parses; `Config` is the
//! resolved value the rest of the program consumes.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::library::DEFAULT_LIBRARY_FILE;

/// How long a simulated play blocks the console, in seconds.
pub const DEFAULT_PLAY_SECONDS: u64 = 4;

#[derive(Debug, Parser)]
#[command(version, about = "Not Spotify: a console music library manager")]
pub struct Cli {
    /// Library file holding one `title,artist,playCount` record per line.
    #[arg(short, long, default_value = DEFAULT_LIBRARY_FILE)]
    pub library: PathBuf,

    /// Seconds a song "plays" before the menu comes back.
    #[arg(long, default_value_t = DEFAULT_PLAY_SECONDS)]
    pub play_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub library_path: PathBuf,
    pub play_duration: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_path: PathBuf::from(DEFAULT_LIBRARY_FILE),
            play_duration: Duration::from_secs(DEFAULT_PLAY_SECONDS),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            library_path: cli.library,
            play_duration: Duration::from_secs(cli.play_seconds),
        }
    }
}

impl Config {
    /// Parse the process arguments.
    pub fn from_args() -> Self {
        Cli::parse().into()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_default_config() {
        let cli = Cli::try_parse_from(["music-library"]).unwrap();
        assert_eq!(Config::from(cli), Config::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "music-library",
            "--library",
            "/tmp/mine.txt",
            "--play-seconds",
            "0",
        ])
        .unwrap();
        let config = Config::from(cli);
        assert_eq!(config.library_path, PathBuf::from("/tmp/mine.txt"));
        assert_eq!(config.play_duration, Duration::ZERO);
    }

    #[test]
    fn rejects_negative_play_seconds() {
        assert!(Cli::try_parse_from(["music-library", "--play-seconds", "-3"]).is_err());
    }
}
