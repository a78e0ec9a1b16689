//! Command-line and environment configuration for the runner.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use tui_pacman::types::TICK_MS;

/// Every flag can also be set through the environment variable named next to it.
#[derive(Debug, Clone, Parser)]
#[command(name = "tui-pacman", version, about = "Maze-chase game for the terminal")]
pub struct Args {
    /// Milliseconds between simulation ticks
    #[arg(
        long,
        env = "PACMAN_TICK_MS",
        default_value_t = TICK_MS as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,

    /// Seed for pursuer movement (random when omitted)
    #[arg(long, env = "PACMAN_SEED")]
    pub seed: Option<u64>,

    /// Append logs to this file; logging is off without it
    #[arg(long, env = "PACMAN_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_cadence() {
        let args = Args::try_parse_from(["tui-pacman"]).unwrap();
        assert_eq!(args.tick(), Duration::from_millis(120));
        assert!(args.log_file.is_none());
    }

    #[test]
    fn explicit_seed_is_kept() {
        let args = Args::try_parse_from(["tui-pacman", "--seed", "42"]).unwrap();
        assert_eq!(args.seed_or_random(), 42);
    }

    #[test]
    fn zero_tick_is_rejected() {
        assert!(Args::try_parse_from(["tui-pacman", "--tick-ms", "0"]).is_err());
    }

    #[test]
    fn log_file_flag() {
        let args = Args::try_parse_from(["tui-pacman", "--log-file", "/tmp/pacman.log"]).unwrap();
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/pacman.log")));
    }
}
