//! Command-line interface definition
//!
//! Lives in the library so the man page generator can reuse it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Tap, double-tap and scrub controls for a media surface, driven from the terminal.
#[derive(Parser, Debug)]
#[command(name = "tapseek", version, about, long_about = None)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m
  tapseek play --duration 300       Open an interactive surface
  tapseek play --record taps.ndjson Record gestures while playing
  tapseek replay taps.ndjson        Replay a gesture script
  tapseek config show               Show current configuration")]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a gesture script and print what the controller did
    #[command(long_about = "Replay a gesture script through the gesture controller.

Each line of the transcript shows the clock time, the playback position
after the event, and what happened: tap classifications, seek commands,
and overlay visibility changes.

Script format (newline-delimited JSON):
  {\"version\":1,\"container_width\":400,\"duration\":120}
  [1000,\"tap\",350]       tap at x=350
  [2000,\"press\",40]      press on the seek track
  [2100,\"drag\",80]       drag
  [2200,\"release\"]       release
  [5000,\"tick\"]          clock tick

EXAMPLES:
  tapseek replay taps.ndjson
  tapseek replay taps.ndjson --json")]
    Replay {
        /// Path to the gesture script
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Emit one JSON object per transcript entry
        #[arg(long)]
        json: bool,
    },

    /// Open an interactive surface driven by the mouse and keyboard
    #[command(long_about = "Open an interactive terminal surface backed by a simulated player.

Click the surface to toggle play/pause, double-click the left or right
half to skip backward or forward, and press and drag the bottom track
to scrub. Space toggles, arrow keys skip, m mutes, q quits.

EXAMPLES:
  tapseek play --duration 300
  tapseek play --duration 0          Unknown duration (live stream)
  tapseek play --record taps.ndjson  Save gestures for replay")]
    Play {
        /// Simulated stream length in seconds (0 for unknown)
        #[arg(short, long, default_value_t = 600.0)]
        duration: f64,
        /// Title drawn in the corner of the surface
        #[arg(short, long)]
        title: Option<String>,
        /// Start playing immediately
        #[arg(long)]
        autoplay: bool,
        /// Write the captured gestures to a script on exit
        #[arg(long, value_name = "FILE")]
        record: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Open configuration in $EDITOR
    Edit,
    /// Print the configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn play_defaults() {
        let cli = Cli::parse_from(["tapseek", "play"]);
        match cli.command {
            Commands::Play {
                duration,
                title,
                autoplay,
                record,
            } => {
                assert_eq!(duration, 600.0);
                assert!(title.is_none());
                assert!(!autoplay);
                assert!(record.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn replay_with_json_and_verbosity() {
        let cli = Cli::parse_from(["tapseek", "replay", "taps.ndjson", "--json", "-vv"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Replay { file, json } => {
                assert_eq!(file, PathBuf::from("taps.ndjson"));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn config_subcommands_parse() {
        let cli = Cli::parse_from(["tapseek", "config", "path"]);
        assert!(matches!(cli.command, Commands::Config(ConfigCommands::Path)));
    }

    #[test]
    fn replay_requires_a_file() {
        assert!(Cli::try_parse_from(["tapseek", "replay"]).is_err());
    }
}
