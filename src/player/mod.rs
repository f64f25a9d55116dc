//! Media player contract and an in-memory implementation.
//!
//! The controller never owns playback. Hosts implement [`MediaPlayer`]
//! over their platform player; [`SimulatedPlayer`] stands in for one in the
//! CLI and in tests.

mod simulated;

pub use simulated::SimulatedPlayer;

use crate::controller::{check_duration, PlaybackState, SeekCommand};

/// Contract the controller's commands are executed against.
pub trait MediaPlayer {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Move the playback position.
    fn set_current_time(&mut self, seconds: f64);

    /// Total duration in seconds. May be 0, negative or NaN before
    /// metadata loads.
    fn duration(&self) -> f64;

    fn playing(&self) -> bool;

    fn muted(&self) -> bool;

    fn set_muted(&mut self, muted: bool);

    fn play(&mut self);

    fn pause(&mut self);
}

impl PlaybackState {
    /// Snapshot a player, coercing an invalid duration to 0.
    pub fn from_player(player: &dyn MediaPlayer) -> Self {
        let duration = match check_duration(player.duration()) {
            Ok(duration) => duration,
            Err(e) => {
                tracing::warn!("{}; treating duration as unknown", e);
                0.0
            }
        };

        let mut state =
            PlaybackState::new(player.current_time(), duration).with_playing(player.playing());
        state.muted = player.muted();
        state
    }
}

/// Execute a command against a player.
///
/// Relative seeks are resolved against the player's current state first,
/// so the position written is always within [0, duration].
pub fn apply_command(player: &mut dyn MediaPlayer, command: SeekCommand) {
    match command {
        SeekCommand::TogglePlayPause => {
            if player.playing() {
                player.pause();
            } else {
                player.play();
            }
        }
        SeekCommand::SeekRelative { .. } => {
            let state = PlaybackState::from_player(player);
            apply_command(player, command.resolve(&state));
        }
        SeekCommand::SeekAbsolute { target_secs } => {
            player.set_current_time(target_secs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_playing() {
        let mut player = SimulatedPlayer::new(60.0);
        apply_command(&mut player, SeekCommand::TogglePlayPause);
        assert!(player.playing());
        apply_command(&mut player, SeekCommand::TogglePlayPause);
        assert!(!player.playing());
    }

    #[test]
    fn relative_command_is_clamped() {
        let mut player = SimulatedPlayer::new(60.0);
        player.set_current_time(55.0);
        apply_command(&mut player, SeekCommand::SeekRelative { delta_secs: 10.0 });
        assert_eq!(player.current_time(), 60.0);

        apply_command(&mut player, SeekCommand::SeekRelative { delta_secs: -100.0 });
        assert_eq!(player.current_time(), 0.0);
    }

    #[test]
    fn absolute_command_sets_position() {
        let mut player = SimulatedPlayer::new(60.0);
        apply_command(&mut player, SeekCommand::SeekAbsolute { target_secs: 42.0 });
        assert_eq!(player.current_time(), 42.0);
    }

    #[test]
    fn snapshot_coerces_invalid_duration() {
        let player = SimulatedPlayer::new(f64::NAN);
        let state = PlaybackState::from_player(&player);
        assert_eq!(state.duration, 0.0);
    }

    #[test]
    fn snapshot_copies_flags() {
        let mut player = SimulatedPlayer::new(60.0);
        player.play();
        player.set_muted(true);
        player.set_current_time(12.0);

        let state = PlaybackState::from_player(&player);
        assert!(state.playing);
        assert!(state.muted);
        assert_eq!(state.current_time, 12.0);
        assert_eq!(state.duration, 60.0);
    }
}
