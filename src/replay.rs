//! Replay gesture scripts through the controller.
//!
//! Feeds every script event into a [`GestureController`] bound to a
//! [`SimulatedPlayer`], applies the emitted commands, and collects a
//! timestamped transcript. Deadlines falling between events are processed
//! at their own timestamps, so the transcript shows when a single tap
//! actually resolved or an overlay actually hid.

use anyhow::Result;
use serde::Serialize;

use crate::controller::{
    ControllerEvent, GestureConfig, GestureController, Half, PlaybackState, SeekCommand,
    SeekDirection, TapClassification, TapEvent,
};
use crate::player::{apply_command, MediaPlayer, SimulatedPlayer};
use crate::render::format_duration;
use crate::script::{GestureScript, ScriptEvent, ScriptEventKind};

/// One line of a replay transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayEntry {
    /// Clock time the event happened at
    pub timestamp_ms: u64,
    /// Player position after the event was applied
    pub playhead_secs: f64,
    #[serde(flatten)]
    pub event: ControllerEvent,
}

impl ReplayEntry {
    /// Human-readable transcript line.
    pub fn to_line(&self) -> String {
        format!(
            "{:>8}ms  {}  {}",
            self.timestamp_ms,
            format_duration(self.playhead_secs),
            describe_event(&self.event)
        )
    }
}

/// Short description of a controller event.
pub fn describe_event(event: &ControllerEvent) -> String {
    match event {
        ControllerEvent::Classified { tap } => match tap {
            TapClassification::Pending => "tap (waiting for second tap)".to_string(),
            TapClassification::Single => "single tap".to_string(),
            TapClassification::Double { half: Half::Left } => "double tap (left)".to_string(),
            TapClassification::Double { half: Half::Right } => "double tap (right)".to_string(),
        },
        ControllerEvent::Command { command } => match command {
            SeekCommand::TogglePlayPause => "toggle play/pause".to_string(),
            SeekCommand::SeekRelative { delta_secs } => format!("seek {:+}s", delta_secs),
            SeekCommand::SeekAbsolute { target_secs } => {
                format!("seek to {}", format_duration(*target_secs))
            }
        },
        ControllerEvent::OverlayShown => "overlay shown".to_string(),
        ControllerEvent::OverlayHidden => "overlay hidden".to_string(),
        ControllerEvent::SeekIndicatorShown { direction } => match direction {
            SeekDirection::Backward => "seek indicator shown (backward)".to_string(),
            SeekDirection::Forward => "seek indicator shown (forward)".to_string(),
        },
        ControllerEvent::SeekIndicatorHidden => "seek indicator hidden".to_string(),
        ControllerEvent::Scrubbed { position_secs } => {
            format!("scrub to {}", format_duration(*position_secs))
        }
    }
}

/// Drives one script through a controller and player.
struct Replayer {
    controller: GestureController,
    player: SimulatedPlayer,
    entries: Vec<ReplayEntry>,
}

impl Replayer {
    fn record(&mut self, timestamp_ms: u64, events: Vec<ControllerEvent>) {
        for event in events {
            if let ControllerEvent::Command { command } = event {
                apply_command(&mut self.player, command);
            }
            self.entries.push(ReplayEntry {
                timestamp_ms,
                playhead_secs: self.player.current_time(),
                event,
            });
        }
    }

    /// Process controller deadlines up to `until_ms`, each at its own time.
    fn run_deadlines(&mut self, until_ms: Option<u64>) {
        while let Some(deadline) = self.controller.next_deadline() {
            if until_ms.is_some_and(|until| deadline > until) {
                break;
            }
            self.player.advance_to(deadline);
            let events = self.controller.tick(deadline);
            self.record(deadline, events);
        }
    }

    fn dispatch(&mut self, event: &ScriptEvent) {
        let now = event.timestamp_ms;
        self.run_deadlines(Some(now));
        self.player.advance_to(now);

        let state = PlaybackState::from_player(&self.player);
        let x = event.x.unwrap_or(0.0);
        let events = match event.kind {
            ScriptEventKind::Tap => self.controller.on_tap(&TapEvent::new(now, x), &state),
            ScriptEventKind::Press => self.controller.press_track(x, now, &state),
            ScriptEventKind::Drag => self.controller.drag_track(x, now, &state),
            ScriptEventKind::Release => self.controller.release_track(now, &state),
            ScriptEventKind::Tick => self.controller.tick(now),
        };
        self.record(now, events);
    }
}

/// Replay a script and return its transcript.
///
/// Deadlines still pending after the last event are flushed so every tap
/// ends with a terminal classification.
///
/// # Errors
/// Fails when the configuration is invalid (zero tap window).
pub fn replay(script: &GestureScript, config: GestureConfig) -> Result<Vec<ReplayEntry>> {
    let header = &script.header;

    let mut controller = GestureController::new(config, header.container_width)?;
    if let Some(track) = header.track {
        controller.set_track_geometry(track);
    }

    let mut player = SimulatedPlayer::new(header.duration);
    if header.playing {
        player.play();
    }

    let mut replayer = Replayer {
        controller,
        player,
        entries: Vec::new(),
    };

    for event in &script.events {
        replayer.dispatch(event);
    }
    replayer.run_deadlines(None);

    tracing::debug!(
        "replayed {} event(s) over {}ms into {} transcript entries",
        script.events.len(),
        script.end_ms().unwrap_or(0),
        replayer.entries.len()
    );
    Ok(replayer.entries)
}
