//! Interactive terminal surface
//!
//! Runs a simulated video surface in the terminal so the gesture
//! controller can be exercised by hand: mouse clicks on the surface are
//! taps, presses and drags on the bottom track scrub, and the overlay and
//! seek indicator appear and hide on the controller's clock.
//!
//! # Architecture
//!
//! - `state`: SurfaceState (layout, redraw flag, gesture recorder) and InputResult
//! - `input`: keyboard and mouse handling

mod input;
mod state;

pub use input::{apply_events, handle_event, handle_key_event, handle_mouse_event};
pub use state::{InputResult, SurfaceState};

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{cursor, event, execute, terminal};

use crate::controller::{GestureConfig, GestureController};
use crate::player::{MediaPlayer, SimulatedPlayer};
use crate::render::{
    render_progress_bar, render_separator_line, render_status_bar, render_surface, SurfaceFrame,
};

/// Options for an interactive session.
#[derive(Debug, Clone)]
pub struct SurfaceOptions {
    /// Simulated stream duration in seconds (0 for unknown)
    pub duration_secs: f64,
    /// Title drawn in the corner of the surface
    pub title: Option<String>,
    /// Position poll interval; also the idle redraw interval
    pub poll_interval_ms: u64,
    /// Start playing immediately
    pub autoplay: bool,
    /// Write captured gestures to this script on exit
    pub record: Option<PathBuf>,
}

/// Run the interactive surface until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run_surface(options: &SurfaceOptions, config: GestureConfig) -> Result<()> {
    let (cols, rows) = terminal::size().context("Failed to get terminal size")?;

    let mut state = SurfaceState::new(cols, rows);
    let mut controller = GestureController::new(config, cols as f64)?;
    controller.set_track_geometry(state.track_geometry());

    let mut player = SimulatedPlayer::new(options.duration_secs);
    if options.autoplay {
        player.play();
    }
    if options.record.is_some() {
        state.start_recording(options.duration_secs, options.autoplay, options.title.clone());
    }

    let mut stdout = io::stdout();
    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        event::EnableMouseCapture,
        cursor::Hide
    )?;

    let result = event_loop(
        &mut stdout,
        options,
        &mut state,
        &mut controller,
        &mut player,
    );

    // Restore the terminal even if the loop failed
    let _ = execute!(
        stdout,
        cursor::Show,
        event::DisableMouseCapture,
        terminal::LeaveAlternateScreen
    );
    let _ = terminal::disable_raw_mode();

    result?;

    if let (Some(path), Some(script)) = (options.record.as_ref(), state.recording.as_ref()) {
        script.write(path)?;
        tracing::info!("recorded {} gesture(s) to {:?}", script.events.len(), path);
    }

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn event_loop(
    stdout: &mut io::Stdout,
    options: &SurfaceOptions,
    state: &mut SurfaceState,
    controller: &mut GestureController,
    player: &mut SimulatedPlayer,
) -> Result<()> {
    let start = Instant::now();
    let clock = || start.elapsed().as_millis() as u64;
    let poll_interval = options.poll_interval_ms.max(1);
    let mut last_poll = 0u64;

    loop {
        let now = clock();
        player.advance_to(now);

        let events = controller.tick(now);
        apply_events(events, state, player);

        // Periodic position poll: redraw the track while playing
        if now.saturating_sub(last_poll) >= poll_interval {
            last_poll = now;
            if player.playing() {
                state.needs_render = true;
            }
        }

        if state.needs_render {
            render_frame(stdout, options, state, controller, player, now)?;
            state.needs_render = false;
        }

        // Sleep until the next poll or the next controller deadline
        let mut wait_ms = poll_interval.saturating_sub(now.saturating_sub(last_poll));
        if let Some(deadline) = controller.next_deadline() {
            wait_ms = wait_ms.min(deadline.saturating_sub(now));
        }

        if event::poll(Duration::from_millis(wait_ms))? {
            let input = event::read()?;
            let now = clock();
            player.advance_to(now);
            if handle_event(input, now, state, controller, player) == InputResult::Quit {
                break;
            }
        }
    }

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn render_frame<W: Write>(
    out: &mut W,
    options: &SurfaceOptions,
    state: &SurfaceState,
    controller: &GestureController,
    player: &SimulatedPlayer,
    now_ms: u64,
) -> Result<()> {
    let frame = SurfaceFrame {
        title: options.title.as_deref(),
        playing: player.playing(),
        overlay: controller.overlay_visible(now_ms),
        indicator: controller.seek_indicator(now_ms),
        seek_step_secs: controller.config().seek_step_secs,
    };
    let cols = state.term_cols;

    render_surface(out, cols, state.surface_rows(), &frame)?;
    render_separator_line(out, cols, state.surface_rows())?;
    render_progress_bar(
        out,
        cols,
        state.progress_row(),
        controller.displayed_position(player.current_time()),
        player.duration(),
        controller.is_dragging(),
    )?;
    render_status_bar(
        out,
        cols,
        state.term_rows.saturating_sub(1),
        player.playing(),
        player.muted(),
        state.recording.is_some(),
    )?;
    out.flush()?;
    Ok(())
}
