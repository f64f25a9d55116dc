//! Input handling for the terminal surface.
//!
//! Maps crossterm keyboard and mouse events onto controller operations,
//! applies the resulting commands to the player, and records gestures.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::controller::{ControllerEvent, GestureController, PlaybackState, TapEvent};
use crate::player::{apply_command, MediaPlayer, SimulatedPlayer};
use crate::script::ScriptEvent;
use crate::surface::state::{InputResult, SurfaceState};

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(
    event: Event,
    now_ms: u64,
    state: &mut SurfaceState,
    controller: &mut GestureController,
    player: &mut SimulatedPlayer,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, now_ms, state, controller, player),
        Event::Mouse(mouse) => {
            handle_mouse_event(mouse, now_ms, state, controller, player);
            InputResult::Continue
        }
        Event::Resize(cols, rows) => {
            state.handle_resize(cols, rows, controller);
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, paste, etc.
    }
}

/// Apply controller output to the player and flag a redraw.
pub fn apply_events(
    events: Vec<ControllerEvent>,
    state: &mut SurfaceState,
    player: &mut SimulatedPlayer,
) {
    for event in events {
        if let ControllerEvent::Command { command } = event {
            apply_command(player, command);
        }
        state.needs_render = true;
    }
}

/// Handle a keyboard event.
pub fn handle_key_event(
    key: KeyEvent,
    now_ms: u64,
    state: &mut SurfaceState,
    controller: &mut GestureController,
    player: &mut SimulatedPlayer,
) -> InputResult {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    let step = controller.config().seek_step_secs;
    let events = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return InputResult::Quit
        }
        KeyCode::Char(' ') => controller.toggle_play_pause(now_ms),
        KeyCode::Left => {
            let snapshot = PlaybackState::from_player(player);
            controller.seek_by(-step, now_ms, &snapshot)
        }
        KeyCode::Right => {
            let snapshot = PlaybackState::from_player(player);
            controller.seek_by(step, now_ms, &snapshot)
        }
        KeyCode::Char('m') => {
            player.set_muted(!player.muted());
            state.needs_render = true;
            return InputResult::Continue;
        }
        _ => return InputResult::Continue,
    };

    apply_events(events, state, player);
    InputResult::Continue
}

/// Handle a mouse event.
///
/// - Left press on the seek track starts a scrub, drags move it, release seeks
/// - Left press anywhere on the surface is a tap
pub fn handle_mouse_event(
    mouse: MouseEvent,
    now_ms: u64,
    state: &mut SurfaceState,
    controller: &mut GestureController,
    player: &mut SimulatedPlayer,
) {
    let x = mouse.column as f64;
    let snapshot = PlaybackState::from_player(player);

    let events = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if mouse.row == state.progress_row() => {
            state.record(ScriptEvent::press(now_ms, x));
            controller.press_track(x, now_ms, &snapshot)
        }
        MouseEventKind::Down(MouseButton::Left) if mouse.row < state.surface_rows() => {
            state.record(ScriptEvent::tap(now_ms, x));
            controller.on_tap(&TapEvent::new(now_ms, x), &snapshot)
        }
        MouseEventKind::Drag(MouseButton::Left) if controller.is_dragging() => {
            state.record(ScriptEvent::drag(now_ms, x));
            controller.drag_track(x, now_ms, &snapshot)
        }
        MouseEventKind::Up(MouseButton::Left) if controller.is_dragging() => {
            state.record(ScriptEvent::release(now_ms));
            controller.release_track(now_ms, &snapshot)
        }
        _ => return,
    };

    apply_events(events, state, player);
}
