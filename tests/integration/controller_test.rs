//! Behavioral tests for the gesture controller through the public API

use tapseek::controller::{
    classify_tap, map_position_to_fraction, relative_seek, ControllerEvent, DebounceTimer,
    GestureConfig, GestureController, Half, PlaybackState, SeekCommand, TapClassification,
    TapEvent, TrackGeometry,
};

const WIDTH: f64 = 400.0;

fn controller() -> GestureController {
    GestureController::new(GestureConfig::default(), WIDTH).unwrap()
}

fn classifications(events: &[ControllerEvent]) -> Vec<TapClassification> {
    events
        .iter()
        .filter_map(|e| match e {
            ControllerEvent::Classified { tap } => Some(*tap),
            _ => None,
        })
        .collect()
}

#[test]
fn relative_seek_always_lands_inside_the_stream() {
    let values = [-1000.0, -10.0, -0.5, 0.0, 0.5, 5.0, 95.0, 100.0, 250.0];
    for &current in &values {
        for &duration in &[0.0, 1.0, 100.0, 3600.0] {
            for &delta in &values {
                let target = relative_seek(current, duration, delta)
                    .target_secs()
                    .unwrap();
                assert!(
                    target >= 0.0 && target <= duration.max(current.max(0.0)),
                    "current={} duration={} delta={} -> {}",
                    current,
                    duration,
                    delta,
                    target
                );
                if duration > 0.0 {
                    assert!(target <= duration);
                }
            }
        }
    }
}

#[test]
fn relative_seek_clamps_at_both_ends() {
    assert_eq!(
        relative_seek(95.0, 100.0, 10.0),
        SeekCommand::SeekAbsolute { target_secs: 100.0 }
    );
    assert_eq!(
        relative_seek(5.0, 100.0, -10.0),
        SeekCommand::SeekAbsolute { target_secs: 0.0 }
    );
}

#[test]
fn position_mapping_is_monotonic_and_bounded() {
    let geometry = TrackGeometry::new(40.0, 320.0);
    let mut previous = f64::NEG_INFINITY;
    let mut x = -100.0;
    while x <= 500.0 {
        let fraction = map_position_to_fraction(x, &geometry).unwrap();
        assert!((0.0..=1.0).contains(&fraction));
        assert!(fraction >= previous);
        previous = fraction;
        x += 7.5;
    }
}

#[test]
fn position_mapping_midpoint() {
    let geometry = TrackGeometry::new(0.0, 320.0);
    assert_eq!(map_position_to_fraction(160.0, &geometry).unwrap(), 0.5);
}

#[test]
fn degenerate_track_is_an_error() {
    assert!(map_position_to_fraction(10.0, &TrackGeometry::new(0.0, 0.0)).is_err());
}

#[test]
fn taps_just_inside_the_window_are_double() {
    let window = 300;
    let (first, last) = classify_tap(&TapEvent::new(1000, 350.0), None, window, WIDTH);
    assert_eq!(first, TapClassification::Pending);

    let (second, _) = classify_tap(&TapEvent::new(1000 + window - 1, 350.0), last, window, WIDTH);
    assert_eq!(second, TapClassification::Double { half: Half::Right });
}

#[test]
fn taps_just_outside_the_window_are_two_singles() {
    let mut c = controller();
    let state = PlaybackState::new(30.0, 120.0).with_playing(true);

    let mut events = c.on_tap(&TapEvent::new(1000, 100.0), &state);
    events.extend(c.on_tap(&TapEvent::new(1301, 100.0), &state));
    events.extend(c.tick(10_000));

    let terminal: Vec<_> = classifications(&events)
        .into_iter()
        .filter(|tap| *tap != TapClassification::Pending)
        .collect();
    assert_eq!(
        terminal,
        vec![TapClassification::Single, TapClassification::Single]
    );
}

#[test]
fn double_tap_half_follows_the_midpoint() {
    let state = PlaybackState::new(60.0, 120.0);

    let mut c = controller();
    c.on_tap(&TapEvent::new(0, WIDTH / 2.0 - 1.0), &state);
    let left = c.on_tap(&TapEvent::new(100, WIDTH / 2.0 - 1.0), &state);
    assert!(left.contains(&ControllerEvent::Command {
        command: SeekCommand::SeekAbsolute { target_secs: 50.0 }
    }));

    let mut c = controller();
    c.on_tap(&TapEvent::new(0, WIDTH / 2.0 + 1.0), &state);
    let right = c.on_tap(&TapEvent::new(100, WIDTH / 2.0 + 1.0), &state);
    assert!(right.contains(&ControllerEvent::Command {
        command: SeekCommand::SeekAbsolute { target_secs: 70.0 }
    }));
}

#[test]
fn every_tap_gets_exactly_one_terminal_classification() {
    let state = PlaybackState::new(10.0, 120.0);
    let mut c = controller();
    let times = [0, 100, 500, 1200, 1350, 1700, 1710, 5000];

    let mut events = Vec::new();
    for t in times {
        events.extend(c.on_tap(&TapEvent::new(t, 50.0), &state));
    }
    events.extend(c.tick(60_000));

    // Doubles consume two taps, singles one
    let consumed: usize = classifications(&events)
        .iter()
        .map(|tap| match tap {
            TapClassification::Single => 1,
            TapClassification::Double { .. } => 2,
            TapClassification::Pending => 0,
        })
        .sum();
    assert_eq!(consumed, times.len());
    assert_eq!(c.next_deadline(), None);
}

#[test]
fn overlay_retrigger_extends_visibility() {
    let mut timer = DebounceTimer::new(2500);
    timer.trigger(0);
    timer.trigger(2000);
    assert!(timer.is_visible(2500));
    assert!(timer.is_visible(4499));
    assert!(!timer.is_visible(4500));
}

#[test]
fn scrub_holds_display_until_release() {
    let mut c = controller();
    c.set_track_geometry(TrackGeometry::new(0.0, 320.0));
    let state = PlaybackState::new(10.0, 200.0).with_playing(true);

    c.press_track(80.0, 0, &state);
    c.drag_track(240.0, 50, &state);
    // Polled position is ignored while dragging
    assert_eq!(c.displayed_position(12.0), 150.0);

    let events = c.release_track(100, &state);
    assert!(events.contains(&ControllerEvent::Command {
        command: SeekCommand::SeekAbsolute { target_secs: 150.0 }
    }));
    assert_eq!(c.displayed_position(12.0), 12.0);
}

#[test]
fn unknown_duration_never_moves_forward() {
    let mut c = controller();
    let state = PlaybackState::new(42.0, f64::NAN);
    let events = c.seek_by(10.0, 0, &state);
    assert!(events.contains(&ControllerEvent::Command {
        command: SeekCommand::SeekAbsolute { target_secs: 42.0 }
    }));
}
