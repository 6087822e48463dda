use crate::app::state::PromptRequest;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{AxisKind, Point, Viewport, ZoomAxes};

use super::map_intent_to_commands;

fn state_with_unit_view() -> AppState {
    let mut state = AppState::new();
    state.canvas_size = Point::new(100.0, 100.0);
    state.editor.viewport = Viewport::new(0.0, 100.0, 0.0, 100.0);
    state
}

#[test]
fn place_requested_creates_knot_at_logical_position() {
    let state = state_with_unit_view();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PlaceRequested {
            canvas_pos: Point::new(10.0, 30.0),
        },
    );

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        AppCommand::CreateKnot { position } => {
            assert_eq!(*position, Point::new(10.0, 70.0));
        }
        other => panic!("unerwarteter Command: {other:?}"),
    }
}

#[test]
fn place_requested_with_armed_axis_places_anchor() {
    let mut state = state_with_unit_view();
    state.editor.axis_placement = Some(AxisKind::Y);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PlaceRequested {
            canvas_pos: Point::new(0.0, 0.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::PlaceAxisPoint {
            kind: AxisKind::Y,
            ..
        }
    ));
}

#[test]
fn place_requested_is_ignored_while_showing_all_curves() {
    let mut state = state_with_unit_view();
    state.editor.show_all_curves = true;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PlaceRequested {
            canvas_pos: Point::new(5.0, 5.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn drag_started_uses_touch_pick_radius() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::DragStarted {
            canvas_pos: Point::ZERO,
            touch: true,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::BeginDrag { pick_radius, .. } if pick_radius == 30.0
    ));
}

#[test]
fn zoom_without_axes_follows_primary_zoom_mode() {
    let mut state = AppState::new();
    state.editor.primary_zoom_mode = ZoomAxes::X;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ZoomRequested {
            canvas_center: None,
            axes: None,
            zoom_in: false,
        },
    );

    assert_eq!(commands.len(), 1);
    match commands[0] {
        AppCommand::ZoomView { fx, fy, .. } => {
            assert!((fx - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
            assert_eq!(fy, 1.0);
        }
        ref other => panic!("unerwarteter Command: {other:?}"),
    }
}

#[test]
fn delete_without_selection_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::DeleteSelectedRequested);

    assert!(commands.is_empty());
}

#[test]
fn pinch_started_maps_to_begin_pinch() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PinchStarted {
            canvas_a: Point::new(0.0, 0.0),
            canvas_b: Point::new(10.0, 0.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::BeginPinch { .. }));
}

#[test]
fn knot_list_edit_prefills_encoded_knots() {
    let mut state = AppState::new();
    state.editor.curve.knots = vec![Point::new(1.0, 2.0)];

    let commands = map_intent_to_commands(&state, AppIntent::KnotListEditRequested);

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        AppCommand::OpenPrompt {
            prompt: PromptRequest::KnotList { text },
        } => assert_eq!(text, "[1, 2]"),
        other => panic!("unerwarteter Command: {other:?}"),
    }
}

#[test]
fn resample_submitted_maps_to_two_commands_in_order() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ResampleSubmitted { count: 10 });

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::ResampleKnots { count: 10 }));
    assert!(matches!(commands[1], AppCommand::ClosePrompt));
}
