use approx::assert_relative_eq;
use graph_digitizer::core::{decode_knot_list, encode_knot_list, SplineInterpolator};
use graph_digitizer::{
    AppController, AppIntent, AppState, InterpolationMethod, KnotHistory, Point, SubCurve,
};

fn a() -> Point {
    Point::new(1.0, 1.0)
}

fn b() -> Point {
    Point::new(2.0, 4.0)
}

#[test]
fn test_undo_redo_after_single_checkpoint() {
    let mut history = KnotHistory::new();
    let mut knots = vec![a()];

    history.checkpoint(&knots);
    knots.push(b());

    assert!(history.undo(&mut knots));
    assert_eq!(knots, vec![a()]);
    assert!(history.redo(&mut knots));
    assert_eq!(knots, vec![a(), b()]);
    assert!(!history.redo(&mut knots));
    assert_eq!(knots, vec![a(), b()]);
}

#[test]
fn test_fresh_checkpoint_after_undo_drops_redo_entry() {
    let mut history = KnotHistory::new();
    let mut knots = vec![a()];

    history.checkpoint(&knots);
    knots.push(b());
    assert!(history.undo(&mut knots));

    history.checkpoint(&knots);
    knots.push(Point::new(9.0, 9.0));

    assert!(!history.redo(&mut knots));
    assert_eq!(knots, vec![a(), Point::new(9.0, 9.0)]);
    assert!(history.undo(&mut knots));
    assert_eq!(knots, vec![a()]);
}

#[test]
fn test_replacing_knots_twice_is_idempotent_and_clears_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let text = "[0, 0], [4, 2], [8, 1]";

    controller
        .handle_intent(
            &mut state,
            AppIntent::PlaceRequested {
                canvas_pos: Point::new(400.0, 300.0),
            },
        )
        .expect("PlaceRequested sollte ohne Fehler durchlaufen");
    assert_eq!(state.interaction.selected_knot, Some(0));

    for _ in 0..2 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::KnotListSubmitted {
                    text: text.to_string(),
                },
            )
            .expect("KnotListSubmitted sollte ohne Fehler durchlaufen");
        assert_eq!(
            state.editor.curve.knots,
            decode_knot_list(text).expect("Text sollte lesbar sein")
        );
        assert_eq!(state.interaction.selected_knot, None);
    }

    controller
        .handle_intent(&mut state, AppIntent::ClearAllRequested)
        .expect("ClearAllRequested sollte ohne Fehler durchlaufen");
    assert!(state.editor.curve.knots.is_empty());
    assert_eq!(state.interaction.selected_knot, None);
}

#[test]
fn test_knot_text_keeps_insertion_order() {
    let knots = vec![
        Point::new(5.0, 0.0),
        Point::new(1.0, 2.0),
        Point::new(3.0, -1.5),
    ];

    let text = encode_knot_list(&knots);
    assert_eq!(text, "[5, 0], [1, 2], [3, -1.5]");
    assert_eq!(decode_knot_list(&text).expect("Text sollte lesbar sein"), knots);
}

#[test]
fn test_spline_coordinates_pass_through_end_knots() {
    let mut curve = SubCurve::new(0, "Messung");
    curve.knots = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 8.0),
        Point::new(20.0, 3.0),
        Point::new(30.0, 9.0),
    ];

    for method in [InterpolationMethod::CatmullRom, InterpolationMethod::BSpline] {
        curve.interpolation_method = method;
        curve.update_coordinates(&SplineInterpolator, 60);

        assert_eq!(curve.coordinates.len(), 61);
        let first = curve.coordinates[0];
        let last = curve.coordinates[60];
        assert_relative_eq!(first.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(first.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(last.x, 30.0, epsilon = 1e-9);
        assert_relative_eq!(last.y, 9.0, epsilon = 1e-9);
    }

    curve.interpolation_method = InterpolationMethod::None;
    curve.update_coordinates(&SplineInterpolator, 60);
    assert_eq!(curve.coordinates, curve.knots);
}

#[test]
fn test_interpolation_change_recomputes_active_curve() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::KnotListSubmitted {
                text: "[0, 0], [10, 10]".to_string(),
            },
        )
        .expect("KnotListSubmitted sollte ohne Fehler durchlaufen");
    assert_eq!(state.editor.curve.coordinates.len(), 2);

    controller
        .handle_intent(
            &mut state,
            AppIntent::InterpolationMethodChanged {
                method: InterpolationMethod::Linear,
            },
        )
        .expect("InterpolationMethodChanged sollte ohne Fehler durchlaufen");

    assert_eq!(
        state.editor.curve.coordinates.len(),
        state.options.curve_sample_steps + 1
    );
    let mid = state.editor.curve.coordinates[state.options.curve_sample_steps / 2];
    assert_relative_eq!(mid.x, 5.0, epsilon = 1e-9);
    assert_relative_eq!(mid.y, 5.0, epsilon = 1e-9);
}
