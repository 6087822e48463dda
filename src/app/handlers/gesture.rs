//! Handler für Zeigergesten: Knoten-/Ebenen-Drag, Pinch-Zoom und Hover.

use crate::app::state::PinchGesture;
use crate::app::AppState;
use crate::core::geometry::{distance, midpoint};
use crate::core::{find_nearest_comment, snap_to_grid, Point};

/// Beginnt einen Drag an der Canvas-Position.
///
/// Liegt ein Knoten im Fangradius, wird er ausgewählt und gezogen,
/// sonst wird die Bildebene verschoben. Ein Checkpoint entsteht erst
/// bei der ersten Bewegung.
pub fn begin_drag(state: &mut AppState, canvas_pos: Point, pick_radius: f64) {
    state.gesture.pinch = None;
    let near = state.find_knot_near(canvas_pos, pick_radius);

    state.interaction.selected_knot = near;
    state.interaction.hovered_knot = None;
    state.interaction.knot_dragging = near.is_some();
    state.interaction.plane_dragging = near.is_none();
    state.gesture.drag_start_logical = state.canvas_to_logical(canvas_pos);
    state.gesture.drag_start_canvas = canvas_pos;
    state.gesture.drag_count = 0;
    state.request_refresh();

    match near {
        Some(index) => log::debug!("Knoten-Drag beginnt bei Knoten {}", index),
        None => log::debug!("Ebenen-Drag beginnt"),
    }
}

/// Setzt den laufenden Drag an der Canvas-Position fort.
pub fn drag_to(state: &mut AppState, canvas_pos: Point) -> anyhow::Result<()> {
    if state.interaction.knot_dragging {
        let Some(index) = state.interaction.selected_knot else {
            return Ok(());
        };
        if state.gesture.drag_count == 0 {
            state.checkpoint();
        }
        state.gesture.drag_count += 1;

        let mut position = state.canvas_to_logical(canvas_pos);
        if state.editor.grid_enabled && state.editor.snap_to_grid_enabled {
            position = snap_to_grid(
                position,
                &state.editor.viewport,
                state.canvas_size,
                state.options.grid_min_space(),
                state.options.snap_distance_px,
            );
        }
        state.editor.curve.move_knot(index, position)?;
        state.mark_changed();
    } else if state.interaction.plane_dragging {
        state.gesture.drag_count += 1;
        let anchor = state.gesture.drag_start_logical;
        let canvas = state.canvas_size;
        state.editor.viewport.move_plane(canvas_pos, anchor, canvas);
        state.request_refresh();
    }
    Ok(())
}

/// Beendet den laufenden Drag.
///
/// Nach einer Knotenbewegung werden die Koordinaten einmal neu berechnet.
pub fn end_drag(state: &mut AppState) {
    if state.interaction.knot_dragging && state.gesture.drag_count > 0 {
        state.update_coordinates();
        state.mark_changed();
        log::debug!("Knoten-Drag beendet nach {} Schritten", state.gesture.drag_count);
    }
    if state.interaction.knot_dragging || state.interaction.plane_dragging {
        state.request_refresh();
    }
    state.interaction.knot_dragging = false;
    state.interaction.plane_dragging = false;
}

/// Verwirft den laufenden Drag.
///
/// Ein bewegter Knoten kehrt per Undo zurück, die Bildebene auf die
/// Abbildung vom Drag-Beginn.
pub fn abort_drag(state: &mut AppState) {
    if state.interaction.knot_dragging {
        if state.gesture.drag_count > 0 {
            super::history::undo(state);
        }
        log::debug!("Knoten-Drag abgebrochen");
    } else if state.interaction.plane_dragging {
        let canvas = state.canvas_size;
        let (start_canvas, start_logical) = (
            state.gesture.drag_start_canvas,
            state.gesture.drag_start_logical,
        );
        state
            .editor
            .viewport
            .move_plane(start_canvas, start_logical, canvas);
        state.request_refresh();
        log::debug!("Ebenen-Drag abgebrochen");
    } else {
        return;
    }
    state.interaction.knot_dragging = false;
    state.interaction.plane_dragging = false;
    state.gesture.drag_count = 0;
}

/// Beginnt einen Zwei-Finger-Zoom.
///
/// Die Zoom-Achsen folgen der Richtung der Finger: liegt sie innerhalb
/// des Grenzwinkels einer Achse, wird nur diese gezoomt.
pub fn begin_pinch(state: &mut AppState, canvas_a: Point, canvas_b: Point) {
    let center = midpoint(canvas_a, canvas_b);
    let dx = (canvas_a.x - canvas_b.x).abs();
    let dy = (canvas_a.y - canvas_b.y).abs();
    let t = state.options.pinch_direction_tan();

    let pinch = PinchGesture {
        start_viewport: state.editor.viewport,
        start_distance: distance(canvas_a, canvas_b),
        logical_center: state.canvas_to_logical(center),
        zoom_x: dx > t * dy,
        zoom_y: dy > t * dx,
    };
    log::debug!(
        "Pinch beginnt (x: {}, y: {}, Abstand {:.1})",
        pinch.zoom_x,
        pinch.zoom_y,
        pinch.start_distance
    );
    state.gesture.pinch = Some(pinch);
    state.request_refresh();
}

/// Setzt den Zwei-Finger-Zoom mit neuen Fingerpositionen fort.
pub fn pinch_to(state: &mut AppState, canvas_a: Point, canvas_b: Point) {
    let Some(pinch) = state.gesture.pinch else {
        return;
    };
    if pinch.start_distance <= 0.0 {
        return;
    }

    let f = distance(canvas_a, canvas_b) / pinch.start_distance;
    if !f.is_finite() || f <= 0.0 {
        return;
    }
    let fx = if pinch.zoom_x { f } else { 1.0 };
    let fy = if pinch.zoom_y { f } else { 1.0 };
    let canvas = state.canvas_size;
    state.editor.viewport.zoom_from(
        &pinch.start_viewport,
        fx,
        fy,
        midpoint(canvas_a, canvas_b),
        pinch.logical_center,
        canvas,
    );
    state.request_refresh();
}

/// Beendet den Zwei-Finger-Zoom.
pub fn end_pinch(state: &mut AppState) {
    if state.gesture.pinch.take().is_some() {
        state.request_refresh();
    }
}

/// Bestimmt Knoten und Kommentar unter dem Zeiger.
pub fn update_hover(state: &mut AppState, canvas_pos: Point, pick_radius: f64) {
    let hovered_knot = state.find_knot_near(canvas_pos, pick_radius);
    let hovered_comment = if state.editor.show_comments {
        find_nearest_comment(&state.editor.comments, canvas_pos, pick_radius, |p| {
            state.logical_to_canvas(p)
        })
    } else {
        None
    };

    if hovered_knot != state.interaction.hovered_knot
        || hovered_comment != state.interaction.hovered_comment
    {
        state.interaction.hovered_knot = hovered_knot;
        state.interaction.hovered_comment = hovered_comment;
        state.request_refresh();
    }
}
