//! Handler für die Achsenkalibrierung.

use crate::app::notifications::EditorEvent;
use crate::app::AppState;
use crate::core::{AxisKind, Point};

/// Setzt den Kalibrierpunkt `kind` an die logische Position.
///
/// X/Y-Anker überschreiben den Anker am aktuellen Index oder werden
/// angehängt. Die Platzierung bleibt scharf geschaltet.
pub fn place_axis_point(state: &mut AppState, kind: AxisKind, position: Point) {
    let index = state
        .editor
        .calibration
        .place(kind, state.editor.axis_point_index, position);
    state.mark_changed();
    state
        .notifier
        .queue(EditorEvent::AxisPointSet { kind, index });
    log::info!(
        "Kalibrierpunkt {} [{}] bei ({:.2}, {:.2}) gesetzt",
        kind,
        index,
        position.x,
        position.y
    );
}

/// Schaltet die Platzierung eines Kalibrierpunkts scharf (`None` = aus).
pub fn arm_axis_placement(state: &mut AppState, kind: Option<AxisKind>, index: usize) {
    state.editor.axis_placement = kind;
    state.editor.axis_point_index = index;
    state.request_refresh();
}

/// Setzt den realen Wert eines Ankers.
pub fn set_axis_value(state: &mut AppState, kind: AxisKind, index: usize, value: f64) {
    if !value.is_finite() {
        log::warn!("Ankerwert {} ist keine endliche Zahl", value);
        return;
    }
    if state.editor.calibration.set_value(kind, index, value) {
        state.mark_changed();
    } else {
        log::warn!("Anker {} [{}] existiert nicht", kind, index);
    }
}

/// Setzt die Log-Basis eines Ankers (`None` = linear).
pub fn set_axis_log_base(state: &mut AppState, kind: AxisKind, index: usize, base: Option<f64>) {
    if let Some(b) = base {
        if !(b.is_finite() && b > 0.0 && b != 1.0) {
            log::warn!("Log-Basis {} ungültig", b);
            return;
        }
    }
    if state.editor.calibration.set_log_base(kind, index, base) {
        state.mark_changed();
    } else {
        log::warn!("Anker {} [{}] existiert nicht", kind, index);
    }
}

/// Entfernt einen Anker und setzt den Platzierungs-Index zurück.
pub fn remove_axis_point(state: &mut AppState, kind: AxisKind, index: usize) {
    if !state.editor.calibration.remove(kind, index) {
        log::debug!("Anker {} [{}] existiert nicht", kind, index);
        return;
    }
    state.editor.axis_point_index = 0;
    state.editor.axis_placement = None;
    state.mark_changed();
    log::info!("Anker {} [{}] entfernt", kind, index);
}

/// Entfernt Ursprung und alle Anker.
pub fn clear_calibration(state: &mut AppState) {
    state.editor.calibration.clear();
    state.editor.axis_point_index = 0;
    state.editor.axis_placement = None;
    state.mark_changed();
    log::info!("Kalibrierung geleert");
}
