//! Handler für Undo/Redo-Operationen.

use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
///
/// Gibt zurück, ob sich die Knoten geändert haben.
pub fn undo(state: &mut AppState) -> bool {
    if state.history.undo(&mut state.editor.curve.knots) {
        after_restore(state);
        log::info!("Undo ausgeführt");
        true
    } else {
        log::debug!("Undo: nichts zu tun");
        false
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) -> bool {
    if state.history.redo(&mut state.editor.curve.knots) {
        after_restore(state);
        log::info!("Redo ausgeführt");
        true
    } else {
        log::debug!("Redo: nichts zu tun");
        false
    }
}

fn after_restore(state: &mut AppState) {
    // Knotenidentitäten haben sich geändert
    state.interaction.reset();
    state.gesture.drag_count = 0;
    state.update_coordinates();
    state.mark_changed();
}
