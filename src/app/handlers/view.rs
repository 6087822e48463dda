//! Handler für Ausschnitt, Zoom und Anzeige-Flags.

use crate::app::AppState;
use crate::core::{Point, Viewport, ZoomAxes};

/// Zoomt den Ausschnitt; `canvas_center` (Standard: Canvas-Mitte) bleibt fest.
pub fn zoom(state: &mut AppState, fx: f64, fy: f64, canvas_center: Option<Point>) {
    if !(fx.is_finite() && fy.is_finite() && fx > 0.0 && fy > 0.0) {
        log::warn!("Ungültiger Zoom-Faktor ({}, {}) ignoriert", fx, fy);
        return;
    }
    let canvas = state.canvas_size;
    state.editor.viewport.zoom(fx, fy, canvas_center, canvas);
    state.request_refresh();
}

/// Übernimmt die Größe der Zeichenfläche.
pub fn set_canvas_size(state: &mut AppState, size: Point) {
    if size.x <= 0.0 || size.y <= 0.0 {
        log::debug!("Canvas-Größe {:?} ignoriert", size);
        return;
    }
    if state.canvas_size != size {
        state.canvas_size = size;
        state.request_refresh();
    }
}

/// Passt den Ausschnitt an die Bildgröße an.
pub fn fit_image(state: &mut AppState, size: Point) {
    if size.x <= 0.0 || size.y <= 0.0 {
        log::warn!("Bildgröße {:?} ungültig", size);
        return;
    }
    state.editor.viewport = Viewport::fit_image(size, state.canvas_size);
    state.request_refresh();
    log::info!("Ausschnitt auf Bild {}x{} eingepasst", size.x, size.y);
}

/// Schaltet das Gitter um.
pub fn toggle_grid(state: &mut AppState) {
    state.editor.grid_enabled = !state.editor.grid_enabled;
    state.request_refresh();
}

/// Schaltet das Einrasten am Gitter um.
pub fn toggle_snap(state: &mut AppState) {
    state.editor.snap_to_grid_enabled = !state.editor.snap_to_grid_enabled;
}

/// Setzt die Achsen für Mausrad-Zoom ohne Modifier.
pub fn set_primary_zoom_mode(state: &mut AppState, axes: ZoomAxes) {
    state.editor.primary_zoom_mode = axes;
}

/// Zeigt alle Teilkurven gleichzeitig an.
pub fn set_show_all_curves(state: &mut AppState, enabled: bool) {
    state.editor.show_all_curves = enabled;
    state.request_refresh();
}

/// Blendet Kommentare ein oder aus.
pub fn set_show_comments(state: &mut AppState, enabled: bool) {
    state.editor.show_comments = enabled;
    if !enabled {
        state.interaction.hovered_comment = None;
    }
    state.request_refresh();
}
