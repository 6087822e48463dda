//! Handler für Knoten-Editing: Anlegen, Löschen, Ersetzen, Neu-Abtasten.

use crate::app::state::PromptRequest;
use crate::app::AppState;
use crate::core::{decode_knot_list, InterpolationMethod, Point};

/// Hängt einen Knoten an der logischen Position an und wählt ihn aus.
pub fn create_knot(state: &mut AppState, position: Point) -> anyhow::Result<()> {
    state.checkpoint();
    let index = state.editor.curve.add_knot(position)?;
    state.interaction.selected_knot = Some(index);
    state.interaction.hovered_knot = Some(index);
    state.interaction.knot_dragging = false;
    state.interaction.plane_dragging = false;
    state.update_coordinates();
    state.mark_changed();
    log::debug!(
        "Knoten {} bei ({:.2}, {:.2}) angelegt",
        index,
        position.x,
        position.y
    );
    Ok(())
}

/// Löscht den ausgewählten Knoten.
pub fn delete_selected(state: &mut AppState) -> anyhow::Result<()> {
    let Some(index) = state.interaction.selected_knot else {
        log::debug!("Löschen: kein Knoten ausgewählt");
        return Ok(());
    };
    state.interaction.knot_dragging = false;
    state.checkpoint();
    state.editor.curve.delete_knot(index)?;
    state.interaction.selected_knot = None;
    state.interaction.hovered_knot = None;
    state.update_coordinates();
    state.mark_changed();
    log::info!("Knoten {} gelöscht", index);
    Ok(())
}

/// Entfernt alle Knoten und die komplette Kalibrierung.
///
/// Nur die Knoten sind über Undo wiederherstellbar.
pub fn clear_knots_and_calibration(state: &mut AppState) {
    state.checkpoint();
    state.editor.curve.clear();
    state.editor.calibration.clear();
    state.editor.axis_point_index = 0;
    state.editor.axis_placement = None;
    state.interaction.reset();
    state.update_coordinates();
    state.mark_changed();
    log::info!("Knoten und Kalibrierung geleert");
}

/// Ersetzt die Knoten durch eine Textliste `[x, y], [x, y]`.
///
/// Bei einem Lesefehler bleibt der Zustand unverändert.
pub fn set_knots_from_text(state: &mut AppState, text: &str) -> anyhow::Result<()> {
    let knots = decode_knot_list(text)?;
    if knots == state.editor.curve.knots {
        log::debug!("Knotenliste unverändert");
        return Ok(());
    }
    replace_knots(state, knots);
    log::info!("{} Knoten aus Text übernommen", state.editor.curve.knots.len());
    Ok(())
}

/// Ersetzt die Knoten durch `count` gleichverteilte Punkte der Kurve.
pub fn resample(state: &mut AppState, count: usize) -> anyhow::Result<()> {
    let knots = state
        .editor
        .curve
        .resampled_knots(state.interpolator(), count)?;
    replace_knots(state, knots);
    log::info!("Kurve mit {} Knoten neu abgetastet", count);
    Ok(())
}

fn replace_knots(state: &mut AppState, knots: Vec<Point>) {
    state.checkpoint();
    state.editor.curve.replace_knots(knots);
    state.interaction.reset();
    state.update_coordinates();
    state.mark_changed();
}

/// Setzt das Interpolationsverfahren der aktiven Teilkurve.
pub fn set_interpolation_method(state: &mut AppState, method: InterpolationMethod) {
    if state.editor.curve.interpolation_method == method {
        return;
    }
    state.editor.curve.interpolation_method = method;
    state.update_coordinates();
    state.mark_changed();
    log::info!("Interpolation: {}", method);
}

/// Öffnet eine Eingabeaufforderung.
pub fn open_prompt(state: &mut AppState, prompt: PromptRequest) {
    state.prompt = Some(prompt);
    state.request_refresh();
}

/// Schließt die offene Eingabeaufforderung.
pub fn close_prompt(state: &mut AppState) {
    if state.prompt.take().is_some() {
        state.request_refresh();
    }
}
