//! Handler für Laden, Zurücksetzen und Teilkurven-Wechsel.

use crate::app::state::{default_curve_name, EditorState};
use crate::app::AppState;
use crate::core::{next_subcurve_id, place_comments, CommentRecord, GraphDocument, SubCurve};
use crate::shared::EditorOptions;

/// Übernimmt einen Editor-Zustand und merkt ihn als Ausgangszustand.
///
/// History und Interaktion werden verworfen.
pub fn load_editor_state(state: &mut AppState, editor: EditorState) {
    state.initial_editor = editor.clone();
    apply_editor_state(state, editor);
    log::info!(
        "Editor-Zustand übernommen: {} Knoten, {} Teilkurven",
        state.editor.curve.knots.len(),
        state.editor.other_curves.len() + 1
    );
}

/// Übernimmt ein Dokument; Ausschnitt und Anzeige-Flags bleiben erhalten.
pub fn load_document(state: &mut AppState, document: GraphDocument, active_subcurve: u32) {
    let editor = EditorState::from_document(document, active_subcurve, &state.editor);
    load_editor_state(state, editor);
}

/// Übernimmt Kommentare und platziert die der aktiven Teilkurve im Bild.
///
/// Schlägt die Umrechnung fehl, bleibt der Zustand unverändert.
pub fn load_comments(state: &mut AppState, records: Vec<CommentRecord>) -> anyhow::Result<()> {
    let placed = place_comments(
        &records,
        state.editor.active_subplot(),
        &state.editor.calibration,
    )?;
    log::info!(
        "{} Kommentare geladen, {} für Teilkurve {}",
        records.len(),
        placed.len(),
        state.editor.curve.id
    );
    state.editor.comment_records = records;
    state.editor.comments = placed;
    state.interaction.hovered_comment = None;
    state.request_refresh();
    Ok(())
}

/// Kehrt zum zuletzt übernommenen Ausgangszustand zurück.
pub fn reset_to_initial(state: &mut AppState) {
    let initial = state.initial_editor.clone();
    apply_editor_state(state, initial);
    log::info!("Editor auf Ausgangszustand zurückgesetzt");
}

/// Übernimmt neue Laufzeit-Optionen.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    let steps_changed = options.curve_sample_steps != state.options.curve_sample_steps;
    state.options = options;
    if steps_changed {
        state.update_coordinates();
        state.mark_changed();
    }
    log::info!("Optionen übernommen");
}

/// Aktiviert die Teilkurve `id`.
///
/// Die History gilt nur für die aktive Teilkurve und wird verworfen.
pub fn select_subcurve(state: &mut AppState, id: u32) -> anyhow::Result<()> {
    if state.editor.curve.id == id {
        return Ok(());
    }
    let Some(pos) = state.editor.other_curves.iter().position(|c| c.id == id) else {
        log::warn!("Teilkurve {} existiert nicht", id);
        return Ok(());
    };
    let comments = place_comments(
        &state.editor.comment_records,
        id + 1,
        &state.editor.calibration,
    )?;

    let next = state.editor.other_curves.remove(pos);
    let previous = std::mem::replace(&mut state.editor.curve, next);
    state.editor.other_curves.push(previous);
    state.editor.other_curves.sort_by_key(|c| c.id);
    state.editor.comments = comments;
    activate_curve(state);
    log::info!("Teilkurve {} aktiviert", id);
    Ok(())
}

/// Legt eine leere Teilkurve an und aktiviert sie.
pub fn add_subcurve(state: &mut AppState, name: Option<String>) -> anyhow::Result<()> {
    let id = next_subcurve_id(state.editor.all_curves());
    let mut curve = SubCurve::new(id, name.unwrap_or_else(|| default_curve_name(id)));
    curve.interpolation_method = state.editor.curve.interpolation_method;

    let comments = place_comments(
        &state.editor.comment_records,
        id + 1,
        &state.editor.calibration,
    )?;
    let previous = std::mem::replace(&mut state.editor.curve, curve);
    state.editor.other_curves.push(previous);
    state.editor.comments = comments;
    activate_curve(state);
    log::info!("Teilkurve {} angelegt", id);
    Ok(())
}

fn activate_curve(state: &mut AppState) {
    state.history.clear();
    state.interaction.reset();
    state.gesture.drag_count = 0;
    state.update_coordinates();
    state.mark_changed();
}

fn apply_editor_state(state: &mut AppState, editor: EditorState) {
    state.editor = editor;
    state.interaction.reset();
    state.gesture.drag_count = 0;
    state.gesture.pinch = None;
    state.history.clear();
    state.prompt = None;
    state.update_coordinates();
    state.mark_changed();
}
