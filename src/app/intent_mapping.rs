//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::PromptRequest;
use super::{AppCommand, AppIntent, AppState};
use crate::core::encode_knot_list;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasResized { size } => vec![AppCommand::SetCanvasSize { size }],
        AppIntent::ImageLoaded { size } => vec![AppCommand::FitImage { size }],
        AppIntent::EditorStateLoaded { state } => vec![AppCommand::LoadEditorState { state }],
        AppIntent::DocumentLoaded {
            document,
            active_subcurve,
        } => vec![AppCommand::LoadDocument {
            document,
            active_subcurve,
        }],
        AppIntent::CommentsLoaded { records } => vec![AppCommand::LoadComments { records }],
        AppIntent::ResetRequested => vec![AppCommand::ResetToInitial],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],

        AppIntent::DragStarted { canvas_pos, touch } => vec![AppCommand::BeginDrag {
            canvas_pos,
            pick_radius: state.options.pick_radius(touch),
        }],
        AppIntent::DragMoved { canvas_pos } => vec![AppCommand::DragTo { canvas_pos }],
        AppIntent::DragEnded => vec![AppCommand::EndDrag],
        AppIntent::DragAbortRequested => vec![AppCommand::AbortDrag],
        AppIntent::PinchStarted { canvas_a, canvas_b } => {
            vec![AppCommand::BeginPinch { canvas_a, canvas_b }]
        }
        AppIntent::PinchMoved { canvas_a, canvas_b } => {
            vec![AppCommand::PinchTo { canvas_a, canvas_b }]
        }
        AppIntent::PinchEnded => vec![AppCommand::EndPinch],
        AppIntent::PointerHovered { canvas_pos, touch } => vec![AppCommand::UpdateHover {
            canvas_pos,
            pick_radius: state.options.pick_radius(touch),
        }],
        AppIntent::PlaceRequested { canvas_pos } => {
            // Im Overlay-Modus wird nichts platziert
            if state.editor.show_all_curves {
                return vec![];
            }
            let position = state.canvas_to_logical(canvas_pos);
            match state.editor.axis_placement {
                Some(kind) => vec![AppCommand::PlaceAxisPoint { kind, position }],
                None => vec![AppCommand::CreateKnot { position }],
            }
        }

        AppIntent::ZoomRequested {
            canvas_center,
            axes,
            zoom_in,
        } => {
            let step = state.options.zoom_step;
            let factor = if zoom_in { step } else { 1.0 / step };
            let (fx, fy) = axes
                .unwrap_or(state.editor.primary_zoom_mode)
                .factors(factor);
            vec![AppCommand::ZoomView {
                fx,
                fy,
                canvas_center,
            }]
        }
        AppIntent::ToggleGridRequested => vec![AppCommand::ToggleGrid],
        AppIntent::ToggleSnapRequested => vec![AppCommand::ToggleSnap],
        AppIntent::PrimaryZoomModeChanged { axes } => {
            vec![AppCommand::SetPrimaryZoomMode { axes }]
        }
        AppIntent::ShowAllCurvesChanged { enabled } => {
            vec![AppCommand::SetShowAllCurves { enabled }]
        }
        AppIntent::ShowCommentsChanged { enabled } => {
            vec![AppCommand::SetShowComments { enabled }]
        }

        AppIntent::DeleteSelectedRequested => {
            if state.interaction.selected_knot.is_some() {
                vec![AppCommand::DeleteSelectedKnot]
            } else {
                vec![]
            }
        }
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::ClearAllRequested => vec![AppCommand::ClearKnotsAndCalibration],
        AppIntent::KnotListEditRequested => vec![AppCommand::OpenPrompt {
            prompt: PromptRequest::KnotList {
                text: encode_knot_list(&state.editor.curve.knots),
            },
        }],
        AppIntent::KnotListSubmitted { text } => vec![
            AppCommand::SetKnotsFromText { text },
            AppCommand::ClosePrompt,
        ],
        AppIntent::ResampleRequested => vec![AppCommand::OpenPrompt {
            prompt: PromptRequest::Resample {
                current: state.editor.curve.knots.len(),
            },
        }],
        AppIntent::ResampleSubmitted { count } => vec![
            AppCommand::ResampleKnots { count },
            AppCommand::ClosePrompt,
        ],
        AppIntent::PromptDismissed => vec![AppCommand::ClosePrompt],
        AppIntent::InterpolationMethodChanged { method } => {
            vec![AppCommand::SetInterpolationMethod { method }]
        }
        AppIntent::SubCurveSelected { id } => vec![AppCommand::SelectSubCurve { id }],
        AppIntent::SubCurveAdded { name } => vec![AppCommand::AddSubCurve { name }],

        AppIntent::AxisPlacementRequested { kind, index } => {
            vec![AppCommand::ArmAxisPlacement { kind, index }]
        }
        AppIntent::AxisValueChanged { kind, index, value } => {
            vec![AppCommand::SetAxisValue { kind, index, value }]
        }
        AppIntent::AxisLogBaseChanged { kind, index, base } => {
            vec![AppCommand::SetAxisLogBase { kind, index, base }]
        }
        AppIntent::AxisPointRemoved { kind, index } => {
            vec![AppCommand::RemoveAxisPoint { kind, index }]
        }
        AppIntent::CalibrationCleared => vec![AppCommand::ClearCalibration],
    }
}

#[cfg(test)]
mod tests;
