//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Eingabe-Intents und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Eingereihte Events werden danach zugestellt, auch wenn ein Command
    /// fehlschlägt.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        let result = commands
            .into_iter()
            .try_for_each(|command| self.handle_command(state, command));

        state.notifier.dispatch();
        result
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Sitzung ===
            AppCommand::SetCanvasSize { size } => handlers::view::set_canvas_size(state, size),
            AppCommand::FitImage { size } => handlers::view::fit_image(state, size),
            AppCommand::LoadEditorState { state: editor } => {
                handlers::session::load_editor_state(state, *editor)
            }
            AppCommand::LoadDocument {
                document,
                active_subcurve,
            } => handlers::session::load_document(state, document, active_subcurve),
            AppCommand::LoadComments { records } => {
                handlers::session::load_comments(state, records)?
            }
            AppCommand::ResetToInitial => handlers::session::reset_to_initial(state),
            AppCommand::ApplyOptions { options } => {
                handlers::session::apply_options(state, *options)
            }

            // === Gesten ===
            AppCommand::BeginDrag {
                canvas_pos,
                pick_radius,
            } => handlers::gesture::begin_drag(state, canvas_pos, pick_radius),
            AppCommand::DragTo { canvas_pos } => handlers::gesture::drag_to(state, canvas_pos)?,
            AppCommand::EndDrag => handlers::gesture::end_drag(state),
            AppCommand::AbortDrag => handlers::gesture::abort_drag(state),
            AppCommand::BeginPinch { canvas_a, canvas_b } => {
                handlers::gesture::begin_pinch(state, canvas_a, canvas_b)
            }
            AppCommand::PinchTo { canvas_a, canvas_b } => {
                handlers::gesture::pinch_to(state, canvas_a, canvas_b)
            }
            AppCommand::EndPinch => handlers::gesture::end_pinch(state),
            AppCommand::UpdateHover {
                canvas_pos,
                pick_radius,
            } => handlers::gesture::update_hover(state, canvas_pos, pick_radius),

            // === Ansicht ===
            AppCommand::ZoomView {
                fx,
                fy,
                canvas_center,
            } => handlers::view::zoom(state, fx, fy, canvas_center),
            AppCommand::ToggleGrid => handlers::view::toggle_grid(state),
            AppCommand::ToggleSnap => handlers::view::toggle_snap(state),
            AppCommand::SetPrimaryZoomMode { axes } => {
                handlers::view::set_primary_zoom_mode(state, axes)
            }
            AppCommand::SetShowAllCurves { enabled } => {
                handlers::view::set_show_all_curves(state, enabled)
            }
            AppCommand::SetShowComments { enabled } => {
                handlers::view::set_show_comments(state, enabled)
            }

            // === Knoten ===
            AppCommand::CreateKnot { position } => {
                handlers::editing::create_knot(state, position)?
            }
            AppCommand::DeleteSelectedKnot => handlers::editing::delete_selected(state)?,
            AppCommand::Undo => {
                handlers::history::undo(state);
            }
            AppCommand::Redo => {
                handlers::history::redo(state);
            }
            AppCommand::ClearKnotsAndCalibration => {
                handlers::editing::clear_knots_and_calibration(state)
            }
            AppCommand::SetKnotsFromText { text } => {
                handlers::editing::set_knots_from_text(state, &text)?
            }
            AppCommand::ResampleKnots { count } => handlers::editing::resample(state, count)?,
            AppCommand::OpenPrompt { prompt } => handlers::editing::open_prompt(state, prompt),
            AppCommand::ClosePrompt => handlers::editing::close_prompt(state),
            AppCommand::SetInterpolationMethod { method } => {
                handlers::editing::set_interpolation_method(state, method)
            }
            AppCommand::SelectSubCurve { id } => handlers::session::select_subcurve(state, id)?,
            AppCommand::AddSubCurve { name } => handlers::session::add_subcurve(state, name)?,

            // === Kalibrierung ===
            AppCommand::PlaceAxisPoint { kind, position } => {
                handlers::calibration::place_axis_point(state, kind, position)
            }
            AppCommand::ArmAxisPlacement { kind, index } => {
                handlers::calibration::arm_axis_placement(state, kind, index)
            }
            AppCommand::SetAxisValue { kind, index, value } => {
                handlers::calibration::set_axis_value(state, kind, index, value)
            }
            AppCommand::SetAxisLogBase { kind, index, base } => {
                handlers::calibration::set_axis_log_base(state, kind, index, base)
            }
            AppCommand::RemoveAxisPoint { kind, index } => {
                handlers::calibration::remove_axis_point(state, kind, index)
            }
            AppCommand::ClearCalibration => handlers::calibration::clear_calibration(state),
        }

        Ok(())
    }
}
