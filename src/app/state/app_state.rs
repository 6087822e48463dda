use crate::app::history::KnotHistory;
use crate::app::notifications::{EditorEvent, EditorNotifier};
use crate::app::CommandLog;
use crate::core::{
    compute_result_graph, find_nearest_knot, CurveFunction, GraphDocument, Interpolator, Point,
    SplineInterpolator,
};
use crate::error::CalibrationError;
use crate::shared::EditorOptions;

use super::{EditorState, GestureState, InteractionMode, InteractionState};

/// Canvas-Größe bis zur ersten Meldung durch die Präsentationsschicht.
pub const DEFAULT_CANVAS_SIZE: Point = Point::new(800.0, 600.0);

/// Offene Eingabeaufforderung an die Präsentationsschicht.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptRequest {
    /// Knotenliste als Text bearbeiten (vorausgefüllt)
    KnotList { text: String },
    /// Anzahl der Knoten für das Neu-Abtasten abfragen
    Resample { current: usize },
}

/// Hauptzustand einer Digitalisierungs-Sitzung
pub struct AppState {
    /// Bearbeiteter Editor-Zustand
    pub editor: EditorState,
    /// Zustand, auf den "Zurücksetzen" zurückkehrt
    pub initial_editor: EditorState,
    /// Auswahl und Drag-Flags
    pub interaction: InteractionState,
    /// Startwerte der laufenden Geste
    pub gesture: GestureState,
    /// Undo/Redo über Knotenlisten
    pub history: KnotHistory,
    /// Größe der Zeichenfläche in Pixeln
    pub canvas_size: Point,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Abonnenten für Änderungs-Events
    pub notifier: EditorNotifier,
    /// Offene Eingabeaufforderung
    pub prompt: Option<PromptRequest>,
    refresh_pending: bool,
    interpolator: Box<dyn Interpolator>,
}

impl AppState {
    /// Erstellt eine leere Sitzung mit dem Standard-Interpolator.
    pub fn new() -> Self {
        Self::with_interpolator(Box::new(SplineInterpolator))
    }

    /// Erstellt eine leere Sitzung mit eigenem Interpolator.
    pub fn with_interpolator(interpolator: Box<dyn Interpolator>) -> Self {
        Self {
            editor: EditorState::new(),
            initial_editor: EditorState::new(),
            interaction: InteractionState::new(),
            gesture: GestureState::new(),
            history: KnotHistory::new(),
            canvas_size: DEFAULT_CANVAS_SIZE,
            options: EditorOptions::default(),
            command_log: CommandLog::new(),
            notifier: EditorNotifier::new(),
            prompt: None,
            refresh_pending: false,
            interpolator,
        }
    }

    /// Verwendeter Interpolator.
    pub fn interpolator(&self) -> &dyn Interpolator {
        self.interpolator.as_ref()
    }

    /// Kurvenfunktion der aktiven Teilkurve.
    pub fn curve_function(&self) -> CurveFunction {
        self.editor.curve.function(self.interpolator.as_ref())
    }

    /// Kopie des aktuellen Editor-Zustands.
    pub fn editor_state(&self) -> EditorState {
        self.editor.clone()
    }

    /// Abgeleiteter Bedienmodus.
    pub fn interaction_mode(&self) -> InteractionMode {
        if self.interaction.knot_dragging {
            InteractionMode::KnotDragging
        } else if self.interaction.plane_dragging {
            InteractionMode::PlaneDragging
        } else if self.gesture.pinch.is_some() {
            InteractionMode::Zooming
        } else if let Some(kind) = self.editor.axis_placement {
            InteractionMode::AxisPointPlacement(kind)
        } else {
            InteractionMode::Idle
        }
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Sichert die aktuellen Knoten vor einer Änderung.
    pub fn checkpoint(&mut self) {
        self.history.checkpoint(&self.editor.curve.knots);
    }

    /// Berechnet die abgeleiteten Koordinaten der aktiven Teilkurve neu.
    pub fn update_coordinates(&mut self) {
        let steps = self.options.curve_sample_steps;
        self.editor
            .curve
            .update_coordinates(self.interpolator.as_ref(), steps);
    }

    /// Meldet eine abgeschlossene Änderung und fordert ein Neuzeichnen an.
    pub fn mark_changed(&mut self) {
        self.notifier.queue(EditorEvent::Changed);
        self.request_refresh();
    }

    /// Fordert ein Neuzeichnen an. `false`, wenn bereits eines aussteht.
    pub fn request_refresh(&mut self) -> bool {
        !std::mem::replace(&mut self.refresh_pending, true)
    }

    /// Ob ein Neuzeichnen aussteht.
    pub fn refresh_pending(&self) -> bool {
        self.refresh_pending
    }

    /// Übernimmt die ausstehende Anforderung für den nächsten Frame.
    pub fn take_refresh(&mut self) -> bool {
        std::mem::take(&mut self.refresh_pending)
    }

    /// Canvas-Punkt → logischer Punkt.
    pub fn canvas_to_logical(&self, canvas_pos: Point) -> Point {
        self.editor
            .viewport
            .canvas_to_logical(canvas_pos, self.canvas_size)
    }

    /// Logischer Punkt → Canvas-Punkt.
    pub fn logical_to_canvas(&self, logical: Point) -> Point {
        self.editor
            .viewport
            .logical_to_canvas(logical, self.canvas_size)
    }

    /// Nächster Knoten der aktiven Teilkurve innerhalb von `radius` Canvas-Pixeln.
    pub fn find_knot_near(&self, canvas_pos: Point, radius: f64) -> Option<usize> {
        let projected: Vec<Point> = self
            .editor
            .curve
            .knots
            .iter()
            .map(|k| self.logical_to_canvas(*k))
            .collect();
        find_nearest_knot(&projected, canvas_pos, radius)
    }

    /// Ergebnisdiagramm in Datenkoordinaten.
    pub fn result_graph(&self) -> Result<GraphDocument, CalibrationError> {
        compute_result_graph(&self.editor.to_document())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_requests_are_coalesced_until_taken() {
        let mut state = AppState::new();
        assert!(!state.refresh_pending());

        assert!(state.request_refresh());
        assert!(!state.request_refresh());
        state.mark_changed();
        assert!(state.refresh_pending());

        assert!(state.take_refresh());
        assert!(!state.refresh_pending());
        assert!(!state.take_refresh());

        assert!(state.request_refresh());
    }
}
