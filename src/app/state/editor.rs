use crate::core::{
    AxisKind, Calibration, CommentRecord, GraphDocument, PlacedComment, SubCurve, Viewport,
    ZoomAxes,
};

/// Lebender, veränderbarer Zustand einer Digitalisierungs-Sitzung.
///
/// Wird nach außen nur als Kopie herausgegeben bzw. übernommen; Knoten und
/// Anker liegen in logischen Koordinaten (Pixel des Diagrammbilds).
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    /// Name des Diagramms
    pub graph_name: String,
    /// Beschriftung der X-Achse
    pub x_axis_name: String,
    /// Beschriftung der Y-Achse
    pub y_axis_name: String,
    /// Achsenkalibrierung
    pub calibration: Calibration,
    /// Aktive Teilkurve (wird bearbeitet)
    pub curve: SubCurve,
    /// Übrige Teilkurven des Dokuments (nur Overlay)
    pub other_curves: Vec<SubCurve>,
    /// Sichtbarer Ausschnitt
    pub viewport: Viewport,
    /// Gitter anzeigen
    pub grid_enabled: bool,
    /// Gezogene Knoten am Gitter einrasten
    pub snap_to_grid_enabled: bool,
    /// Achsen für Mausrad-Zoom ohne Modifier
    pub primary_zoom_mode: ZoomAxes,
    /// Scharf geschalteter Kalibrierpunkt (Doppelklick setzt diesen Anker)
    pub axis_placement: Option<AxisKind>,
    /// Index des X/Y-Ankers, der beim Platzieren überschrieben wird
    pub axis_point_index: usize,
    /// Alle Teilkurven gleichzeitig anzeigen (Platzieren gesperrt)
    pub show_all_curves: bool,
    /// Kommentare anzeigen
    pub show_comments: bool,
    /// Geladene Kommentare in Datenkoordinaten
    pub comment_records: Vec<CommentRecord>,
    /// Kommentare der aktiven Teilkurve im Bild
    pub comments: Vec<PlacedComment>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Erstellt einen leeren Zustand mit einer leeren Teilkurve.
    pub fn new() -> Self {
        Self {
            graph_name: String::new(),
            x_axis_name: String::new(),
            y_axis_name: String::new(),
            calibration: Calibration::new(),
            curve: SubCurve::new(0, default_curve_name(0)),
            other_curves: Vec::new(),
            viewport: Viewport::default(),
            grid_enabled: true,
            snap_to_grid_enabled: true,
            primary_zoom_mode: ZoomAxes::Both,
            axis_placement: None,
            axis_point_index: 0,
            show_all_curves: false,
            show_comments: true,
            comment_records: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Übernimmt Inhalt und Kalibrierung eines Dokuments.
    ///
    /// Ansichts-Flags und Ausschnitt stammen aus `view`. Existiert keine
    /// Teilkurve `active_id`, wird eine leere mit dieser Kennung angelegt.
    pub fn from_document(document: GraphDocument, active_id: u32, view: &EditorState) -> Self {
        let mut other_curves = document.subcurves;
        let curve = match other_curves.iter().position(|c| c.id == active_id) {
            Some(pos) => other_curves.remove(pos),
            None => SubCurve::new(active_id, default_curve_name(active_id)),
        };

        Self {
            graph_name: document.graph_name,
            x_axis_name: document.x_axis_name,
            y_axis_name: document.y_axis_name,
            calibration: document.calibration,
            curve,
            other_curves,
            axis_placement: None,
            axis_point_index: 0,
            comment_records: Vec::new(),
            comments: Vec::new(),
            ..view.clone()
        }
    }

    /// Baut das Dokument aus allen Teilkurven (nach Kennung sortiert).
    pub fn to_document(&self) -> GraphDocument {
        let mut subcurves = self.other_curves.clone();
        subcurves.push(self.curve.clone());
        subcurves.sort_by_key(|c| c.id);

        GraphDocument {
            graph_name: self.graph_name.clone(),
            x_axis_name: self.x_axis_name.clone(),
            y_axis_name: self.y_axis_name.clone(),
            calibration: self.calibration.clone(),
            subcurves,
        }
    }

    /// Alle Teilkurven, die aktive zuletzt.
    pub fn all_curves(&self) -> impl Iterator<Item = &SubCurve> {
        self.other_curves.iter().chain(std::iter::once(&self.curve))
    }

    /// Nummer der aktiven Teilkurve in Kommentarlisten (ab 1).
    pub fn active_subplot(&self) -> u32 {
        self.curve.id + 1
    }
}

/// Anzeigename einer neu angelegten Teilkurve.
pub fn default_curve_name(id: u32) -> String {
    format!("Kurve {}", id + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point;

    fn document() -> GraphDocument {
        let mut doc = GraphDocument::new("Kennlinie");
        let mut a = SubCurve::new(0, "A");
        a.knots = vec![Point::new(1.0, 1.0)];
        let mut b = SubCurve::new(1, "B");
        b.knots = vec![Point::new(2.0, 2.0)];
        doc.subcurves = vec![a, b];
        doc
    }

    #[test]
    fn defaults_enable_grid_and_snap() {
        let state = EditorState::new();
        assert!(state.grid_enabled);
        assert!(state.snap_to_grid_enabled);
        assert!(state.show_comments);
        assert!(!state.show_all_curves);
        assert_eq!(state.primary_zoom_mode, ZoomAxes::Both);
        assert_eq!(state.viewport, Viewport::default());
    }

    #[test]
    fn from_document_activates_requested_curve_and_keeps_view() {
        let mut view = EditorState::new();
        view.grid_enabled = false;

        let state = EditorState::from_document(document(), 1, &view);
        assert_eq!(state.curve.name, "B");
        assert_eq!(state.other_curves.len(), 1);
        assert!(!state.grid_enabled);
        assert_eq!(state.graph_name, "Kennlinie");
    }

    #[test]
    fn document_round_trip_preserves_curve_order() {
        let state = EditorState::from_document(document(), 0, &EditorState::new());
        let doc = state.to_document();
        assert_eq!(doc, document());
    }

    #[test]
    fn unknown_curve_id_creates_empty_curve() {
        let state = EditorState::from_document(document(), 7, &EditorState::new());
        assert_eq!(state.curve.id, 7);
        assert!(state.curve.knots.is_empty());
        assert_eq!(state.other_curves.len(), 2);
    }
}
