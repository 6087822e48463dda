use crate::app::state::{EditorState, PromptRequest};
use crate::core::{AxisKind, CommentRecord, GraphDocument, InterpolationMethod, Point, ZoomAxes};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
/// Positionen ohne `canvas_` liegen in logischen Koordinaten.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Sitzung ===
    /// Canvas-Größe setzen
    SetCanvasSize { size: Point },
    /// Ausschnitt auf das Bild einpassen
    FitImage { size: Point },
    /// Editor-Zustand übernehmen und als Ausgangszustand merken
    LoadEditorState { state: Box<EditorState> },
    /// Dokument übernehmen
    LoadDocument {
        document: GraphDocument,
        active_subcurve: u32,
    },
    /// Kommentare übernehmen und platzieren
    LoadComments { records: Vec<CommentRecord> },
    /// Ausgangszustand wiederherstellen
    ResetToInitial,
    /// Optionen übernehmen
    ApplyOptions { options: Box<EditorOptions> },

    // === Gesten ===
    /// Drag beginnen (Knoten im Fangradius oder Bildebene)
    BeginDrag { canvas_pos: Point, pick_radius: f64 },
    /// Drag fortsetzen
    DragTo { canvas_pos: Point },
    /// Drag beenden
    EndDrag,
    /// Drag verwerfen
    AbortDrag,
    /// Zwei-Finger-Zoom beginnen
    BeginPinch { canvas_a: Point, canvas_b: Point },
    /// Zwei-Finger-Zoom fortsetzen
    PinchTo { canvas_a: Point, canvas_b: Point },
    /// Zwei-Finger-Zoom beenden
    EndPinch,
    /// Hover-Knoten und -Kommentar bestimmen
    UpdateHover { canvas_pos: Point, pick_radius: f64 },

    // === Ansicht ===
    /// Zoomen um `fx`/`fy` mit festem Canvas-Punkt
    ZoomView {
        fx: f64,
        fy: f64,
        canvas_center: Option<Point>,
    },
    /// Gitter ein/aus
    ToggleGrid,
    /// Einrasten ein/aus
    ToggleSnap,
    /// Primären Zoom-Modus setzen
    SetPrimaryZoomMode { axes: ZoomAxes },
    /// Alle Teilkurven anzeigen
    SetShowAllCurves { enabled: bool },
    /// Kommentare anzeigen
    SetShowComments { enabled: bool },

    // === Knoten ===
    /// Knoten anhängen (mit Checkpoint)
    CreateKnot { position: Point },
    /// Ausgewählten Knoten löschen (mit Checkpoint)
    DeleteSelectedKnot,
    /// Undo
    Undo,
    /// Redo
    Redo,
    /// Knoten und Kalibrierung leeren (mit Checkpoint)
    ClearKnotsAndCalibration,
    /// Knotenliste aus Text setzen (mit Checkpoint)
    SetKnotsFromText { text: String },
    /// Knoten neu abtasten (mit Checkpoint)
    ResampleKnots { count: usize },
    /// Eingabeaufforderung öffnen
    OpenPrompt { prompt: PromptRequest },
    /// Eingabeaufforderung schließen
    ClosePrompt,
    /// Interpolationsverfahren setzen
    SetInterpolationMethod { method: InterpolationMethod },
    /// Teilkurve aktivieren
    SelectSubCurve { id: u32 },
    /// Teilkurve anlegen und aktivieren
    AddSubCurve { name: Option<String> },

    // === Kalibrierung ===
    /// Kalibrierpunkt an logischer Position setzen
    PlaceAxisPoint { kind: AxisKind, position: Point },
    /// Platzierung scharf schalten
    ArmAxisPlacement {
        kind: Option<AxisKind>,
        index: usize,
    },
    /// Ankerwert setzen
    SetAxisValue {
        kind: AxisKind,
        index: usize,
        value: f64,
    },
    /// Log-Basis setzen
    SetAxisLogBase {
        kind: AxisKind,
        index: usize,
        base: Option<f64>,
    },
    /// Anker entfernen
    RemoveAxisPoint { kind: AxisKind, index: usize },
    /// Kalibrierung leeren
    ClearCalibration,
}
