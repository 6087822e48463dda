use crate::app::state::EditorState;
use crate::core::{AxisKind, CommentRecord, GraphDocument, InterpolationMethod, Point, ZoomAxes};
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Positionen mit `canvas_` liegen in Canvas-Pixeln.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Sitzung ─────────────────────────────────────────────────
    /// Zeichenfläche hat eine neue Größe
    CanvasResized { size: Point },
    /// Diagrammbild geladen: Ausschnitt einpassen
    ImageLoaded { size: Point },
    /// Kompletten Editor-Zustand übernehmen (wird neuer Ausgangszustand)
    EditorStateLoaded { state: Box<EditorState> },
    /// Diagramm-Dokument übernehmen
    DocumentLoaded {
        document: GraphDocument,
        active_subcurve: u32,
    },
    /// Kommentarliste übernehmen
    CommentsLoaded { records: Vec<CommentRecord> },
    /// Auf den Ausgangszustand zurücksetzen
    ResetRequested,
    /// Laufzeit-Optionen ändern
    OptionsChanged { options: Box<EditorOptions> },

    // ── Zeiger-Gesten ───────────────────────────────────────────
    /// Ein Zeiger wurde gedrückt (Knoten- oder Ebenen-Drag beginnt)
    DragStarted { canvas_pos: Point, touch: bool },
    /// Zeiger bewegt sich mit gedrückter Taste
    DragMoved { canvas_pos: Point },
    /// Zeiger losgelassen
    DragEnded,
    /// Escape: laufenden Drag verwerfen
    DragAbortRequested,
    /// Zweiter Finger aufgesetzt
    PinchStarted { canvas_a: Point, canvas_b: Point },
    /// Finger bewegt
    PinchMoved { canvas_a: Point, canvas_b: Point },
    /// Zwei-Finger-Geste beendet
    PinchEnded,
    /// Zeiger bewegt sich ohne gedrückte Taste
    PointerHovered { canvas_pos: Point, touch: bool },
    /// Doppelklick, Doppel-Tap oder Leertaste: Knoten bzw. Anker setzen
    PlaceRequested { canvas_pos: Point },

    // ── Ansicht ─────────────────────────────────────────────────
    /// Stufenweise zoomen; `axes = None` nutzt den primären Zoom-Modus
    ZoomRequested {
        canvas_center: Option<Point>,
        axes: Option<ZoomAxes>,
        zoom_in: bool,
    },
    /// Gitter ein/aus
    ToggleGridRequested,
    /// Einrasten ein/aus
    ToggleSnapRequested,
    /// Primären Zoom-Modus setzen
    PrimaryZoomModeChanged { axes: ZoomAxes },
    /// Alle Teilkurven anzeigen
    ShowAllCurvesChanged { enabled: bool },
    /// Kommentare anzeigen
    ShowCommentsChanged { enabled: bool },

    // ── Knoten ──────────────────────────────────────────────────
    /// Ausgewählten Knoten löschen
    DeleteSelectedRequested,
    /// Letzte Knotenänderung rückgängig machen
    UndoRequested,
    /// Rückgängig gemachte Änderung wiederherstellen
    RedoRequested,
    /// Knoten und Kalibrierung verwerfen
    ClearAllRequested,
    /// Knotenliste als Text bearbeiten (öffnet Eingabe)
    KnotListEditRequested,
    /// Bearbeitete Knotenliste übernehmen
    KnotListSubmitted { text: String },
    /// Neu-Abtasten anfragen (öffnet Eingabe)
    ResampleRequested,
    /// Knoten durch `count` Abtastpunkte ersetzen
    ResampleSubmitted { count: usize },
    /// Offene Eingabe ohne Ergebnis schließen
    PromptDismissed,
    /// Interpolationsverfahren der aktiven Teilkurve wählen
    InterpolationMethodChanged { method: InterpolationMethod },
    /// Andere Teilkurve bearbeiten
    SubCurveSelected { id: u32 },
    /// Neue Teilkurve anlegen und aktivieren
    SubCurveAdded { name: Option<String> },

    // ── Kalibrierung ────────────────────────────────────────────
    /// Kalibrierpunkt zum Platzieren scharf schalten (`None` = aus)
    AxisPlacementRequested {
        kind: Option<AxisKind>,
        index: usize,
    },
    /// Wert eines Ankers ändern
    AxisValueChanged {
        kind: AxisKind,
        index: usize,
        value: f64,
    },
    /// Log-Skala eines Ankers ändern (`None` = linear)
    AxisLogBaseChanged {
        kind: AxisKind,
        index: usize,
        base: Option<f64>,
    },
    /// Anker entfernen
    AxisPointRemoved { kind: AxisKind, index: usize },
    /// Kalibrierung verwerfen
    CalibrationCleared,
}
