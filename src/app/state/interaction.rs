use crate::core::{AxisKind, Point, Viewport};

/// Aktueller Bedienmodus, aus dem Zustand abgeleitet.
///
/// Die Präsentationsschicht wählt daraus z.B. den Mauszeiger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    /// Keine laufende Geste
    Idle,
    /// Ein Knoten wird gezogen
    KnotDragging,
    /// Die Bildebene wird verschoben
    PlaneDragging,
    /// Zwei-Finger-Zoom läuft
    Zooming,
    /// Doppelklick setzt den angegebenen Kalibrierpunkt
    AxisPointPlacement(AxisKind),
}

/// Flüchtiger Auswahl- und Drag-Zustand.
///
/// Indizes beziehen sich auf die Knoten der aktiven Teilkurve und werden
/// zurückgesetzt, sobald die Knotenliste strukturell ersetzt wird.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// Ausgewählter Knoten
    pub selected_knot: Option<usize>,
    /// Knoten unter dem Zeiger
    pub hovered_knot: Option<usize>,
    /// Kommentar unter dem Zeiger
    pub hovered_comment: Option<usize>,
    /// Ob der ausgewählte Knoten gezogen wird
    pub knot_dragging: bool,
    /// Ob die Bildebene gezogen wird
    pub plane_dragging: bool,
}

impl InteractionState {
    /// Erstellt einen leeren Interaktionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verwirft Auswahl, Hover und Drag-Flags.
    pub fn reset(&mut self) {
        self.selected_knot = None;
        self.hovered_knot = None;
        self.hovered_comment = None;
        self.knot_dragging = false;
        self.plane_dragging = false;
    }
}

/// Zustand einer laufenden Zwei-Finger-Geste.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchGesture {
    /// Ausschnitt bei Gestenbeginn
    pub start_viewport: Viewport,
    /// Fingerabstand bei Gestenbeginn (Canvas-Pixel)
    pub start_distance: f64,
    /// Logischer Punkt unter dem Gestenmittelpunkt bei Beginn
    pub logical_center: Point,
    /// Horizontal zoomen
    pub zoom_x: bool,
    /// Vertikal zoomen
    pub zoom_y: bool,
}

/// Startwerte der aktuellen Zeigergeste.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureState {
    /// Logische Position bei Drag-Beginn
    pub drag_start_logical: Point,
    /// Canvas-Position bei Drag-Beginn
    pub drag_start_canvas: Point,
    /// Anzahl der Bewegungen seit Drag-Beginn
    pub drag_count: usize,
    /// Laufende Pinch-Geste
    pub pinch: Option<PinchGesture>,
}

impl GestureState {
    /// Erstellt einen Zustand ohne laufende Geste.
    pub fn new() -> Self {
        Self::default()
    }
}
