//! Canvas-Input-Handling: Zeiger-, Rad- und Tastatur-Events → AppIntent.
//!
//! Aufgeteilt in Submodule:
//! - `pointer`: Zeiger gedrückt/bewegt/losgelassen, Moduswechsel Drag ↔ Pinch
//! - `clicks`: Doppelklick und Doppel-Tap
//! - `zoom`: Mausrad-Zoom auf Zeigerposition
//! - `keyboard`: Tastenkürzel und Hilfetext

mod clicks;
pub mod keyboard;
mod pointer;
mod zoom;

use crate::app::AppIntent;
use crate::core::Point;
use crate::shared::EditorOptions;
use indexmap::IndexMap;

/// Kennung eines aktiven Zeigers (Maus, Stift oder Finger).
pub type PointerId = u64;

/// Art des Zeigergeräts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    /// Maus
    #[default]
    Mouse,
    /// Stift
    Pen,
    /// Finger
    Touch,
}

/// Maustaste eines Zeiger-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    /// Linke Taste
    #[default]
    Primary,
    /// Rechte Taste
    Secondary,
    /// Mittlere Taste
    Middle,
}

/// Gedrückte Modifier-Tasten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Keine Modifier gedrückt.
    pub const NONE: Self = Self {
        alt: false,
        ctrl: false,
        shift: false,
        meta: false,
    };

    /// Ob irgendein Modifier gedrückt ist.
    pub fn any(&self) -> bool {
        self.alt || self.ctrl || self.shift || self.meta
    }
}

/// Rohes Eingabe-Event der Zeichenfläche (Positionen in Canvas-Pixeln).
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Zeiger gedrückt
    PointerDown {
        id: PointerId,
        kind: PointerKind,
        button: MouseButton,
        position: Point,
        modifiers: Modifiers,
        /// Zeitstempel in Millisekunden (monoton)
        time_ms: u64,
    },
    /// Zeiger bewegt
    PointerMove {
        id: PointerId,
        kind: PointerKind,
        position: Point,
    },
    /// Zeiger losgelassen
    PointerUp { id: PointerId },
    /// Zeiger vom System abgebrochen
    PointerCancel { id: PointerId },
    /// Mausrad
    Wheel {
        position: Point,
        delta_y: f64,
        modifiers: Modifiers,
    },
    /// Doppelklick mit der Maus
    DoubleClick {
        position: Point,
        button: MouseButton,
        modifiers: Modifiers,
    },
    /// Taste gedrückt; `key` ist der Tastenname (z.B. `"z"`, `"Z"`, `"Escape"`, `" "`)
    Key { key: String, modifiers: Modifiers },
}

/// Modus der aktiven Zeiger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PointerMode {
    #[default]
    None,
    /// Ein Zeiger: Knoten- oder Ebenen-Drag
    Drag,
    /// Zwei Zeiger: Pinch-Zoom
    Pinch,
}

/// Aktiver Zeiger mit letzter Position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TrackedPointer {
    pub kind: PointerKind,
    pub position: Point,
}

/// Verwaltet den Input-Zustand der Zeichenfläche (aktive Zeiger, Taps, Mausposition).
#[derive(Debug, Default)]
pub struct InputState {
    /// Aktive Zeiger in Reihenfolge des Aufsetzens
    pub(crate) pointers: IndexMap<PointerId, TrackedPointer>,
    pub(crate) mode: PointerMode,
    /// Zeitpunkt des letzten Einzel-Taps (Touch/Stift)
    pub(crate) last_tap_ms: Option<u64>,
    /// Letzte Mausposition (für die Leertaste)
    pub(crate) mouse_position: Option<Point>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Übersetzt ein Eingabe-Event in AppIntents.
    ///
    /// Dies ist der zentrale Event→Intent-Einstieg für Zeiger, Mausrad
    /// und Tastatur der Zeichenfläche.
    pub fn handle_event(&mut self, event: InputEvent, options: &EditorOptions) -> Vec<AppIntent> {
        let mut events = Vec::new();

        match event {
            InputEvent::PointerDown {
                id,
                kind,
                button,
                position,
                modifiers,
                time_ms,
            } => self.handle_pointer_down(
                id,
                TrackedPointer { kind, position },
                button,
                modifiers,
                time_ms,
                options,
                &mut events,
            ),
            InputEvent::PointerMove { id, kind, position } => {
                self.handle_pointer_move(id, kind, position, &mut events)
            }
            InputEvent::PointerUp { id } | InputEvent::PointerCancel { id } => {
                self.handle_pointer_up(id, &mut events)
            }
            InputEvent::Wheel {
                position,
                delta_y,
                modifiers,
            } => Self::handle_wheel(position, delta_y, modifiers, &mut events),
            InputEvent::DoubleClick {
                position,
                button,
                modifiers,
            } => Self::handle_double_click(position, button, modifiers, &mut events),
            InputEvent::Key { key, modifiers } => {
                events.extend(keyboard::collect_key_intents(
                    &key,
                    modifiers,
                    self.mouse_position,
                ));
            }
        }

        events
    }

    /// Anzahl der aktuell gedrückten Zeiger.
    pub fn active_pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Gibt alle Zeiger frei und beendet laufende Gesten.
    pub fn release_all(&mut self) -> Vec<AppIntent> {
        let mut events = Vec::new();
        self.pointers.clear();
        self.switch_mode(&mut events);
        events
    }
}
