//! Tastenkürzel der Zeichenfläche.
//!
//! Verarbeitet Tastennamen mit Modifiern und mappt sie auf `AppIntent`s.

use super::Modifiers;
use crate::app::AppIntent;
use crate::core::{Point, ZoomAxes};

/// Tastenbelegung als (Taste, Beschreibung) für die Hilfe-Anzeige.
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("Doppelklick / Doppel-Tap", "Knoten bzw. scharfen Kalibrierpunkt setzen"),
    ("Leertaste", "Knoten bzw. Kalibrierpunkt an der Mausposition setzen"),
    ("Ziehen", "Knoten verschieben oder Ebene verschieben"),
    ("Mausrad", "Zoomen (Shift: nur Y, Alt: nur X, Ctrl: beide)"),
    ("Zwei Finger", "Zoomen in Richtung der Geste"),
    ("Entf / Rücktaste", "Ausgewählten Knoten löschen"),
    ("Ctrl+Z / Alt+Rücktaste", "Rückgängig"),
    ("Ctrl+Y / Ctrl+Shift+Z", "Wiederherstellen"),
    ("Escape", "Laufenden Drag abbrechen"),
    ("+ / -", "Beide Achsen zoomen"),
    ("X / x", "X-Achse hinein/heraus zoomen"),
    ("Y / y", "Y-Achse hinein/heraus zoomen"),
    ("i", "Auf Ausgangszustand zurücksetzen"),
    ("c", "Knoten und Kalibrierung löschen"),
    ("g", "Gitter ein/aus"),
    ("s", "Einrasten am Gitter ein/aus"),
    ("k", "Knotenliste als Text bearbeiten"),
    ("r", "Kurve neu abtasten"),
];

/// Hilfetext mit allen Tastenkürzeln, eine Zeile pro Belegung.
pub fn help_text() -> String {
    let width = KEY_BINDINGS
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);
    KEY_BINDINGS
        .iter()
        .map(|(key, text)| format!("{:<width$}  {}", key, text, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Baut den Namen einer Tastenkombination, z.B. `"Ctrl+z"` oder `"Alt+Backspace"`.
///
/// Shift wird nur bei benannten Tasten vorangestellt; bei Zeichen steckt es
/// bereits in der Groß-/Kleinschreibung.
pub fn key_name(key: &str, modifiers: Modifiers) -> String {
    let mut name = String::new();
    if modifiers.alt {
        name.push_str("Alt+");
    }
    if modifiers.ctrl {
        name.push_str("Ctrl+");
    }
    if modifiers.shift && key.chars().count() > 1 {
        name.push_str("Shift+");
    }
    if modifiers.meta {
        name.push_str("Meta+");
    }
    name.push_str(key);
    name
}

/// Verarbeitet einen Tastendruck und gibt AppIntents zurück.
///
/// `mouse_position` ist die letzte Zeigerposition auf dem Canvas (für die
/// Leertaste).
pub(crate) fn collect_key_intents(
    key: &str,
    modifiers: Modifiers,
    mouse_position: Option<Point>,
) -> Vec<AppIntent> {
    let name = key_name(key, modifiers);
    let intent = match name.as_str() {
        "Backspace" | "Delete" => Some(AppIntent::DeleteSelectedRequested),
        "Ctrl+z" | "Alt+Backspace" => Some(AppIntent::UndoRequested),
        "Ctrl+y" | "Ctrl+Z" => Some(AppIntent::RedoRequested),
        "Escape" => Some(AppIntent::DragAbortRequested),
        " " => mouse_position.map(|canvas_pos| AppIntent::PlaceRequested { canvas_pos }),
        "+" => Some(zoom(ZoomAxes::Both, true)),
        "-" => Some(zoom(ZoomAxes::Both, false)),
        "X" => Some(zoom(ZoomAxes::X, true)),
        "x" => Some(zoom(ZoomAxes::X, false)),
        "Y" => Some(zoom(ZoomAxes::Y, true)),
        "y" => Some(zoom(ZoomAxes::Y, false)),
        "i" => Some(AppIntent::ResetRequested),
        "c" => Some(AppIntent::ClearAllRequested),
        "g" => Some(AppIntent::ToggleGridRequested),
        "s" => Some(AppIntent::ToggleSnapRequested),
        "k" => Some(AppIntent::KnotListEditRequested),
        "r" => Some(AppIntent::ResampleRequested),
        _ => None,
    };
    intent.into_iter().collect()
}

fn zoom(axes: ZoomAxes, zoom_in: bool) -> AppIntent {
    AppIntent::ZoomRequested {
        canvas_center: None,
        axes: Some(axes),
        zoom_in,
    }
}
