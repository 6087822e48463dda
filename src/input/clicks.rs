//! Doppelklick (Maus) und Doppel-Tap (Touch/Stift).

use super::{InputState, Modifiers, MouseButton};
use crate::app::AppIntent;
use crate::core::Point;

impl InputState {
    /// Verarbeitet einen Maus-Doppelklick: Knoten bzw. Anker setzen.
    pub(crate) fn handle_double_click(
        position: Point,
        button: MouseButton,
        modifiers: Modifiers,
        events: &mut Vec<AppIntent>,
    ) {
        if modifiers.any() || button != MouseButton::Primary {
            return;
        }
        events.push(AppIntent::PlaceRequested {
            canvas_pos: position,
        });
    }

    /// Erkennt einen zweiten Tap innerhalb von `interval_ms`.
    ///
    /// Ein erkannter Doppel-Tap setzt die Erkennung zurück, sonst wird der
    /// Tap als möglicher erster gemerkt.
    pub(crate) fn detect_double_tap(&mut self, time_ms: u64, interval_ms: u64) -> bool {
        match self.last_tap_ms {
            Some(last) if time_ms.saturating_sub(last) <= interval_ms => {
                self.last_tap_ms = None;
                true
            }
            _ => {
                self.last_tap_ms = Some(time_ms);
                false
            }
        }
    }
}
