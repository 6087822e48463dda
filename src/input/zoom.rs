//! Mausrad-Zoom auf die Zeigerposition.

use super::{InputState, Modifiers};
use crate::app::AppIntent;
use crate::core::{Point, ZoomAxes};

impl InputState {
    /// Verarbeitet eine Mausrad-Raste.
    ///
    /// Shift zoomt nur Y, Alt nur X, Ctrl beide Achsen; ohne Modifier gilt
    /// der primäre Zoom-Modus des Editors.
    pub(crate) fn handle_wheel(
        position: Point,
        delta_y: f64,
        modifiers: Modifiers,
        events: &mut Vec<AppIntent>,
    ) {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return;
        }

        let axes = if modifiers.shift {
            Some(ZoomAxes::Y)
        } else if modifiers.alt {
            Some(ZoomAxes::X)
        } else if modifiers.ctrl {
            Some(ZoomAxes::Both)
        } else {
            None
        };

        events.push(AppIntent::ZoomRequested {
            canvas_center: Some(position),
            axes,
            zoom_in: delta_y < 0.0,
        });
    }
}
