//! Zeiger gedrückt/bewegt/losgelassen und Moduswechsel Drag ↔ Pinch.

use super::{InputState, Modifiers, MouseButton, PointerId, PointerKind, PointerMode, TrackedPointer};
use crate::app::AppIntent;
use crate::core::Point;
use crate::shared::EditorOptions;

impl InputState {
    /// Verarbeitet das Aufsetzen eines Zeigers.
    ///
    /// Mit Modifiern oder anderen als der linken Maustaste wird nichts getan.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn handle_pointer_down(
        &mut self,
        id: PointerId,
        pointer: TrackedPointer,
        button: MouseButton,
        modifiers: Modifiers,
        time_ms: u64,
        options: &EditorOptions,
        events: &mut Vec<AppIntent>,
    ) {
        if modifiers.any() || (pointer.kind == PointerKind::Mouse && button != MouseButton::Primary)
        {
            return;
        }
        self.pointers.insert(id, pointer);

        if pointer.kind != PointerKind::Mouse
            && self.pointers.len() == 1
            && self.detect_double_tap(time_ms, options.double_tap_interval_ms)
        {
            events.push(AppIntent::PlaceRequested {
                canvas_pos: pointer.position,
            });
            return;
        }

        self.switch_mode(events);
    }

    /// Verarbeitet eine Zeigerbewegung.
    ///
    /// Unbekannte Zeiger (keine Taste gedrückt) aktualisieren nur den Hover.
    pub(crate) fn handle_pointer_move(
        &mut self,
        id: PointerId,
        kind: PointerKind,
        position: Point,
        events: &mut Vec<AppIntent>,
    ) {
        if kind == PointerKind::Mouse {
            self.mouse_position = Some(position);
        }

        let Some(tracked) = self.pointers.get_mut(&id) else {
            events.push(AppIntent::PointerHovered {
                canvas_pos: position,
                touch: kind == PointerKind::Touch,
            });
            return;
        };
        tracked.position = position;

        match (self.pointers.len(), self.mode) {
            (1, _) => events.push(AppIntent::DragMoved {
                canvas_pos: position,
            }),
            (2, PointerMode::Pinch) => {
                if let Some((a, b)) = self.first_two_positions() {
                    events.push(AppIntent::PinchMoved {
                        canvas_a: a,
                        canvas_b: b,
                    });
                }
            }
            _ => {}
        }
    }

    /// Verarbeitet das Loslassen oder den Abbruch eines Zeigers.
    pub(crate) fn handle_pointer_up(&mut self, id: PointerId, events: &mut Vec<AppIntent>) {
        self.pointers.shift_remove(&id);
        self.switch_mode(events);
    }

    /// Beendet die laufende Geste und beginnt die zur Zeigerzahl passende.
    pub(crate) fn switch_mode(&mut self, events: &mut Vec<AppIntent>) {
        match self.mode {
            PointerMode::Drag => events.push(AppIntent::DragEnded),
            PointerMode::Pinch => events.push(AppIntent::PinchEnded),
            PointerMode::None => {}
        }

        self.mode = match self.pointers.len() {
            1 => match self.pointers.first() {
                Some((_, pointer)) => {
                    events.push(AppIntent::DragStarted {
                        canvas_pos: pointer.position,
                        touch: pointer.kind == PointerKind::Touch,
                    });
                    PointerMode::Drag
                }
                None => PointerMode::None,
            },
            2 => match self.first_two_positions() {
                Some((a, b)) => {
                    events.push(AppIntent::PinchStarted {
                        canvas_a: a,
                        canvas_b: b,
                    });
                    PointerMode::Pinch
                }
                None => PointerMode::None,
            },
            _ => PointerMode::None,
        };
    }

    fn first_two_positions(&self) -> Option<(Point, Point)> {
        let mut positions = self.pointers.values().map(|p| p.position);
        Some((positions.next()?, positions.next()?))
    }
}
