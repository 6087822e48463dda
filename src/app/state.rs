//! Sitzungszustand: Editor-Inhalt, Interaktion und History.

mod app_state;
mod editor;
mod interaction;

pub use app_state::{AppState, PromptRequest, DEFAULT_CANVAS_SIZE};
pub use editor::{default_curve_name, EditorState};
pub use interaction::{GestureState, InteractionMode, InteractionState, PinchGesture};
