//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
/// Undo/Redo über Knoten-Schnappschüsse
pub mod history;
mod intent_mapping;
pub mod notifications;
/// Sitzungszustand
///
/// Dieses Modul verwaltet den Zustand einer Sitzung (Editor-Inhalt, Ansicht, Gesten).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::KnotHistory;
pub use notifications::{EditorEvent, EditorNotifier};
pub use state::{
    AppState, EditorState, GestureState, InteractionMode, InteractionState, PromptRequest,
};
