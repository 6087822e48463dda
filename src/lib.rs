//! Graph-Digitizer Library.
//! Digitalisierungs-Engine für gescannte Diagramme: Achsenkalibrierung,
//! Pixel ↔ Daten-Umrechnung, Kurvenknoten mit Undo/Redo und die
//! Zeiger-/Tastatur-Interaktion als Intent/Command-Fluss.

pub mod app;
pub mod core;
pub mod error;
pub mod input;
pub mod json;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorEvent, EditorState, InteractionMode,
    KnotHistory,
};
pub use core::{
    compute_result_graph, to_data, to_pixel, AxisKind, AxisPoint, Calibration, CommentRecord,
    GraphDocument, InterpolationMethod, Interpolator, Point, SubCurve, Viewport,
};
pub use error::{CalibrationError, DigitizerError};
pub use input::{InputEvent, InputState, Modifiers, MouseButton, PointerKind};
pub use json::{parse_comments, parse_graph_document, write_comments, write_graph_document};
pub use shared::EditorOptions;
