//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app` und `input` gemeinsam nutzen.

pub mod options;

pub use options::EditorOptions;
pub use options::{DOUBLE_TAP_INTERVAL_MS, SNAP_DISTANCE_PX, ZOOM_STEP};
