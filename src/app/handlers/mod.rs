//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod calibration;
pub mod editing;
pub mod gesture;
pub mod history;
pub mod session;
pub mod view;
