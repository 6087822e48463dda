//! Fehlertypen der Digitalisierungs-Engine.

use crate::core::AxisKind;

/// Fehler einer ungültigen Achsenkalibrierung.
///
/// Wird von `to_data`/`to_pixel` synchron an den Aufrufer durchgereicht,
/// der Editor-Zustand bleibt dabei unverändert.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    /// Segment ohne Ausdehnung (Koordinaten- oder Wertedifferenz 0)
    #[error("Division durch Null: Segment auf der {axis}-Achse hat Start = Ende ({start} = {end})")]
    DegenerateSegment { axis: AxisKind, start: f64, end: f64 },
    /// Log-Segment mit nicht positivem Werteverhältnis
    #[error("Ungültiges Verhältnis für Logarithmus auf der {axis}-Achse: {ratio}")]
    InvalidRatio { axis: AxisKind, ratio: f64 },
    /// Wert liegt nicht im Definitionsbereich des Log-Segments
    #[error("Wert {value} liegt außerhalb des logarithmischen Bereichs der {axis}-Achse")]
    ValueOutsideLogDomain { axis: AxisKind, value: f64 },
}

/// Fehler der Digitalisierungs-Engine.
#[derive(thiserror::Error, Debug)]
pub enum DigitizerError {
    /// Kalibrierung lässt keine Umrechnung zu
    #[error("Ungültige Kalibrierung: {0}")]
    InvalidCalibration(#[from] CalibrationError),
    /// Interne Invariante verletzt (sollte nie auftreten)
    #[error("Programmfehler: {0}")]
    ProgramLogic(String),
    /// Knotenliste aus Text konnte nicht gelesen werden
    #[error("{}", format_decode(.element, .message))]
    Decode {
        /// Index des fehlerhaften Elements (falls bekannt)
        element: Option<usize>,
        /// Beschreibung des Fehlers
        message: String,
    },
    /// Ungültiger Parameter eines Commands
    #[error("Ungültiges Argument: {0}")]
    InvalidArgument(String),
}

fn format_decode(element: &Option<usize>, message: &str) -> String {
    match element {
        Some(index) => format!("Ungültige Syntax in Element {}: {}", index, message),
        None => format!("Ungültige Syntax: {}", message),
    }
}

/// Kurzform für Ergebnisse der Engine.
pub type Result<T> = std::result::Result<T, DigitizerError>;
