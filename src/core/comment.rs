//! Kommentare zu einem Diagramm, in Datenkoordinaten gespeichert.

use super::calibration::Calibration;
use super::geometry::{distance, point_serde, Point};
use super::transform::to_pixel;
use crate::error::CalibrationError;
use serde::{Deserialize, Serialize};

/// Kommentar aus einer externen Kommentarliste.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Nummer der Teilkurve (ab 1)
    pub subplot: u32,
    /// Position in Datenkoordinaten
    #[serde(with = "point_serde")]
    pub coordinate: Point,
    /// Kommentartext
    pub text: String,
}

/// Kommentar, der im Bild (Pixelraum) platziert ist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedComment {
    /// Position in Bildpixeln
    #[serde(with = "point_serde")]
    pub position: Point,
    /// Kommentartext
    pub text: String,
}

/// Platziert die Kommentare einer Teilkurve über die Kalibrierung im Bild.
///
/// Bricht beim ersten Umrechnungsfehler ab.
pub fn place_comments(
    records: &[CommentRecord],
    subplot: u32,
    calibration: &Calibration,
) -> Result<Vec<PlacedComment>, CalibrationError> {
    records
        .iter()
        .filter(|r| r.subplot == subplot)
        .map(|r| {
            Ok(PlacedComment {
                position: to_pixel(r.coordinate, calibration)?,
                text: r.text.clone(),
            })
        })
        .collect()
}

/// Nächster Kommentar innerhalb von `max_distance`.
///
/// `project` bildet die Kommentarposition in den Raum von `position` ab
/// (z.B. auf den Canvas).
pub fn find_nearest_comment(
    comments: &[PlacedComment],
    position: Point,
    max_distance: f64,
    project: impl Fn(Point) -> Point,
) -> Option<usize> {
    comments
        .iter()
        .enumerate()
        .map(|(i, c)| (i, distance(project(c.position), position)))
        .filter(|(_, d)| *d <= max_distance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}
