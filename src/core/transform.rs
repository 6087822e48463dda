//! Koordinaten-Transformation Pixel ↔ Daten über die Achsenkalibrierung.
//!
//! `to_data` rechnet einen Bildpunkt in reale Achsenwerte um (Export der
//! Kurve), `to_pixel` ist die Umkehrung (Platzierung externer Koordinaten,
//! z.B. Kommentare). Beide Richtungen verwenden dasselbe Achsen-Koordinatensystem
//! und dieselbe Segmentwahl, sodass `to_pixel(to_data(p)) ≈ p` gilt.
//!
//! Ablauf je Richtung:
//! - schiefe Achsen einmal pro Kalibrierung erkennen ([`RotationFrame`]);
//!   Referenz ist je Achse der vom Ursprung am weitesten entfernte Anker
//! - Anker und Punkt ins Achsen-Koordinatensystem überführen
//! - Segment wählen und linear bzw. logarithmisch interpolieren
//!
//! Der Referenzanker hängt nicht vom Anfragepunkt ab. Ein pro Punkt
//! wechselndes Koordinatensystem macht die Abbildung an den Wechselstellen
//! mehrdeutig, sobald die Anker nicht exakt auf einer Geraden liegen.
//!
//! Eine Achse ohne Anker wird unverändert durchgereicht.

mod frame;
mod segment;

#[cfg(test)]
mod tests;

pub use frame::{RotationFrame, ORTHOGONAL_TOLERANCE, TILT_TOLERANCE};

use super::calibration::{AxisKind, Calibration};
use super::geometry::Point;
use crate::error::CalibrationError;
use segment::{farthest_anchor, AxisScale};

/// Achsen-Koordinatensystem einer Kalibrierung.
///
/// Gilt für alle Punkte gleichermaßen; beide Umrechnungsrichtungen rufen
/// diese Funktion auf.
pub fn frame_of(calibration: &Calibration) -> RotationFrame {
    let origin = calibration.origin_or_zero();
    RotationFrame::detect(
        origin,
        farthest_anchor(&calibration.x_axis_points, origin).map(|a| a.position),
        farthest_anchor(&calibration.y_axis_points, origin).map(|a| a.position),
    )
}

/// Pixelpunkt → Datenpunkt.
pub fn to_data(pixel: Point, calibration: &Calibration) -> Result<Point, CalibrationError> {
    let origin = calibration.origin_or_zero();
    let frame = frame_of(calibration);
    let local = frame.to_frame(pixel, origin);

    let x = match AxisScale::build(&calibration.x_axis_points, AxisKind::X, origin, &frame) {
        Some(scale) => scale.value_at(local.x)?,
        None => pixel.x,
    };
    let y = match AxisScale::build(&calibration.y_axis_points, AxisKind::Y, origin, &frame) {
        Some(scale) => scale.value_at(local.y)?,
        None => pixel.y,
    };

    Ok(Point::new(x, y))
}

/// Datenpunkt → Pixelpunkt.
pub fn to_pixel(data: Point, calibration: &Calibration) -> Result<Point, CalibrationError> {
    let origin = calibration.origin_or_zero();
    let frame = frame_of(calibration);

    let local_x = match AxisScale::build(&calibration.x_axis_points, AxisKind::X, origin, &frame) {
        Some(scale) => scale.coordinate_of(data.x)?,
        None => data.x - origin.x,
    };
    let local_y = match AxisScale::build(&calibration.y_axis_points, AxisKind::Y, origin, &frame) {
        Some(scale) => scale.coordinate_of(data.y)?,
        None => data.y - origin.y,
    };

    Ok(frame.from_frame(Point::new(local_x, local_y), origin))
}

/// Wendet [`to_data`] auf eine Punktfolge an. Bricht beim ersten Fehler ab.
pub fn to_data_all(pixels: &[Point], calibration: &Calibration) -> Result<Vec<Point>, CalibrationError> {
    pixels.iter().map(|&p| to_data(p, calibration)).collect()
}
