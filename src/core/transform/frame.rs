//! Schiefe Achsen: Erkennung und Achsen-Koordinatensystem.

use crate::core::geometry::{cos_between, Point};
use glam::{DMat2, DVec2};

/// Toleranz für `|cos θ|` zwischen X- und Y-Achse (orthogonal darunter).
pub const ORTHOGONAL_TOLERANCE: f64 = 0.01;
/// Minimale Achsenneigung (rad), ab der eine Korrektur erfolgt.
pub const TILT_TOLERANCE: f64 = 0.01;

/// Lineare Abbildung vom Pixelraum in das Achsen-Koordinatensystem.
///
/// Die X-Zeile dreht um den Neigungswinkel der X-Achse, die Y-Zeile um den
/// der Y-Achse. Beide Richtungen der Umrechnung nutzen dieselbe Matrix bzw.
/// ihre exakte Inverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationFrame {
    /// Neigung der X-Achse gegen die Horizontale
    pub x_angle: f64,
    /// Neigung der Y-Achse gegen die Vertikale
    pub y_angle: f64,
    matrix: DMat2,
    inverse: DMat2,
}

impl RotationFrame {
    /// Keine Korrektur.
    pub const IDENTITY: Self = Self {
        x_angle: 0.0,
        y_angle: 0.0,
        matrix: DMat2::IDENTITY,
        inverse: DMat2::IDENTITY,
    };

    /// Ermittelt die Korrektur aus Ursprung und je einem Referenzanker.
    ///
    /// Korrigiert wird nur, wenn die Achsen orthogonal sind und mindestens
    /// eine Achse messbar geneigt ist. Fehlt ein Anker, bleibt es bei
    /// `IDENTITY`.
    pub fn detect(origin: Point, x_ref: Option<Point>, y_ref: Option<Point>) -> Self {
        let (Some(x_ref), Some(y_ref)) = (x_ref, y_ref) else {
            return Self::IDENTITY;
        };

        let x_angle = (origin.y - x_ref.y).atan2(x_ref.x - origin.x);
        let y_angle = (y_ref.x - origin.x).atan2(y_ref.y - origin.y);

        let orthogonal = cos_between(x_ref - origin, y_ref - origin)
            .is_some_and(|cos_theta| cos_theta.abs() < ORTHOGONAL_TOLERANCE);
        let tilted = x_angle.abs() > TILT_TOLERANCE || y_angle.abs() > TILT_TOLERANCE;

        if !(orthogonal && tilted) {
            return Self::IDENTITY;
        }

        Self::from_angles(x_angle, y_angle)
    }

    /// Baut die Abbildung aus beiden Winkeln.
    pub fn from_angles(x_angle: f64, y_angle: f64) -> Self {
        let (sin_x, cos_x) = x_angle.sin_cos();
        let (sin_y, cos_y) = y_angle.sin_cos();
        let matrix = DMat2::from_cols(DVec2::new(cos_x, sin_y), DVec2::new(-sin_x, cos_y));

        // cos(x - y) = det; bei orthogonalen Achsen ±1
        if matrix.determinant().abs() < 1e-9 {
            log::warn!(
                "Achsen-Korrektur singulär (x={:.4}, y={:.4}), keine Drehung",
                x_angle,
                y_angle
            );
            return Self::IDENTITY;
        }

        Self {
            x_angle,
            y_angle,
            matrix,
            inverse: matrix.inverse(),
        }
    }

    /// Ob keine Korrektur angewendet wird.
    pub fn is_identity(&self) -> bool {
        self.matrix == DMat2::IDENTITY
    }

    /// Pixelpunkt → Achsen-Koordinaten relativ zum Ursprung.
    pub fn to_frame(&self, p: Point, origin: Point) -> DVec2 {
        self.matrix * (p - origin)
    }

    /// Achsen-Koordinaten relativ zum Ursprung → Pixelpunkt.
    pub fn from_frame(&self, local: DVec2, origin: Point) -> Point {
        origin + self.inverse * local
    }
}

impl Default for RotationFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}
