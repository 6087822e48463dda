//! Achsenkalibrierung: Ursprung und Referenzpunkte der X-/Y-Achse.

use super::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Art eines Kalibrierpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisKind {
    /// Ursprung (Wert 0 auf beiden Achsen)
    Origin,
    /// Referenzpunkt der X-Achse
    X,
    /// Referenzpunkt der Y-Achse
    Y,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::Origin => write!(f, "Ursprung"),
            AxisKind::X => write!(f, "X"),
            AxisKind::Y => write!(f, "Y"),
        }
    }
}

/// Kalibrier-Anker einer Achse: realer Wert an einer Pixelposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisPoint {
    /// Realer Achsenwert dieses Ankers
    pub value: f64,
    /// Pixelposition des Ankers im Bild
    pub position: Point,
    /// Segment bis zu diesem Anker logarithmisch skaliert
    pub is_log_scale: bool,
    /// Log-Basis (nur informativ, die Interpolation nutzt das Werteverhältnis)
    pub log_base: Option<f64>,
}

impl AxisPoint {
    /// Erstellt einen linearen Anker.
    pub fn new(value: f64, position: Point) -> Self {
        Self {
            value,
            position,
            is_log_scale: false,
            log_base: None,
        }
    }

    /// Erstellt einen logarithmischen Anker mit Basis `base`.
    pub fn log(value: f64, position: Point, base: f64) -> Self {
        Self {
            value,
            position,
            is_log_scale: true,
            log_base: Some(base),
        }
    }

    /// Ob das Segment, das an diesem Anker endet, logarithmisch ist.
    pub fn uses_log_scale(&self) -> bool {
        self.is_log_scale && self.log_base.is_some_and(|base| base > 0.0)
    }
}

/// Komponente eines Punkts entlang einer Achse (Ursprung: x).
pub fn axis_coordinate(p: Point, axis: AxisKind) -> f64 {
    match axis {
        AxisKind::Y => p.y,
        AxisKind::X | AxisKind::Origin => p.x,
    }
}

/// Ursprung plus Referenzpunkte beider Achsen.
///
/// Vorbedingung (nicht erzwungen): nach Wert sortierte Anker sind auch
/// nach Koordinate monoton.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calibration {
    /// Ursprung in Pixeln (`None` = noch nicht gesetzt)
    pub origin: Option<Point>,
    /// Referenzpunkte der X-Achse
    pub x_axis_points: Vec<AxisPoint>,
    /// Referenzpunkte der Y-Achse
    pub y_axis_points: Vec<AxisPoint>,
}

impl Calibration {
    /// Erstellt eine leere Kalibrierung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ursprung, `(0, 0)` falls nicht gesetzt.
    pub fn origin_or_zero(&self) -> Point {
        self.origin.unwrap_or(Point::ZERO)
    }

    /// Referenzpunkte einer Achse. Für `Origin` leer.
    pub fn axis_points(&self, axis: AxisKind) -> &[AxisPoint] {
        match axis {
            AxisKind::X => &self.x_axis_points,
            AxisKind::Y => &self.y_axis_points,
            AxisKind::Origin => &[],
        }
    }

    fn axis_points_mut(&mut self, axis: AxisKind) -> Option<&mut Vec<AxisPoint>> {
        match axis {
            AxisKind::X => Some(&mut self.x_axis_points),
            AxisKind::Y => Some(&mut self.y_axis_points),
            AxisKind::Origin => None,
        }
    }

    /// Setzt die Position eines Kalibrierpunkts.
    ///
    /// Für `Origin` wird der Ursprung gesetzt (Index ignoriert). Für X/Y wird
    /// der Anker an `index` überschrieben (Wert und Skala bleiben erhalten)
    /// oder, falls `index` hinter dem Ende liegt, ein neuer linearer Anker
    /// mit Wert 0 angehängt. Gibt den tatsächlichen Index zurück.
    pub fn place(&mut self, axis: AxisKind, index: usize, position: Point) -> usize {
        let Some(points) = self.axis_points_mut(axis) else {
            self.origin = Some(position);
            return 0;
        };
        if let Some(existing) = points.get_mut(index) {
            existing.position = position;
            index
        } else {
            points.push(AxisPoint::new(0.0, position));
            points.len() - 1
        }
    }

    /// Setzt den realen Wert eines Ankers. `false` bei ungültigem Index.
    pub fn set_value(&mut self, axis: AxisKind, index: usize, value: f64) -> bool {
        match self
            .axis_points_mut(axis)
            .and_then(|points| points.get_mut(index))
        {
            Some(point) => {
                point.value = value;
                true
            }
            None => false,
        }
    }

    /// Setzt die Skala des Segments, das am Anker endet (`None` = linear).
    pub fn set_log_base(&mut self, axis: AxisKind, index: usize, base: Option<f64>) -> bool {
        match self
            .axis_points_mut(axis)
            .and_then(|points| points.get_mut(index))
        {
            Some(point) => {
                point.is_log_scale = base.is_some();
                point.log_base = base;
                true
            }
            None => false,
        }
    }

    /// Entfernt einen Anker. Für `Origin` wird der Ursprung zurückgesetzt.
    pub fn remove(&mut self, axis: AxisKind, index: usize) -> bool {
        let Some(points) = self.axis_points_mut(axis) else {
            return self.origin.take().is_some();
        };
        if index < points.len() {
            points.remove(index);
            true
        } else {
            false
        }
    }

    /// Entfernt Ursprung und alle Anker.
    pub fn clear(&mut self) {
        self.origin = None;
        self.x_axis_points.clear();
        self.y_axis_points.clear();
    }

    /// Ob beide Achsen mindestens einen Anker besitzen.
    pub fn is_calibrated(&self) -> bool {
        !self.x_axis_points.is_empty() && !self.y_axis_points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_overwrites_position_and_keeps_value() {
        let mut cal = Calibration::new();
        cal.x_axis_points.push(AxisPoint::new(10.0, Point::new(50.0, 0.0)));

        let idx = cal.place(AxisKind::X, 0, Point::new(60.0, 1.0));

        assert_eq!(idx, 0);
        assert_eq!(cal.x_axis_points.len(), 1);
        assert_eq!(cal.x_axis_points[0].value, 10.0);
        assert_eq!(cal.x_axis_points[0].position, Point::new(60.0, 1.0));
    }

    #[test]
    fn place_beyond_end_appends() {
        let mut cal = Calibration::new();
        let idx = cal.place(AxisKind::Y, 5, Point::new(0.0, 80.0));
        assert_eq!(idx, 0);
        assert_eq!(cal.y_axis_points.len(), 1);
    }

    #[test]
    fn place_origin_sets_origin() {
        let mut cal = Calibration::new();
        cal.place(AxisKind::Origin, 3, Point::new(4.0, 5.0));
        assert_eq!(cal.origin, Some(Point::new(4.0, 5.0)));
        assert!(cal.remove(AxisKind::Origin, 0));
        assert_eq!(cal.origin_or_zero(), Point::ZERO);
    }

    #[test]
    fn log_scale_requires_positive_base() {
        let mut p = AxisPoint::new(1.0, Point::ZERO);
        p.is_log_scale = true;
        assert!(!p.uses_log_scale());
        p.log_base = Some(10.0);
        assert!(p.uses_log_scale());
    }
}
