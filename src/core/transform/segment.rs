//! Segmentwahl und Skalenformeln einer Achse.

use super::frame::RotationFrame;
use crate::core::calibration::{axis_coordinate, AxisKind, AxisPoint};
use crate::core::geometry::Point;
use crate::error::CalibrationError;

/// Anker mit dem größten Abstand zum Ursprung (Referenz der Schieflage).
///
/// Bei gleichem Abstand gewinnt der zuerst gesetzte Anker.
pub(crate) fn farthest_anchor(points: &[AxisPoint], origin: Point) -> Option<&AxisPoint> {
    let mut best: Option<&AxisPoint> = None;
    for anchor in points {
        let farther = best.map_or(true, |b| {
            anchor.position.distance(origin) > b.position.distance(origin)
        });
        if farther {
            best = Some(anchor);
        }
    }
    best
}

/// +1 wenn die Werte entlang der (Ursprungs-relativen) Koordinate steigen, sonst -1.
fn value_direction(mut anchors: impl ExactSizeIterator<Item = (f64, f64)>) -> f64 {
    let Some(first) = anchors.next() else {
        return 1.0;
    };
    let delta = match anchors.last() {
        Some(last) => last.1 - first.1,
        None => first.1 * first.0,
    };
    if delta < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Stützstelle im Achsen-Koordinatensystem.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Knot {
    coord: f64,
    value: f64,
    log: bool,
}

impl Knot {
    const ORIGIN: Self = Self {
        coord: 0.0,
        value: 0.0,
        log: false,
    };
}

/// Skala einer Achse im Achsen-Koordinatensystem.
///
/// Die Koordinate wird so ausgerichtet, dass die Anker auf der positiven
/// Seite des Ursprungs liegen. Segmente sind links geschlossen, rechts
/// offen; das erste Segment beginnt am Ursprung (Wert 0), hinter dem
/// letzten Anker wird das letzte Segment fortgesetzt.
#[derive(Debug, Clone)]
pub(crate) struct AxisScale {
    axis: AxisKind,
    orientation: f64,
    knots: Vec<Knot>,
}

impl AxisScale {
    /// Baut die Skala; `None` wenn die Achse keine Anker hat.
    pub fn build(
        points: &[AxisPoint],
        axis: AxisKind,
        origin: Point,
        frame: &RotationFrame,
    ) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut knots: Vec<Knot> = points
            .iter()
            .map(|a| Knot {
                coord: axis_coordinate(frame.to_frame(a.position, origin), axis),
                value: a.value,
                log: a.uses_log_scale(),
            })
            .collect();

        let farthest = knots
            .iter()
            .map(|k| k.coord)
            .fold(0.0_f64, |acc, c| if c.abs() > acc.abs() { c } else { acc });
        let orientation = if farthest < 0.0 { -1.0 } else { 1.0 };

        for knot in &mut knots {
            knot.coord *= orientation;
        }
        knots.sort_by(|a, b| a.coord.total_cmp(&b.coord));

        Some(Self {
            axis,
            orientation,
            knots,
        })
    }

    /// Segment (Start, Ende) für eine ausgerichtete Koordinate.
    fn segment_by_coordinate(&self, coord: f64) -> (Knot, Knot) {
        let index = self
            .knots
            .iter()
            .position(|k| coord < k.coord)
            .unwrap_or(self.knots.len() - 1);
        self.segment_at(index)
    }

    /// Segment (Start, Ende) für einen Wert.
    fn segment_by_value(&self, value: f64) -> (Knot, Knot) {
        let direction = value_direction(self.knots.iter().map(|k| (k.coord, k.value)));
        let index = self
            .knots
            .iter()
            .position(|k| direction * (k.value - value) > 0.0)
            .unwrap_or(self.knots.len() - 1);
        self.segment_at(index)
    }

    fn segment_at(&self, index: usize) -> (Knot, Knot) {
        let end = self.knots[index];
        let start = if index == 0 {
            Knot::ORIGIN
        } else {
            self.knots[index - 1]
        };
        (start, end)
    }

    /// Koordinate im Achsensystem (nicht ausgerichtet) → realer Wert.
    pub fn value_at(&self, frame_coord: f64) -> Result<f64, CalibrationError> {
        let coord = frame_coord * self.orientation;
        let (start, end) = self.segment_by_coordinate(coord);

        if end.coord == start.coord {
            return Err(CalibrationError::DegenerateSegment {
                axis: self.axis,
                start: start.coord,
                end: end.coord,
            });
        }
        let t = (coord - start.coord) / (end.coord - start.coord);

        if end.log {
            let ratio = self.log_ratio(&start, &end)?;
            Ok(if t == 0.0 {
                start.value
            } else if t == 1.0 {
                end.value
            } else {
                start.value * ratio.powf(t)
            })
        } else {
            Ok(lerp(start.value, end.value, t))
        }
    }

    /// Realer Wert → Koordinate im Achsensystem (nicht ausgerichtet).
    pub fn coordinate_of(&self, value: f64) -> Result<f64, CalibrationError> {
        let (start, end) = self.segment_by_value(value);

        if end.coord == start.coord {
            return Err(CalibrationError::DegenerateSegment {
                axis: self.axis,
                start: start.coord,
                end: end.coord,
            });
        }

        let t = if end.log {
            let ratio = self.log_ratio(&start, &end)?;
            let relative = value / start.value;
            if relative <= 0.0 || !relative.is_finite() {
                return Err(CalibrationError::ValueOutsideLogDomain {
                    axis: self.axis,
                    value,
                });
            }
            let log_ratio = ratio.ln();
            if log_ratio == 0.0 {
                return Err(CalibrationError::DegenerateSegment {
                    axis: self.axis,
                    start: start.value,
                    end: end.value,
                });
            }
            relative.ln() / log_ratio
        } else {
            let delta = end.value - start.value;
            if delta == 0.0 {
                return Err(CalibrationError::DegenerateSegment {
                    axis: self.axis,
                    start: start.value,
                    end: end.value,
                });
            }
            (value - start.value) / delta
        };

        Ok(lerp(start.coord, end.coord, t) * self.orientation)
    }

    fn log_ratio(&self, start: &Knot, end: &Knot) -> Result<f64, CalibrationError> {
        let ratio = end.value / start.value;
        if ratio <= 0.0 || !ratio.is_finite() {
            return Err(CalibrationError::InvalidRatio {
                axis: self.axis,
                ratio,
            });
        }
        Ok(ratio)
    }
}

/// Lineare Interpolation, exakt an beiden Enden.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}
