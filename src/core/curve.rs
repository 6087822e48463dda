//! Teilkurve aus Knoten, Interpolationsverfahren und abgeleiteten Koordinaten.

use super::geometry::{distance, Point};
use super::interpolation::{sample, CurveFunction, InterpolationMethod, Interpolator};
use crate::error::{DigitizerError, Result};
use serde::{Deserialize, Serialize};

/// Anzahl der Abtastschritte für die abgeleiteten Koordinaten.
pub const DEFAULT_SAMPLE_STEPS: usize = 500;
/// Kleinste erlaubte Knotenzahl beim Neu-Abtasten.
pub const RESAMPLE_MIN: usize = 2;
/// Größte erlaubte Knotenzahl beim Neu-Abtasten.
pub const RESAMPLE_MAX: usize = 10_000_000;

/// Eine nachgezeichnete Kurve des Diagramms.
///
/// Knoten liegen im Pixelraum und behalten ihre Einfügereihenfolge
/// (auch nicht-funktionale Kurven sind erlaubt).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCurve {
    /// Kennung der Teilkurve im Dokument
    pub id: u32,
    /// Anzeigename
    pub name: String,
    /// Vom Benutzer gesetzte Knoten
    pub knots: Vec<Point>,
    /// Interpolationsverfahren
    pub interpolation_method: InterpolationMethod,
    /// Abgeleitete, dichte Punktfolge (Pixelraum)
    pub coordinates: Vec<Point>,
}

impl SubCurve {
    /// Erstellt eine leere Teilkurve.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Hängt einen Knoten an und gibt seinen Index zurück.
    pub fn add_knot(&mut self, point: Point) -> Result<usize> {
        self.knots.push(point);
        self.knots
            .iter()
            .rposition(|k| *k == point)
            .ok_or_else(|| {
                DigitizerError::ProgramLogic(format!(
                    "eingefügter Knoten ({}, {}) nicht wiedergefunden",
                    point.x, point.y
                ))
            })
    }

    /// Verschiebt einen Knoten.
    pub fn move_knot(&mut self, index: usize, point: Point) -> Result<()> {
        let knot = self
            .knots
            .get_mut(index)
            .ok_or_else(|| knot_index_error(index))?;
        *knot = point;
        Ok(())
    }

    /// Entfernt einen Knoten; die übrigen behalten ihre Reihenfolge.
    pub fn delete_knot(&mut self, index: usize) -> Result<Point> {
        if index >= self.knots.len() {
            return Err(knot_index_error(index));
        }
        Ok(self.knots.remove(index))
    }

    /// Ersetzt alle Knoten.
    pub fn replace_knots(&mut self, knots: Vec<Point>) {
        self.knots = knots;
    }

    /// Entfernt alle Knoten.
    pub fn clear(&mut self) {
        self.knots.clear();
    }

    /// Berechnet die abgeleiteten Koordinaten neu.
    ///
    /// Mit Interpolation und mindestens zwei Knoten: `steps` gleiche
    /// Parameterschritte über [0, 1] inklusive beider Enden. Sonst die Knoten.
    pub fn update_coordinates(&mut self, interpolator: &dyn Interpolator, steps: usize) {
        self.coordinates = if self.interpolation_method != InterpolationMethod::None
            && self.knots.len() > 1
        {
            let function = interpolator.interpolate(&self.knots, self.interpolation_method);
            sample(&function, steps)
        } else {
            self.knots.clone()
        };
    }

    /// Kurvenfunktion der aktuellen Knoten.
    pub fn function(&self, interpolator: &dyn Interpolator) -> CurveFunction {
        interpolator.interpolate(&self.knots, self.interpolation_method)
    }

    /// `n` gleichverteilte Punkte der Kurvenfunktion als neue Knotenliste.
    pub fn resampled_knots(&self, interpolator: &dyn Interpolator, n: usize) -> Result<Vec<Point>> {
        if !(RESAMPLE_MIN..=RESAMPLE_MAX).contains(&n) {
            return Err(DigitizerError::InvalidArgument(format!(
                "Knotenzahl {} außerhalb von {}..={}",
                n, RESAMPLE_MIN, RESAMPLE_MAX
            )));
        }
        if self.knots.is_empty() {
            return Err(DigitizerError::InvalidArgument("Keine Knoten".into()));
        }
        let function = self.function(interpolator);
        Ok(sample(&function, n - 1))
    }
}

fn knot_index_error(index: usize) -> DigitizerError {
    DigitizerError::InvalidArgument(format!("Knoten-Index {} existiert nicht", index))
}

/// Nächster Knoten innerhalb von `max_distance` (beides im selben Raum).
pub fn find_nearest_knot(knots: &[Point], position: Point, max_distance: f64) -> Option<usize> {
    knots
        .iter()
        .enumerate()
        .map(|(i, k)| (i, distance(*k, position)))
        .filter(|(_, d)| *d <= max_distance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Kodiert Knoten als `[x, y], [x, y]`.
pub fn encode_knot_list(knots: &[Point]) -> String {
    knots
        .iter()
        .map(|k| format!("[{}, {}]", k.x, k.y))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Liest eine Knotenliste im Format von [`encode_knot_list`].
pub fn decode_knot_list(text: &str) -> Result<Vec<Point>> {
    let parsed: serde_json::Value =
        serde_json::from_str(&format!("[{}]", text)).map_err(|e| DigitizerError::Decode {
            element: None,
            message: e.to_string(),
        })?;
    let serde_json::Value::Array(elements) = parsed else {
        return Err(DigitizerError::Decode {
            element: None,
            message: "keine Liste".into(),
        });
    };

    elements
        .iter()
        .enumerate()
        .map(|(i, element)| match element.as_array().map(Vec::as_slice) {
            Some([x, y]) => match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => Ok(Point::new(x, y)),
                _ => Err(DigitizerError::Decode {
                    element: Some(i),
                    message: "Koordinaten müssen Zahlen sein".into(),
                }),
            },
            _ => Err(DigitizerError::Decode {
                element: Some(i),
                message: "erwartet [x, y]".into(),
            }),
        })
        .collect()
}
