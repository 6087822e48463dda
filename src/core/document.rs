//! Diagramm-Dokument: Kalibrierung plus Teilkurven, und das daraus
//! berechnete Ergebnis in Datenkoordinaten.

use super::calibration::{AxisPoint, Calibration};
use super::curve::SubCurve;
use super::geometry::Point;
use super::transform::to_data_all;
use crate::error::CalibrationError;
use serde::{Deserialize, Serialize};

/// Nachkommastellen der exportierten Datenkoordinaten.
pub const RESULT_DECIMALS: i32 = 8;

/// Vollständiges Diagramm mit Achsenkalibrierung und Teilkurven.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDocument {
    /// Name des Diagramms
    pub graph_name: String,
    /// Beschriftung der X-Achse
    pub x_axis_name: String,
    /// Beschriftung der Y-Achse
    pub y_axis_name: String,
    /// Achsenkalibrierung
    pub calibration: Calibration,
    /// Nachgezeichnete Kurven
    pub subcurves: Vec<SubCurve>,
}

impl GraphDocument {
    /// Erstellt ein leeres Dokument.
    pub fn new(graph_name: impl Into<String>) -> Self {
        Self {
            graph_name: graph_name.into(),
            ..Self::default()
        }
    }

    /// Teilkurve mit der Kennung `id`.
    pub fn subcurve(&self, id: u32) -> Option<&SubCurve> {
        self.subcurves.iter().find(|c| c.id == id)
    }

    /// Nächste freie Kennung für eine neue Teilkurve.
    pub fn next_subcurve_id(&self) -> u32 {
        next_subcurve_id(&self.subcurves)
    }
}

/// Kennung hinter der größten vergebenen; 0 ohne Teilkurven.
pub fn next_subcurve_id<'a>(curves: impl IntoIterator<Item = &'a SubCurve>) -> u32 {
    curves.into_iter().map(|c| c.id + 1).max().unwrap_or(0)
}

/// Berechnet das Ergebnisdiagramm.
///
/// Die abgeleiteten Koordinaten jeder Teilkurve werden mit `to_data` in
/// Datenkoordinaten umgerechnet und auf [`RESULT_DECIMALS`] Stellen gerundet.
/// Knoten bleiben im Pixelraum, die Anker werden nach Wert sortiert.
pub fn compute_result_graph(document: &GraphDocument) -> Result<GraphDocument, CalibrationError> {
    let mut result = document.clone();
    sort_by_value(&mut result.calibration.x_axis_points);
    sort_by_value(&mut result.calibration.y_axis_points);

    for curve in &mut result.subcurves {
        curve.coordinates = to_data_all(&curve.coordinates, &document.calibration)?
            .into_iter()
            .map(round_point)
            .collect();
    }

    log::debug!(
        "Ergebnisdiagramm '{}' mit {} Teilkurven berechnet",
        result.graph_name,
        result.subcurves.len()
    );
    Ok(result)
}

fn sort_by_value(points: &mut [AxisPoint]) {
    points.sort_by(|a, b| a.value.total_cmp(&b.value));
}

fn round_point(p: Point) -> Point {
    Point::new(round_to(p.x, RESULT_DECIMALS), round_to(p.y, RESULT_DECIMALS))
}

/// Rundet auf `decimals` Nachkommastellen.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
