//! Interpolation der Kurvenknoten zu einer stetigen Parameterfunktion.
//!
//! Die Engine kennt nur die Fähigkeit `interpolate(knots, method) -> f(t)`
//! mit `t ∈ [0, 1]`. [`SplineInterpolator`] ist die mitgelieferte
//! Standard-Implementierung; Aufrufer können eigene [`Interpolator`] einsetzen.

use super::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interpolationsverfahren einer Teilkurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterpolationMethod {
    /// Keine Interpolation, Koordinaten = Knoten
    #[default]
    None,
    /// Polygonzug durch die Knoten
    Linear,
    /// Kubischer B-Spline (Endpunkte werden getroffen)
    BSpline,
    /// Catmull-Rom-Spline durch alle Knoten
    CatmullRom,
}

impl InterpolationMethod {
    /// Bezeichner wie im JSON-Dokument.
    pub fn as_str(&self) -> &'static str {
        match self {
            InterpolationMethod::None => "none",
            InterpolationMethod::Linear => "linear",
            InterpolationMethod::BSpline => "bSpline",
            InterpolationMethod::CatmullRom => "catmullRom",
        }
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stetige Kurvenfunktion über `t ∈ [0, 1]`.
pub type CurveFunction = Box<dyn Fn(f64) -> Point + Send + Sync>;

/// Liefert zu Knoten und Verfahren eine Kurvenfunktion.
pub trait Interpolator {
    /// Baut die Kurvenfunktion. `f(0)` ist der erste, `f(1)` der letzte Knoten.
    fn interpolate(&self, knots: &[Point], method: InterpolationMethod) -> CurveFunction;
}

/// Standard-Interpolator für Polygonzug, B-Spline und Catmull-Rom.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplineInterpolator;

impl Interpolator for SplineInterpolator {
    fn interpolate(&self, knots: &[Point], method: InterpolationMethod) -> CurveFunction {
        match knots {
            [] => Box::new(|_| Point::ZERO),
            [single] => {
                let single = *single;
                Box::new(move |_| single)
            }
            _ => {
                let knots = knots.to_vec();
                match method {
                    InterpolationMethod::None | InterpolationMethod::Linear => {
                        Box::new(move |t| polyline_point(&knots, t))
                    }
                    InterpolationMethod::CatmullRom => {
                        Box::new(move |t| catmull_rom_chain_point(&knots, t))
                    }
                    InterpolationMethod::BSpline => {
                        let controls = clamped_controls(&knots);
                        Box::new(move |t| bspline_point(&controls, t))
                    }
                }
            }
        }
    }
}

/// Teilt `t ∈ [0, 1]` auf `segments` gleich lange Abschnitte auf.
///
/// Gibt (Segmentindex, lokales t) zurück; `t = 1` fällt ins letzte Segment.
fn split_parameter(t: f64, segments: usize) -> (usize, f64) {
    let scaled = t.clamp(0.0, 1.0) * segments as f64;
    let index = (scaled.floor() as usize).min(segments - 1);
    (index, scaled - index as f64)
}

fn polyline_point(knots: &[Point], t: f64) -> Point {
    let (seg, local) = split_parameter(t, knots.len() - 1);
    knots[seg].lerp(knots[seg + 1], local)
}

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 nach p2.
pub fn catmull_rom_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Punkt auf der Catmull-Rom-Kette durch alle Knoten.
///
/// An den Rändern werden Phantom-Punkte gespiegelt, damit die Kurve
/// natürlich durch den ersten und letzten Knoten läuft.
fn catmull_rom_chain_point(knots: &[Point], t: f64) -> Point {
    let n = knots.len();
    if n == 2 {
        return polyline_point(knots, t);
    }

    let (seg, local) = split_parameter(t, n - 1);
    let p0 = if seg == 0 {
        2.0 * knots[0] - knots[1]
    } else {
        knots[seg - 1]
    };
    let p3 = if seg + 2 < n {
        knots[seg + 2]
    } else {
        2.0 * knots[n - 1] - knots[n - 2]
    };

    catmull_rom_point(p0, knots[seg], knots[seg + 1], p3, local)
}

/// Kontrollpunkte mit dreifachen Endpunkten (Kurve trifft erste/letzte Stelle).
fn clamped_controls(knots: &[Point]) -> Vec<Point> {
    let first = knots[0];
    let last = knots[knots.len() - 1];
    let mut controls = Vec::with_capacity(knots.len() + 4);
    controls.extend([first, first]);
    controls.extend_from_slice(knots);
    controls.extend([last, last]);
    controls
}

/// Punkt auf dem uniformen kubischen B-Spline über `controls`.
fn bspline_point(controls: &[Point], t: f64) -> Point {
    let (seg, u) = split_parameter(t, controls.len() - 3);
    let [c0, c1, c2, c3] = [
        controls[seg],
        controls[seg + 1],
        controls[seg + 2],
        controls[seg + 3],
    ];

    let u2 = u * u;
    let u3 = u2 * u;
    let one_minus = 1.0 - u;
    let b0 = one_minus * one_minus * one_minus / 6.0;
    let b1 = (3.0 * u3 - 6.0 * u2 + 4.0) / 6.0;
    let b2 = (-3.0 * u3 + 3.0 * u2 + 3.0 * u + 1.0) / 6.0;
    let b3 = u3 / 6.0;

    c0 * b0 + c1 * b1 + c2 * b2 + c3 * b3
}

/// Tastet eine Kurvenfunktion in `steps` gleichen Schritten ab (inkl. beider Enden).
pub fn sample(function: &dyn Fn(f64) -> Point, steps: usize) -> Vec<Point> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| function(i as f64 / steps as f64))
        .collect()
}
