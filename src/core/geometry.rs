//! Geometrie-Primitive: Punkttyp und Vektoroperationen.
//!
//! Ein `Point` lebt je nach Kontext im Canvas-, Pixel- oder Datenraum.
//! Der Typ selbst trägt keine Markierung, der Aufrufer ordnet ihn zu.

use glam::{DMat2, DVec2};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 2D-Punkt mit f64-Komponenten.
pub type Point = DVec2;

/// Euklidischer Abstand zweier Punkte.
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Mittelpunkt zwischen zwei Punkten.
pub fn midpoint(a: Point, b: Point) -> Point {
    (a + b) * 0.5
}

/// Wendet eine lineare Abbildung relativ zu `pivot` an.
///
/// `p' = pivot + m * (p - pivot)`
pub fn transform_about(p: Point, pivot: Point, m: DMat2) -> Point {
    pivot + m * (p - pivot)
}

/// Dreht einen Punkt um `pivot` (Winkel im Bogenmaß, gegen den Uhrzeigersinn).
pub fn rotate_about(p: Point, pivot: Point, angle: f64) -> Point {
    transform_about(p, pivot, DMat2::from_angle(angle))
}

/// Kosinus des Winkels zwischen zwei Vektoren; `None` bei Nullvektor.
pub fn cos_between(u: Point, v: Point) -> Option<f64> {
    let denom = u.length() * v.length();
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    Some(u.dot(v) / denom)
}

/// Serde-Format `{ "x": .., "y": .. }` für Punkte in externen Dokumenten.
pub mod point_serde {
    use super::*;

    #[derive(Serialize, Deserialize)]
    struct XY {
        x: f64,
        y: f64,
    }

    /// Serialisiert einen Punkt als Objekt.
    pub fn serialize<S: Serializer>(p: &Point, s: S) -> Result<S::Ok, S::Error> {
        XY { x: p.x, y: p.y }.serialize(s)
    }

    /// Liest einen Punkt aus einem Objekt.
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Point, D::Error> {
        let xy = XY::deserialize(d)?;
        Ok(Point::new(xy.x, xy.y))
    }

    /// Variante für optionale Punkte.
    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(p: &Option<Point>, s: S) -> Result<S::Ok, S::Error> {
            p.map(|p| XY { x: p.x, y: p.y }).serialize(s)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Point>, D::Error> {
            Ok(Option::<XY>::deserialize(d)?.map(|xy| Point::new(xy.x, xy.y)))
        }
    }

    /// Variante für Punktlisten.
    pub mod vec {
        use super::*;

        pub fn serialize<S: Serializer>(points: &[Point], s: S) -> Result<S::Ok, S::Error> {
            s.collect_seq(points.iter().map(|p| XY { x: p.x, y: p.y }))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Point>, D::Error> {
            Ok(Vec::<XY>::deserialize(d)?
                .into_iter()
                .map(|xy| Point::new(xy.x, xy.y))
                .collect())
        }
    }
}
