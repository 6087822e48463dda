//! Core-Domänentypen: Kalibrierung, Transformation, Kurven, Ausschnitt, Gitter.

pub mod calibration;
pub mod comment;
pub mod curve;
pub mod document;
pub mod geometry;
pub mod grid;
pub mod interpolation;
/// Pixel ↔ Daten-Umrechnung
///
/// Herzstück der Digitalisierung:
/// - `to_data`: Bildpunkt → reale Achsenwerte (Export)
/// - `to_pixel`: reale Achsenwerte → Bildpunkt (Kommentare)
/// - `RotationFrame`: Ausgleich schief eingescannter Achsen
pub mod transform;
pub mod viewport;

pub use calibration::{AxisKind, AxisPoint, Calibration};
pub use comment::{find_nearest_comment, place_comments, CommentRecord, PlacedComment};
pub use curve::{decode_knot_list, encode_knot_list, find_nearest_knot, SubCurve};
pub use document::{compute_result_graph, next_subcurve_id, GraphDocument};
pub use geometry::Point;
pub use grid::{grid_lines, grid_params, snap_to_grid, GridLine, GridLineKind, GridParams};
pub use interpolation::{CurveFunction, InterpolationMethod, Interpolator, SplineInterpolator};
pub use transform::{frame_of, to_data, to_data_all, to_pixel, RotationFrame};
pub use viewport::{Viewport, ZoomAxes};
