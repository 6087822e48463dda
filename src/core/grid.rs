//! Hilfsgitter über der Bildebene: Linienabstand, Beschriftung und Einrasten.

use super::geometry::Point;
use super::viewport::Viewport;

/// Maximale Anzahl Gitterlinien je Achse.
const MAX_GRID_LINES: usize = 100;
/// Abstand der Dezimalpotenzen, ab dem das Gitter numerisch instabil wird.
const MAX_DEC_POW_SPREAD: f64 = 10.0;

/// Parameter der Gitterlinien einer Achse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    /// Gitterabstand in logischen Einheiten (Zehnerpotenz)
    pub space: f64,
    /// Nur jede `span`-te Linie wird angezeigt (1, 2 oder 5)
    pub span: i64,
    /// Index der ersten sichtbaren Linie in Einheiten von `space`
    pub pos: i64,
    /// Dezimalexponent von `space`
    pub dec_pow: i32,
}

/// Art einer Gitterlinie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridLineKind {
    /// Linie durch 0
    Axis,
    /// Jede zehnte Linie
    Major,
    /// Alle übrigen
    Minor,
}

/// Eine sichtbare Gitterlinie.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    /// Logische Position
    pub value: f64,
    /// Position auf dem Canvas (X für senkrechte, Y für waagerechte Linien)
    pub canvas_pos: f64,
    /// Darstellungsart
    pub kind: GridLineKind,
    /// Beschriftung
    pub label: String,
}

/// Berechnet die Gitterparameter für eine Achse.
///
/// `min_space_px` ist der kleinste Linienabstand auf dem Canvas.
/// `None`, wenn der Ausschnitt für ein Gitter numerisch zu weit vom Ursprung entfernt ist.
pub fn grid_params(
    viewport: &Viewport,
    canvas: Point,
    x_axis: bool,
    min_space_px: f64,
) -> Option<GridParams> {
    let edge = if x_axis {
        viewport.x_min
    } else {
        viewport.y_min
    };
    let min_space = min_space_px / viewport.zoom_factor(x_axis, canvas);
    if !min_space.is_finite() || min_space <= 0.0 {
        return None;
    }
    let dec_pow = (min_space / 5.0).log10().ceil();
    let edge_dec_pow = if edge == 0.0 {
        -99.0
    } else {
        edge.abs().log10()
    };
    if edge_dec_pow - dec_pow > MAX_DEC_POW_SPREAD {
        return None;
    }

    let space = 10f64.powf(dec_pow);
    let f = min_space / space;
    let span: i64 = if f > 2.001 {
        5
    } else if f > 1.001 {
        2
    } else {
        1
    };
    let first = (edge / space).ceil() as i64;
    let pos = span * (first as f64 / span as f64).ceil() as i64;

    Some(GridParams {
        space,
        span,
        pos,
        dec_pow: dec_pow as i32,
    })
}

/// Rastet eine logische Koordinate auf die nächste sichtbare Gitterlinie ein,
/// falls sie auf dem Canvas höchstens `max_distance_px` entfernt ist.
pub fn snap_coordinate(
    value: f64,
    viewport: &Viewport,
    canvas: Point,
    x_axis: bool,
    min_space_px: f64,
    max_distance_px: f64,
) -> f64 {
    let Some(gp) = grid_params(viewport, canvas, x_axis, min_space_px) else {
        return value;
    };
    let grid_space = gp.space * gp.span as f64;
    let grid_pos = (value / grid_space).round() * grid_space;
    let distance_px = (value - grid_pos).abs() * viewport.zoom_factor(x_axis, canvas);
    if distance_px > max_distance_px {
        value
    } else {
        grid_pos
    }
}

/// Rastet einen logischen Punkt achsweise auf das Gitter ein.
pub fn snap_to_grid(
    point: Point,
    viewport: &Viewport,
    canvas: Point,
    min_space_px: Point,
    max_distance_px: f64,
) -> Point {
    Point::new(
        snap_coordinate(point.x, viewport, canvas, true, min_space_px.x, max_distance_px),
        snap_coordinate(point.y, viewport, canvas, false, min_space_px.y, max_distance_px),
    )
}

/// Listet die sichtbaren Gitterlinien einer Achse.
pub fn grid_lines(
    viewport: &Viewport,
    canvas: Point,
    x_axis: bool,
    min_space_px: f64,
) -> Vec<GridLine> {
    let Some(gp) = grid_params(viewport, canvas, x_axis, min_space_px) else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    let mut p = gp.pos;
    while lines.len() < MAX_GRID_LINES {
        let value = p as f64 * gp.space;
        let canvas_pos = if x_axis {
            viewport.logical_to_canvas_x(value, canvas)
        } else {
            viewport.logical_to_canvas_y(value, canvas)
        };
        let outside = if x_axis {
            canvas_pos > canvas.x
        } else {
            canvas_pos < 0.0
        };
        if outside {
            break;
        }

        let kind = if p == 0 {
            GridLineKind::Axis
        } else if p % 10 == 0 {
            GridLineKind::Major
        } else {
            GridLineKind::Minor
        };
        lines.push(GridLine {
            value,
            canvas_pos,
            kind,
            label: format_label(value, gp.dec_pow),
        });
        p += gp.span;
    }
    lines
}

/// Formatiert eine Gitterbeschriftung passend zum Dezimalexponenten.
pub fn format_label(value: f64, dec_pow: i32) -> String {
    let text = if (-6..=7).contains(&dec_pow) {
        let decimals = (-dec_pow).max(0) as usize;
        format!("{:.*}", decimals, value)
    } else {
        format!("{:e}", value)
    };
    if text.len() > 10 {
        format!("{:.5e}", value)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const CANVAS: Point = Point::new(1000.0, 500.0);

    #[test]
    fn test_grid_params_span_refinement() {
        // 10 px pro Einheit → mindestens 6.6 Einheiten → Abstand 10
        let vp = Viewport::new(0.0, 100.0, 0.0, 50.0);
        let gp = grid_params(&vp, CANVAS, true, 66.0).expect("Gitter vorhanden");
        assert_eq!(gp.dec_pow, 1);
        assert_relative_eq!(gp.space, 10.0);
        assert_eq!(gp.span, 1);
        assert_eq!(gp.pos, 0);
    }

    #[test]
    fn test_grid_params_larger_span() {
        // 2 px pro Einheit → mindestens 33 Einheiten → Abstand 10, span 5
        let vp = Viewport::new(15.0, 515.0, 0.0, 250.0);
        let gp = grid_params(&vp, CANVAS, true, 66.0).unwrap();
        assert_eq!(gp.dec_pow, 1);
        assert_eq!(gp.span, 5);
        // erste sichtbare Linie bei 50
        assert_eq!(gp.pos, 5);
    }

    #[test]
    fn test_grid_unstable_far_from_origin() {
        let vp = Viewport::new(1e15, 1e15 + 10.0, 0.0, 10.0);
        assert!(grid_params(&vp, CANVAS, true, 66.0).is_none());
    }

    #[test]
    fn test_snap_within_tolerance() {
        let vp = Viewport::new(0.0, 100.0, 0.0, 50.0);
        // 10 px pro Einheit, Gitterabstand 10
        assert_relative_eq!(snap_coordinate(20.3, &vp, CANVAS, true, 66.0, 5.0), 20.0);
        assert_relative_eq!(snap_coordinate(21.0, &vp, CANVAS, true, 66.0, 5.0), 21.0);
    }

    #[test]
    fn test_grid_lines_cover_canvas() {
        let vp = Viewport::new(0.0, 100.0, 0.0, 50.0);
        let lines = grid_lines(&vp, CANVAS, true, 66.0);
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0].kind, GridLineKind::Axis);
        assert_eq!(lines[10].kind, GridLineKind::Major);
        assert_eq!(lines[3].label, "30");
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label(0.25, -2), "0.25");
        assert_eq!(format_label(40.0, 1), "40");
        assert_eq!(format_label(2e9, 9), "2e9");
    }
}
