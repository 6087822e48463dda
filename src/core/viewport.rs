//! Sichtbarer Ausschnitt der Bildebene: Abbildung logisch ↔ Canvas, Pan und Zoom.
//!
//! Logische Koordinaten sind die Pixelkoordinaten des Diagrammbilds (dort
//! liegen Knoten und Achsanker). Canvas-Koordinaten sind die Pixel der
//! Zeichenfläche mit Y nach unten.

use super::geometry::Point;
use serde::{Deserialize, Serialize};

/// Zoom-Achsen einer Zoom-Operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoomAxes {
    /// Beide Achsen gleichmäßig
    Both,
    /// Nur horizontal
    X,
    /// Nur vertikal
    Y,
}

impl ZoomAxes {
    /// Zerlegt einen Faktor in (fx, fy) für diese Achsenwahl.
    pub fn factors(self, factor: f64) -> (f64, f64) {
        match self {
            ZoomAxes::Both => (factor, factor),
            ZoomAxes::X => (factor, 1.0),
            ZoomAxes::Y => (1.0, factor),
        }
    }
}

/// Logische Grenzen des sichtbaren Bereichs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Linker Rand
    pub x_min: f64,
    /// Rechter Rand
    pub x_max: f64,
    /// Unterer Rand
    pub y_min: f64,
    /// Oberer Rand
    pub y_max: f64,
}

impl Viewport {
    /// Erstellt einen Ausschnitt mit den angegebenen Grenzen.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Logische Breite
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Logische Höhe
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Logische X-Koordinate → Canvas-X.
    pub fn logical_to_canvas_x(&self, lx: f64, canvas: Point) -> f64 {
        (lx - self.x_min) * canvas.x / self.width()
    }

    /// Logische Y-Koordinate → Canvas-Y (gespiegelt).
    pub fn logical_to_canvas_y(&self, ly: f64, canvas: Point) -> f64 {
        canvas.y - (ly - self.y_min) * canvas.y / self.height()
    }

    /// Logischer Punkt → Canvas-Punkt.
    pub fn logical_to_canvas(&self, logical: Point, canvas: Point) -> Point {
        Point::new(
            self.logical_to_canvas_x(logical.x, canvas),
            self.logical_to_canvas_y(logical.y, canvas),
        )
    }

    /// Canvas-Punkt → logischer Punkt.
    pub fn canvas_to_logical(&self, c: Point, canvas: Point) -> Point {
        Point::new(
            self.x_min + c.x * self.width() / canvas.x,
            self.y_min + (canvas.y - c.y) * self.height() / canvas.y,
        )
    }

    /// Verschiebt die Ebene so, dass `canvas_point` auf `logical_point` zeigt.
    ///
    /// Die Zoomfaktoren bleiben unverändert.
    pub fn move_plane(&mut self, canvas_point: Point, logical_point: Point, canvas: Point) {
        let (w, h) = (self.width(), self.height());
        self.x_min = logical_point.x - canvas_point.x * w / canvas.x;
        self.x_max = self.x_min + w;
        self.y_min = logical_point.y - (canvas.y - canvas_point.y) * h / canvas.y;
        self.y_max = self.y_min + h;
    }

    /// Canvas-Pixel pro logischer Einheit (X bzw. Y).
    pub fn zoom_factor(&self, x_axis: bool, canvas: Point) -> f64 {
        if x_axis {
            canvas.x / self.width()
        } else {
            canvas.y / self.height()
        }
    }

    /// Zoomt um `fx`/`fy`; der Canvas-Punkt `center` (Standard: Mitte) bleibt fest.
    pub fn zoom(&mut self, fx: f64, fy: f64, center: Option<Point>, canvas: Point) {
        let center = center.unwrap_or(canvas * 0.5);
        let logical_center = self.canvas_to_logical(center, canvas);
        self.x_max = self.x_min + self.width() / fx;
        self.y_max = self.y_min + self.height() / fy;
        self.move_plane(center, logical_center, canvas);
    }

    /// Setzt absolute Zoomfaktoren relativ zu einem Start-Ausschnitt.
    ///
    /// Für Pinch-Gesten: `start` ist der Ausschnitt bei Gestenbeginn, `fx`/`fy`
    /// das Verhältnis aktueller zu anfänglicher Fingerdistanz. `logical_center`
    /// ist der zu Gestenbeginn unter dem Mittelpunkt liegende logische Punkt,
    /// `center` der aktuelle Canvas-Mittelpunkt.
    pub fn zoom_from(
        &mut self,
        start: &Viewport,
        fx: f64,
        fy: f64,
        center: Point,
        logical_center: Point,
        canvas: Point,
    ) {
        self.x_max = self.x_min + start.width() / fx;
        self.y_max = self.y_min + start.height() / fy;
        self.move_plane(center, logical_center, canvas);
    }

    /// Passt den Ausschnitt so an, dass das ganze Bild bei einheitlichem
    /// Maßstab sichtbar und zentriert ist.
    pub fn fit_image(image: Point, canvas: Point) -> Self {
        let scale = (canvas.x / image.x).min(canvas.y / image.y);
        let (w, h) = (canvas.x / scale, canvas.y / scale);
        let x_min = (image.x - w) * 0.5;
        let y_min = (image.y - h) * 0.5;
        Self::new(x_min, x_min + w, y_min, y_min + h)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }
}
