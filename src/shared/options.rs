//! Zentrale Konfiguration für den Graph-Digitizer.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Auswahl ─────────────────────────────────────────────────────────

/// Fangradius für Knoten und Kommentare bei Maus/Stift (Canvas-Pixel).
pub const PICK_RADIUS_MOUSE_PX: f64 = 15.0;
/// Fangradius für Knoten und Kommentare bei Touch (Canvas-Pixel).
pub const PICK_RADIUS_TOUCH_PX: f64 = 30.0;
/// Maximaler Abstand zweier Taps für einen Doppel-Tap (Millisekunden).
pub const DOUBLE_TAP_INTERVAL_MS: u64 = 300;

// ── Gitter ──────────────────────────────────────────────────────────

/// Mindestabstand senkrechter Gitterlinien (Canvas-Pixel).
pub const GRID_MIN_SPACE_X_PX: f64 = 66.0;
/// Mindestabstand waagerechter Gitterlinien (Canvas-Pixel).
pub const GRID_MIN_SPACE_Y_PX: f64 = 50.0;
/// Maximale Entfernung zum Gitter für Einrasten (Canvas-Pixel).
pub const SNAP_DISTANCE_PX: f64 = 5.0;

// ── Zoom ────────────────────────────────────────────────────────────

/// Zoom-Faktor pro Mausrad-Raste bzw. Tastendruck.
pub const ZOOM_STEP: f64 = std::f64::consts::SQRT_2;
/// Grenzwinkel der Pinch-Richtung zur Achsenwahl (Grad).
pub const PINCH_DIRECTION_CUTOFF_DEG: f64 = 22.5;

// ── Kurven ──────────────────────────────────────────────────────────

/// Abtastschritte der abgeleiteten Kurvenkoordinaten.
pub const CURVE_SAMPLE_STEPS: usize = crate::core::curve::DEFAULT_SAMPLE_STEPS;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `graph_digitizer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Auswahl ─────────────────────────────────────────────────
    /// Fangradius bei Maus/Stift in Canvas-Pixeln
    pub pick_radius_mouse_px: f64,
    /// Fangradius bei Touch in Canvas-Pixeln
    pub pick_radius_touch_px: f64,
    /// Doppel-Tap-Intervall in Millisekunden
    pub double_tap_interval_ms: u64,

    // ── Gitter ──────────────────────────────────────────────────
    /// Mindestabstand senkrechter Gitterlinien
    pub grid_min_space_x_px: f64,
    /// Mindestabstand waagerechter Gitterlinien
    pub grid_min_space_y_px: f64,
    /// Einrast-Toleranz in Canvas-Pixeln
    pub snap_distance_px: f64,

    // ── Zoom ────────────────────────────────────────────────────
    /// Zoom-Faktor pro Raste/Taste
    pub zoom_step: f64,
    /// Grenzwinkel der Pinch-Richtung in Grad
    #[serde(default = "default_pinch_direction_cutoff_deg")]
    pub pinch_direction_cutoff_deg: f64,

    // ── Kurven ──────────────────────────────────────────────────
    /// Abtastschritte der abgeleiteten Koordinaten
    #[serde(default = "default_curve_sample_steps")]
    pub curve_sample_steps: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            pick_radius_mouse_px: PICK_RADIUS_MOUSE_PX,
            pick_radius_touch_px: PICK_RADIUS_TOUCH_PX,
            double_tap_interval_ms: DOUBLE_TAP_INTERVAL_MS,

            grid_min_space_x_px: GRID_MIN_SPACE_X_PX,
            grid_min_space_y_px: GRID_MIN_SPACE_Y_PX,
            snap_distance_px: SNAP_DISTANCE_PX,

            zoom_step: ZOOM_STEP,
            pinch_direction_cutoff_deg: PINCH_DIRECTION_CUTOFF_DEG,

            curve_sample_steps: CURVE_SAMPLE_STEPS,
        }
    }
}

/// Serde-Default für `pinch_direction_cutoff_deg` (Abwärtskompatibilität).
fn default_pinch_direction_cutoff_deg() -> f64 {
    PINCH_DIRECTION_CUTOFF_DEG
}

/// Serde-Default für `curve_sample_steps` (Abwärtskompatibilität).
fn default_curve_sample_steps() -> usize {
    CURVE_SAMPLE_STEPS
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("graph_digitizer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("graph_digitizer.toml")
    }

    /// Fangradius für die Zeigerart.
    pub fn pick_radius(&self, touch: bool) -> f64 {
        if touch {
            self.pick_radius_touch_px
        } else {
            self.pick_radius_mouse_px
        }
    }

    /// Mindestabstände der Gitterlinien (X, Y) als Punkt.
    pub fn grid_min_space(&self) -> crate::core::Point {
        crate::core::Point::new(self.grid_min_space_x_px, self.grid_min_space_y_px)
    }

    /// Tangens des Pinch-Grenzwinkels.
    pub fn pinch_direction_tan(&self) -> f64 {
        self.pinch_direction_cutoff_deg.to_radians().tan()
    }
}
