use super::*;
use crate::core::calibration::AxisPoint;
use approx::assert_relative_eq;

fn x_only(points: Vec<AxisPoint>) -> Calibration {
    Calibration {
        origin: None,
        x_axis_points: points,
        y_axis_points: Vec::new(),
    }
}

/// Typisches Diagramm: Bild-Y zeigt nach unten, Y-Achse nach oben.
fn screen_chart() -> Calibration {
    Calibration {
        origin: Some(Point::new(50.0, 400.0)),
        x_axis_points: vec![
            AxisPoint::new(10.0, Point::new(150.0, 400.0)),
            AxisPoint::new(20.0, Point::new(250.0, 400.0)),
            AxisPoint::new(50.0, Point::new(400.0, 400.0)),
        ],
        y_axis_points: vec![
            AxisPoint::new(1.0, Point::new(50.0, 300.0)),
            AxisPoint::new(2.0, Point::new(50.0, 200.0)),
        ],
    }
}

/// Um `theta` gedrehtes, orthogonales Achsenkreuz (10 px pro Einheit).
fn skewed_chart(theta: f64) -> Calibration {
    let origin = Point::new(100.0, 500.0);
    let x_dir = Point::new(theta.cos(), -theta.sin());
    let y_dir = Point::new(-theta.sin(), -theta.cos());
    Calibration {
        origin: Some(origin),
        x_axis_points: vec![
            AxisPoint::new(20.0, origin + 200.0 * x_dir),
            AxisPoint::new(40.0, origin + 400.0 * x_dir),
        ],
        y_axis_points: vec![AxisPoint::new(30.0, origin + 300.0 * y_dir)],
    }
}

#[test]
fn test_monotonic_segment_selection() {
    let cal = x_only(vec![
        AxisPoint::new(1.0, Point::new(0.0, 0.0)),
        AxisPoint::new(10.0, Point::new(50.0, 0.0)),
        AxisPoint::new(100.0, Point::new(100.0, 0.0)),
    ]);

    let data = to_data(Point::new(75.0, 3.0), &cal).expect("Umrechnung möglich");

    assert_eq!(data.x, 55.0);
    // Y ohne Anker wird durchgereicht
    assert_eq!(data.y, 3.0);
}

#[test]
fn test_log_scale_segment() {
    let cal = x_only(vec![
        AxisPoint::new(1.0, Point::new(0.0, 0.0)),
        AxisPoint::log(100.0, Point::new(100.0, 0.0), 10.0),
    ]);

    let data = to_data(Point::new(50.0, 0.0), &cal).unwrap();
    assert_relative_eq!(data.x, 10.0, epsilon = 1e-6);

    let pixel = to_pixel(Point::new(10.0, 0.0), &cal).unwrap();
    assert_relative_eq!(pixel.x, 50.0, epsilon = 1e-6);
}

#[test]
fn test_orthogonal_axis_aligned_calibration_is_not_rotated() {
    let cal = Calibration {
        origin: Some(Point::ZERO),
        x_axis_points: vec![AxisPoint::new(10.0, Point::new(100.0, 0.0))],
        y_axis_points: vec![AxisPoint::new(5.0, Point::new(0.0, 100.0))],
    };

    let frame = RotationFrame::detect(
        Point::ZERO,
        Some(Point::new(100.0, 0.0)),
        Some(Point::new(0.0, 100.0)),
    );
    assert!(frame.is_identity());

    let data = to_data(Point::new(50.0, 20.0), &cal).unwrap();
    assert_relative_eq!(data.x, 5.0);
    assert_relative_eq!(data.y, 1.0);
}

#[test]
fn test_non_orthogonal_axes_are_not_rotated() {
    let frame = RotationFrame::detect(
        Point::ZERO,
        Some(Point::new(100.0, -5.0)),
        Some(Point::new(30.0, -100.0)),
    );
    assert!(frame.is_identity());
}

#[test]
fn test_anchor_fidelity_on_screen_chart() {
    let cal = screen_chart();

    for anchor in &cal.x_axis_points {
        let data = to_data(anchor.position, &cal).unwrap();
        assert_eq!(data.x, anchor.value);
    }
    for anchor in &cal.y_axis_points {
        let data = to_data(anchor.position, &cal).unwrap();
        assert_eq!(data.y, anchor.value);
    }
}

#[test]
fn test_anchor_fidelity_on_skewed_chart() {
    let cal = skewed_chart(0.2);

    for anchor in &cal.x_axis_points {
        assert_eq!(to_data(anchor.position, &cal).unwrap().x, anchor.value);
    }
    for anchor in &cal.y_axis_points {
        assert_eq!(to_data(anchor.position, &cal).unwrap().y, anchor.value);
    }
}

#[test]
fn test_skewed_axes_are_compensated() {
    let theta: f64 = 0.2;
    let cal = skewed_chart(theta);
    let origin = cal.origin_or_zero();
    let x_dir = Point::new(theta.cos(), -theta.sin());
    let y_dir = Point::new(-theta.sin(), -theta.cos());

    let pixel = origin + 150.0 * x_dir + 120.0 * y_dir;
    let data = to_data(pixel, &cal).unwrap();

    assert_relative_eq!(data.x, 15.0, epsilon = 1e-9);
    assert_relative_eq!(data.y, 12.0, epsilon = 1e-9);

    let back = to_pixel(data, &cal).unwrap();
    assert_relative_eq!(back.x, pixel.x, epsilon = 1e-9);
    assert_relative_eq!(back.y, pixel.y, epsilon = 1e-9);
}

#[test]
fn test_round_trip_inside_calibrated_range() {
    for cal in [screen_chart(), skewed_chart(0.2), skewed_chart(-0.35)] {
        for i in 0..20 {
            for j in 0..20 {
                let p = Point::new(60.0 + i as f64 * 17.0, 180.0 + j as f64 * 11.0);
                let data = to_data(p, &cal).unwrap();
                let back = to_pixel(data, &cal).unwrap();
                assert_relative_eq!(back.x, p.x, epsilon = 1e-6);
                assert_relative_eq!(back.y, p.y, epsilon = 1e-6);
            }
        }
    }
}

#[test]
fn test_round_trip_mixed_log_and_linear() {
    let cal = Calibration {
        origin: Some(Point::new(0.0, 0.0)),
        x_axis_points: vec![
            AxisPoint::new(1.0, Point::new(10.0, 0.0)),
            AxisPoint::log(1000.0, Point::new(310.0, 0.0), 10.0),
        ],
        y_axis_points: vec![AxisPoint::new(100.0, Point::new(0.0, 200.0))],
    };

    for i in 0..30 {
        let p = Point::new(10.0 + i as f64 * 10.0, i as f64 * 6.5);
        let back = to_pixel(to_data(p, &cal).unwrap(), &cal).unwrap();
        assert_relative_eq!(back.x, p.x, epsilon = 1e-6);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-6);
    }
}

#[test]
fn test_query_on_anchor_uses_trailing_segment_in_both_directions() {
    let cal = x_only(vec![
        AxisPoint::new(10.0, Point::new(50.0, 0.0)),
        AxisPoint::log(1000.0, Point::new(150.0, 0.0), 10.0),
    ]);

    assert_eq!(to_data(Point::new(50.0, 0.0), &cal).unwrap().x, 10.0);
    assert_eq!(to_pixel(Point::new(10.0, 0.0), &cal).unwrap().x, 50.0);
    assert_eq!(to_pixel(Point::new(1000.0, 0.0), &cal).unwrap().x, 150.0);
}

#[test]
fn test_descending_values_select_segment_by_value_direction() {
    let cal = x_only(vec![
        AxisPoint::new(10.0, Point::new(100.0, 0.0)),
        AxisPoint::new(5.0, Point::new(200.0, 0.0)),
    ]);

    assert_relative_eq!(to_data(Point::new(150.0, 0.0), &cal).unwrap().x, 7.5);
    assert_relative_eq!(to_pixel(Point::new(7.5, 0.0), &cal).unwrap().x, 150.0);
}

#[test]
fn test_extrapolates_last_segment_beyond_anchors() {
    let cal = x_only(vec![
        AxisPoint::new(10.0, Point::new(100.0, 0.0)),
        AxisPoint::new(30.0, Point::new(200.0, 0.0)),
    ]);

    assert_relative_eq!(to_data(Point::new(300.0, 0.0), &cal).unwrap().x, 50.0);
    assert_relative_eq!(to_pixel(Point::new(50.0, 0.0), &cal).unwrap().x, 300.0);
}

#[test]
fn test_degenerate_segment_is_reported() {
    let cal = x_only(vec![
        AxisPoint::new(10.0, Point::new(50.0, 0.0)),
        AxisPoint::new(20.0, Point::new(50.0, 10.0)),
    ]);

    let err = to_data(Point::new(80.0, 0.0), &cal).unwrap_err();
    assert!(matches!(
        err,
        CalibrationError::DegenerateSegment {
            axis: AxisKind::X,
            ..
        }
    ));
}

#[test]
fn test_log_segment_from_origin_has_invalid_ratio() {
    let cal = x_only(vec![AxisPoint::log(100.0, Point::new(100.0, 0.0), 10.0)]);

    let err = to_data(Point::new(50.0, 0.0), &cal).unwrap_err();
    assert!(matches!(err, CalibrationError::InvalidRatio { .. }));
}

#[test]
fn test_negative_log_ratio_is_rejected() {
    let cal = x_only(vec![
        AxisPoint::new(-1.0, Point::new(10.0, 0.0)),
        AxisPoint::log(100.0, Point::new(100.0, 0.0), 10.0),
    ]);

    let err = to_data(Point::new(50.0, 0.0), &cal).unwrap_err();
    assert!(matches!(
        err,
        CalibrationError::InvalidRatio { ratio, .. } if ratio < 0.0
    ));
}

#[test]
fn test_log_inverse_rejects_value_outside_domain() {
    let cal = x_only(vec![
        AxisPoint::new(100.0, Point::new(10.0, 0.0)),
        AxisPoint::log(1.0, Point::new(100.0, 0.0), 10.0),
    ]);

    let err = to_pixel(Point::new(-5.0, 0.0), &cal).unwrap_err();
    assert!(matches!(err, CalibrationError::ValueOutsideLogDomain { .. }));
}

#[test]
fn test_empty_calibration_passes_through() {
    let cal = Calibration::new();
    let p = Point::new(12.5, -3.0);
    assert_eq!(to_data(p, &cal).unwrap(), p);
    assert_eq!(to_pixel(p, &cal).unwrap(), p);
}

/// Gedrehtes Diagramm, dessen X-Anker quer zur Achse um `noise` verrutscht sind.
fn noisy_chart(theta: f64, noise: (f64, f64)) -> Calibration {
    let origin = Point::new(100.0, 500.0);
    let x_dir = Point::new(theta.cos(), -theta.sin());
    let y_dir = Point::new(-theta.sin(), -theta.cos());
    Calibration {
        origin: Some(origin),
        x_axis_points: vec![
            AxisPoint::new(10.0, origin + 100.0 * x_dir + noise.0 * y_dir),
            AxisPoint::new(20.0, origin + 200.0 * x_dir + noise.1 * y_dir),
        ],
        y_axis_points: vec![AxisPoint::new(10.0, origin + 100.0 * y_dir)],
    }
}

#[test]
fn test_frame_does_not_depend_on_query_point() {
    let cal = noisy_chart(0.3, (0.3, 3.0));
    let frame = frame_of(&cal);

    // Referenz ist der entferntere X-Anker; dessen Versatz ist zu groß für orthogonal
    assert!(frame.is_identity());

    let cal = noisy_chart(0.3, (3.0, 0.3));
    assert!(!frame_of(&cal).is_identity());
}

#[test]
fn test_round_trip_with_perpendicular_anchor_noise() {
    let theta: f64 = 0.3;
    let x_dir = Point::new(theta.cos(), -theta.sin());
    let y_dir = Point::new(-theta.sin(), -theta.cos());

    for noise in [(0.0, 0.0), (0.3, -0.3), (0.3, 3.0), (3.0, 0.3), (-1.5, 0.8)] {
        let cal = noisy_chart(theta, noise);
        let origin = cal.origin_or_zero();

        for along in [20.0, 95.0, 110.0, 150.0, 199.0, 260.0] {
            for up in [-20.0, 10.0, 50.0, 140.0] {
                let p = origin + along * x_dir + up * y_dir;
                let data = to_data(p, &cal).unwrap();
                let back = to_pixel(data, &cal).unwrap();
                assert_relative_eq!(back.x, p.x, epsilon = 1e-6);
                assert_relative_eq!(back.y, p.y, epsilon = 1e-6);
            }
        }
    }
}
