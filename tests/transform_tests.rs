use approx::assert_relative_eq;
use graph_digitizer::{
    compute_result_graph, parse_comments, parse_graph_document, to_data, to_pixel,
    write_graph_document, AxisPoint, Calibration, Point,
};

const LOG_CHART: &str = r#"{
    "graphName": "Frequenzgang",
    "xAxisName": "f [Hz]",
    "yAxisName": "A [dB]",
    "originPoint": { "xCoordinate": 80.0, "yCoordinate": 520.0 },
    "xAxisPoints": [
        { "xValue": 10.0, "xCoordinate": 80.0, "yCoordinate": 520.0 },
        { "xValue": 1000.0, "xCoordinate": 680.0, "yCoordinate": 520.0, "isLogScale": true, "logBase": 10.0 }
    ],
    "yAxisPoints": [
        { "yValue": 40.0, "xCoordinate": 80.0, "yCoordinate": 120.0 }
    ],
    "subgraphs": [
        {
            "id": 0,
            "name": "Tiefpass",
            "interpolationType": "none",
            "knots": [ { "x": 80.0, "y": 520.0 }, { "x": 380.0, "y": 320.0 }, { "x": 680.0, "y": 120.0 } ],
            "coordinates": [ { "x": 80.0, "y": 520.0 }, { "x": 380.0, "y": 320.0 }, { "x": 680.0, "y": 120.0 } ]
        }
    ]
}"#;

fn axis_aligned(x_points: Vec<AxisPoint>, y_points: Vec<AxisPoint>) -> Calibration {
    Calibration {
        origin: Some(Point::ZERO),
        x_axis_points: x_points,
        y_axis_points: y_points,
    }
}

#[test]
fn test_three_anchor_axis_selects_middle_to_upper_segment() {
    let cal = axis_aligned(
        vec![
            AxisPoint::new(1.0, Point::new(0.0, 0.0)),
            AxisPoint::new(10.0, Point::new(50.0, 0.0)),
            AxisPoint::new(100.0, Point::new(100.0, 0.0)),
        ],
        vec![AxisPoint::new(1.0, Point::new(0.0, 1.0))],
    );

    let data = to_data(Point::new(75.0, 0.0), &cal).expect("Umrechnung sollte gelingen");
    assert_relative_eq!(data.x, 55.0, epsilon = 1e-12);
}

#[test]
fn test_log_segment_midpoint_is_geometric_mean() {
    let cal = axis_aligned(
        vec![
            AxisPoint::new(1.0, Point::new(0.0, 0.0)),
            AxisPoint::log(100.0, Point::new(100.0, 0.0), 10.0),
        ],
        vec![AxisPoint::new(1.0, Point::new(0.0, 1.0))],
    );

    let data = to_data(Point::new(50.0, 0.0), &cal).expect("Umrechnung sollte gelingen");
    assert_relative_eq!(data.x, 10.0, epsilon = 1e-6);
}

#[test]
fn test_orthogonal_calibration_is_plain_linear_scaling() {
    let cal = axis_aligned(
        vec![AxisPoint::new(10.0, Point::new(100.0, 0.0))],
        vec![AxisPoint::new(20.0, Point::new(0.0, 100.0))],
    );

    for (px, py) in [(0.0, 0.0), (25.0, 75.0), (100.0, 100.0), (130.0, -40.0)] {
        let data = to_data(Point::new(px, py), &cal).expect("Umrechnung sollte gelingen");
        assert_relative_eq!(data.x, px / 10.0, epsilon = 1e-12);
        assert_relative_eq!(data.y, py / 5.0, epsilon = 1e-12);
    }
}

#[test]
fn test_parsed_log_chart_round_trips_and_hits_anchors() {
    let document = parse_graph_document(LOG_CHART).expect("Dokument sollte lesbar sein");
    let cal = &document.calibration;

    for anchor in &cal.x_axis_points {
        let data = to_data(anchor.position, cal).expect("Umrechnung sollte gelingen");
        assert_eq!(data.x, anchor.value);
    }
    for anchor in &cal.y_axis_points {
        let data = to_data(anchor.position, cal).expect("Umrechnung sollte gelingen");
        assert_eq!(data.y, anchor.value);
    }

    for i in 0..=12 {
        for j in 0..=8 {
            let p = Point::new(80.0 + i as f64 * 50.0, 120.0 + j as f64 * 50.0);
            let data = to_data(p, cal).expect("Umrechnung sollte gelingen");
            let back = to_pixel(data, cal).expect("Rückrechnung sollte gelingen");
            assert_relative_eq!(back.x, p.x, epsilon = 1e-6);
            assert_relative_eq!(back.y, p.y, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_result_graph_converts_coordinates_and_survives_writing() {
    let document = parse_graph_document(LOG_CHART).expect("Dokument sollte lesbar sein");

    let result = compute_result_graph(&document).expect("Ergebnis sollte berechenbar sein");
    let coordinates = &result.subcurves[0].coordinates;
    assert_eq!(coordinates.len(), 3);
    assert_relative_eq!(coordinates[0].x, 10.0, epsilon = 1e-8);
    assert_relative_eq!(coordinates[1].x, 100.0, epsilon = 1e-8);
    assert_relative_eq!(coordinates[1].y, 20.0, epsilon = 1e-8);
    assert_relative_eq!(coordinates[2].x, 1000.0, epsilon = 1e-8);
    assert_relative_eq!(coordinates[2].y, 40.0, epsilon = 1e-8);
    assert_eq!(result.subcurves[0].knots, document.subcurves[0].knots);

    let json = write_graph_document(&result).expect("Ergebnis sollte schreibbar sein");
    let reread = parse_graph_document(&json).expect("Geschriebenes Ergebnis sollte lesbar sein");
    assert_eq!(reread, result);
}

#[test]
fn test_comment_coordinates_map_back_onto_the_curve() {
    let document = parse_graph_document(LOG_CHART).expect("Dokument sollte lesbar sein");
    let comments = parse_comments(
        r#"[{ "subplot": 1, "coordinate": { "x": 100.0, "y": 20.0 }, "text": "Eckfrequenz" }]"#,
    )
    .expect("Kommentare sollten lesbar sein");

    let pixel =
        to_pixel(comments[0].coordinate, &document.calibration).expect("Umrechnung sollte gelingen");
    assert_relative_eq!(pixel.x, 380.0, epsilon = 1e-6);
    assert_relative_eq!(pixel.y, 320.0, epsilon = 1e-6);
}
