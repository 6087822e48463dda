use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_digitizer::core::SplineInterpolator;
use graph_digitizer::{
    compute_result_graph, to_data, to_pixel, AxisPoint, Calibration, GraphDocument,
    InterpolationMethod, Point, SubCurve,
};
use std::hint::black_box;

/// Leicht gedrehtes Diagramm mit linearer X- und logarithmischer Y-Achse.
fn build_calibration() -> Calibration {
    let theta: f64 = 0.05;
    let origin = Point::new(80.0, 560.0);
    let x_dir = Point::new(theta.cos(), -theta.sin());
    let y_dir = Point::new(-theta.sin(), -theta.cos());
    Calibration {
        origin: Some(origin),
        x_axis_points: (1..=8)
            .map(|i| AxisPoint::new(i as f64 * 10.0, origin + (i as f64 * 80.0) * x_dir))
            .collect(),
        y_axis_points: vec![
            AxisPoint::new(1.0, origin + 100.0 * y_dir),
            AxisPoint::log(10.0, origin + 250.0 * y_dir, 10.0),
            AxisPoint::log(100.0, origin + 400.0 * y_dir, 10.0),
        ],
    }
}

fn build_pixels(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let x = 120.0 + (i % 500) as f64 * 1.1;
            let y = 180.0 + ((i * 7) % 300) as f64 * 0.9;
            Point::new(x, y)
        })
        .collect()
}

fn bench_point_transforms(c: &mut Criterion) {
    let calibration = build_calibration();
    let pixels = build_pixels(1024);

    c.bench_function("to_data_batch_1024", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for p in &pixels {
                if let Ok(data) = to_data(black_box(*p), &calibration) {
                    sum += data.x + data.y;
                }
            }
            black_box(sum)
        })
    });

    let data: Vec<Point> = pixels
        .iter()
        .filter_map(|p| to_data(*p, &calibration).ok())
        .collect();
    c.bench_function("to_pixel_batch_1024", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for d in &data {
                if let Ok(pixel) = to_pixel(black_box(*d), &calibration) {
                    sum += pixel.x + pixel.y;
                }
            }
            black_box(sum)
        })
    });
}

fn bench_result_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("result_graph");

    for &steps in &[500usize, 5_000usize] {
        let mut document = GraphDocument::new("Bench");
        document.calibration = build_calibration();
        let mut curve = SubCurve::new(0, "Kurve 1");
        curve.knots = build_pixels(12);
        curve.interpolation_method = InterpolationMethod::CatmullRom;
        curve.update_coordinates(&SplineInterpolator, steps);
        document.subcurves.push(curve);

        group.bench_with_input(BenchmarkId::new("catmull_rom", steps), &document, |b, doc| {
            b.iter(|| {
                let result = compute_result_graph(black_box(doc));
                black_box(result.map(|r| r.subcurves.len()).unwrap_or(0))
            })
        });
    }

    group.finish();
}

criterion_group!(transform_benches, bench_point_transforms, bench_result_graph);
criterion_main!(transform_benches);
