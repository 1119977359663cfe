use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexgrid::{CameraSnapshot, Hex, HexGrid, HexOrientation, Vector2D};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("hexgrid");

    let grid = HexGrid::new(&HexOrientation::POINTY, Vector2D::new(16.0, 16.0));
    let camera = CameraSnapshot::new(
        Vector2D::new(0.0, 0.0),
        1.0,
        Vector2D::new(1920.0, 1080.0),
    );
    group.bench_function("visible hexes 1080p", |b| {
        b.iter(|| grid.visible_hexes(black_box(&camera)))
    });

    group.bench_function("spiral 100", |b| {
        b.iter(|| Hex::new(0i64, 0).spiral(black_box(100)))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
