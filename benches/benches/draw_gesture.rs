// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_canvas_geometry::BoundingLimits;
use understory_draw_gesture::RectangleDrawGesture;

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_draw_gesture");
    let limits = BoundingLimits::new(0.0, 1_000.0, 0.0, 1_000.0);

    // A pointer circling the anchor visits every quadrant.
    for moves in [16_usize, 256] {
        let path: Vec<Point> = (0..moves)
            .map(|i| {
                let t = i as f64 / moves as f64 * core::f64::consts::TAU;
                Point::new(500.0 + 300.0 * t.cos(), 500.0 + 300.0 * t.sin())
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("circle_drag", moves), &path, |b, path| {
            b.iter(|| {
                let mut draw = RectangleDrawGesture::new();
                draw.begin(Point::new(500.0, 500.0));
                let mut hits = 0_usize;
                for &p in path {
                    draw.update(p);
                    hits += usize::from(draw.is_out_of_bounds_left_or_top(&limits));
                }
                black_box(hits);
                black_box(draw.end());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_draw);
criterion_main!(benches);
