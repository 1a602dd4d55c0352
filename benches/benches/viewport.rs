// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use understory_canvas_geometry::{Axis, BoundingLimits};
use understory_canvas_viewport::{ItemHost, ScrollHost, ViewportController};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        f64::from((self.0 >> 32) as u32) / f64::from(u32::MAX)
    }
}

/// Item host that recomputes limits from its rects on every query, like a
/// host without a cached bounding box would.
struct Items(Vec<Rect>);

impl ItemHost for Items {
    fn bounding_limits(&self) -> Option<BoundingLimits> {
        BoundingLimits::from_rects(self.0.iter().copied())
    }
}

struct Sink;

impl ScrollHost for Sink {
    fn invalidate_scroll_info(&mut self) {}
}

fn scattered_items(n: usize, seed: u64) -> Vec<Rect> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| {
            let x = rng.next_f64() * 4_000.0 - 2_000.0;
            let y = rng.next_f64() * 4_000.0 - 2_000.0;
            Rect::new(x, y, x + 80.0, y + 60.0)
        })
        .collect()
}

fn viewport(n: usize) -> ViewportController<Items, Sink> {
    let mut vp = ViewportController::new(Items(scattered_items(n, 0xCA7A_0000_0000_0001)));
    vp.attach_scroll_host(Sink);
    vp.on_resize(Size::new(1280.0, 800.0));
    vp
}

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_canvas_viewport");
    group.sample_size(50);

    for n in [16_usize, 256, 4_096] {
        group.bench_function(format!("pan_sweep(n={n})"), |b| {
            b.iter_batched(
                || viewport(n),
                |mut vp| {
                    for _ in 0..64 {
                        vp.pan(Axis::Horizontal, -25.0, false);
                        vp.pan(Axis::Vertical, -25.0, false);
                    }
                    black_box(vp.geometry());
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("zoom_in_out(n={n})"), |b| {
            b.iter_batched(
                || viewport(n),
                |mut vp| {
                    let pivot = Point::new(640.0, 400.0);
                    for _ in 0..16 {
                        vp.zoom(pivot, 120.0);
                    }
                    for _ in 0..16 {
                        vp.zoom(pivot, -120.0);
                    }
                    black_box(vp.transform());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_viewport);
criterion_main!(benches);
