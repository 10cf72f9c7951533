// Copyright 2026 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use pinchview_frame::ImageFrame;
use pinchview_gesture::{GestureEngine, Similarity};

/// Finger pairs tracing a slow spiral: every frame translates, scales, and
/// rotates at once, so the solver never hits a trivial branch.
fn spiral_pairs(frames: usize) -> Vec<(Point, Point)> {
    let mut out = Vec::with_capacity(frames);
    let center = Point::new(400.0, 400.0);
    for i in 0..frames {
        let t = i as f64 * 0.02;
        let radius = 80.0 + 20.0 * t;
        let dir = Vec2::from_angle(t);
        let drift = Vec2::new(3.0 * t, -2.0 * t);
        out.push((
            center - dir * radius + drift,
            center + dir * radius + drift,
        ));
    }
    out
}

fn bench_solver(c: &mut Criterion) {
    let pairs = spiral_pairs(1024);
    c.bench_function("similarity_solver_spiral", |b| {
        b.iter(|| {
            let mut acc = 0.0_f64;
            for w in pairs.windows(2) {
                if let Some(sim) = Similarity::from_point_pairs(black_box(w[0]), black_box(w[1])) {
                    acc += sim.scale + sim.rotation_degrees;
                }
            }
            black_box(acc)
        });
    });
}

fn bench_engine_update(c: &mut Criterion) {
    let pairs = spiral_pairs(256);
    c.bench_function("engine_pan_pinch_release", |b| {
        b.iter_batched(
            || GestureEngine::new(ImageFrame::new(800.0, 800.0)),
            |mut engine| {
                // One-finger drag in, two-finger spiral, drop to one, release.
                for i in 0..32 {
                    let d = Vec2::new(i as f64, i as f64 * 0.5);
                    engine.update(&[Point::new(400.0, 400.0) + d], d);
                }
                for (a, bpt) in &pairs {
                    engine.update(&[*a, *bpt], Vec2::ZERO);
                }
                engine.update(&[pairs[pairs.len() - 1].0], Vec2::ZERO);
                engine.update(&[], Vec2::ZERO);
                black_box(engine.transform())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_solver, bench_engine_update);
criterion_main!(benches);
