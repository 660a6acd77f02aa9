// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use stipple_bounds::{BoundsConfig, compute_bounds, normalize};
use stipple_data::{DatasetId, IndexMap, MemoryDataset};
use stipple_selection::{Highlights, PixelMask, SelectionModifier, resolve_selection};

/// Points on a jittered grid covering the unit square.
fn scatter(len: usize) -> Vec<Point> {
    let side = (len as f64).sqrt().ceil();
    (0..len)
        .map(|i| {
            let i = i as f64;
            let jitter = (i * 0.618_034).fract() * 0.5 / side;
            Point::new((i % side) / side + jitter, (i / side).floor() / side)
        })
        .collect()
}

fn identity(len: usize) -> IndexMap {
    let ds = MemoryDataset::full(DatasetId::new(1), 1, vec![0.0; len]);
    IndexMap::for_dataset(&ds).unwrap()
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/resolve");
    let mut mask = PixelMask::new(800, 600);
    mask.fill_rect(Rect::new(100.0, 100.0, 500.0, 400.0));

    for len in [1_024usize, 16_384, 262_144] {
        let positions = scatter(len);
        let bounds = normalize(compute_bounds(&positions), BoundsConfig::default());
        let map = identity(len);
        let existing: Vec<u32> = (0..len as u32).step_by(3).collect();
        group.throughput(Throughput::Elements(len as u64));

        for modifier in [SelectionModifier::Replace, SelectionModifier::Add] {
            group.bench_with_input(
                BenchmarkId::new(format!("{modifier:?}"), len),
                &positions,
                |b, positions| {
                    b.iter(|| {
                        black_box(resolve_selection(
                            &mask, positions, bounds, modifier, &existing, &map,
                        ))
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_highlights(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/highlights");

    for len in [16_384usize, 262_144] {
        let full = MemoryDataset::full(DatasetId::new(1), 1, vec![0.0; len]);
        // Every other point, reversed, so the lookup map is not the identity.
        let subset = full
            .subset(DatasetId::new(2), (0..len as u32).rev().step_by(2).collect())
            .unwrap();
        let map = IndexMap::for_dataset(&subset).unwrap();
        let selection: Vec<u32> = (0..len as u32).step_by(5).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("subset", len), &selection, |b, selection| {
            b.iter(|| black_box(Highlights::from_selection(selection.iter().copied(), &map)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_highlights);
criterion_main!(benches);
