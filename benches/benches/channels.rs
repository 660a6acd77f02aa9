// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use peniko::Color;
use stipple_channels::{
    ChannelBinder, ScalarChannel, ScalarChannelConfig, ScalarRange, project_cluster_colors,
};
use stipple_data::{Cluster, ClusterSet, DatasetId, MemoryDataset, MemoryHost};

fn bench_scalar_binder(c: &mut Criterion) {
    let mut group = c.benchmark_group("channels/scalar");
    let id = DatasetId::new(1);

    for len in [16_384usize, 262_144] {
        let values: Vec<f32> = (0..len).map(|i| (i % 1_000) as f32 - 250.0).collect();
        let mut host = MemoryHost::new();
        host.insert_dataset(MemoryDataset::full(id, 1, values));
        group.throughput(Throughput::Elements(len as u64));

        for channel in [ScalarChannel::Size, ScalarChannel::Opacity] {
            let config = ScalarChannelConfig::dimension(id, 0, ScalarRange::new(0.0, 500.0))
                .with_scale(0.25, 1.0);
            let mut binder = ChannelBinder::new(channel, config);
            group.bench_function(BenchmarkId::new(format!("{channel:?}"), len), |b| {
                b.iter(|| {
                    black_box(binder.bind(&host, len).is_ok());
                });
            });
        }
    }

    group.finish();
}

fn bench_cluster_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("channels/clusters");

    for len in [16_384usize, 262_144] {
        let full = MemoryDataset::full(DatasetId::new(1), 1, vec![0.0; len]);
        let subset = full
            .subset(DatasetId::new(2), (0..len as u32).step_by(3).collect())
            .unwrap();
        let clusters: ClusterSet = (0..16_u32)
            .map(|k| {
                let indices = (k..len as u32).step_by(16).collect();
                Cluster::new(format!("cluster {k}"), Color::from_rgb8(k as u8 * 16, 0, 0), indices)
            })
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::new("full", len), |b| {
            b.iter(|| black_box(project_cluster_colors(&clusters, &full)));
        });
        group.bench_function(BenchmarkId::new("subset", len), |b| {
            b.iter(|| black_box(project_cluster_colors(&clusters, &subset)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scalar_binder, bench_cluster_projection);
criterion_main!(benches);
