// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for container operations over large toast maps.
//!
//! Measures the performance of:
//! - Admission (show through the event channel)
//! - Per-position ordering and capacity layout
//! - Timer ticks across every displayed toast

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_toast::container::options::{ContainerOptions, ToastOptions};
use iced_toast::domain::toast::Position;
use iced_toast::environment::Environment;
use iced_toast::interface::{create_instance_in, LocalIds, ToastInterface};
use std::hint::black_box;
use std::rc::Rc;
use std::time::Instant;

const SIZES: [usize; 3] = [100, 1_000, 5_000];

/// Interface with `count` persistent toasts spread over every position.
fn populated(count: usize) -> ToastInterface {
    let toasts = create_instance_in(
        Environment::Windowed,
        ContainerOptions::new().max_toasts(count),
    )
    .with_ids(Rc::new(LocalIds::new()));
    for i in 0..count {
        let position = Position::ALL[i % Position::ALL.len()];
        toasts.show(
            format!("toast {i}"),
            ToastOptions::new().position(position).timeout(false),
        );
    }
    toasts
}

/// Benchmark admission of toasts into an empty container.
fn bench_admission(c: &mut Criterion) {
    let mut group = c.benchmark_group("container_admission");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(populated(size)));
        });
    }

    group.finish();
}

/// Benchmark ordering queries on populated containers.
fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("container_layout");

    for size in SIZES {
        let toasts = populated(size);
        let Some(container) = toasts.container().cloned() else {
            continue;
        };

        group.bench_with_input(BenchmarkId::new("position_toasts", size), &size, |b, _| {
            b.iter(|| black_box(container.position_toasts(Position::TopRight)));
        });
        group.bench_with_input(BenchmarkId::new("layout", size), &size, |b, _| {
            b.iter(|| black_box(container.layout()));
        });
    }

    group.finish();
}

/// Benchmark timer ticks once every toast is displayed.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("container_tick");

    for size in SIZES {
        let toasts = populated(size);
        let Some(container) = toasts.container().cloned() else {
            continue;
        };
        container.tick(Instant::now());

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| container.tick(black_box(Instant::now())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_admission, bench_layout, bench_tick);
criterion_main!(benches);
