//! gyeonyang-engine 성능 벤치마크
//!
//! 실행: cargo bench -p gyeonyang-engine
//!
//! 벤치마크 대상:
//! - filter_by_label: 배치 크기별 레이블 필터링
//! - rank_by_distance: 타겟 수별 거리 정렬

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use gyeonyang_core::models::geometry::Point;
use gyeonyang_core::models::target::RawDetection;
use gyeonyang_engine::selector::{filter_by_label, rank_by_distance};
use std::collections::HashSet;

/// 합성 감지 배치 생성 (레이블 0~9 순환, 좌표는 화면 안에 분산)
fn make_batch(n: usize) -> Vec<RawDetection> {
    (0..n)
        .map(|i| {
            let x = (i * 37 % 1920) as f32;
            let y = (i * 91 % 1080) as f32;
            vec![x, y, 24.0, 48.0, 0.5, (i % 10) as f32]
        })
        .collect()
}

fn allowed() -> HashSet<i64> {
    [2_i64, 3].into_iter().collect()
}

/// 레이블 필터링 벤치마크
fn bench_filter_by_label(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_label");

    let batch_sizes = [10, 100, 1000];

    for batch_size in batch_sizes {
        group.throughput(Throughput::Elements(batch_size as u64));

        let batch = make_batch(batch_size);
        let labels = allowed();

        group.bench_with_input(
            BenchmarkId::new("filter", batch_size),
            &batch_size,
            |b, _| b.iter(|| black_box(filter_by_label(black_box(&batch), &labels))),
        );
    }

    group.finish();
}

/// 거리 정렬 벤치마크
fn bench_rank_by_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_by_distance");

    let reference = Point::new(960.0, 540.0);
    let batch_sizes = [10, 100, 1000];

    for batch_size in batch_sizes {
        group.throughput(Throughput::Elements(batch_size as u64));

        let batch = make_batch(batch_size);
        let all_labels: HashSet<i64> = (0..10_i64).collect();
        let targets = filter_by_label(&batch, &all_labels);

        group.bench_with_input(
            BenchmarkId::new("rank", batch_size),
            &batch_size,
            |b, _| {
                b.iter_with_setup(
                    || targets.clone(),
                    |targets| black_box(rank_by_distance(targets, reference)),
                )
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_filter_by_label, bench_rank_by_distance);
criterion_main!(benches);
