//! Benchmarks for the MANUS classification hot path

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use manus_core::Symbol;
use manus_gesture::{classify_pose, extract_features, GestureStabilizer};
use manus_test::simulator;

fn bench_extract_features(c: &mut Criterion) {
    let frame = simulator::pose(Symbol::A).unwrap();

    c.bench_function("extract_features", |b| {
        b.iter(|| black_box(extract_features(black_box(&frame))))
    });
}

fn bench_classify_pose(c: &mut Criterion) {
    let features = extract_features(&simulator::pose(Symbol::V).unwrap());

    c.bench_function("classify_pose", |b| {
        b.iter(|| black_box(classify_pose(black_box(&features))))
    });
}

fn bench_classify_worst_case(c: &mut Criterion) {
    // A pose that falls through the entire rule chain
    let features = extract_features(&simulator::unknown_pose());

    c.bench_function("classify_pose_unknown", |b| {
        b.iter(|| black_box(classify_pose(black_box(&features))))
    });
}

fn bench_stabilizer_frame(c: &mut Criterion) {
    let frame = simulator::pose(Symbol::W).unwrap();
    let mut stabilizer = GestureStabilizer::default();

    c.bench_function("stabilizer_advance", |b| {
        b.iter(|| black_box(stabilizer.advance(black_box(Some(&frame)))))
    });
}

criterion_group!(
    benches,
    bench_extract_features,
    bench_classify_pose,
    bench_classify_worst_case,
    bench_stabilizer_frame
);
criterion_main!(benches);
