//! Benchmarks for the cube state engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use twister::cube::Cube;
use twister::rotation::ROTATIONS;
use twister::shuffle::shuffle;

/// Benchmark one rotation application (select + transform on 27 cubies).
fn bench_apply(c: &mut Criterion) {
    c.bench_function("apply_rotation", |b| {
        let mut cube = Cube::solved();
        b.iter(|| cube.apply(black_box(ROTATIONS[0])))
    });
}

/// Benchmark selecting the 9 cubies of a face.
fn bench_face_selection(c: &mut Criterion) {
    let cube = Cube::solved();
    c.bench_function("face_selection", |b| {
        b.iter(|| black_box(&cube).face(ROTATIONS[8]))
    });
}

/// Benchmark a full 1000-move shuffle with a fixed seed.
fn bench_shuffle_1000(c: &mut Criterion) {
    c.bench_function("shuffle_1000", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(0);
            let mut cube = Cube::solved();
            shuffle(&mut cube, 1000, &mut rng)
        })
    });
}

criterion_group!(benches, bench_apply, bench_face_selection, bench_shuffle_1000);
criterion_main!(benches);
