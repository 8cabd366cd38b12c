//! Benchmarks for maze puzzle generation.
//!
//! This benchmark suite measures complete puzzle-set generation with
//! `MazeGenerator`, covering the corridor path, problem synthesis, and
//! decoy placement for each cell.
//!
//! # Benchmarks
//!
//! - **`generator_small_easy`**: 5×5 grid, grade 1, three-color palette.
//! - **`generator_large_hard`**: 18×18 grid, grade 5, eight-color palette.
//!
//! # Test Data
//!
//! Uses three fixed seeds so each run measures the same puzzles while
//! covering multiple path shapes.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use mathmaze_core::{Grade, Mode};
use mathmaze_generator::{GeneratorConfig, MazeGenerator, MazeSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generator_small_easy(c: &mut Criterion) {
    let config = GeneratorConfig::new(5, Grade::G1, Mode::Easy);
    let generator = MazeGenerator::new(config).unwrap();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = MazeSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator_small_easy", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generator_large_hard(c: &mut Criterion) {
    let config = GeneratorConfig::new(18, Grade::G5, Mode::Hard);
    let generator = MazeGenerator::new(config).unwrap();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = MazeSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator_large_hard", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generator_small_easy,
        bench_generator_large_hard
);
criterion_main!(benches);
