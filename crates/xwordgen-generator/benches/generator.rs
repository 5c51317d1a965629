//! Benchmarks for crossword construction.
//!
//! # Benchmarks
//!
//! - **`construct_strict`**: Runs a fixed number of restart cycles on a 15×15
//!   grid under the strict adjacency rule.
//! - **`construct_loose`**: Same workload under the loose adjacency rule,
//!   which admits more slots per word.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple cases:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! The search is capped by cycle count rather than time, so every iteration
//! does the same amount of work.
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
use xwordgen_generator::{AdjacencyRule, Crossword, CrosswordConfig, CrosswordSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

const WORDS: [(&str, &str); 24] = [
    ("ALGORITHM", "step-by-step procedure"),
    ("COMPILER", "source translator"),
    ("REGISTER", "fastest storage"),
    ("POINTER", "address holder"),
    ("MUTEX", "lock"),
    ("THREAD", "unit of execution"),
    ("STACK", "LIFO structure"),
    ("QUEUE", "FIFO structure"),
    ("HASH", "digest"),
    ("TREE", "acyclic graph"),
    ("GRAPH", "nodes and edges"),
    ("CACHE", "fast copy"),
    ("PARSER", "grammar reader"),
    ("LEXER", "tokenizer"),
    ("TOKEN", "lexical unit"),
    ("BINARY", "base two"),
    ("KERNEL", "core of an OS"),
    ("SOCKET", "network endpoint"),
    ("PACKET", "network datagram"),
    ("ROUTER", "packet forwarder"),
    ("ARRAY", "contiguous sequence"),
    ("VECTOR", "growable array"),
    ("STRING", "text value"),
    ("INTEGER", "whole number"),
];

const CYCLES: u64 = 20;

fn bench_construct(c: &mut Criterion, name: &str, adjacency: AdjacencyRule) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = CrosswordSeed::from_str(seed).unwrap();
        let config = CrosswordConfig::new(15, 15)
            .with_seed(seed)
            .with_adjacency(adjacency)
            .with_max_cycles(Some(CYCLES));
        c.bench_with_input(
            BenchmarkId::new(name, format!("seed_{i}")),
            &config,
            |b, config| {
                b.iter_batched(
                    || Crossword::new(hint::black_box(config.clone()), WORDS).unwrap(),
                    |mut crossword| {
                        crossword.compute_crossword(Duration::from_secs(60), 2);
                        crossword
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_construct_strict(c: &mut Criterion) {
    bench_construct(c, "construct_strict", AdjacencyRule::Strict);
}

fn bench_construct_loose(c: &mut Criterion) {
    bench_construct(c, "construct_loose", AdjacencyRule::Loose);
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_construct_strict,
        bench_construct_loose
);
criterion_main!(benches);
