//! Noisy XOR experiment: repeated independent trials run in parallel.
//!
//! Twelve binary inputs, two of which are XORed to form the label. Training
//! labels are flipped with probability 0.4, test labels are clean.

use rand::Rng;
use signed_tsetlin::{Config, MultiClass, parallel::run_trials, utils::FastRng};

const DIM: usize = 12;
const CLAUSES: usize = 20;
const STATES: i16 = 200;
const S: f32 = 3.9;
const T: i32 = 15;
const EPOCHS: usize = 200;
const SAMPLES: usize = 10_000;
const FLIP: f32 = 0.4;
const TRIALS: usize = 100;

type Dataset = (Vec<Vec<u8>>, Vec<usize>);

fn generate(n: usize, a: usize, b: usize, rng: &mut FastRng) -> Dataset {
    let x: Vec<Vec<u8>> = (0..n)
        .map(|_| (0..DIM).map(|_| rng.random_range(0..=1u8)).collect())
        .collect();
    let y = x.iter().map(|xi| (xi[a] ^ xi[b]) as usize).collect();
    (x, y)
}

fn trial(rng: &mut FastRng) -> f32 {
    let a = rng.random_range(0..DIM);
    let b = (a + rng.random_range(1..DIM)) % DIM;

    let (train_x, mut train_y) = generate(SAMPLES / 2, a, b, rng);
    let (test_x, test_y) = generate(SAMPLES / 2, a, b, rng);
    for label in &mut train_y {
        if rng.random::<f32>() < FLIP {
            *label ^= 1;
        }
    }

    let config = Config::builder()
        .clauses(CLAUSES)
        .features(DIM)
        .states(STATES)
        .specificity(S)
        .threshold(T)
        .epochs(EPOCHS)
        .build()
        .expect("valid config");

    let mut tm = MultiClass::new(config, 2, rng).expect("valid machine");
    tm.fit(&train_x, &train_y, rng).expect("valid dataset");
    tm.evaluate(&test_x, &test_y).expect("valid dataset")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        )
        .init();

    let summary = run_trials(TRIALS, 0, |_, rng| trial(rng));

    for (i, acc) in summary.accuracies.iter().enumerate() {
        println!("trial {i:3}: {acc:.4}");
    }
    println!(
        "\naverage accuracy: {:.4} (min {:.4}, max {:.4})",
        summary.mean, summary.min, summary.max
    );
}
