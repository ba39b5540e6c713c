//! Integration tests for Tsetlin Machine.

use rand::Rng;
use signed_tsetlin::{
    Config, Error, FitOptions, MultiClass, TsetlinMachine, trial::run_trials, utils::FastRng,
    utils::rng_from_seed
};

fn xor_data() -> (Vec<Vec<u8>>, Vec<usize>) {
    let x = vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]];
    let y = vec![0, 1, 1, 0];
    (x, y)
}

struct NoisyXor {
    train_x: Vec<Vec<u8>>,
    train_y: Vec<usize>,
    test_x:  Vec<Vec<u8>>,
    test_y:  Vec<usize>
}

/// Two distinct input bits XORed, the rest irrelevant. Training labels are
/// flipped with probability `flip`; test labels are clean.
fn noisy_xor(dim: usize, n_train: usize, n_test: usize, flip: f32, rng: &mut FastRng) -> NoisyXor {
    let a = rng.random_range(0..dim);
    let b = (a + rng.random_range(1..dim)) % dim;

    let sample = |n: usize, rng: &mut FastRng| -> (Vec<Vec<u8>>, Vec<usize>) {
        let x: Vec<Vec<u8>> = (0..n)
            .map(|_| (0..dim).map(|_| rng.random_range(0..=1u8)).collect())
            .collect();
        let y = x.iter().map(|xi| (xi[a] ^ xi[b]) as usize).collect();
        (x, y)
    };

    let (train_x, mut train_y) = sample(n_train, &mut *rng);
    let (test_x, test_y) = sample(n_test, &mut *rng);
    for label in &mut train_y {
        if rng.random::<f32>() < flip {
            *label ^= 1;
        }
    }

    NoisyXor {
        train_x,
        train_y,
        test_x,
        test_y
    }
}

fn noisy_xor_trial(epochs: usize, n_train: usize, flip: f32, rng: &mut FastRng) -> f32 {
    let data = noisy_xor(12, n_train, n_train, flip, rng);
    let config = Config::builder()
        .clauses(20)
        .features(12)
        .states(200)
        .specificity(3.9)
        .threshold(15)
        .epochs(epochs)
        .build()
        .unwrap();

    let mut tm = MultiClass::new(config, 2, rng).unwrap();
    tm.fit(&data.train_x, &data.train_y, rng).unwrap();
    tm.evaluate(&data.test_x, &data.test_y).unwrap()
}

#[test]
fn multiclass_xor_convergence() {
    let config = Config::builder()
        .clauses(20)
        .features(2)
        .threshold(10)
        .build()
        .unwrap();
    let mut rng = rng_from_seed(42);
    let mut tm = MultiClass::new(config, 2, &mut rng).unwrap();

    let (x, y) = xor_data();
    let opts = FitOptions::new(2000).with_callback(|_, acc| acc < 1.0);
    let result = tm.fit_with_options(&x, &y, opts, &mut rng).unwrap();

    assert!(result.stopped_early);
    assert_eq!(result.final_accuracy, 1.0);
    for (xi, &yi) in x.iter().zip(&y) {
        assert_eq!(tm.predict(xi).unwrap(), yi);
    }
}

#[test]
fn multiclass_noisy_xor() {
    let summary = run_trials(3, 0, |_, rng| noisy_xor_trial(40, 2000, 0.1, rng));

    assert_eq!(summary.accuracies.len(), 3);
    assert!(summary.mean > 0.65, "mean accuracy {}", summary.mean);
}

/// The full experiment: 200 epochs on 5000 examples with 40% label noise.
/// Slow without optimizations; run with `cargo test --release -- --ignored`.
#[test]
#[ignore]
fn multiclass_noisy_xor_full() {
    let summary = run_trials(8, 0, |_, rng| noisy_xor_trial(200, 5000, 0.4, rng));

    assert!(summary.mean > 0.55, "mean accuracy {}", summary.mean);
}

#[test]
fn multiclass_simple_patterns() {
    let config = Config::builder()
        .clauses(60)
        .features(4)
        .threshold(10)
        .epochs(200)
        .build()
        .unwrap();
    let mut rng = rng_from_seed(42);
    let mut tm = MultiClass::new(config, 3, &mut rng).unwrap();

    let x = vec![
        vec![1, 1, 0, 0],
        vec![1, 1, 0, 1],
        vec![1, 1, 1, 0],
        vec![0, 0, 1, 1],
        vec![0, 1, 1, 1],
        vec![1, 0, 1, 1],
        vec![1, 0, 1, 0],
        vec![1, 0, 0, 1],
        vec![0, 1, 0, 1],
    ];
    let y = vec![0, 0, 0, 1, 1, 1, 2, 2, 2];

    let result = tm.fit(&x, &y, &mut rng).unwrap();

    assert_eq!(result.epochs_run, 200);
    assert!(result.history.is_empty());
    assert!(result.final_accuracy >= 0.5);
}

#[test]
fn model_determinism() {
    let config = Config::builder()
        .clauses(20)
        .features(2)
        .epochs(50)
        .build()
        .unwrap();
    let (x, y) = xor_data();

    let mut rng1 = rng_from_seed(42);
    let mut rng2 = rng_from_seed(42);
    let mut tm1 = MultiClass::new(config, 2, &mut rng1).unwrap();
    let mut tm2 = MultiClass::new(config, 2, &mut rng2).unwrap();

    tm1.fit(&x, &y, &mut rng1).unwrap();
    tm2.fit(&x, &y, &mut rng2).unwrap();

    for xi in &x {
        assert_eq!(tm1.class_votes(xi).unwrap(), tm2.class_votes(xi).unwrap());
    }
}

#[test]
fn early_stopping() {
    let config = Config::builder().clauses(20).features(2).build().unwrap();
    let mut rng = rng_from_seed(42);
    let mut tm = MultiClass::new(config, 2, &mut rng).unwrap();

    let (x, y) = xor_data();
    let opts = FitOptions::new(1000).with_early_stop(10, 0.01);

    let result = tm.fit_with_options(&x, &y, opts, &mut rng).unwrap();

    assert!(result.epochs_run < 1000 || result.final_accuracy >= 0.99);
    assert_eq!(result.history.len(), result.epochs_run);
}

#[test]
fn binary_machine_raw_votes() {
    let config = Config::builder()
        .clauses(10)
        .features(3)
        .epochs(20)
        .build()
        .unwrap();
    let mut rng = rng_from_seed(9);
    let mut tm = TsetlinMachine::new(config, &mut rng).unwrap();

    let x = vec![vec![1, 0, 0], vec![0, 1, 1]];
    tm.fit(&x, &[1, 0], &mut rng).unwrap();

    for xi in &x {
        let votes = tm.predict(xi).unwrap();
        assert!(votes.abs() <= 5);
        assert_eq!(votes, tm.sum_votes(xi).unwrap());
    }
}

#[test]
fn errors_at_boundary() {
    let config = Config::builder().clauses(20).features(2).build().unwrap();
    let mut rng = rng_from_seed(1);
    let mut tm = MultiClass::new(config, 2, &mut rng).unwrap();

    assert_eq!(
        tm.predict(&[1]),
        Err(Error::DimensionMismatch {
            expected: 2,
            got:      1
        })
    );
    assert_eq!(
        tm.predict(&[1, 3]),
        Err(Error::NonBinaryInput {
            index: 1,
            value: 3
        })
    );
    assert_eq!(
        tm.learn(&[1, 0], 0, -1, &mut rng),
        Err(Error::InvalidThreshold)
    );
    assert_eq!(
        tm.fit(&[], &[], &mut rng).unwrap_err(),
        Error::EmptyDataset
    );
    assert_eq!(
        tm.fit(&[vec![0, 1]], &[5], &mut rng).unwrap_err(),
        Error::InvalidLabel {
            label:     5,
            n_classes: 2
        }
    );
}

#[test]
fn rule_extraction() {
    let config = Config::builder()
        .clauses(20)
        .features(2)
        .epochs(200)
        .build()
        .unwrap();
    let mut rng = rng_from_seed(42);
    let mut tm = MultiClass::new(config, 2, &mut rng).unwrap();

    let (x, y) = xor_data();
    tm.fit(&x, &y, &mut rng).unwrap();

    let rules = tm.rules(1).unwrap();
    assert_eq!(rules.len(), 10);
    assert!(tm.rules(2).is_none());

    for (i, rule) in rules.iter().enumerate() {
        let expected = if i % 2 == 0 { 1 } else { -1 };
        assert_eq!(rule.polarity, expected);
        assert!(rule.complexity() <= 4);
    }
}
