//! XOR classification example.

use signed_tsetlin::{Config, FitOptions, MultiClass, utils::rng_from_seed};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::builder()
        .clauses(20)
        .features(2)
        .threshold(10)
        .build()
        .expect("valid config");

    let mut rng = rng_from_seed(42);
    let mut tm = MultiClass::new(config, 2, &mut rng).expect("valid machine");

    let x = vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]];
    let y = vec![0, 1, 1, 0];

    println!("Training on XOR dataset...");
    let opts = FitOptions::new(1000).with_callback(|_, acc| acc < 1.0);
    let result = tm
        .fit_with_options(&x, &y, opts, &mut rng)
        .expect("valid dataset");
    println!("  stopped after {} epochs", result.epochs_run);

    println!("\nPredictions:");
    for (xi, &yi) in x.iter().zip(y.iter()) {
        let pred = tm.predict(xi).expect("valid input");
        let status = if pred == yi { "OK" } else { "WRONG" };
        println!("  {:?} -> {} (expected: {}) {}", xi, pred, yi, status);
    }

    println!("\nAccuracy: {:.1}%", result.final_accuracy * 100.0);

    println!("\nLearned rules for class 1:");
    for (i, rule) in tm
        .rules(1)
        .unwrap_or_default()
        .iter()
        .enumerate()
        .filter(|(_, r)| !r.is_empty())
        .take(5)
    {
        println!("  Clause {}: {}", i, rule);
    }
}
