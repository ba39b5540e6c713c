//! Type I and Type II feedback mechanisms.
//!
//! Both read the clause output cached by the preceding prediction, so they
//! must run after `Clause::update` on the same input.

use rand::Rng;

use crate::{Clause, Config, Feedback, utils::bernoulli};

/// # Overview
///
/// Type I feedback: grows the clause toward matching the input.
///
/// When the clause fires, true literals are reinforced if included and pulled
/// toward inclusion otherwise (probability 1 - 1/s); excluded false literals
/// are reinforced in exclusion (probability 1/s). When it does not fire,
/// included literals are pulled toward exclusion and excluded ones are
/// reinforced (probability 1/s). Both probabilities come from `config`.
///
/// # Panics
///
/// Panics if the clause fires and `x` holds fewer than `clause.n_features()`
/// entries.
pub fn type_i<R: Rng>(clause: &mut Clause, x: &[u8], config: &Config, rng: &mut R) {
    let prob_weaken = config.prob_weaken();
    let prob_strengthen = config.prob_strengthen();
    let fires = clause.output();

    for (k, automaton) in clause.automata_mut().iter_mut().enumerate() {
        let included = automaton.action();

        if !fires {
            if !bernoulli(rng, prob_weaken) {
                continue;
            }
            if included {
                automaton.apply(Feedback::Weaken);
            } else {
                automaton.apply(Feedback::Reinforce);
            }
            continue;
        }

        match (Clause::literal(x, k), included) {
            (true, true) => {
                if bernoulli(rng, prob_strengthen) {
                    automaton.apply(Feedback::Reinforce);
                }
            }
            (true, false) => {
                if bernoulli(rng, prob_strengthen) {
                    automaton.apply(Feedback::Weaken);
                }
            }
            (false, true) => {
                tracing::error!(
                    literal = k,
                    "included literal is false in a firing clause, skipping"
                );
            }
            (false, false) => {
                if bernoulli(rng, prob_weaken) {
                    automaton.apply(Feedback::Reinforce);
                }
            }
        }
    }
}

/// # Overview
///
/// Type II feedback: stops the clause from matching the input.
///
/// Only acts on a firing clause. Every excluded literal that is false on `x`
/// is pulled toward inclusion, so the clause picks up a literal that rejects
/// this input. Deterministic.
///
/// # Panics
///
/// Panics if the clause fires and `x` holds fewer than `clause.n_features()`
/// entries.
pub fn type_ii(clause: &mut Clause, x: &[u8]) {
    if !clause.output() {
        return;
    }

    for (k, automaton) in clause.automata_mut().iter_mut().enumerate() {
        if !automaton.action() && !Clause::literal(x, k) {
            automaton.apply(Feedback::Weaken);
        }
    }
}
