//! Clause - a conjunction of literals with a cached output.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;

use crate::Automaton;

/// # Overview
///
/// A clause with 2*n_features automata.
///
/// - automata[2*k] controls literal x_k
/// - automata[2*k+1] controls literal NOT x_k
///
/// The clause remembers its last output so the feedback pass that follows a
/// prediction sees exactly what was voted.
#[derive(Debug, Clone)]
pub struct Clause {
    automata:   Vec<Automaton>,
    polarity:   i8,
    output:     bool,
    n_features: usize
}

impl Clause {
    /// # Overview
    ///
    /// Creates clause with given features, states, and polarity. Every
    /// automaton starts at counter 0 or 1.
    pub fn new<R: Rng>(n_features: usize, n_states: i16, polarity: i8, rng: &mut R) -> Self {
        debug_assert!(polarity == 1 || polarity == -1);
        let automata = (0..2 * n_features)
            .map(|_| Automaton::random(n_states, rng))
            .collect();
        Self {
            automata,
            polarity,
            output: false,
            n_features
        }
    }

    /// # Overview
    ///
    /// Creates clause from explicit automata.
    pub fn from_automata(automata: Vec<Automaton>, polarity: i8) -> Self {
        debug_assert!(automata.len() % 2 == 0);
        debug_assert!(polarity == 1 || polarity == -1);
        let n_features = automata.len() / 2;
        Self {
            automata,
            polarity,
            output: false,
            n_features
        }
    }

    #[inline(always)]
    pub fn polarity(&self) -> i8 {
        self.polarity
    }

    #[inline(always)]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    #[inline(always)]
    pub fn automata(&self) -> &[Automaton] {
        &self.automata
    }

    #[inline(always)]
    pub fn automata_mut(&mut self) -> &mut [Automaton] {
        &mut self.automata
    }

    /// # Overview
    ///
    /// Output cached by the last `update`.
    #[inline(always)]
    pub fn output(&self) -> bool {
        self.output
    }

    /// # Overview
    ///
    /// Truth value of literal `k` on input `x`: `x[k / 2]`, negated for odd
    /// `k`.
    ///
    /// # Panics
    ///
    /// Panics if `k / 2 >= x.len()`.
    #[inline(always)]
    pub fn literal(x: &[u8], k: usize) -> bool {
        (x[k / 2] != 0) ^ (k % 2 == 1)
    }

    /// # Overview
    ///
    /// Evaluates clause on binary input without touching the cache. A clause
    /// with no included literal fires.
    ///
    /// # Panics
    ///
    /// Panics if `x` holds fewer than `n_features` entries and an included
    /// literal reads past its end. Machines check input length before
    /// calling.
    #[inline]
    pub fn evaluate(&self, x: &[u8]) -> bool {
        self.automata
            .iter()
            .enumerate()
            .all(|(k, a)| !a.action() || Self::literal(x, k))
    }

    /// # Overview
    ///
    /// Evaluates clause and caches the output.
    ///
    /// # Panics
    ///
    /// Same as [`Clause::evaluate`].
    #[inline]
    pub fn update(&mut self, x: &[u8]) -> bool {
        self.output = self.evaluate(x);
        self.output
    }

    /// # Overview
    ///
    /// Returns polarity if the cached output fires, 0 otherwise.
    #[inline(always)]
    pub fn vote(&self) -> i32 {
        if self.output { self.polarity as i32 } else { 0 }
    }

    /// # Overview
    ///
    /// Number of currently included literals.
    pub fn n_included(&self) -> usize {
        self.automata.iter().filter(|a| a.action()).count()
    }
}
