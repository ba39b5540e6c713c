//! Tsetlin Automaton - the fundamental building block.

use rand::Rng;

/// # Overview
///
/// Direction of a single feedback step, relative to the automaton's current
/// decision rather than to the raw counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// One step further from zero on the current side.
    Reinforce,
    /// One step toward zero; may cross it and flip the decision.
    Weaken
}

/// # Overview
///
/// A single Tsetlin Automaton: a signed confidence counter bounded to
/// `[-(N/2) + 1, N/2]`. Positive counters include the literal, zero and
/// negative counters exclude it.
///
/// Uses i16 for memory efficiency.
///
/// # Examples
///
/// ```
/// use signed_tsetlin::{Automaton, Feedback};
///
/// let mut automaton = Automaton::with_state(0, 100);
/// assert!(!automaton.action());
///
/// automaton.apply(Feedback::Weaken);
/// assert!(automaton.action());
///
/// for _ in 0..100 {
///     automaton.apply(Feedback::Reinforce);
/// }
/// assert_eq!(automaton.state(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Automaton {
    state:    i16,
    n_states: i16
}

impl Automaton {
    /// # Overview
    ///
    /// Creates automaton with counter drawn uniformly from {0, 1}, right at
    /// the inclusion boundary.
    #[inline]
    pub fn random<R: Rng>(n_states: i16, rng: &mut R) -> Self {
        Self {
            state: rng.random_range(0..=1),
            n_states
        }
    }

    /// # Overview
    ///
    /// Creates automaton with specific initial counter.
    #[inline]
    pub fn with_state(state: i16, n_states: i16) -> Self {
        debug_assert!(state > -(n_states / 2) && state <= n_states / 2);
        Self {
            state,
            n_states
        }
    }

    /// # Overview
    ///
    /// Returns true if counter > 0 (include literal).
    #[inline(always)]
    pub fn action(&self) -> bool {
        self.state > 0
    }

    /// # Overview
    ///
    /// Returns current counter value.
    #[inline]
    pub fn state(&self) -> i16 {
        self.state
    }

    /// # Overview
    ///
    /// Moves the counter one step in the direction `feedback` gives relative
    /// to the current decision. Clamped at `N/2` and `-(N/2) + 1`.
    #[inline]
    pub fn apply(&mut self, feedback: Feedback) {
        let sign = if self.state > 0 { 1 } else { -1 };
        let step = match feedback {
            Feedback::Reinforce => sign,
            Feedback::Weaken => -sign
        };
        let half = self.n_states / 2;

        if step > 0 && self.state < half {
            self.state += 1;
        } else if step < 0 && self.state > -half + 1 {
            self.state -= 1;
        }
    }
}
