//! # Tsetlin Machine
//!
//! Tsetlin Machine with sign-relative automata: each literal is governed by a
//! signed counter whose sign is the include decision, and feedback moves the
//! counter relative to that decision instead of by a fixed increment.
//!
//! # Features
//!
//! - `std` (default): Standard library support
//! - `parallel`: Parallel trials and evaluation via rayon
//!
//! # Examples
//!
//! ```
//! use signed_tsetlin::{Config, MultiClass, utils::rng_from_seed};
//!
//! let config = Config::builder()
//!     .clauses(20)
//!     .features(2)
//!     .epochs(200)
//!     .build()
//!     .unwrap();
//! let mut rng = rng_from_seed(42);
//!
//! let mut tm = MultiClass::new(config, 2, &mut rng).unwrap();
//!
//! let x = vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]];
//! let y = vec![0, 1, 1, 0];
//!
//! tm.fit(&x, &y, &mut rng).unwrap();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod automaton;
mod binary;
mod clause;
mod config;
pub mod error;
pub mod feedback;
mod multiclass;
mod rule;
pub mod training;
pub mod trial;
pub mod utils;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use automaton::{Automaton, Feedback};
pub use binary::TsetlinMachine;
pub use clause::Clause;
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use multiclass::MultiClass;
pub use rule::Rule;
pub use training::{EarlyStop, FitOptions, FitResult};
pub use trial::TrialSummary;
