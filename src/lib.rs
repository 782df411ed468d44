//! # Tsetlin Machine
//!
//! Multi-output Tsetlin Machine with sparse inclusion caches.
//!
//! Each output unit votes with a bank of clauses of alternating polarity.
//! A clause is the conjunction of the literals (input bits and their
//! complements) whose automaton counter is currently positive; those
//! literals are kept in a sorted inclusion set so activation never scans
//! excluded automata.
//!
//! # Features
//!
//! - `std` (default): Standard library support
//! - `parallel`: Parallel activation and per-unit-stream learning via rayon
//!
//! # Examples
//!
//! ```
//! use tsetlin_machine::{TsetlinMachine, utils::rng_from_seed};
//!
//! let mut tm = TsetlinMachine::create(2, 2, 10).unwrap();
//! let mut rng = rng_from_seed(42);
//!
//! let inputs = [[0, 0], [0, 1], [1, 0], [1, 1]];
//! let targets = [[0, 1], [1, 0], [1, 0], [0, 1]];
//!
//! for i in 0..1000 {
//!     tm.activate(&inputs[i % 4]).unwrap();
//!     tm.learn(&targets[i % 4], 4.0, 4, &mut rng).unwrap();
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod automaton;
mod clause;
mod config;
pub mod error;
pub mod feedback;
mod inclusion;
mod literal;
mod machine;
mod output;
mod rule;
mod training;
pub mod utils;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use automaton::Automaton;
pub use clause::{Clause, Polarity};
pub use config::{Config, ConfigBuilder, FeedbackProbabilities, Hyperparams, MAX_INPUTS};
pub use error::{Error, Result};
pub use inclusion::InclusionSet;
pub use literal::{Literal, literal_value};
pub use machine::TsetlinMachine;
pub use output::OutputUnit;
pub use rule::Rule;
pub use training::{EarlyStop, EarlyStopTracker, FitOptions, FitResult, RollingError};
