//! Wordle Helper
//!
//! Narrows a word list from Wordle feedback and recommends the next guess.
//! Feedback is folded into a `ConstraintState`; the state filters the lexicon
//! and four ranking strategies score what is left by letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::FrequencyTable;
//! use wordle_helper::solver::{RankerConfig, Solver};
//! use wordle_helper::wordlists::Lexicon;
//!
//! let lexicon = Lexicon::embedded().unwrap();
//! let table = FrequencyTable::default();
//! let mut solver = Solver::new(&lexicon, &table, RankerConfig::default());
//!
//! // CRANE: a and e green, nothing yellow
//! let report = solver.analyze("crane", &[2, 4], &[]).unwrap();
//! assert!(report.candidates.iter().all(|w| w.text().ends_with('e')));
//! println!("try {:?}", report.top_pick().map(|w| w.text()));
//! ```

// Core domain types
pub mod core;

// Error type
pub mod error;

// Constraint engine and ranking
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{Result, SolverError};
