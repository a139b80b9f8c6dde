//! Track walking engine
//!
//! This module provides the traversal logic:
//! - [`resolver`]: pure next-heading decision for a single cell
//! - [`engine`]: run state machine that applies the resolver step by step
//! - [`errors`]: track diagnoses and engine misuse errors
//!
//! # Execution Model
//!
//! [`engine::TraversalEngine::start`] validates the grid and places the walker on
//! `@`. Each subsequent step resolves a heading, moves one cell and records what
//! it found there. A snapshot is reported after startup and after every step.
//! Steps are paced by a [`crate::stepper::Stepper`]; tests and headless runs drain
//! it synchronously with [`engine::TraversalEngine::run_to_end`].

pub mod constants;
pub mod engine;
pub mod errors;
pub mod resolver;

pub use engine::{Outcome, Phase, TraversalEngine, WalkConfig};
pub use errors::{Diagnosis, EngineError};
pub use resolver::resolve;
