//! Diagnoses for malformed tracks
//!
//! This module defines [`Diagnosis`], which classifies every way a track can be
//! invalid, and [`EngineError`], which covers misuse of the engine API.
//!
//! Diagnoses are data: the engine appends them to the run's error list and halts.
//! They never cross the engine boundary as `Err`.

use crate::track::Position;
use thiserror::Error;

/// Why a track could not be walked to its end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Diagnosis {
    /// No `@` anywhere in the grid
    #[error("Invalid track: start character '@' not found")]
    StartNotFound,

    /// No `x` anywhere in the grid
    #[error("Invalid track: end character 'x' not found")]
    EndNotFound,

    /// More than one `@`
    #[error("Invalid track: multiple starts '@' found")]
    MultipleStarts,

    /// Two or more viable exits from the start cell
    #[error("Invalid track: multiple starting paths found at {at}")]
    MultipleStartingPaths { at: Position },

    /// Two or more viable exits from any other cell
    #[error("Invalid track: fork in path found at {at}")]
    Fork { at: Position },

    /// No viable exit from a cell that is not a turn
    #[error("Invalid track: broken path found at {at}")]
    BrokenPath { at: Position },

    /// No viable exit from a `+`
    #[error("Invalid track: fake turn found at {at}")]
    FakeTurn { at: Position },

    /// A straight segment leads off the grid
    #[error("Invalid track: path leads outside bounds at {at}")]
    OutOfBounds { at: Position },

    /// The walk exceeded its step limit without reaching an end
    #[error("Invalid track: endless loop detected at {at} after {steps} steps")]
    EndlessLoop { at: Position, steps: usize },
}

impl Diagnosis {
    /// Where the diagnosis was made. Startup diagnoses have no location.
    pub fn location(&self) -> Option<Position> {
        match self {
            Diagnosis::StartNotFound | Diagnosis::EndNotFound | Diagnosis::MultipleStarts => None,
            Diagnosis::MultipleStartingPaths { at } => Some(*at),
            Diagnosis::Fork { at } => Some(*at),
            Diagnosis::BrokenPath { at } => Some(*at),
            Diagnosis::FakeTurn { at } => Some(*at),
            Diagnosis::OutOfBounds { at } => Some(*at),
            Diagnosis::EndlessLoop { at, .. } => Some(*at),
        }
    }

    /// True for diagnoses produced by startup validation rather than stepping
    pub fn is_startup(&self) -> bool {
        self.location().is_none()
    }
}

/// Misuse of the engine API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// `start` called on an engine that has already run; `reset` it first
    #[error("traversal already started; reset the engine before starting again")]
    AlreadyStarted,
}
