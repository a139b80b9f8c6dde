//! Next-heading resolution
//!
//! [`resolve`] decides where the walker goes from a cell, or why it cannot go
//! anywhere. It is pure: the engine owns all state and records the outcome.
//!
//! # Rules
//!
//! 1. Anything that is not a `+` keeps its heading while the cell straight ahead
//!    is on the grid and not blank. This carries the walker through letters and
//!    crossings.
//! 2. Otherwise the candidates are the four cardinal headings, or only the
//!    current heading on a `-`/`|`. Reversing is never allowed, and a `+` must
//!    change heading.
//! 3. Exactly one passable candidate wins. None is a dead end, more than one is
//!    ambiguous.

use super::errors::Diagnosis;
use crate::track::{CellKind, Grid, Heading, Position};
use tracing::trace;

/// Compute the heading to leave `at` with, given the heading the walker arrived on.
///
/// `at` must be on the grid. `heading` is [`Heading::IDLE`] before the first move.
pub fn resolve(grid: &Grid, at: Position, heading: Heading) -> Result<Heading, Diagnosis> {
    let kind = grid.kind_at(at);

    // Going straight takes priority over any recomputation
    if kind != CellKind::Turn && !heading.is_idle() {
        if let Some(ahead) = grid.offset(at, heading) {
            if grid.kind_at(ahead).is_passable() {
                return Ok(heading);
            }
        }
    }

    let candidates: &[Heading] = match kind {
        CellKind::Straight => std::slice::from_ref(&heading),
        _ => &Heading::CARDINAL,
    };

    let mut valid = Vec::with_capacity(candidates.len());
    for &candidate in candidates {
        if candidate.is_idle() {
            continue;
        }
        if !heading.is_idle() && candidate == heading.reverse() {
            continue;
        }
        if kind == CellKind::Turn && candidate == heading {
            continue;
        }

        match grid.offset(at, candidate) {
            Some(next) => {
                if grid.kind_at(next).is_passable() {
                    valid.push(candidate);
                }
            }
            None => {
                // Only a straight segment running off the edge is an error
                if kind == CellKind::Straight {
                    return Err(Diagnosis::OutOfBounds { at });
                }
            }
        }
    }

    trace!(%at, ?kind, ?heading, candidates = valid.len(), "resolved candidates");

    match valid.as_slice() {
        [only] => Ok(*only),
        [] if kind == CellKind::Turn => Err(Diagnosis::FakeTurn { at }),
        [] => Err(Diagnosis::BrokenPath { at }),
        _ if kind == CellKind::Start => Err(Diagnosis::MultipleStartingPaths { at }),
        _ => Err(Diagnosis::Fork { at }),
    }
}
