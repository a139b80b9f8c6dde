//! Track model: characters, coordinates and the rectangular grid
//!
//! This module turns raw track text into something the walker can query:
//! - [`cell`]: classification of a single character into a [`CellKind`]
//! - [`grid`]: the [`Grid`] itself, plus [`Position`] and [`Heading`]
//!
//! # Recognized characters
//!
//! | Char      | Kind       |
//! |-----------|------------|
//! | `@`       | Start      |
//! | `x`       | End        |
//! | `-` `\|`  | Straight   |
//! | `+`       | Turn       |
//! | `A`–`Z`   | Letter     |
//! | space     | Blank      |
//! | other     | Other      |
//!
//! Anything that is not Blank is passable. Only `A`–`Z` is collected.

pub mod cell;
pub mod grid;

pub use cell::{classify, CellKind};
pub use grid::{Grid, Heading, Position};
