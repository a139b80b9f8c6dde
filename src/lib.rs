//! # Introduction
//!
//! tracktty walks an ASCII-art track one cell at a time, collecting the letter
//! stations it passes, and explains precisely why a malformed track cannot be
//! walked. Progress is reported as a snapshot after every step, which the
//! terminal UI built with [ratatui](https://docs.rs/ratatui) animates.
//!
//! ## Pipeline
//!
//! ```text
//! Text → Grid → TraversalEngine ⇄ resolve() → Snapshots → Reporter / TUI
//!                      ↑
//!                   Stepper
//! ```
//!
//! 1. [`track`] — normalizes text into a rectangular [`track::Grid`] and
//!    classifies characters.
//! 2. [`walker`] — [`walker::resolve`] picks the next heading for one cell;
//!    [`walker::TraversalEngine`] validates the track, applies the resolver and
//!    records path, letters and [`walker::Diagnosis`]es.
//! 3. [`stepper`] — paces steps with a fixed, cancelable delay.
//! 4. [`snapshot`] — per-step [`snapshot::Snapshot`]s, the
//!    [`snapshot::Reporter`] sink and a bounded [`snapshot::SnapshotLog`].
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use tracktty::snapshot::SnapshotLog;
//! use tracktty::track::Grid;
//! use tracktty::walker::TraversalEngine;
//!
//! let grid = Grid::parse("@-A-+\n    |\nx-B-+");
//! let mut engine = TraversalEngine::new(grid, SnapshotLog::new(1 << 20));
//! engine.start().unwrap();
//! engine.run_to_end();
//!
//! let last = engine.snapshot();
//! assert_eq!(last.letters(), "AB");
//! assert_eq!(last.path(), "@-A-+|+-B-x");
//! ```

pub mod logging;
pub mod snapshot;
pub mod stepper;
pub mod track;
pub mod ui;
pub mod walker;
