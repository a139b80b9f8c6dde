//! TUI pane rendering modules
//!
//! - [`track`]: the grid, with the walker's cell and letter stations highlighted
//! - [`summary`]: collected letters, visited path and diagnoses
//! - [`status`]: status bar with keybindings and run state
//!
//! Each module exports a single `render_*` function that draws from a
//! [`Snapshot`](crate::snapshot::Snapshot) and holds no state of its own.

pub mod status;
pub mod summary;
pub mod track;

pub use status::{render_status_bar, RunBadge, StatusRenderData};
pub use summary::render_summary_pane;
pub use track::render_track_pane;
