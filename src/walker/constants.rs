// Constants for the track walker

use std::time::Duration;

/// Default pause between two steps when a run is paced for display
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(150);

/// The walker's state is (position, heading) with four possible headings, so a
/// walk longer than this many steps per cell has repeated a state
pub const STEPS_PER_CELL: usize = 4;
