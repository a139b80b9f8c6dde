// Traversal engine for the track walker

use super::constants::{DEFAULT_STEP_DELAY, STEPS_PER_CELL};
use super::errors::{Diagnosis, EngineError};
use super::resolver::resolve;
use crate::snapshot::{Reporter, Snapshot};
use crate::stepper::Stepper;
use crate::track::{CellKind, Grid, Heading, Position};
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Tunables for a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkConfig {
    /// Pause between steps when paced by [`TraversalEngine::tick`]
    pub step_delay: Duration,
    /// Maximum number of steps before the walk is declared endless.
    /// `None` derives the bound from the grid size.
    pub step_limit: Option<usize>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        WalkConfig {
            step_delay: DEFAULT_STEP_DELAY,
            step_limit: None,
        }
    }
}

/// How a halted run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Reached an `x`
    Arrived,
    /// Stopped on a diagnosis
    Diagnosed,
    /// Cancelled by [`TraversalEngine::stop`]
    Stopped,
}

/// Where the engine is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Stepping,
    Halted(Outcome),
}

/// Mutable state of a single traversal attempt
#[derive(Debug, Clone, Default)]
struct TraversalRun {
    position: Option<Position>,
    heading: Heading,
    path_characters: Vec<char>,
    collected_letters: Vec<char>,
    /// Letter stations already credited, so a revisit does not collect twice
    credited_positions: FxHashSet<Position>,
    errors: Vec<Diagnosis>,
    running: bool,
    steps: usize,
}

/// Walks one track, reporting a snapshot after startup and after every step
pub struct TraversalEngine<R: Reporter> {
    grid: Grid,
    reporter: R,
    stepper: Stepper,
    run: TraversalRun,
    phase: Phase,
    step_limit: usize,
}

impl<R: Reporter> TraversalEngine<R> {
    /// Create an idle engine for `grid` with default settings
    pub fn new(grid: Grid, reporter: R) -> Self {
        Self::with_config(grid, reporter, WalkConfig::default())
    }

    pub fn with_config(grid: Grid, reporter: R, config: WalkConfig) -> Self {
        let step_limit = config
            .step_limit
            .unwrap_or_else(|| grid.area().saturating_mul(STEPS_PER_CELL))
            .max(1);

        TraversalEngine {
            grid,
            reporter,
            stepper: Stepper::new(config.step_delay),
            run: TraversalRun::default(),
            phase: Phase::Idle,
            step_limit,
        }
    }

    /// Validate the grid and place the walker on the start cell.
    ///
    /// At most one startup diagnosis is recorded, checked in order: missing
    /// start, missing end, multiple starts. A snapshot is reported either way.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.phase != Phase::Idle {
            return Err(EngineError::AlreadyStarted);
        }

        self.run = TraversalRun::default();
        self.stepper.rearm();

        let starts = self.grid.positions_where(|kind| kind == CellKind::Start);

        let validated = match starts.as_slice() {
            [] => Err(Diagnosis::StartNotFound),
            _ if !self.grid.contains_kind(CellKind::End) => Err(Diagnosis::EndNotFound),
            [start] => Ok(*start),
            _ => Err(Diagnosis::MultipleStarts),
        };

        match validated {
            Ok(start) => {
                self.run.position = Some(start);
                if let Some(c) = self.grid.get(start) {
                    self.run.path_characters.push(c);
                }
                self.run.running = true;
                self.phase = Phase::Stepping;
                debug!(%start, "track validated, walker placed on start");
                self.stepper.schedule();
            }
            Err(diagnosis) => self.halt(diagnosis),
        }

        self.report();
        Ok(())
    }

    /// Take a single step. Does nothing once the run is no longer running.
    pub fn step(&mut self) {
        if !self.run.running {
            return;
        }
        let Some(at) = self.run.position else {
            return;
        };

        if self.run.steps >= self.step_limit {
            self.halt(Diagnosis::EndlessLoop {
                at,
                steps: self.run.steps,
            });
            self.report();
            return;
        }

        let heading = match resolve(&self.grid, at, self.run.heading) {
            Ok(heading) => heading,
            Err(diagnosis) => {
                self.halt(diagnosis);
                self.report();
                return;
            }
        };

        // The resolver only returns headings that lead to a cell on the grid
        let Some(next) = self.grid.offset(at, heading) else {
            self.halt(Diagnosis::OutOfBounds { at });
            self.report();
            return;
        };

        self.run.heading = heading;
        self.run.position = Some(next);
        self.run.steps += 1;

        let c = self.grid.get(next).unwrap_or(' ');
        self.run.path_characters.push(c);

        match self.grid.kind_at(next) {
            CellKind::End => {
                self.run.running = false;
                self.phase = Phase::Halted(Outcome::Arrived);
                self.stepper.cancel();
                info!(
                    steps = self.run.steps,
                    letters = %self.run.collected_letters.iter().collect::<String>(),
                    "reached the end of the track"
                );
                self.report();
                return;
            }
            CellKind::Letter(letter) => {
                if self.run.credited_positions.insert(next) {
                    self.run.collected_letters.push(letter);
                    debug!(%letter, at = %next, "collected letter");
                }
            }
            _ => {}
        }

        debug!(step = self.run.steps, at = %next, %c, heading = %heading.arrow(), "stepped");
        self.report();

        if self.run.running {
            self.stepper.schedule();
        }
    }

    /// Cancel an in-progress run. The final snapshot is reported once.
    pub fn stop(&mut self) {
        self.stepper.cancel();
        if !self.run.running {
            return;
        }
        self.run.running = false;
        self.phase = Phase::Halted(Outcome::Stopped);
        info!(steps = self.run.steps, "traversal stopped");
        self.report();
    }

    /// Return to [`Phase::Idle`] with a fresh run so the track can be walked again
    pub fn reset(&mut self) {
        self.stepper.cancel();
        self.run = TraversalRun::default();
        self.phase = Phase::Idle;
    }

    /// Take the pending step if its delay has elapsed at `now`
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.stepper.fire_if_due(now) {
            self.step();
            true
        } else {
            false
        }
    }

    /// Take every remaining step immediately, ignoring the delay
    pub fn run_to_end(&mut self) {
        while self.stepper.fire_now() {
            self.step();
        }
    }

    /// Current state of the run
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            step: self.run.steps,
            position: self.run.position,
            heading: self.run.heading,
            collected_letters: self.run.collected_letters.clone(),
            path_characters: self.run.path_characters.clone(),
            running: self.run.running,
            errors: self.run.errors.clone(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.run.running
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn step_limit(&self) -> usize {
        self.step_limit
    }

    /// When the next paced step is due, if one is scheduled
    pub fn next_step_due(&self) -> Option<Instant> {
        self.stepper.next_due()
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    fn halt(&mut self, diagnosis: Diagnosis) {
        warn!(%diagnosis, "traversal halted");
        self.run.errors.push(diagnosis);
        self.run.running = false;
        self.phase = Phase::Halted(Outcome::Diagnosed);
        self.stepper.cancel();
    }

    fn report(&mut self) {
        let snapshot = self.snapshot();
        self.reporter.report(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{NullReporter, SnapshotLog};

    #[test]
    fn test_start_places_walker_on_start() {
        let mut engine = TraversalEngine::new(Grid::parse("@-x"), NullReporter);
        engine.start().unwrap();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.position, Some(Position::new(0, 0)));
        assert_eq!(snapshot.path(), "@");
        assert!(snapshot.running);
        assert_eq!(engine.phase(), Phase::Stepping);
    }

    #[test]
    fn test_double_start_is_rejected() {
        let mut engine = TraversalEngine::new(Grid::parse("@-x"), NullReporter);
        engine.start().unwrap();
        assert_eq!(engine.start(), Err(EngineError::AlreadyStarted));

        engine.reset();
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(engine.start().is_ok());
    }

    #[test]
    fn test_one_snapshot_per_step() {
        let mut engine = TraversalEngine::new(Grid::parse("@-A-x"), SnapshotLog::new(1 << 20));
        engine.start().unwrap();
        engine.run_to_end();

        let log = engine.reporter();
        // Startup plus four moves
        assert_eq!(log.len(), 5);
        let steps: Vec<usize> = log.iter().map(|s| s.step).collect();
        assert_eq!(steps, vec![0, 1, 2, 3, 4]);
        assert_eq!(engine.phase(), Phase::Halted(Outcome::Arrived));
    }

    #[test]
    fn test_step_after_stop_is_noop() {
        let mut engine = TraversalEngine::new(Grid::parse("@---x"), SnapshotLog::new(1 << 20));
        engine.start().unwrap();
        engine.step();
        engine.stop();

        let before = engine.reporter().len();
        engine.step();
        engine.run_to_end();
        assert_eq!(engine.reporter().len(), before);
        assert_eq!(engine.phase(), Phase::Halted(Outcome::Stopped));
        assert_eq!(engine.snapshot().path(), "@-");
    }

    #[test]
    fn test_tick_waits_for_delay() {
        let config = WalkConfig {
            step_delay: Duration::from_secs(3600),
            step_limit: None,
        };
        let mut engine = TraversalEngine::with_config(Grid::parse("@-x"), NullReporter, config);
        engine.start().unwrap();

        assert!(!engine.tick(Instant::now()));
        let due = engine.next_step_due().unwrap();
        assert!(engine.tick(due));
        assert_eq!(engine.snapshot().path(), "@-");
    }

    #[test]
    fn test_step_limit_halts_walk() {
        let config = WalkConfig {
            step_limit: Some(2),
            ..WalkConfig::default()
        };
        let mut engine =
            TraversalEngine::with_config(Grid::parse("@-----x"), NullReporter, config);
        engine.start().unwrap();
        engine.run_to_end();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.path(), "@--");
        assert!(matches!(
            snapshot.errors[..],
            [Diagnosis::EndlessLoop { steps: 2, .. }]
        ));
    }
}
