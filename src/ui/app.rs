//! Main TUI application state and logic

use crate::snapshot::{Snapshot, SnapshotLog};
use crate::walker::{Outcome, Phase, TraversalEngine};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// How often the event loop wakes up to check for keys and due steps
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// The main application state
pub struct App {
    /// The engine walking the track; its reporter records every snapshot
    pub engine: TraversalEngine<SnapshotLog>,

    /// Index into the snapshot log being browsed. `None` follows the live run.
    pub history_cursor: Option<usize>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(engine: TraversalEngine<SnapshotLog>) -> Self {
        App {
            engine,
            history_cursor: None,
            should_quit: false,
            status_message: String::from("Press s to start"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.engine.tick(Instant::now()) {
                self.after_step();
            }

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        self.engine.stop();
        Ok(())
    }

    /// The snapshot currently on screen
    pub fn displayed_snapshot(&self) -> Snapshot {
        self.history_cursor
            .and_then(|index| self.engine.reporter().get(index))
            .cloned()
            .unwrap_or_else(|| self.engine.snapshot())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        let snapshot = self.displayed_snapshot();

        super::panes::render_track_pane(frame, columns[0], self.engine.grid(), &snapshot);
        super::panes::render_summary_pane(frame, columns[1], &snapshot);
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            super::panes::StatusRenderData {
                message: &self.status_message,
                step: snapshot.step,
                badge: self.badge(),
            },
        );
    }

    fn badge(&self) -> super::panes::RunBadge {
        use super::panes::RunBadge;

        if let Some(index) = self.history_cursor {
            return RunBadge::History(index + 1, self.engine.reporter().len());
        }
        match self.engine.phase() {
            Phase::Idle => RunBadge::Ready,
            Phase::Stepping => RunBadge::Running,
            Phase::Halted(Outcome::Arrived) => RunBadge::Arrived,
            Phase::Halted(Outcome::Diagnosed) => RunBadge::Error,
            Phase::Halted(Outcome::Stopped) => RunBadge::Stopped,
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('s') | KeyCode::Enter => self.start(),
            KeyCode::Char('x') | KeyCode::Esc => self.stop(),
            KeyCode::Left => self.browse_back(),
            KeyCode::Right => self.browse_forward(),
            KeyCode::Backspace => {
                if !self.engine.is_running() && !self.engine.reporter().is_empty() {
                    self.history_cursor = Some(0);
                    self.status_message = "Jumped to start".to_string();
                }
            }
            KeyCode::Char('e') | KeyCode::End => {
                self.history_cursor = None;
                self.status_message = "Jumped to end".to_string();
            }
            _ => {}
        }
    }

    /// Start a fresh run, discarding any previous one
    fn start(&mut self) {
        self.engine.reset();
        self.engine.reporter_mut().clear();
        self.history_cursor = None;

        match self.engine.start() {
            Ok(()) => self.after_step(),
            Err(e) => self.status_message = format!("Cannot start: {}", e),
        }
    }

    fn stop(&mut self) {
        if self.engine.is_running() {
            self.engine.stop();
            self.status_message = "Stopped".to_string();
        }
    }

    /// Update the status line from the latest snapshot
    fn after_step(&mut self) {
        let snapshot = self.engine.snapshot();
        self.status_message = match (self.engine.phase(), snapshot.first_error()) {
            (_, Some(error)) => error.to_string(),
            (Phase::Halted(Outcome::Arrived), None) => {
                format!("Arrived! Collected {}", snapshot.letters())
            }
            _ => "Walking...".to_string(),
        };
    }

    fn browse_back(&mut self) {
        if self.engine.is_running() {
            self.status_message = "Stop the run to browse its history".to_string();
            return;
        }
        let total = self.engine.reporter().len();
        if total == 0 {
            return;
        }
        let current = self.history_cursor.unwrap_or(total - 1);
        self.history_cursor = Some(current.saturating_sub(1));
        self.status_message = "Stepped backward".to_string();
    }

    fn browse_forward(&mut self) {
        let Some(current) = self.history_cursor else {
            return;
        };
        let total = self.engine.reporter().len();
        if current + 1 >= total.saturating_sub(1) {
            self.history_cursor = None;
            self.status_message = "Back to the latest step".to_string();
        } else {
            self.history_cursor = Some(current + 1);
            self.status_message = "Stepped forward".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::Grid;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app(track: &str) -> App {
        App::new(TraversalEngine::new(
            Grid::parse(track),
            SnapshotLog::new(1 << 20),
        ))
    }

    #[test]
    fn test_start_and_stop_keys() {
        let mut app = app("@---x");
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.engine.phase(), Phase::Stepping);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.engine.phase(), Phase::Halted(Outcome::Stopped));
        assert_eq!(app.status_message, "Stopped");
    }

    #[test]
    fn test_history_browsing_after_run() {
        let mut app = app("@-A-x");
        press(&mut app, KeyCode::Char('s'));
        app.engine.run_to_end();
        // Startup plus four moves
        assert_eq!(app.engine.reporter().len(), 5);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.history_cursor, Some(3));
        assert_eq!(app.displayed_snapshot().path(), "@-A-");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.displayed_snapshot().path(), "@");

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.history_cursor, None);
        assert_eq!(app.displayed_snapshot().path(), "@-A-x");
    }

    #[test]
    fn test_restart_clears_history() {
        let mut app = app("@x");
        press(&mut app, KeyCode::Char('s'));
        app.engine.run_to_end();
        press(&mut app, KeyCode::Char('s'));

        assert_eq!(app.engine.reporter().len(), 1);
        assert_eq!(app.engine.phase(), Phase::Stepping);
    }

    #[test]
    fn test_invalid_track_shows_diagnosis() {
        let mut app = app("@--");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.status_message, "Invalid track: end character 'x' not found");
    }
}
