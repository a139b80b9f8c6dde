// tracktty: step-by-step ASCII track walker

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tracktty::logging;
use tracktty::snapshot::{NullReporter, SnapshotLog};
use tracktty::track::Grid;
use tracktty::ui::App;
use tracktty::walker::{Outcome, Phase, TraversalEngine, WalkConfig};

/// Memory budget for the snapshot history kept by the TUI (64 MB)
const SNAPSHOT_MEMORY_LIMIT: usize = 64 * 1024 * 1024;

#[derive(Debug, Parser)]
#[command(name = "tracktty", version, about = "Walk an ASCII-art track and collect its letters")]
struct Cli {
    /// Track file to walk, or `-` to read from stdin
    track: PathBuf,

    /// Walk the whole track at once and print the result instead of opening the TUI
    #[arg(long)]
    headless: bool,

    /// Print only the collected letters (headless mode)
    #[arg(long, short, requires = "headless")]
    quiet: bool,

    /// Pause between animated steps, in milliseconds
    #[arg(long, default_value_t = 150)]
    delay_ms: u64,

    /// Give up after this many steps (default: four per grid cell)
    #[arg(long)]
    step_limit: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(if cli.headless { "warn" } else { "off" });

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let text = read_track(&cli.track)?;
    let grid = Grid::parse(&text);
    let config = WalkConfig {
        step_delay: Duration::from_millis(cli.delay_ms),
        step_limit: cli.step_limit,
    };

    if cli.headless {
        run_headless(grid, config, cli.quiet)
    } else {
        run_tui(grid, config)?;
        Ok(ExitCode::SUCCESS)
    }
}

/// Read the track text. A single trailing line break is trimmed so that a file
/// saved with a final newline does not gain an extra blank row.
fn read_track(path: &Path) -> Result<String> {
    let mut text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read track from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read track file '{}'", path.display()))?
    };

    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

fn run_headless(grid: Grid, config: WalkConfig, quiet: bool) -> Result<ExitCode> {
    let mut engine = TraversalEngine::with_config(grid, NullReporter, config);
    engine.start()?;
    engine.run_to_end();

    let snapshot = engine.snapshot();
    if quiet {
        println!("{}", snapshot.letters());
    } else {
        println!("Letters: {}", snapshot.letters());
        println!("Path:    {}", snapshot.path());
        for error in &snapshot.errors {
            println!("Error:   {}", error);
        }
    }

    Ok(match engine.phase() {
        Phase::Halted(Outcome::Arrived) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

fn run_tui(grid: Grid, config: WalkConfig) -> Result<()> {
    let engine = TraversalEngine::with_config(grid, SnapshotLog::new(SNAPSHOT_MEMORY_LIMIT), config);

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(engine);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal UI failed")
}
