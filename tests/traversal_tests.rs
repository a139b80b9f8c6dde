// Integration tests for the track walker

use std::fs;
use std::path::Path;

use tracktty::snapshot::{Snapshot, SnapshotLog};
use tracktty::track::{Grid, Position};
use tracktty::walker::{Diagnosis, Outcome, Phase, TraversalEngine};

/// Walk a track to completion and return the final snapshot
fn walk(track: &str) -> Snapshot {
    let mut engine = TraversalEngine::new(Grid::parse(track), SnapshotLog::new(1 << 20));
    engine.start().expect("fresh engine should start");
    engine.run_to_end();
    assert!(!engine.is_running(), "run_to_end left the walk running");
    engine.snapshot()
}

fn walk_demo(name: &str) -> Snapshot {
    let path = Path::new("demos").join(name);
    let text = fs::read_to_string(&path).expect("Failed to read demo track");
    walk(text.trim_end_matches('\n'))
}

fn assert_walk(track: &str, letters: &str, path: &str) {
    let snapshot = walk(track);
    assert!(snapshot.errors.is_empty(), "unexpected errors: {:?}", snapshot.errors);
    assert_eq!(snapshot.letters(), letters);
    assert_eq!(snapshot.path(), path);
}

// === VALID TRACKS ===

#[test]
fn test_basic_example() {
    let track = "
@---A---+
        |
x-B-+   C
    |   |
    +---+";
    assert_walk(track, "ACB", "@---A---+|C|+---+|+-B-x");
}

#[test]
fn test_go_straight_through_intersections() {
    let track = "
@
| +-C--+
A |    |
+---B--+
  |      x
  |      |
  +---D--+";
    assert_walk(track, "ABCD", "@|A+---B--+|+--C-+|-||+---D--+|x");
}

#[test]
fn test_letters_may_be_found_on_turns() {
    let track = "
@---A---+
        |
x-B-+   |
    |   |
    +---C";
    assert_walk(track, "ACB", "@---A---+|||C---+|+-B-x");
}

#[test]
fn test_same_location_is_collected_once() {
    let track = "
    +-O-N-+
    |     |
    |   +-I-+
@-G-O-+ | | |
    | | +-+ E
    +-+     S
            |
            x";
    // `O` sits at two coordinates and both are credited; the revisit of each is not
    assert_walk(track, "GOONIES", "@-G-O-+|+-+|O||+-O-N-+|I|+-+|+-I-+|ES|x");
}

#[test]
fn test_keep_direction_in_compact_space() {
    let track = "
 +-L-+
 |  +A-+
@B+ ++ H
 ++    x";
    assert_walk(track, "BLAH", "@B+++B|+-L-+A+++A-+Hx");
}

#[test]
fn test_ignore_stuff_after_end_of_path() {
    let track = "
@-A--+
     |
     +-B--x-C--D";
    assert_walk(track, "AB", "@-A--+|+-B--x");
}

#[test]
fn test_unknown_characters_are_inert_tiles() {
    assert_walk("@-#-a-A-x", "A", "@-#-a-A-x");
}

#[test]
fn test_demo_tracks() {
    let basic = walk_demo("basic.txt");
    assert_eq!(basic.letters(), "ACB");

    let intersections = walk_demo("intersections.txt");
    assert_eq!(intersections.letters(), "ABCD");

    let goonies = walk_demo("goonies.txt");
    assert_eq!(goonies.letters(), "GOONIES");

    let compact = walk_demo("compact.txt");
    assert_eq!(compact.letters(), "BLAH");

    let fork = walk_demo("fork.txt");
    assert!(matches!(fork.first_error(), Some(Diagnosis::Fork { .. })));
}

// === STARTUP DIAGNOSES ===

#[test]
fn test_missing_start_character() {
    let track = "
     -A---+
          |
  x-B-+   C
      |   |
      +---+";
    let snapshot = walk(track);
    assert_eq!(snapshot.errors, vec![Diagnosis::StartNotFound]);
    assert_eq!(snapshot.position, None);
    assert!(snapshot.path_characters.is_empty());
}

#[test]
fn test_missing_end_character() {
    let track = "
   @--A---+
          |
    B-+   C
      |   |
      +---+";
    assert_eq!(walk(track).errors, vec![Diagnosis::EndNotFound]);
}

#[test]
fn test_multiple_starts() {
    let same_row = "
   @--A-@-+
          |
  x-B-+   C
      |   |
      +---+";
    let separate_paths = "
   @--A---+
          |
          C
          x
      @-B-+";
    let both_complete = "
   @--A--x

  x-B-+
      |
      @";
    for track in [same_row, separate_paths, both_complete] {
        assert_eq!(walk(track).errors, vec![Diagnosis::MultipleStarts]);
    }
}

#[test]
fn test_only_first_startup_diagnosis_is_reported() {
    // No start and no end: only the missing start is surfaced
    assert_eq!(walk("--A--").errors, vec![Diagnosis::StartNotFound]);
    // Two starts and no end: the missing end wins
    assert_eq!(walk("@--@").errors, vec![Diagnosis::EndNotFound]);
}

#[test]
fn test_empty_track() {
    assert_eq!(walk("").errors, vec![Diagnosis::StartNotFound]);
}

// === RUNTIME DIAGNOSES ===

#[test]
fn test_fork_in_path() {
    let track = "
        x-B
          |
   @--A---+
          |
     x+   C
      |   |
      +---+";
    let snapshot = walk(track);
    assert_eq!(
        snapshot.errors,
        vec![Diagnosis::Fork {
            at: Position::new(2, 10)
        }]
    );
    assert_eq!(snapshot.path(), "@--A---+");
    assert!(!snapshot.running);
}

#[test]
fn test_broken_path() {
    let track = "
    @--A-+
         |

         B-x";
    let snapshot = walk(track);
    assert_eq!(
        snapshot.errors,
        vec![Diagnosis::BrokenPath {
            at: Position::new(1, 9)
        }]
    );
}

#[test]
fn test_multiple_starting_paths() {
    let snapshot = walk("  x-B-@-A-x");
    assert_eq!(
        snapshot.errors,
        vec![Diagnosis::MultipleStartingPaths {
            at: Position::new(0, 6)
        }]
    );
    assert_eq!(snapshot.path(), "@");
}

#[test]
fn test_fake_turn() {
    let snapshot = walk("  @-A-+-B-x");
    assert_eq!(
        snapshot.errors,
        vec![Diagnosis::FakeTurn {
            at: Position::new(0, 6)
        }]
    );
    assert_eq!(snapshot.letters(), "A");
}

#[test]
fn test_path_leads_outside_bounds() {
    let track = "
   @--A---+
          |
          C
          |
         x|";
    let snapshot = walk(track);
    assert_eq!(
        snapshot.errors,
        vec![Diagnosis::OutOfBounds {
            at: Position::new(4, 10)
        }]
    );
    assert_eq!(snapshot.path(), "@--A---+|C||");
}

#[test]
fn test_endless_loop_is_diagnosed() {
    let track = "
A+@
A+
 +x";
    let snapshot = walk(track);
    assert!(matches!(
        snapshot.errors[..],
        [Diagnosis::EndlessLoop { steps: 36, .. }]
    ));
    // Both stations are passed many times but credited once each
    assert_eq!(snapshot.letters(), "AA");
}

// === ENGINE LIFECYCLE ===

#[test]
fn test_snapshots_arrive_in_step_order() {
    let track = "
@---A---+
        |
x-B-+   C
    |   |
    +---+";
    let mut engine = TraversalEngine::new(Grid::parse(track), SnapshotLog::new(1 << 20));
    engine.start().unwrap();
    engine.run_to_end();

    let log = engine.reporter();
    let path_len = engine.snapshot().path_characters.len();
    // One startup snapshot plus one per move
    assert_eq!(log.len(), path_len);
    for (i, snapshot) in log.iter().enumerate() {
        assert_eq!(snapshot.step, i);
        assert_eq!(snapshot.path_characters.len(), i + 1);
    }
    assert!(log.iter().take(log.len() - 1).all(|s| s.running));
    assert_eq!(engine.phase(), Phase::Halted(Outcome::Arrived));
}

#[test]
fn test_startup_failure_reports_one_snapshot() {
    let mut engine = TraversalEngine::new(Grid::parse("-A-x"), SnapshotLog::new(1 << 20));
    engine.start().unwrap();
    engine.run_to_end();

    assert_eq!(engine.reporter().len(), 1);
    assert_eq!(engine.phase(), Phase::Halted(Outcome::Diagnosed));
}

#[test]
fn test_restart_after_reset_reproduces_result() {
    let track = "
@-A--+
     |
     +-B--x-C--D";
    let mut engine = TraversalEngine::new(Grid::parse(track), SnapshotLog::new(1 << 20));
    engine.start().unwrap();
    engine.run_to_end();
    let first = engine.snapshot();

    engine.reset();
    engine.start().unwrap();
    engine.run_to_end();
    assert_eq!(engine.snapshot(), first);
}

#[test]
fn test_closure_reporter_sees_every_step() {
    let mut seen = Vec::new();
    {
        let reporter = |s: &Snapshot| seen.push(s.path());
        let mut engine = TraversalEngine::new(Grid::parse("@-B-x"), reporter);
        engine.start().unwrap();
        engine.run_to_end();
    }
    assert_eq!(seen, vec!["@", "@-", "@-B", "@-B-", "@-B-x"]);
}
