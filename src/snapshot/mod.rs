// Snapshots of run state and the reporters that receive them

use crate::track::{Heading, Position};
use crate::walker::errors::Diagnosis;
use std::collections::VecDeque;

/// Read-only view of a run, emitted after startup and after every step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Number of steps taken so far; 0 for the startup snapshot
    pub step: usize,
    pub position: Option<Position>,
    pub heading: Heading,
    /// Letters in first-encounter order, one entry per credited station
    pub collected_letters: Vec<char>,
    /// Every visited character, start included
    pub path_characters: Vec<char>,
    pub running: bool,
    pub errors: Vec<Diagnosis>,
}

impl Snapshot {
    pub fn letters(&self) -> String {
        self.collected_letters.iter().collect()
    }

    pub fn path(&self) -> String {
        self.path_characters.iter().collect()
    }

    pub fn first_error(&self) -> Option<&Diagnosis> {
        self.errors.first()
    }

    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        let chars = (self.collected_letters.len() + self.path_characters.len())
            * std::mem::size_of::<char>();
        let errors = self.errors.len() * std::mem::size_of::<Diagnosis>();
        std::mem::size_of::<Snapshot>() + chars + errors
    }
}

/// Receives every snapshot of a run, in step order
pub trait Reporter {
    fn report(&mut self, snapshot: &Snapshot);
}

impl<F> Reporter for F
where
    F: FnMut(&Snapshot),
{
    fn report(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}

/// Discards every snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _snapshot: &Snapshot) {}
}

/// Snapshot history with a memory budget.
///
/// Snapshots are kept in arrival order. When the budget is exceeded the oldest
/// ones are evicted, so the newest snapshot is always available.
#[derive(Debug)]
pub struct SnapshotLog {
    snapshots: VecDeque<Snapshot>,
    max_memory: usize,
    current_memory: usize,
    evicted: usize,
}

impl SnapshotLog {
    pub fn new(max_memory: usize) -> Self {
        SnapshotLog {
            snapshots: VecDeque::new(),
            max_memory,
            current_memory: 0,
            evicted: 0,
        }
    }

    /// Add a snapshot to history, evicting the oldest ones if needed
    pub fn push(&mut self, snapshot: Snapshot) {
        let snapshot_size = snapshot.estimated_size();

        while self.current_memory + snapshot_size > self.max_memory {
            let Some(oldest) = self.snapshots.pop_front() else {
                break;
            };
            self.current_memory -= oldest.estimated_size();
            self.evicted += 1;
        }

        self.current_memory += snapshot_size;
        self.snapshots.push_back(snapshot);
    }

    /// Get a retained snapshot by index (0 is the oldest retained)
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    /// Get the number of retained snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Number of snapshots dropped to stay within the memory limit
    pub fn evicted(&self) -> usize {
        self.evicted
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.current_memory = 0;
        self.evicted = 0;
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

impl Reporter for SnapshotLog {
    fn report(&mut self, snapshot: &Snapshot) {
        self.push(snapshot.clone());
    }
}
