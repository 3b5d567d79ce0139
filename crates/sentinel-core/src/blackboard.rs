use std::any::Any;
use std::collections::{BTreeMap, VecDeque};
use std::marker::PhantomData;

use crate::Cell;

/// Upper bound on retained debug notes; the oldest note is dropped first.
pub const DEBUG_NOTES_CAPACITY: usize = 64;

/// A remembered perception: where it was last sensed and how long ago.
///
/// `elapsed` keeps growing after the cell is forgotten, so a memory can be
/// "old and empty" but never "fresh and empty".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Memory {
    cell: Option<Cell>,
    elapsed: f32,
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            cell: None,
            elapsed: f32::INFINITY,
        }
    }
}

impl Memory {
    /// Positive sample: remember `cell` and reset the recency timer.
    pub fn observe(&mut self, cell: Cell) {
        self.cell = Some(cell);
        self.elapsed = 0.0;
    }

    /// Negative sample: the memory gets `seconds` older.
    pub fn age(&mut self, seconds: f32) {
        self.elapsed += seconds;
    }

    /// Drop the remembered cell. The timer is left untouched.
    pub fn forget(&mut self) {
        self.cell = None;
    }

    pub fn cell(&self) -> Option<Cell> {
        self.cell
    }

    /// Seconds since the last positive sample (+inf if never sensed).
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// The remembered cell, if one exists and was sensed at most `within` seconds ago.
    pub fn recent(&self, within: f32) -> Option<Cell> {
        self.cell.filter(|_| self.elapsed <= within)
    }
}

/// An in-progress path and its cursor.
///
/// The cursor always indexes a cell of `cells`; an exhausted path is removed
/// from the blackboard instead of being kept with an out-of-range cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePath {
    cells: Vec<Cell>,
    cursor: usize,
}

impl ActivePath {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn next_cell(&self) -> Cell {
        self.cells[self.cursor]
    }

    pub fn remaining(&self) -> usize {
        self.cells.len() - self.cursor
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BbKey<T: 'static> {
    id: u64,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: 'static> Copy for BbKey<T> {}

impl<T: 'static> Clone for BbKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> BbKey<T> {
    pub const fn new(id: u64) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    pub fn id(self) -> u64 {
        self.id
    }
}

/// Per-agent memory shared by sensors (writers), actions (readers/writers), and
/// conditions (readers).
///
/// The fixed fields cover the built-in perception and movement behaviors.
/// Host-registered actions and sensors can keep their own typed state in the
/// extension slots via [`BbKey`].
#[derive(Default)]
pub struct Blackboard {
    pub seen_target: Memory,
    pub heard_noise: Memory,
    /// Reserved escalation accumulator; no built-in behavior reads it.
    pub suspicion: f32,
    path: Option<ActivePath>,
    debug_notes: VecDeque<String>,
    extensions: BTreeMap<u64, Box<dyn Any>>,
}

impl core::fmt::Debug for Blackboard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Blackboard")
            .field("seen_target", &self.seen_target)
            .field("heard_noise", &self.heard_noise)
            .field("suspicion", &self.suspicion)
            .field("path", &self.path)
            .field("debug_notes", &self.debug_notes.len())
            .field("extensions", &self.extensions.len())
            .finish()
    }
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&ActivePath> {
        self.path.as_ref()
    }

    /// The cell the active path is heading to, if any.
    pub fn path_next(&self) -> Option<Cell> {
        self.path.as_ref().map(ActivePath::next_cell)
    }

    /// Replace the active path. An empty `cells` clears it.
    pub fn set_path(&mut self, cells: Vec<Cell>) {
        self.path = if cells.is_empty() {
            None
        } else {
            Some(ActivePath { cells, cursor: 0 })
        };
    }

    /// Move the cursor past the current cell.
    ///
    /// Returns the new next cell, or `None` when that was the last cell, in
    /// which case the path is cleared.
    pub fn advance_path(&mut self) -> Option<Cell> {
        let path = self.path.as_mut()?;
        if path.cursor + 1 < path.cells.len() {
            path.cursor += 1;
            Some(path.next_cell())
        } else {
            self.path = None;
            None
        }
    }

    pub fn clear_path(&mut self) {
        self.path = None;
    }

    pub fn note(&mut self, note: impl Into<String>) {
        if self.debug_notes.len() == DEBUG_NOTES_CAPACITY {
            self.debug_notes.pop_front();
        }
        self.debug_notes.push_back(note.into());
    }

    pub fn debug_notes(&self) -> &VecDeque<String> {
        &self.debug_notes
    }

    pub fn clear_notes(&mut self) {
        self.debug_notes.clear();
    }

    pub fn contains<T: 'static>(&self, key: BbKey<T>) -> bool {
        self.extensions.contains_key(&key.id)
    }

    pub fn set<T: 'static>(&mut self, key: BbKey<T>, value: T) {
        self.extensions.insert(key.id, Box::new(value));
    }

    pub fn get<T: 'static>(&self, key: BbKey<T>) -> Option<&T> {
        let value = self.extensions.get(&key.id)?;
        value.downcast_ref::<T>().or_else(|| {
            panic!(
                "blackboard type mismatch for key id={} (stored type differs from requested)",
                key.id
            )
        })
    }

    pub fn get_mut<T: 'static>(&mut self, key: BbKey<T>) -> Option<&mut T> {
        let value = self.extensions.get_mut(&key.id)?;
        value.downcast_mut::<T>().or_else(|| {
            panic!(
                "blackboard type mismatch for key id={} (stored type differs from requested)",
                key.id
            )
        })
    }

    pub fn remove<T: 'static>(&mut self, key: BbKey<T>) -> Option<T> {
        let value = self.extensions.remove(&key.id)?;
        value.downcast::<T>().map(|b| *b).ok().or_else(|| {
            panic!(
                "blackboard type mismatch for key id={} (stored type differs from requested)",
                key.id
            )
        })
    }
}
