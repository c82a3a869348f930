//! Time slot lines and slot assignment.
//!
//! A slot line holds slots `1..=slot_count`, each empty or holding one job.
//! Placing a job takes the latest free slot at or before its deadline. If a
//! job with deadline `d` can be scheduled at all, the latest free slot
//! `<= d` is always a safe choice, which makes this the placement step of
//! every greedy-family strategy.
//!
//! Two interchangeable implementations:
//!
//! | Assigner | Placement cost |
//! |----------|----------------|
//! | [`TimeSlotLine`] | O(d) backward scan |
//! | [`DisjointSlotLine`] | amortized near O(1), union-find with path compression |
//!
//! Both choose the same slot for the same sequence of placements.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Problem 16-4 and Ch. 21

use serde::{Deserialize, Serialize};

use crate::models::Job;

/// Places jobs into the latest free slot at or before their deadline.
pub trait SlotAssigner<'a> {
    /// Number of slots in the line.
    fn slot_count(&self) -> usize;

    /// Number of occupied slots.
    fn filled(&self) -> usize;

    /// Assigns `job` and returns its slot (1-based), or `None` if every
    /// slot up to its deadline is taken.
    fn assign(&mut self, job: &'a Job) -> Option<usize>;

    /// Job in `slot` (1-based), if any.
    fn occupant(&self, slot: usize) -> Option<&'a Job>;

    /// Assigns `job`; `false` means the job is unschedulable.
    fn place(&mut self, job: &'a Job) -> bool {
        self.assign(job).is_some()
    }

    /// Whether every slot is occupied.
    fn is_full(&self) -> bool {
        self.filled() == self.slot_count()
    }
}

/// Which slot assigner greedy-family strategies use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignerKind {
    /// Backward linear scan.
    #[default]
    Linear,
    /// Union-find "nearest free slot" structure.
    DisjointSet,
}

impl AssignerKind {
    /// Creates an empty assigner of this kind with `slot_count` slots.
    pub fn create<'a>(self, slot_count: usize) -> Box<dyn SlotAssigner<'a> + 'a> {
        match self {
            AssignerKind::Linear => Box::new(TimeSlotLine::new(slot_count)),
            AssignerKind::DisjointSet => Box::new(DisjointSlotLine::new(slot_count)),
        }
    }
}

/// Slot line with a backward linear scan.
#[derive(Debug, Clone)]
pub struct TimeSlotLine<'a> {
    slots: Vec<Option<&'a Job>>,
    filled: usize,
}

impl<'a> TimeSlotLine<'a> {
    /// Creates a line of `slot_count` empty slots.
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
            filled: 0,
        }
    }

    /// Whether `slot` (1-based) exists and is empty.
    #[inline]
    pub fn is_free(&self, slot: usize) -> bool {
        slot >= 1 && matches!(self.slots.get(slot - 1), Some(None))
    }

    /// Puts `job` into `slot` if it is free.
    pub fn fill(&mut self, slot: usize, job: &'a Job) -> bool {
        if !self.is_free(slot) {
            return false;
        }
        self.slots[slot - 1] = Some(job);
        self.filled += 1;
        true
    }

    /// Occupants in slot order.
    pub fn occupants(&self) -> impl Iterator<Item = Option<&'a Job>> + '_ {
        self.slots.iter().copied()
    }
}

impl<'a> SlotAssigner<'a> for TimeSlotLine<'a> {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn filled(&self) -> usize {
        self.filled
    }

    fn assign(&mut self, job: &'a Job) -> Option<usize> {
        let latest = job.deadline().min(self.slots.len());
        let slot = (1..=latest).rev().find(|&slot| self.slots[slot - 1].is_none())?;
        self.slots[slot - 1] = Some(job);
        self.filled += 1;
        Some(slot)
    }

    fn occupant(&self, slot: usize) -> Option<&'a Job> {
        slot.checked_sub(1)
            .and_then(|index| self.slots.get(index))
            .copied()
            .flatten()
    }
}

/// Slot line backed by a disjoint-set forest.
///
/// `parent[s]` leads to the latest free slot `<= s`; slot 0 is a sentinel
/// meaning "no free slot".
#[derive(Debug, Clone)]
pub struct DisjointSlotLine<'a> {
    parent: Vec<usize>,
    slots: Vec<Option<&'a Job>>,
    filled: usize,
}

impl<'a> DisjointSlotLine<'a> {
    /// Creates a line of `slot_count` empty slots.
    pub fn new(slot_count: usize) -> Self {
        Self {
            parent: (0..=slot_count).collect(),
            slots: vec![None; slot_count],
            filled: 0,
        }
    }

    fn find(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = slot;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }
}

impl<'a> SlotAssigner<'a> for DisjointSlotLine<'a> {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn filled(&self) -> usize {
        self.filled
    }

    fn assign(&mut self, job: &'a Job) -> Option<usize> {
        let latest = job.deadline().min(self.slots.len());
        let slot = self.find(latest);
        if slot == 0 {
            return None;
        }
        self.slots[slot - 1] = Some(job);
        self.parent[slot] = slot - 1;
        self.filled += 1;
        Some(slot)
    }

    fn occupant(&self, slot: usize) -> Option<&'a Job> {
        slot.checked_sub(1)
            .and_then(|index| self.slots.get(index))
            .copied()
            .flatten()
    }
}
