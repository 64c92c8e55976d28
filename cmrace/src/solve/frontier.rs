use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};

use super::FrontierEntry;
use crate::dims::Dims;

/// Discovered-but-unexpanded entries, ordered by the search discipline.
///
/// The traversal loop is identical for every discipline; the pop order of its
/// frontier is the only thing that differs.
pub trait Frontier {
    fn push(&mut self, entry: FrontierEntry);
    fn pop(&mut self) -> Option<FrontierEntry>;
}

/// LIFO frontier, depth-biased exploration.
#[derive(Debug, Default)]
pub struct StackFrontier(Vec<FrontierEntry>);

impl Frontier for StackFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.0.push(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.0.pop()
    }
}

/// FIFO frontier, level-by-level exploration. First exit hit has the fewest
/// edges possible.
#[derive(Debug, Default)]
pub struct QueueFrontier(VecDeque<FrontierEntry>);

impl Frontier for QueueFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.0.push_back(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.0.pop_front()
    }
}

/// Min-priority frontier keyed by `path length + manhattan distance to goal`.
///
/// Entries with equal priority pop in insertion order. The sequence counter
/// makes that explicit instead of leaning on whatever `BinaryHeap` does with
/// ties, so equal-cost paths are found reproducibly.
#[derive(Debug)]
pub struct BestFirstFrontier {
    goal: Dims,
    seq: u64,
    heap: BinaryHeap<Ranked>,
}

impl BestFirstFrontier {
    pub fn new(goal: Dims) -> Self {
        Self {
            goal,
            seq: 0,
            heap: BinaryHeap::new(),
        }
    }
}

impl Frontier for BestFirstFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        let priority = entry.path.len() as i32 + entry.pos.manhattan(self.goal);
        self.heap.push(Ranked {
            priority,
            seq: self.seq,
            entry,
        });
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|ranked| ranked.entry)
    }
}

#[derive(Debug)]
struct Ranked {
    priority: i32,
    seq: u64,
    entry: FrontierEntry,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    // Reversed so the max-heap pops the lowest priority, then the lowest
    // sequence number.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
