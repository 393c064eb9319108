//! Frontier (open set) and visited map used by the search core.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use crate::traits::Cost;

/// Predecessor of a cell that was reached without one (the search origin).
pub const NO_PREDECESSOR: usize = usize::MAX;

/// One entry of the visited map.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexData<C> {
    pub predecessor: usize,
    pub cost: C,
}

impl<C: Cost> Default for IndexData<C> {
    fn default() -> Self {
        Self {
            predecessor: NO_PREDECESSOR,
            cost: C::INFINITY,
        }
    }
}

// ---------------------------------------------------------------------------
// Visited
// ---------------------------------------------------------------------------

/// Map from a relaxed cell index to its best known cost and predecessor.
///
/// Serves as both the open and the closed table: a cell may be lowered again
/// while it still sits in the frontier.
#[derive(Debug, Clone)]
pub(crate) struct Visited<C> {
    map: FxHashMap<usize, IndexData<C>>,
}

impl<C: Cost> Visited<C> {
    pub(crate) fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&IndexData<C>> {
        self.map.get(&index)
    }

    pub(crate) fn insert(&mut self, index: usize, data: IndexData<C>) {
        self.map.insert(index, data);
    }

    /// Entry for `index`, created with infinite cost if absent.
    pub(crate) fn slot(&mut self, index: usize) -> &mut IndexData<C> {
        self.map.entry(index).or_default()
    }

    /// Best known cost of `index`, infinite if it was never relaxed.
    pub(crate) fn cost(&self, index: usize) -> C {
        self.map.get(&index).map_or(C::INFINITY, |d| d.cost)
    }
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry<C> {
    pub(crate) index: usize,
    pub(crate) priority: C,
    /// Path cost of `index` when this entry was pushed.
    pub(crate) cost: C,
}

impl<C: Cost> PartialEq for FrontierEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: Cost> Eq for FrontierEntry<C> {}

impl<C: Cost> Ord for FrontierEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first.
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
    }
}

impl<C: Cost> PartialOrd for FrontierEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of discovered cells. Duplicates are allowed; stale
/// entries are skipped by the search when popped.
#[derive(Debug, Clone)]
pub(crate) struct Frontier<C> {
    heap: BinaryHeap<FrontierEntry<C>>,
}

impl<C: Cost> Frontier<C> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Drop every entry and make room for `capacity` entries.
    pub(crate) fn reset(&mut self, capacity: usize) {
        let mut storage = std::mem::take(&mut self.heap).into_vec();
        storage.clear();
        storage.reserve(capacity);
        self.heap = BinaryHeap::from(storage);
    }

    pub(crate) fn push(&mut self, index: usize, priority: C, cost: C) {
        self.heap.push(FrontierEntry {
            index,
            priority,
            cost,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<FrontierEntry<C>> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
