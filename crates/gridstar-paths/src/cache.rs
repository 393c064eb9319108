//! Reusable search state.
//!
//! A [`SearchCache`] owns the visited map, frontier and scratch buffers of a
//! search. When the next query has the same endpoints, dimensions, grid
//! fingerprint and policies as the previous one, the stored result is
//! replayed instead of searching again.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::hash::{Hash, Hasher};

use gridstar_core::{CellBits, GridView};
use rustc_hash::{FxHashMap, FxHasher};

use crate::astar::{self, Direction, SearchState};
use crate::config::{ConfigError, SearchConfig};
use crate::emit;
use crate::frontier::{Frontier, IndexData, Visited};
use crate::search::{GridSearch, NO_PATH};
use crate::sink::OutputSink;
use crate::traits::{Cost, Heuristic, MovementCost, NeighborSource};

/// Identity of the query whose result a cache holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub start: usize,
    pub end: usize,
    pub width: usize,
    pub height: usize,
    pub fingerprint: u64,
    /// Cell and policy types the result was computed with.
    pub policy: TypeId,
    /// Hash of the policy values.
    pub policy_hash: u64,
}

/// Counters of how queries were served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheStats {
    /// Stored result replayed.
    pub hits: u64,
    /// Searched and stored under a new key.
    pub misses: u64,
    /// Grid below the cache threshold; searched without storing a key.
    pub bypasses: u64,
}

/// Caller-owned arena for A* searches with cost type `C`.
///
/// Policies are identified by type and by the hash of their values. Two
/// policy values that hash alike must behave alike.
#[derive(Debug, Clone)]
pub struct SearchCache<C> {
    key: Option<CacheKey>,
    visited: Visited<C>,
    frontier: Frontier<C>,
    state: SearchState,
    scratch: Vec<usize>,
    nbuf: Vec<usize>,
    stats: CacheStats,
    config: SearchConfig,
}

impl<C: Cost> SearchCache<C> {
    /// Create an empty cache with the default [`SearchConfig`].
    pub fn new() -> Self {
        Self {
            key: None,
            visited: Visited::new(),
            frontier: Frontier::new(),
            state: SearchState::Idle,
            scratch: Vec::new(),
            nbuf: Vec::with_capacity(4),
            stats: CacheStats::default(),
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the configuration. The stored result stays valid.
    pub fn set_config(&mut self, config: SearchConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Drop the stored result and every buffered entry. Statistics are kept.
    pub fn reset(&mut self) {
        log::debug!("search cache reset ({} visited entries dropped)", self.visited.len());
        self.clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Key of the stored result, if any.
    pub fn key(&self) -> Option<&CacheKey> {
        self.key.as_ref()
    }

    /// Number of cells relaxed by the stored search.
    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    /// Visited entry of `index` in the stored search.
    pub fn visited_entry(&self, index: usize) -> Option<IndexData<C>> {
        self.visited.get(index).copied()
    }

    fn clear(&mut self) {
        self.key = None;
        self.visited.clear();
        self.frontier.reset(0);
        self.scratch.clear();
        self.state = SearchState::Idle;
    }

    /// Make the cache hold the result of `start -> end`, replaying a stored
    /// result when the key matches.
    pub(crate) fn lookup<T, N, H, M>(
        &mut self,
        search: &GridSearch<N, H, M>,
        grid: &GridView<'_, T>,
        start: usize,
        end: usize,
    ) -> Direction
    where
        T: CellBits + 'static,
        N: NeighborSource<T> + Hash + 'static,
        H: Heuristic<Value = C> + Hash + 'static,
        M: MovementCost<T, Value = C> + Hash + 'static,
    {
        if grid.size() < self.config.cache_threshold {
            self.stats.bypasses += 1;
            log::trace!("search cache bypassed for {} cell grid", grid.size());
            return self.recompute(search, grid, start, end);
        }

        let key = CacheKey {
            start,
            end,
            width: grid.width(),
            height: grid.height(),
            fingerprint: grid.fingerprint(),
            policy: TypeId::of::<(T, N, H, M)>(),
            policy_hash: policy_hash(search),
        };
        let direction = GridSearch::<N, H, M>::direction::<T>();
        if self.key == Some(key) && self.state.is_terminal() {
            self.stats.hits += 1;
            log::trace!("search cache hit for {start} -> {end}");
            return direction;
        }

        self.stats.misses += 1;
        self.recompute(search, grid, start, end);
        self.key = Some(key);
        direction
    }

    /// Search `start -> end` from scratch and leave the cache without a key.
    pub(crate) fn recompute<T, N, H, M>(
        &mut self,
        search: &GridSearch<N, H, M>,
        grid: &GridView<'_, T>,
        start: usize,
        end: usize,
    ) -> Direction
    where
        N: NeighborSource<T>,
        H: Heuristic<Value = C>,
        M: MovementCost<T, Value = C>,
    {
        self.clear();

        let distance = grid.estimate(start, end, |a, b| search.heuristic.estimate(a, b));
        let prealloc = self.config.prealloc_for(distance.to_f64());
        self.visited.reserve(prealloc);
        self.frontier.reset(prealloc);

        let direction = GridSearch::<N, H, M>::direction::<T>();
        let (origin, target) = match direction {
            Direction::Forward => (start, end),
            Direction::Reversed => (end, start),
        };

        self.state = SearchState::Running;
        self.state = astar::run(
            &search.neighbors,
            &search.heuristic,
            &search.movement,
            grid,
            origin,
            target,
            &mut self.visited,
            &mut self.frontier,
            &mut self.nbuf,
        );
        log::debug!(
            "{direction:?} search {start} -> {end} ended {:?} ({} visited, {} queued, prealloc {prealloc})",
            self.state,
            self.visited.len(),
            self.frontier.len(),
        );
        direction
    }

    /// Write the stored path into `sink` and return its length in edges, or
    /// [`NO_PATH`].
    pub(crate) fn emit<S: OutputSink + ?Sized>(
        &mut self,
        direction: Direction,
        start: usize,
        end: usize,
        sink: &mut S,
    ) -> i32 {
        if !matches!(self.state, SearchState::Found { .. }) {
            sink.clear();
            return NO_PATH;
        }
        let edges = match direction {
            Direction::Forward => emit::forward(&self.visited, start, end, &mut self.scratch, sink),
            Direction::Reversed => emit::inverted(&self.visited, start, end, sink),
        };
        i32::try_from(edges).unwrap_or(i32::MAX)
    }
}

fn policy_hash<P: Hash>(policies: &P) -> u64 {
    let mut hasher = FxHasher::default();
    policies.hash(&mut hasher);
    hasher.finish()
}

impl<C: Cost> Default for SearchCache<C> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Per-thread caches
// ---------------------------------------------------------------------------

thread_local! {
    static CACHES: RefCell<FxHashMap<TypeId, Box<dyn Any>>> = RefCell::new(FxHashMap::default());
}

/// Run `f` with this thread's cache for cost type `C`.
///
/// Each thread owns one cache per cost type. If the thread's caches are
/// already in use further up the call stack (a policy issuing its own
/// query), `f` receives a temporary cache instead.
pub fn with_thread_cache<C: Cost, R>(f: impl FnOnce(&mut SearchCache<C>) -> R) -> R {
    CACHES.with(|caches| {
        let Ok(mut caches) = caches.try_borrow_mut() else {
            log::trace!("thread search cache busy, using a temporary one");
            return f(&mut SearchCache::new());
        };
        let slot = caches
            .entry(TypeId::of::<C>())
            .or_insert_with(|| Box::new(SearchCache::<C>::new()));
        match slot.downcast_mut::<SearchCache<C>>() {
            Some(cache) => f(cache),
            None => f(&mut SearchCache::new()),
        }
    })
}
