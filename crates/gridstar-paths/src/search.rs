use std::hash::Hash;

use gridstar_core::{CellBits, GridView, Point};

use crate::astar::Direction;
use crate::cache::{SearchCache, with_thread_cache};
use crate::distance::{Manhattan, UnitCost};
use crate::neighbors::{CardinalNeighbors, Passable};
use crate::sink::OutputSink;
use crate::traits::{Heuristic, MovementCost, NeighborSource};

/// Returned by the `find_path` family when no path exists.
pub const NO_PATH: i32 = -1;

/// A neighbor enumerator, heuristic and movement cost used together.
///
/// The cached entry points hash the three policies into the cache key, so
/// two searches of the same type with different values (say `Passable(1)`
/// and `Passable(2)`) never share a stored result. Policies that cannot be
/// hashed, such as closures, go through
/// [`find_path_uncached`](Self::find_path_uncached).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridSearch<N, H, M> {
    pub neighbors: N,
    pub heuristic: H,
    pub movement: M,
}

/// Four-way movement over `u8` cells where `1` is passable, with Manhattan
/// distance and unit steps.
pub type DefaultSearch = GridSearch<CardinalNeighbors<Passable<u8>>, Manhattan, UnitCost>;

enum Endpoints {
    /// Answer known without searching.
    Resolved(i32),
    Search { start: usize, end: usize },
}

impl<N, H, M> GridSearch<N, H, M> {
    pub const fn new(neighbors: N, heuristic: H, movement: M) -> Self {
        Self {
            neighbors,
            heuristic,
            movement,
        }
    }

    /// Direction these policies search in over cells of type `T`.
    pub const fn direction<T>() -> Direction
    where
        H: Heuristic,
        M: MovementCost<T>,
    {
        Direction::choose(H::OPERATION, M::OPERATION)
    }

    fn endpoints<T, S>(&self, start: Point, end: Point, grid: &GridView<'_, T>, output: &mut S) -> Endpoints
    where
        N: NeighborSource<T>,
        S: OutputSink + ?Sized,
    {
        assert!(
            grid.coordinate_valid(start),
            "start {start} outside {}x{} grid",
            grid.width(),
            grid.height()
        );
        assert!(
            grid.coordinate_valid(end),
            "end {end} outside {}x{} grid",
            grid.width(),
            grid.height()
        );
        output.clear();

        let start = grid.index_from_coord(start);
        let end = grid.index_from_coord(end);
        if !self.neighbors.traversable(grid, start) || !self.neighbors.traversable(grid, end) {
            return Endpoints::Resolved(NO_PATH);
        }
        if start == end {
            return Endpoints::Resolved(0);
        }
        Endpoints::Search { start, end }
    }
}

impl<N, H, M> GridSearch<N, H, M>
where
    H: Heuristic,
{
    /// Shortest path from `start` to `end`, using this thread's search cache.
    ///
    /// Writes the path (excluding `start`, including `end`) into `output`
    /// and returns its number of edges. Returns [`NO_PATH`] if either
    /// endpoint is blocked or the target is unreachable, and `0` with an
    /// empty `output` if `start == end`.
    ///
    /// # Panics
    ///
    /// If `start` or `end` lies outside `grid`.
    pub fn find_path<T, S>(&self, start: Point, end: Point, grid: &GridView<'_, T>, output: &mut S) -> i32
    where
        T: CellBits + 'static,
        N: NeighborSource<T> + Hash + 'static,
        H: Hash + 'static,
        M: MovementCost<T, Value = H::Value> + Hash + 'static,
        S: OutputSink + ?Sized,
    {
        with_thread_cache(|cache: &mut SearchCache<H::Value>| {
            self.find_path_with(cache, start, end, grid, output)
        })
    }

    /// Like [`find_path`](Self::find_path), with an explicit cache.
    pub fn find_path_with<T, S>(
        &self,
        cache: &mut SearchCache<H::Value>,
        start: Point,
        end: Point,
        grid: &GridView<'_, T>,
        output: &mut S,
    ) -> i32
    where
        T: CellBits + 'static,
        N: NeighborSource<T> + Hash + 'static,
        H: Hash + 'static,
        M: MovementCost<T, Value = H::Value> + Hash + 'static,
        S: OutputSink + ?Sized,
    {
        match self.endpoints(start, end, grid, output) {
            Endpoints::Resolved(n) => n,
            Endpoints::Search { start, end } => {
                let direction = cache.lookup(self, grid, start, end);
                cache.emit(direction, start, end, output)
            }
        }
    }

    /// Like [`find_path`](Self::find_path), on fresh state that is dropped
    /// afterwards. Works for any cell type.
    pub fn find_path_uncached<T, S>(&self, start: Point, end: Point, grid: &GridView<'_, T>, output: &mut S) -> i32
    where
        N: NeighborSource<T>,
        M: MovementCost<T, Value = H::Value>,
        S: OutputSink + ?Sized,
    {
        match self.endpoints(start, end, grid, output) {
            Endpoints::Resolved(n) => n,
            Endpoints::Search { start, end } => {
                let mut cache = SearchCache::new();
                let direction = cache.recompute(self, grid, start, end);
                cache.emit(direction, start, end, output)
            }
        }
    }
}

/// Shortest four-way path over a `u8` grid where `1` marks passable cells.
///
/// See [`GridSearch::find_path`] for the return value and output contract.
pub fn find_path<S: OutputSink + ?Sized>(start: Point, end: Point, grid: &GridView<'_, u8>, output: &mut S) -> i32 {
    DefaultSearch::default().find_path(start, end, grid, output)
}
