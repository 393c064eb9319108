//! Cached A* shortest paths over uniform 2D grids.
//!
//! The engine answers single-pair queries on a read-only [`GridView`]:
//!
//! ```
//! use gridstar_core::{GridView, Point};
//!
//! let cells = [1u8, 1, 0, 1];
//! let grid = GridView::new(&cells, 2, 2);
//! let mut path: Vec<usize> = Vec::new();
//! let edges = gridstar_paths::find_path(Point::new(0, 0), Point::new(1, 1), &grid, &mut path);
//! assert_eq!(edges, 2);
//! assert_eq!(path, vec![1, 3]);
//! ```
//!
//! Paths are written as linear cell indices, excluding the start and
//! including the goal, into any [`OutputSink`]. Fixed-capacity sinks keep the
//! nodes nearest the goal when the path does not fit.
//!
//! Each thread keeps a [`SearchCache`] per cost type. Repeating the previous
//! query on an unchanged grid with equal policies replays the stored result;
//! an explicit cache can be passed to [`GridSearch::find_path_with`] instead.
//!
//! # Policies
//!
//! | Trait | Built-in | Role |
//! |---|---|---|
//! | [`NeighborSource`] | [`CardinalNeighbors`] | Traversable cells and their neighbors |
//! | [`Heuristic`] | [`Manhattan`], [`Euclidean`] | Admissible distance estimate |
//! | [`MovementCost`] | [`UnitCost`] | Positive edge weight |
//!
//! When both the heuristic and the movement cost are
//! [`Commutative`](OperationType::Commutative) the search runs from the goal
//! back to the start.
//!
//! [`GridView`]: gridstar_core::GridView

mod astar;
mod cache;
mod config;
mod distance;
mod emit;
mod frontier;
mod neighbors;
mod search;
mod sink;
mod traits;

pub use astar::{Direction, SearchState};
pub use cache::{CacheKey, CacheStats, SearchCache, with_thread_cache};
pub use config::{ConfigError, SearchConfig};
pub use distance::{Directed, Euclidean, Manhattan, UnitCost, euclidean, manhattan};
pub use frontier::{IndexData, NO_PREDECESSOR};
pub use neighbors::{CardinalNeighbors, Passable};
pub use search::{DefaultSearch, GridSearch, NO_PATH, find_path};
pub use sink::{BoundedPath, OutputSink, SlicePath, StaticPath};
pub use traits::{CellFilter, Cost, Heuristic, MovementCost, NeighborSource, OperationType};
