//! The A* loop.
//!
//! Costs live in [`Visited`]; there is no separate closed set. The goal is
//! recognised when it is first discovered as a neighbor, which is exact for
//! consistent heuristics on unit-cost grids.

use gridstar_core::GridView;

use crate::frontier::{Frontier, IndexData, NO_PREDECESSOR, Visited};
use crate::traits::{Cost, Heuristic, MovementCost, NeighborSource, OperationType};

/// Lifecycle of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// No search has run on this state yet.
    Idle,
    /// The loop is in progress. Only observable after a policy panicked and
    /// the panic was caught; the next query on the cache searches again, so
    /// no [`reset`](crate::SearchCache::reset) is needed.
    Running,
    /// The target was reached; its visited entry holds the last step.
    Found { goal: usize },
    /// The frontier ran dry without reaching the target.
    Exhausted,
}

impl SearchState {
    /// Whether the state is a completed search that can be replayed.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Found { .. } | Self::Exhausted)
    }
}

/// Which end of the query the search expands from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Start towards goal; the path is rebuilt by walking back and reversing.
    Forward,
    /// Goal towards start; the predecessor chain already runs start to goal.
    Reversed,
}

impl Direction {
    /// Reversed only if both policies are commutative.
    pub const fn choose(heuristic: OperationType, cost: OperationType) -> Self {
        match (heuristic, cost) {
            (OperationType::Commutative, OperationType::Commutative) => Self::Reversed,
            _ => Self::Forward,
        }
    }
}

/// Run A* from `origin` until `target` is discovered or the frontier is empty.
///
/// `visited` and `frontier` must be empty; `nbuf` is scratch space.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run<T, N, H, M>(
    neighbors: &N,
    heuristic: &H,
    movement: &M,
    grid: &GridView<'_, T>,
    origin: usize,
    target: usize,
    visited: &mut Visited<H::Value>,
    frontier: &mut Frontier<H::Value>,
    nbuf: &mut Vec<usize>,
) -> SearchState
where
    N: NeighborSource<T>,
    H: Heuristic,
    M: MovementCost<T, Value = H::Value>,
{
    let zero = <H::Value as Cost>::ZERO;
    let target_point = grid.coord_from_index(target);

    frontier.push(origin, zero, zero);
    visited.insert(
        origin,
        IndexData {
            predecessor: NO_PREDECESSOR,
            cost: zero,
        },
    );

    while let Some(top) = frontier.pop() {
        let current_cost = visited.cost(top.index);
        // A cheaper route to this cell was recorded after the push.
        if top.cost > current_cost {
            continue;
        }

        nbuf.clear();
        neighbors.neighbors(grid, top.index, nbuf);

        for &next in nbuf.iter() {
            let candidate = current_cost + movement.cost(grid, top.index, next);
            if next == target {
                visited.insert(
                    next,
                    IndexData {
                        predecessor: top.index,
                        cost: candidate,
                    },
                );
                return SearchState::Found { goal: next };
            }

            let slot = visited.slot(next);
            if candidate < slot.cost {
                slot.cost = candidate;
                slot.predecessor = top.index;
                let h = heuristic.estimate(target_point, grid.coord_from_index(next));
                frontier.push(next, candidate + h, candidate);
            }
        }
    }

    SearchState::Exhausted
}
