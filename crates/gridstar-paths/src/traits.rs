use std::fmt::Debug;
use std::ops::Add;

use gridstar_core::{GridView, Point};

/// Whether a policy is symmetric in its two arguments.
///
/// When both the heuristic and the movement cost are commutative the engine
/// searches from the goal back to the start, which lets it emit the path in
/// start-to-goal order without a reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    Commutative,
    NonCommutative,
}

/// Numeric type used for path costs and priorities.
pub trait Cost: Copy + PartialOrd + Add<Output = Self> + Debug + 'static {
    const ZERO: Self;
    const ONE: Self;
    /// Cost of a cell that has not been reached yet.
    const INFINITY: Self;

    /// Lossy conversion used for allocation estimates.
    fn to_f64(self) -> f64;
}

macro_rules! impl_int_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const INFINITY: Self = <$t>::MAX;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_float_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const INFINITY: Self = <$t>::INFINITY;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_int_cost!(i32, i64, u32, u64);
impl_float_cost!(f32, f64);

/// Distance estimate between two coordinates.
pub trait Heuristic {
    type Value: Cost;
    const OPERATION: OperationType;

    /// Estimated cost from `from` to `to`. Must never overestimate the true
    /// cost (admissible) for the returned paths to be shortest.
    fn estimate(&self, from: Point, to: Point) -> Self::Value;
}

/// Weight of the edge between two adjacent cells.
pub trait MovementCost<T> {
    type Value: Cost;
    const OPERATION: OperationType;

    /// Cost of moving from index `from` to adjacent index `to`. Must be > 0.
    fn cost(&self, grid: &GridView<'_, T>, from: usize, to: usize) -> Self::Value;
}

/// Neighbor enumeration over a grid.
pub trait NeighborSource<T> {
    /// Whether the cell at `index` may be stood on.
    fn traversable(&self, grid: &GridView<'_, T>, index: usize) -> bool;

    /// Append the traversable neighbors of `index` into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, grid: &GridView<'_, T>, index: usize, buf: &mut Vec<usize>);
}

/// Cell-validity predicate plugged into a neighbor enumerator.
pub trait CellFilter<T> {
    fn accepts(&self, cell: &T) -> bool;
}

impl<T, F: Fn(&T) -> bool> CellFilter<T> for F {
    #[inline]
    fn accepts(&self, cell: &T) -> bool {
        self(cell)
    }
}
