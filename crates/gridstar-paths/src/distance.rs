use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use gridstar_core::{GridView, Point};

use crate::traits::{Cost, Heuristic, MovementCost, OperationType};

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f32 {
    let dx = (b.x - a.x) as f32;
    let dy = (b.y - a.y) as f32;
    (dx * dx + dy * dy).sqrt()
}

/// Integer Manhattan heuristic, exact on obstacle-free 4-connected grids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    type Value = i32;
    const OPERATION: OperationType = OperationType::Commutative;

    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

/// Straight-line heuristic over `f32` costs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    type Value = f32;
    const OPERATION: OperationType = OperationType::Commutative;

    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f32 {
        euclidean(from, to)
    }
}

/// Every move costs [`Cost::ONE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitCost<C = i32>(PhantomData<C>);

impl<C> UnitCost<C> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<C> Default for UnitCost<C> {
    fn default() -> Self {
        Self::new()
    }
}

// No state: hashes alike for every `C`, float costs included.
impl<C> Hash for UnitCost<C> {
    fn hash<S: Hasher>(&self, _state: &mut S) {}
}

impl<T, C: Cost> MovementCost<T> for UnitCost<C> {
    type Value = C;
    const OPERATION: OperationType = OperationType::Commutative;

    #[inline]
    fn cost(&self, _grid: &GridView<'_, T>, _from: usize, _to: usize) -> C {
        C::ONE
    }
}

/// Wraps a heuristic and declares it non-commutative.
///
/// This keeps the estimate unchanged but forces the engine to search from
/// the start towards the goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed<H>(pub H);

impl<H: Heuristic> Heuristic for Directed<H> {
    type Value = H::Value;
    const OPERATION: OperationType = OperationType::NonCommutative;

    #[inline]
    fn estimate(&self, from: Point, to: Point) -> H::Value {
        self.0.estimate(from, to)
    }
}
