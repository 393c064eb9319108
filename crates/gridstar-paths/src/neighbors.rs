use gridstar_core::GridView;

use crate::traits::{CellFilter, NeighborSource};

/// Accepts cells equal to a passable marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Passable<T>(pub T);

impl Default for Passable<u8> {
    fn default() -> Self {
        Self(1)
    }
}

impl<T: PartialEq> CellFilter<T> for Passable<T> {
    #[inline]
    fn accepts(&self, cell: &T) -> bool {
        *cell == self.0
    }
}

/// Four-way (non-diagonal) neighbor enumeration.
///
/// Neighbors are produced in the fixed order +x, +y, -x, -y. The order
/// decides which of several equal-cost paths is found, so it is part of the
/// observable behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CardinalNeighbors<F> {
    filter: F,
}

impl<F> CardinalNeighbors<F> {
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }
}

impl<T, F: CellFilter<T>> NeighborSource<T> for CardinalNeighbors<F> {
    #[inline]
    fn traversable(&self, grid: &GridView<'_, T>, index: usize) -> bool {
        self.filter.accepts(&grid[index])
    }

    fn neighbors(&self, grid: &GridView<'_, T>, index: usize, buf: &mut Vec<usize>) {
        let width = grid.width();
        let x = index % width;
        let y = index / width;
        let mut keep = |i: usize| {
            if self.filter.accepts(&grid[i]) {
                buf.push(i);
            }
        };
        if x + 1 < width {
            keep(index + 1);
        }
        if y + 1 < grid.height() {
            keep(index + width);
        }
        if x >= 1 {
            keep(index - 1);
        }
        if y >= 1 {
            keep(index - width);
        }
    }
}
