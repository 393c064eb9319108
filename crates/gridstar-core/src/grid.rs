//! Row-major grids: the borrowed [`GridView`] and the owned [`GridBuf`].
//!
//! A cell at `(x, y)` lives at linear index `x + y * width`. The view never
//! decides whether a cell is traversable; that is left to the caller's
//! predicate policy.

use std::fmt;
use std::ops::Index;

use crate::geom::Point;

/// Errors returned by the fallible grid constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero.
    ZeroDimension { width: usize, height: usize },
    /// The buffer does not hold exactly `width * height` cells.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "grid: dimensions must be positive, got {width}x{height}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "grid: buffer holds {actual} cells, expected {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}

fn check_dimensions(len: usize, width: usize, height: usize) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::ZeroDimension { width, height });
    }
    let expected = width
        .checked_mul(height)
        .ok_or(GridError::LengthMismatch { expected: usize::MAX, actual: len })?;
    if len != expected {
        return Err(GridError::LengthMismatch { expected, actual: len });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GridView
// ---------------------------------------------------------------------------

/// Read-only view over a flat, row-major buffer of cells.
///
/// Views are cheap to copy and may be shared freely between threads when
/// `T: Sync`. Out-of-bounds indexing is a caller bug and panics.
pub struct GridView<'a, T> {
    cells: &'a [T],
    width: usize,
    height: usize,
}

impl<T> Clone for GridView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GridView<'_, T> {}

impl<T> fmt::Debug for GridView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridView")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl<'a, T> GridView<'a, T> {
    /// Create a view over `cells` with the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or `cells.len() != width * height`.
    pub fn new(cells: &'a [T], width: usize, height: usize) -> Self {
        if let Err(e) = check_dimensions(cells.len(), width, height) {
            panic!("{e}");
        }
        Self {
            cells,
            width,
            height,
        }
    }

    /// Fallible variant of [`new`](Self::new).
    pub fn try_new(cells: &'a [T], width: usize, height: usize) -> Result<Self, GridError> {
        check_dimensions(cells.len(), width, height)?;
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`).
    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// The underlying row-major buffer.
    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.cells
    }

    /// Iterate over the cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.cells.iter()
    }

    /// Linear index of `p`. The coordinate must be valid.
    #[inline]
    pub fn index_from_coord(&self, p: Point) -> usize {
        debug_assert!(self.coordinate_valid(p), "coordinate {p} outside grid");
        p.x as usize + p.y as usize * self.width
    }

    /// Coordinate of linear index `index`.
    #[inline]
    pub fn coord_from_index(&self, index: usize) -> Point {
        Point::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn coordinate_valid(&self, p: Point) -> bool {
        p.x >= 0 && (p.x as usize) < self.width && p.y >= 0 && (p.y as usize) < self.height
    }

    /// Whether `index` addresses a cell of the grid.
    #[inline]
    pub fn index_valid(&self, index: usize) -> bool {
        index < self.cells.len()
    }

    /// Cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&'a T> {
        if !self.coordinate_valid(p) {
            return None;
        }
        self.cells.get(self.index_from_coord(p))
    }

    /// Apply a coordinate distance function to two linear indices.
    #[inline]
    pub fn estimate<R>(&self, a: usize, b: usize, f: impl FnOnce(Point, Point) -> R) -> R {
        f(self.coord_from_index(a), self.coord_from_index(b))
    }
}

impl<T> Index<usize> for GridView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.cells[index]
    }
}

impl<T> Index<Point> for GridView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, p: Point) -> &T {
        assert!(self.coordinate_valid(p), "coordinate {p} outside grid");
        &self.cells[self.index_from_coord(p)]
    }
}

// ---------------------------------------------------------------------------
// GridBuf
// ---------------------------------------------------------------------------

/// An owned row-major grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBuf<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Clone> GridBuf<T> {
    /// Create a `width` x `height` grid filled with `fill`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        assert!(width > 0 && height > 0, "grid: dimensions must be positive");
        Self {
            cells: vec![fill; width * height],
            width,
            height,
        }
    }
}

impl<T> GridBuf<T> {
    /// Wrap an existing row-major buffer.
    pub fn from_vec(cells: Vec<T>, width: usize, height: usize) -> Result<Self, GridError> {
        check_dimensions(cells.len(), width, height)?;
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Borrow the grid as a [`GridView`].
    pub fn view(&self) -> GridView<'_, T> {
        GridView {
            cells: &self.cells,
            width: self.width,
            height: self.height,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `p`, or `None` outside the grid.
    pub fn at(&self, p: Point) -> Option<&T> {
        self.view().get(p)
    }

    /// Set the cell at `p`. Does nothing outside the grid.
    pub fn set(&mut self, p: Point, value: T) {
        if self.view().coordinate_valid(p) {
            let idx = p.x as usize + p.y as usize * self.width;
            self.cells[idx] = value;
        }
    }

    /// Fill the grid using a function of each coordinate.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> T) {
        let width = self.width;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = f(Point::new((i % width) as i32, (i / width) as i32));
        }
    }

    /// The underlying row-major buffer.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Consume the grid and return its buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }
}
