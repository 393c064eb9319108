//! Text maps: parse ASCII art into a passability grid and render paths back.
//!
//! ```text
//! ..#
//! .##
//! ...
//! ```
//!
//! Characters listed as *open* become `1` (passable), characters listed as
//! *walls* become `0`. Every line must have the same width.

use std::fmt;

use crate::geom::Point;
use crate::grid::{GridBuf, GridView};

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The text contains no cells.
    Empty,
    /// A line is wider or narrower than the first one.
    InconsistentWidth {
        line: usize,
        expected: usize,
        actual: usize,
    },
    /// A character is neither open nor wall.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no cells"),
            Self::InconsistentWidth {
                line,
                expected,
                actual,
            } => write!(
                f,
                "map: line {line} has width {actual}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "map contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for MapError {}

/// Parse a text map into a grid of `1` (open) and `0` (wall) cells.
pub fn parse_map(text: &str, open: &str, walls: &str) -> Result<GridBuf<u8>, MapError> {
    let mut cells = Vec::new();
    let mut width = None;
    let mut height = 0usize;

    for (y, line) in text.trim().lines().enumerate() {
        let line = line.trim_end_matches('\r');
        let mut w = 0usize;
        for (x, ch) in line.chars().enumerate() {
            let cell = if open.contains(ch) {
                1
            } else if walls.contains(ch) {
                0
            } else {
                return Err(MapError::InvalidChar {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                });
            };
            cells.push(cell);
            w += 1;
        }
        match width {
            None => width = Some(w),
            Some(expected) if expected != w => {
                return Err(MapError::InconsistentWidth {
                    line: y,
                    expected,
                    actual: w,
                });
            }
            Some(_) => {}
        }
        height += 1;
    }

    match width {
        Some(w) if w > 0 => GridBuf::from_vec(cells, w, height).map_err(|_| MapError::Empty),
        _ => Err(MapError::Empty),
    }
}

/// Render a passability grid as text, marking every index of `path`.
///
/// Cells equal to `1` print as `open`, everything else as `wall`.
pub fn render_path(view: &GridView<'_, u8>, path: &[usize], open: char, wall: char, mark: char) -> String {
    let mut out = String::with_capacity(view.size() + view.height());
    for (i, &cell) in view.iter().enumerate() {
        if i > 0 && i % view.width() == 0 {
            out.push('\n');
        }
        let ch = if path.contains(&i) {
            mark
        } else if cell == 1 {
            open
        } else {
            wall
        };
        out.push(ch);
    }
    out
}
