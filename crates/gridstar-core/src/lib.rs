//! **gridstar-core**: grid primitives shared by the gridstar crates.
//!
//! This crate provides the read-only [`GridView`] the search engine walks,
//! the [`Point`] coordinate type, an owned [`GridBuf`] for building maps,
//! the order-sensitive grid [fingerprint](GridView::fingerprint) used to gate
//! search-cache reuse, and a small text-map format for tests and demos.

pub mod ascii;
pub mod fingerprint;
pub mod geom;
pub mod grid;

pub use ascii::{MapError, parse_map, render_path};
pub use fingerprint::CellBits;
pub use geom::Point;
pub use grid::{GridBuf, GridError, GridView};
