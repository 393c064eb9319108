//! Shared helpers for the gridstar demos: random maps, a profiling run and
//! logging setup.

use std::error::Error;
use std::time::{Duration, Instant};

use gridstar_core::{GridBuf, Point};
use gridstar_paths::{NO_PATH, find_path};
use rand::{Rng, RngExt};
use tracing_subscriber::EnvFilter;

/// Share of open cells in generated maps.
pub const OPEN_RATIO: f64 = 0.8;

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Environment variable holding the log filter, e.g. `debug` or
/// `gridstar_paths=trace`.
pub const LOG_ENV: &str = "GRIDSTAR_LOG";

/// Send `log` records to stderr, filtered by [`LOG_ENV`] (default `warn`).
pub fn init_logging() -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

/// Random map of `1` (open) and `0` (wall) cells with both corners open.
pub fn random_map<R: Rng>(rng: &mut R, width: usize, height: usize) -> GridBuf<u8> {
    let mut buf = GridBuf::new(width, height, 0u8);
    buf.fill_fn(|_| u8::from(rng.random_bool(OPEN_RATIO)));
    buf.set(Point::ZERO, 1);
    buf.set(far_corner(width, height), 1);
    buf
}

pub fn far_corner(width: usize, height: usize) -> Point {
    Point::new(width as i32 - 1, height as i32 - 1)
}

/// Parse `x,y`.
pub fn parse_point(s: &str) -> Option<Point> {
    let (x, y) = s.split_once(',')?;
    Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

// ---------------------------------------------------------------------------
// Profiling
// ---------------------------------------------------------------------------

/// Outcome of a batch of corner-to-corner searches on one map size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Profile {
    pub side: usize,
    pub runs: usize,
    pub found: usize,
    /// Time spent in successful searches.
    pub total: Duration,
}

impl Profile {
    pub fn success_rate(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.found as f64 / self.runs as f64
    }

    pub fn mean(&self) -> Option<Duration> {
        let found = u32::try_from(self.found).ok().filter(|&n| n > 0)?;
        Some(self.total / found)
    }
}

/// Search from corner to corner of `runs` fresh `side`×`side` maps.
pub fn profile<R: Rng>(rng: &mut R, side: usize, runs: usize) -> Profile {
    let mut result = Profile {
        side,
        runs,
        ..Profile::default()
    };
    let mut path: Vec<usize> = Vec::with_capacity(side * side / 2);

    for _ in 0..runs {
        let buf = random_map(rng, side, side);
        let grid = buf.view();
        let started = Instant::now();
        let edges = find_path(Point::ZERO, far_corner(side, side), &grid, &mut path);
        let elapsed = started.elapsed();
        if edges != NO_PATH {
            result.found += 1;
            result.total += elapsed;
        }
        log::debug!("{side}x{side}: {edges} edges in {elapsed:?}");
    }
    result
}
