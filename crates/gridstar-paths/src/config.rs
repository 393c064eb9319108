use std::fmt;

/// Tuning knobs for the [`SearchCache`](crate::SearchCache).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Grids with fewer cells than this are always searched from scratch;
    /// hashing them costs more than the search.
    pub cache_threshold: usize,
    /// Lower bound of the visited/frontier preallocation.
    pub min_prealloc: usize,
    /// Upper bound of the visited/frontier preallocation.
    pub max_prealloc: usize,
}

impl SearchConfig {
    pub const DEFAULT_CACHE_THRESHOLD: usize = 64;
    pub const DEFAULT_MIN_PREALLOC: usize = 1024;
    pub const DEFAULT_MAX_PREALLOC: usize = i32::MAX as usize / (4 * 70);

    pub fn with_cache_threshold(mut self, cells: usize) -> Self {
        self.cache_threshold = cells;
        self
    }

    pub fn with_prealloc(mut self, min: usize, max: usize) -> Self {
        self.min_prealloc = min;
        self.max_prealloc = max;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_prealloc > self.max_prealloc {
            return Err(ConfigError::PreallocBounds {
                min: self.min_prealloc,
                max: self.max_prealloc,
            });
        }
        Ok(())
    }

    /// Number of entries to reserve for a query whose endpoints are
    /// `distance` apart: `(d / 10) * d²`, clamped to the configured bounds.
    pub fn prealloc_for(&self, distance: f64) -> usize {
        let d = if distance.is_finite() && distance > 0.0 {
            distance as u64
        } else {
            0
        };
        let estimate = (d / 10).saturating_mul(d).saturating_mul(d);
        let estimate = usize::try_from(estimate).unwrap_or(usize::MAX);
        estimate.max(self.min_prealloc).min(self.max_prealloc)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            cache_threshold: Self::DEFAULT_CACHE_THRESHOLD,
            min_prealloc: Self::DEFAULT_MIN_PREALLOC,
            max_prealloc: Self::DEFAULT_MAX_PREALLOC,
        }
    }
}

/// Errors reported by [`SearchConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `min_prealloc` exceeds `max_prealloc`.
    PreallocBounds { min: usize, max: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreallocBounds { min, max } => {
                write!(f, "search config: min_prealloc {min} exceeds max_prealloc {max}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
