//! Output sinks receiving emitted paths.
//!
//! A sink either grows without bound ([`Vec<usize>`]) or has a fixed
//! capacity ([`BoundedPath`], [`StaticPath`], [`SlicePath`]). Fixed sinks that
//! receive a longer path keep only its last `capacity` nodes, the ones
//! nearest the goal, in start-to-goal order.

/// Destination for the linear indices of a path.
pub trait OutputSink {
    /// Maximum number of retained nodes; `None` means unbounded.
    fn capacity(&self) -> Option<usize>;

    /// Remove every node.
    fn clear(&mut self);

    /// Append a node. Only called while `len() < capacity()`.
    fn push(&mut self, index: usize);

    /// Number of retained nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The retained nodes.
    fn as_slice(&self) -> &[usize];

    /// The retained nodes, mutably.
    fn as_mut_slice(&mut self) -> &mut [usize];
}

impl OutputSink for Vec<usize> {
    fn capacity(&self) -> Option<usize> {
        None
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn push(&mut self, index: usize) {
        Vec::push(self, index);
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn as_slice(&self) -> &[usize] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [usize] {
        self
    }
}

// ---------------------------------------------------------------------------
// BoundedPath
// ---------------------------------------------------------------------------

/// Heap-backed sink with a capacity chosen at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundedPath {
    nodes: Vec<usize>,
    capacity: usize,
}

impl BoundedPath {
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn max_len(&self) -> usize {
        self.capacity
    }
}

impl OutputSink for BoundedPath {
    fn capacity(&self) -> Option<usize> {
        Some(self.capacity)
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn push(&mut self, index: usize) {
        debug_assert!(self.nodes.len() < self.capacity);
        self.nodes.push(index);
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn as_slice(&self) -> &[usize] {
        &self.nodes
    }

    fn as_mut_slice(&mut self) -> &mut [usize] {
        &mut self.nodes
    }
}

// ---------------------------------------------------------------------------
// StaticPath
// ---------------------------------------------------------------------------

/// Inline sink holding at most `N` nodes.
#[derive(Debug, Clone, Copy)]
pub struct StaticPath<const N: usize> {
    nodes: [usize; N],
    len: usize,
}

impl<const N: usize> StaticPath<N> {
    pub const fn new() -> Self {
        Self {
            nodes: [0; N],
            len: 0,
        }
    }
}

impl<const N: usize> Default for StaticPath<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PartialEq for StaticPath<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> Eq for StaticPath<N> {}

impl<const N: usize> std::ops::Deref for StaticPath<N> {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.nodes[..self.len]
    }
}

impl<const N: usize> OutputSink for StaticPath<N> {
    fn capacity(&self) -> Option<usize> {
        Some(N)
    }

    fn clear(&mut self) {
        self.len = 0;
    }

    fn push(&mut self, index: usize) {
        self.nodes[self.len] = index;
        self.len += 1;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn as_slice(&self) -> &[usize] {
        &self.nodes[..self.len]
    }

    fn as_mut_slice(&mut self) -> &mut [usize] {
        &mut self.nodes[..self.len]
    }
}

// ---------------------------------------------------------------------------
// SlicePath
// ---------------------------------------------------------------------------

/// Sink writing into a caller-provided buffer.
#[derive(Debug)]
pub struct SlicePath<'a> {
    buf: &'a mut [usize],
    len: usize,
}

impl<'a> SlicePath<'a> {
    pub fn new(buf: &'a mut [usize]) -> Self {
        Self { buf, len: 0 }
    }
}

impl OutputSink for SlicePath<'_> {
    fn capacity(&self) -> Option<usize> {
        Some(self.buf.len())
    }

    fn clear(&mut self) {
        self.len = 0;
    }

    fn push(&mut self, index: usize) {
        self.buf[self.len] = index;
        self.len += 1;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn as_slice(&self) -> &[usize] {
        &self.buf[..self.len]
    }

    fn as_mut_slice(&mut self) -> &mut [usize] {
        &mut self.buf[..self.len]
    }
}
