//! Path reconstruction from the visited map into an [`OutputSink`].

use crate::frontier::{NO_PREDECESSOR, Visited};
use crate::sink::OutputSink;
use crate::traits::Cost;

/// Writes nodes in start-to-goal order, wrapping around once a bounded sink
/// is full so that only the most recent `capacity` nodes survive.
struct RingWriter<'s, S: OutputSink + ?Sized> {
    sink: &'s mut S,
    written: usize,
}

impl<'s, S: OutputSink + ?Sized> RingWriter<'s, S> {
    fn new(sink: &'s mut S) -> Self {
        sink.clear();
        Self { sink, written: 0 }
    }

    #[inline]
    fn write(&mut self, index: usize) {
        match self.sink.capacity() {
            Some(cap) if self.sink.len() >= cap => {
                if cap > 0 {
                    self.sink.as_mut_slice()[self.written % cap] = index;
                }
            }
            _ => self.sink.push(index),
        }
        self.written += 1;
    }

    /// Restore chronological order and return the number of nodes written.
    fn finish(self) -> usize {
        if let Some(cap) = self.sink.capacity() {
            if cap > 0 && self.written > cap {
                self.sink.as_mut_slice().rotate_left(self.written % cap);
            }
        }
        self.written
    }
}

/// Emit a path found by a search that ran from `start` to `goal`.
///
/// The predecessor chain runs goal to start, so it is collected into
/// `scratch` and replayed backwards. Returns the number of edges.
pub(crate) fn forward<C: Cost, S: OutputSink + ?Sized>(
    visited: &Visited<C>,
    start: usize,
    goal: usize,
    scratch: &mut Vec<usize>,
    sink: &mut S,
) -> usize {
    scratch.clear();
    let mut at = goal;
    while at != start && at != NO_PREDECESSOR {
        scratch.push(at);
        at = visited.get(at).map_or(NO_PREDECESSOR, |d| d.predecessor);
    }

    let mut writer = RingWriter::new(sink);
    for &index in scratch.iter().rev() {
        writer.write(index);
    }
    writer.finish()
}

/// Emit a path found by a search that ran from `goal` back to `start`.
///
/// The chain starting at the cell after `start` already runs towards the
/// goal. Returns the number of edges.
pub(crate) fn inverted<C: Cost, S: OutputSink + ?Sized>(
    visited: &Visited<C>,
    start: usize,
    goal: usize,
    sink: &mut S,
) -> usize {
    let mut writer = RingWriter::new(sink);
    let mut at = visited.get(start).map_or(NO_PREDECESSOR, |d| d.predecessor);
    while at != NO_PREDECESSOR {
        writer.write(at);
        if at == goal {
            break;
        }
        at = visited.get(at).map_or(NO_PREDECESSOR, |d| d.predecessor);
    }
    writer.finish()
}
