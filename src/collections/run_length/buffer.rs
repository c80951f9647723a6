//! `RunLengthBuffer` — collapses bursts of repeated values into run-length pairs.
//!
//! The buffer keeps two index-aligned slot vectors, `values` and `counts`,
//! and a `cursor` naming the run being accumulated. Appending the same
//! instance again only bumps a counter; a different instance opens a new run,
//! doubling both vectors when they are full. Draining hands every run to a
//! consumer in insertion order and rewinds the buffer for reuse, keeping its
//! capacity.
//!
//! Time Complexity:
//! - Append: O(1) amortized
//! - Drain: O(runs)
//!
//! Space Complexity: O(capacity), capacity never shrinks.

use super::identity::Identity;
use super::run::{Run, RunLengthConsumer, TryRunLengthConsumer};
use crate::error::RunLengthError;
use core::convert::Infallible;
use core::fmt;
use core::mem;
use core::num::NonZeroUsize;

/// A growable run-length encoder that is drained and reused.
///
/// Slot `i` is absent (`values[i] == None`) exactly when `counts[i] == 0`.
pub struct RunLengthBuffer<E> {
    values: Vec<Option<E>>,
    counts: Vec<usize>,
    cursor: usize,
}

impl<E: Identity> RunLengthBuffer<E> {
    /// Creates an empty buffer holding up to `initial_capacity` runs before it grows.
    pub fn new(initial_capacity: NonZeroUsize) -> Self {
        let capacity = initial_capacity.get();
        let mut values = Vec::with_capacity(capacity);
        values.resize_with(capacity, || None);
        Self {
            values,
            counts: vec![0; capacity],
            cursor: 0,
        }
    }

    /// Creates an empty buffer, rejecting a zero capacity.
    ///
    /// # Errors
    /// Returns `RunLengthError::InvalidArgument` if `initial_capacity` is 0.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, RunLengthError> {
        NonZeroUsize::new(initial_capacity)
            .map(Self::new)
            .ok_or_else(|| reject("initial capacity must be at least 1"))
    }

    /// Appends one occurrence of `value`.
    ///
    /// Extends the current run if `value` is the same instance as the last
    /// one appended, otherwise starts a new run.
    ///
    /// # Errors
    /// Returns `RunLengthError::InvalidArgument` if `value` is absent; the
    /// buffer is left unchanged.
    pub fn append(&mut self, value: E) -> Result<(), RunLengthError> {
        if value.is_absent() {
            return Err(reject("appended value must not be absent"));
        }

        let cursor = self.cursor;
        match self.values[cursor].as_ref().map(|current| current.is_same(&value)) {
            None => {
                self.values[cursor] = Some(value);
                self.counts[cursor] = 1;
            }
            Some(true) => self.counts[cursor] += 1,
            Some(false) => {
                let next = cursor + 1;
                if next == self.values.len() {
                    self.grow();
                }
                self.values[next] = Some(value);
                self.counts[next] = 1;
                self.cursor = next;
            }
        }
        Ok(())
    }

    /// Delivers every held run to `consumer`, oldest first, and empties the buffer.
    ///
    /// Each slot is cleared before the consumer sees its run. If the consumer
    /// panics, the runs already delivered (including the one it panicked on)
    /// are gone and the rest stay buffered for the next drain.
    pub fn drain_to<C: RunLengthConsumer<E>>(&mut self, mut consumer: C) {
        let drained = self.try_drain_to(|value: E, count: NonZeroUsize| {
            consumer.accept(value, count);
            Ok::<(), Infallible>(())
        });
        match drained {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Fallible form of [`drain_to`](Self::drain_to).
    ///
    /// `consumer` is any [`TryRunLengthConsumer`], including closures
    /// returning `Result<(), X>`.
    ///
    /// Stops at the first consumer error and returns it. Slots up to and
    /// including the failing run are already cleared, later runs stay
    /// buffered and the cursor is not rewound; draining again delivers
    /// exactly the remainder.
    ///
    /// # Errors
    /// Returns the first error produced by `consumer`.
    pub fn try_drain_to<C>(&mut self, mut consumer: C) -> Result<(), C::Error>
    where
        C: TryRunLengthConsumer<E>,
    {
        if self.cursor == 0 && self.values[0].is_none() {
            return Ok(());
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(runs = self.run_count(), "draining run-length buffer");

        for i in 0..=self.cursor {
            let value = self.values[i].take();
            let count = NonZeroUsize::new(mem::take(&mut self.counts[i]));
            match (value, count) {
                (Some(value), Some(count)) => consumer.try_accept(value, count)?,
                // left behind by an earlier interrupted drain
                (None, None) => {}
                _ => unreachable!("run-length slot {i} holds a value and count out of sync"),
            }
        }
        self.cursor = 0;
        Ok(())
    }

    /// Drains every held run into a vector.
    pub fn drain_runs(&mut self) -> Vec<Run<E>> {
        let mut runs = Vec::with_capacity(self.cursor + 1);
        self.drain_to(|value: E, count: NonZeroUsize| runs.push(Run::new(value, count)));
        runs
    }

    fn grow(&mut self) {
        let old_capacity = self.values.len();
        let new_capacity = old_capacity << 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(old_capacity, new_capacity, "growing run-length buffer");

        self.values.reserve_exact(new_capacity - old_capacity);
        self.values.resize_with(new_capacity, || None);
        self.counts.reserve_exact(new_capacity - old_capacity);
        self.counts.resize(new_capacity, 0);
    }
}

impl<E> RunLengthBuffer<E> {
    /// Returns the number of run slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Iterates over the held runs in insertion order without draining them.
    pub fn runs(&self) -> impl Iterator<Item = (&E, NonZeroUsize)> + '_ {
        let end = self.cursor + 1;
        self.values[..end]
            .iter()
            .zip(&self.counts[..end])
            .filter_map(|(value, &count)| Some((value.as_ref()?, NonZeroUsize::new(count)?)))
    }

    /// Returns the number of runs held.
    pub fn run_count(&self) -> usize {
        self.runs().count()
    }

    /// Returns the number of appends held, i.e. the sum of all run lengths.
    pub fn event_count(&self) -> usize {
        self.runs().map(|(_, count)| count.get()).sum()
    }

    /// Returns `true` if no runs are held.
    pub fn is_empty(&self) -> bool {
        self.runs().next().is_none()
    }
}

impl<E: fmt::Debug> fmt::Debug for RunLengthBuffer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunLengthBuffer")
            .field("runs", &self.runs().collect::<Vec<_>>())
            .field("capacity", &self.capacity())
            .field("cursor", &self.cursor)
            .finish()
    }
}

fn reject(reason: &'static str) -> RunLengthError {
    #[cfg(feature = "tracing")]
    tracing::debug!(reason, "run-length buffer rejected input");

    RunLengthError::InvalidArgument(reason)
}
