//! Run-length pairs and the consumer seam that receives them.

use core::num::NonZeroUsize;
use serde::{Deserialize, Serialize};

/// An owned `(value, count)` pair summarizing one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run<E> {
    /// The value every event of the run referred to.
    pub value: E,
    /// How many consecutive times it was appended.
    pub count: NonZeroUsize,
}

impl<E> Run<E> {
    /// Creates a run.
    #[inline]
    pub fn new(value: E, count: NonZeroUsize) -> Self {
        Self { value, count }
    }

    /// Splits the run into its value and count.
    #[inline]
    pub fn into_parts(self) -> (E, NonZeroUsize) {
        (self.value, self.count)
    }
}

/// Receives runs, in insertion order, from a draining buffer.
pub trait RunLengthConsumer<E> {
    /// Accepts one run.
    fn accept(&mut self, value: E, count: NonZeroUsize);
}

impl<E, F> RunLengthConsumer<E> for F
where
    F: FnMut(E, NonZeroUsize),
{
    #[inline]
    fn accept(&mut self, value: E, count: NonZeroUsize) {
        self(value, count);
    }
}

/// Receives runs from a draining buffer and may refuse one.
///
/// A refused run has already been cleared from the buffer; the runs after it
/// stay buffered.
pub trait TryRunLengthConsumer<E> {
    /// The error that stops the drain.
    type Error;

    /// Accepts one run, or stops the drain with an error.
    ///
    /// # Errors
    /// Returns `Self::Error` to stop the drain at this run.
    fn try_accept(&mut self, value: E, count: NonZeroUsize) -> Result<(), Self::Error>;
}

impl<E, X, F> TryRunLengthConsumer<E> for F
where
    F: FnMut(E, NonZeroUsize) -> Result<(), X>,
{
    type Error = X;

    #[inline]
    fn try_accept(&mut self, value: E, count: NonZeroUsize) -> Result<(), X> {
        self(value, count)
    }
}
