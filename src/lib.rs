//! # `runlength-buffer` - Drainable Run-Length Buffers
//!
//! A compact buffer that summarizes bursts of repeated events. Consecutive
//! appends of the *same* value collapse into one `(value, count)` pair; a
//! drain replays the pairs in insertion order and rewinds the buffer so it can
//! be reused without reallocating.
//!
//! ## Guarantees
//!
//! ### Ordering
//! - **Insertion order**: runs are delivered oldest first.
//! - **Maximal runs**: two adjacent runs never hold the same instance.
//!
//! ### Identity
//! - **Reference equality**: run membership is decided by [`Identity`], not
//!   `PartialEq`. Two equal but distinct instances form two runs.
//! - **No absent values**: values whose type has a null form (raw pointers,
//!   `Option`) are rejected with [`RunLengthError::InvalidArgument`].
//!
//! ### Memory
//! - **Amortized O(1) append**: both slot vectors double together when full.
//! - **Monotonic capacity**: draining never releases slots.
//!
//! ## Concurrency
//!
//! There is no internal synchronization. Every mutating operation takes
//! `&mut self`, so shared use goes through an external lock held across a
//! whole `append` or drain.
//!
//! ## Example
//!
//! ```rust
//! use core::num::NonZeroUsize;
//! use runlength_buffer::{Id, RunLengthBuffer};
//!
//! let mut buffer = RunLengthBuffer::with_capacity(4)?;
//! for key in ['a', 'a', 'a', 'b', 'b', 'a'] {
//!     buffer.append(Id(key))?;
//! }
//!
//! let mut runs = Vec::new();
//! buffer.drain_to(|value: Id<char>, count: NonZeroUsize| runs.push((value.0, count.get())));
//! assert_eq!(runs, [('a', 3), ('b', 2), ('a', 1)]);
//! assert!(buffer.is_empty());
//! # Ok::<(), runlength_buffer::RunLengthError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;

pub use collections::{
    Id, Identity, Run, RunLengthBuffer, RunLengthConsumer, TryRunLengthConsumer,
};
pub use error::RunLengthError;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // `Id` is `repr(transparent)` over its key.
    assert!(mem::size_of::<Id<u64>>() == mem::size_of::<u64>());
    assert!(mem::align_of::<Id<u64>>() == mem::align_of::<u64>());

    // The non-zero count gives `Run` a niche, so optional runs stay two words.
    assert!(mem::size_of::<Run<&'static u8>>() == mem::size_of::<usize>() * 2);
    assert!(mem::size_of::<Option<Run<&'static u8>>>() == mem::size_of::<Run<&'static u8>>());

    // Two slot vectors plus the cursor.
    assert!(
        mem::size_of::<RunLengthBuffer<&'static u8>>()
            == mem::size_of::<Vec<usize>>() * 2 + mem::size_of::<usize>()
    );
};
