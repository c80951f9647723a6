//! Run-length buffering of repeated values.
//!
//! - `buffer`: the drainable `RunLengthBuffer`
//! - `identity`: the `Identity` comparison that decides run membership
//! - `run`: `Run` pairs and the `RunLengthConsumer` seam

pub mod buffer;
pub mod identity;
pub mod run;

pub use buffer::RunLengthBuffer;
pub use identity::{Id, Identity};
pub use run::{Run, RunLengthConsumer, TryRunLengthConsumer};
