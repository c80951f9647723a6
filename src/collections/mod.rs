//! Collections for summarizing event streams.
//!
//! Collections are organized by encoding:
//! - `run_length`: run-length buffers that collapse repeated values

pub mod run_length;

// Re-export commonly used types from submodules
pub use run_length::{
    Id, Identity, Run, RunLengthBuffer, RunLengthConsumer, TryRunLengthConsumer,
};
