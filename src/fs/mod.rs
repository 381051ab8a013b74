//! Filesystem utilities for diffsum.
//!
//! Rendered summaries and sample configs are written atomically so an
//! interrupted run never leaves a half-written file behind.

pub mod atomic;

pub use atomic::atomic_write_file;
