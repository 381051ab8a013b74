//! Exit code constants for the diffsum CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config, bad template)
//! - 2: Input error (unreadable, empty, oversized or non-diff input)
//! - 3: Output error (could not write the rendered summary)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration or template.
pub const USER_ERROR: i32 = 1;

/// Input error: the diff could not be read or contained no file changes.
pub const INPUT_ERROR: i32 = 2;

/// Output error: the rendered summary could not be written.
pub const OUTPUT_ERROR: i32 = 3;
