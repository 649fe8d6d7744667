//! Exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Input/output error
pub const IOERR: i32 = 74;
