//! Exit code constants for the osbconfig CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable inputs)
//! - 2: Settings resolution failure
//! - 3: Work layout failure (missing dirs or settings file)
//! - 4: configjar launch failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or unreadable seed properties.
pub const USER_ERROR: i32 = 1;

/// Settings resolution failure: the post-process pass could not complete.
pub const RESOLVE_FAILURE: i32 = 2;

/// Work layout failure: work directories or the settings file are unusable.
pub const LAYOUT_FAILURE: i32 = 3;

/// Launch failure: configjar could not be started or did not succeed.
pub const LAUNCH_FAILURE: i32 = 4;
