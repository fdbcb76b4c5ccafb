/// Exit codes of the bookmark CLI.
///
/// Usage errors and lookup misses share the same code: callers in shell
/// scripts only need to distinguish "got a value" from "did not".
///
/// Successful termination, including `--version` and listing-only runs
pub const SUCCESS: i32 = 0;

/// Conflicting flags, missing bookmark source, unreadable bookmark file
pub const FAILURE: i32 = 1;

/// Query given but no bookmark with that name exists
pub const NOT_FOUND: i32 = 1;
