//! Exit codes for the `runelen` binary.
//! These codes are part of the public contract and stay stable across releases.

pub const SUCCESS: i32 = 0;
pub const INVALID_INPUT: i32 = 1; // Invalid UTF-8 under the strict policy
pub const CONFIG_ERROR: i32 = 2; // Bad config, unreadable file or stdin
