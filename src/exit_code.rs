// Copyright 2024 Martin Pool

//! Exit codes from factorial-steps.
//!
//! Success is 0, and an error returned from `main` exits with 1 through the
//! standard library.

/// The wrong arguments, etc.
///
/// (1 is also the value returned by Clap.)
pub const USAGE: i32 = 1;
