// Copyright 2024 Martin Pool

//! Trace output on the terminal.

use std::io;

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use crate::options::Colors;

/// Install a global subscriber that writes trace at or above
/// `console_trace_level` to stderr.
///
/// Stdout is reserved for the calculation itself.
pub fn setup_global_trace(console_trace_level: Level, colors: Colors) {
    let stderr_colors = colors
        .forced_value()
        .unwrap_or_else(::console::colors_enabled_stderr);
    let level_filter = LevelFilter::from_level(console_trace_level);
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(stderr_colors)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(level_filter);
    tracing_subscriber::registry().with(console_layer).init();
}
