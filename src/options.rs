// Copyright 2024 Martin Pool

//! Options that affect how output is presented, but not what is computed.

use clap::ValueEnum;

/// Whether to use ANSI colors in trace output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Colors {
    /// Use colors if stderr is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl Colors {
    /// If colors were forced on or off, return that value; otherwise
    /// `None` to let the terminal decide.
    pub fn forced_value(&self) -> Option<bool> {
        match self {
            Colors::Auto => None,
            Colors::Always => Some(true),
            Colors::Never => Some(false),
        }
    }
}
