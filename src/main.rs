// Copyright 2024 Martin Pool

//! `factorial-steps`: Calculate a factorial by repeated multiplication, showing each step.

mod console;
mod demo;
mod exit_code;
mod factorial;
mod options;

use std::io;
use std::process::exit;

use clap::CommandFactory;
use clap::Parser;
use clap_complete::{generate, Shell};
use tracing::debug;

use crate::options::Colors;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

pub type Result<T> = anyhow::Result<T>;

/// Calculate the factorial of 5 by repeated multiplication, printing each step.
#[derive(Parser, PartialEq, Debug)]
#[command(name = NAME, author, about)]
struct Args {
    /// draw colors in trace output on stderr.
    #[arg(long, value_enum, default_value_t, env = "CARGO_TERM_COLOR")]
    colors: Colors,

    /// generate autocompletions for the given shell.
    #[arg(long)]
    completions: Option<Shell>,

    /// log level for stderr (trace, debug, info, warn, error).
    #[arg(
        long,
        short = 'L',
        default_value = "info",
        env = "FACTORIAL_STEPS_TRACE_LEVEL"
    )]
    level: tracing::Level,

    /// show version and quit.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    version: bool,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            eprintln!("{e}");
            exit(exit_code::USAGE);
        }
        Err(e) => e.exit(), // --help
    };
    console::setup_global_trace(args.level, args.colors);
    debug!(?args);

    if args.version {
        println!("{NAME} {VERSION}");
    } else if let Some(shell) = args.completions {
        generate(shell, &mut Args::command(), NAME, &mut io::stdout());
    } else {
        demo::run(io::stdout().lock())?;
    }
    Ok(())
}
