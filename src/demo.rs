// Copyright 2024 Martin Pool

//! The demonstration: calculate the factorial of a fixed number and show
//! the working.

use std::io::Write;

use anyhow::Context;
use num_bigint::BigUint;
use tracing::debug;

use crate::factorial::factorial;
use crate::Result;

/// The number whose factorial is demonstrated.
pub const DEMO_NUMBER: u64 = 5;

/// Write the announcement, every multiplication step, and the result to `out`.
pub fn run<W: Write>(mut out: W) -> Result<BigUint> {
    debug!(number = DEMO_NUMBER, "calculate factorial");
    writeln!(out, "Calculating factorial of {DEMO_NUMBER}").context("write announcement")?;
    let fact = factorial(DEMO_NUMBER, &mut out).context("write factorial steps")?;
    writeln!(out, "The factorial of {DEMO_NUMBER} is {fact}").context("write result")?;
    out.flush().context("flush output")?;
    debug!(%fact, "done");
    Ok(fact)
}
