// Copyright 2024 Martin Pool

//! Compute factorials by repeated multiplication, reporting each partial
//! product as it is formed.

use std::fmt;
use std::io::{self, Write};
use std::ops::RangeInclusive;

use num_bigint::BigUint;
use num_traits::One;
use tracing::trace;

/// One multiplication step: the running product immediately after it was
/// multiplied by `multiplier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub multiplier: u64,
    pub product: BigUint,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multiplying {} by {}", self.product, self.multiplier)
    }
}

/// Iterator over the steps of computing `n!`.
///
/// After the step with multiplier `i` has been yielded, the accumulated
/// product is `i!`.
#[derive(Debug)]
pub struct Steps {
    multipliers: RangeInclusive<u64>,
    product: BigUint,
}

impl Steps {
    /// The product accumulated so far; `n!` once the iterator is exhausted.
    pub fn into_product(self) -> BigUint {
        self.product
    }
}

impl Iterator for Steps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let multiplier = self.multipliers.next()?;
        self.product *= multiplier;
        Some(Step {
            multiplier,
            product: self.product.clone(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.multipliers.size_hint()
    }
}

/// Return an iterator over the multiplication steps for `n!`.
///
/// There are exactly `n` steps, with multipliers `1..=n`.
pub fn steps(n: u64) -> Steps {
    Steps {
        multipliers: 1..=n,
        product: BigUint::one(),
    }
}

/// Compute `n!`, writing one `Multiplying {product} by {i}` line to `out`
/// for every step.
///
/// `0!` is 1 and writes nothing.
pub fn factorial<W: Write>(n: u64, mut out: W) -> io::Result<BigUint> {
    let mut steps = steps(n);
    for step in &mut steps {
        writeln!(out, "{step}")?;
        trace!(multiplier = step.multiplier, product = %step.product, "step");
    }
    Ok(steps.into_product())
}
