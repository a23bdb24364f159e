//! The three "functions" lessons: two random numbers and their sum, a random
//! palette color, and the local-versus-shared counter comparison.

use std::fmt;

use crate::{Counter, Error, RandomSource, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SumResult {
    pub num1: i64,
    pub num2: i64,
    pub sum: i64,
    /// Counter value after this calculation was counted.
    pub calculation_count: u64,
}

impl fmt::Display for SumResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Random Numbers: {} + {} | Sum: {} | Times calculated: {}",
            self.num1, self.num2, self.sum, self.calculation_count
        )
    }
}

/// Draws two numbers in `[min, max]`, adds them and counts the calculation.
///
/// The counter is only bumped once both draws succeeded and their sum fits.
pub fn calculate_random_sum(
    counter: &mut Counter,
    rng: &mut RandomSource,
    min: i64,
    max: i64,
) -> Result<SumResult> {
    let num1 = rng.random_int(min, max)?;
    let num2 = rng.random_int(min, max)?;
    let sum = num1
        .checked_add(num2)
        .ok_or(Error::SumOverflow { num1, num2 })?;
    Ok(SumResult {
        num1,
        num2,
        sum,
        calculation_count: counter.bump(1),
    })
}

pub const LOCAL_MESSAGE: &str = "This is a LOCAL variable";
pub const LOCAL_COUNTER: u64 = 10;
pub const SCOPE_EXPLANATION: &str =
    "Notice how local and global variables can have same names but different values!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopeReport {
    pub local_message: &'static str,
    pub local_counter: u64,
    pub global_counter: u64,
    pub explanation: &'static str,
}

impl fmt::Display for ScopeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Local Counter: {} | Global Counter: {} | {}",
            self.local_counter, self.global_counter, self.explanation
        )
    }
}

pub fn demonstrate_scope(counter: &mut Counter, bump: u64) -> ScopeReport {
    // shadows the shared counter's name on purpose; never written back
    let local_counter = LOCAL_COUNTER;
    ScopeReport {
        local_message: LOCAL_MESSAGE,
        local_counter,
        global_counter: counter.bump(bump),
        explanation: SCOPE_EXPLANATION,
    }
}
