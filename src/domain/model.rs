use serde::{Deserialize, Serialize};

/// Two primes summing to an even target, with `p <= q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimePair {
    pub p: u64,
    pub q: u64,
}

impl PrimePair {
    pub fn sum(&self) -> u64 {
        self.p + self.q
    }
}

/// Result of scanning one range of even numbers against the conjecture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Effective lower bound after clamping up to 2.
    pub from: u64,
    pub to: u64,
    /// How many even numbers the range contained.
    pub candidates: usize,
    /// First even number with no prime-pair decomposition, if any.
    pub counterexample: Option<u64>,
}

impl ScanOutcome {
    pub fn holds(&self) -> bool {
        self.counterexample.is_none()
    }
}
