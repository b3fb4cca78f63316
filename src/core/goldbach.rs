use crate::core::primes::primes_below;
use crate::domain::model::PrimePair;
use crate::utils::error::{GoldbachError, Result};

/// Find one pair of primes summing to `n`.
///
/// Returns `None` when `n` is odd or no decomposition exists among primes
/// below `n`. The candidate primes are scanned largest-first in both loops
/// and the first hit wins, so the returned pair is the one closest to
/// `n / 2` (`find_prime_pair(10)` is (5, 5), not (3, 7)). That tie-break is
/// an artifact of the sort order, kept for behavioral parity.
pub fn find_prime_pair(n: u64) -> Option<PrimePair> {
    if n % 2 != 0 {
        return None;
    }

    let mut primes = primes_below(n);
    primes.sort_unstable_by(|a, b| b.cmp(a));

    for &p in &primes {
        for &q in &primes {
            if p <= q && p + q == n {
                return Some(PrimePair { p, q });
            }
        }
    }

    None
}

/// Does the conjecture hold for the single even number `n`?
///
/// `n <= 2` or odd `n` is a precondition violation, reported as an error
/// rather than a panic. The range scan never supplies such values, so in the
/// normal call path this error is unreachable.
pub fn conjecture_holds_for(n: u64) -> Result<bool> {
    if n <= 2 || n % 2 == 1 {
        return Err(GoldbachError::InvalidTarget { value: n });
    }

    Ok(find_prime_pair(n).is_some())
}
