/// Decide whether `n` is prime by trial division.
///
/// 0, 1 and 4 are excluded up front. The divisor loop runs over `2..n / 2`,
/// which is empty for all three, so generic trial division would wrongly
/// report them prime. 2 and 3 also have empty candidate ranges and really
/// are prime.
pub fn is_prime(n: u64) -> bool {
    const IGNORED_NUMBERS: [u64; 3] = [0, 1, 4];
    if IGNORED_NUMBERS.contains(&n) {
        return false;
    }

    for x in 2..n / 2 {
        if n % x == 0 {
            return false;
        }
    }

    true
}

/// All primes in `[0, n)`, ascending. O(n²) worst case, which is fine for
/// the ranges this tool targets (thousands).
pub fn primes_below(n: u64) -> Vec<u64> {
    (0..n).filter(|&i| is_prime(i)).collect()
}
