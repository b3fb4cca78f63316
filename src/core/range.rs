/// Even integers `i` with `from < i < to`, ascending. Both bounds are
/// strictly exclusive.
pub fn even_numbers_between(from: u64, to: u64) -> Vec<u64> {
    if from >= to {
        return Vec::new();
    }

    (from + 1..to).filter(|i| i % 2 == 0).collect()
}
