//! Integer helpers

/// Greatest common divisor (Euclid)
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple; `lcm(0, n)` is 0
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        0
    } else {
        a / gcd(a, b) * b
    }
}

/// LCM of every value, or `None` for an empty iterator
pub fn lcm_all(values: impl IntoIterator<Item = u64>) -> Option<u64> {
    values.into_iter().reduce(lcm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_small_values() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(0, 6), 0);
        assert_eq!(lcm_all([2, 3, 4]), Some(12));
        assert_eq!(lcm_all([]), None);
    }

    proptest! {
        #[test]
        fn lcm_is_common_multiple(a in 1u64..10_000, b in 1u64..10_000) {
            let m = lcm(a, b);
            prop_assert_eq!(m % a, 0);
            prop_assert_eq!(m % b, 0);
            prop_assert_eq!(m * gcd(a, b), a * b);
        }
    }
}
