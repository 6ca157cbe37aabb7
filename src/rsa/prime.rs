// Primality Testing
// Deterministic trial division, sized for the small primes this toolkit uses

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;

/// Returns true when `num` is prime.
///
/// Anything below 2 (zero and negatives included) is not prime. Otherwise
/// every divisor from 2 up to and including `floor(sqrt(num))` is tried.
pub fn is_prime(num: &BigInt) -> bool {
    let two = BigInt::from(2u8);
    if num < &two {
        return false;
    }

    let limit = num.sqrt();
    let mut divisor = two;
    while divisor <= limit {
        if num.is_multiple_of(&divisor) {
            return false;
        }
        divisor += BigInt::one();
    }

    true
}

/// Convenience wrapper for machine integers.
pub fn is_prime_i64(num: i64) -> bool {
    is_prime(&BigInt::from(num))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_two_is_not_prime() {
        for n in [-100i64, -7, -2, -1, 0, 1] {
            assert!(!is_prime_i64(n), "{} reported prime", n);
        }
    }

    #[test]
    fn test_small_primes() {
        for n in [2i64, 3, 5, 7, 11, 13] {
            assert!(is_prime_i64(n), "{} not reported prime", n);
        }
    }

    #[test]
    fn test_small_composites() {
        for n in [4i64, 6, 8, 9, 10, 25, 49, 3233] {
            assert!(!is_prime_i64(n), "{} reported prime", n);
        }
    }

    #[test]
    fn test_perfect_square_of_prime() {
        // The square root itself must be tried as a divisor
        assert!(!is_prime_i64(121));
        assert!(!is_prime_i64(169));
    }

    #[test]
    fn test_worked_example_primes() {
        assert!(is_prime_i64(61));
        assert!(is_prime_i64(53));
    }

    #[test]
    fn test_primes_below_thirty() {
        let primes: Vec<i64> = (0..30).filter(|&n| is_prime_i64(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_larger_prime() {
        // 2^31 - 1
        assert!(is_prime(&BigInt::from(2_147_483_647i64)));
    }
}
