//! Deterministic primality testing for machine-width moduli.
//!
//! Ordinary construction trusts the caller to supply a prime.  The checked
//! constructors use [`is_prime`] to turn a composite modulus into an explicit
//! error instead of silently wrong inverses and powers.

/// Witness bases sufficient for a deterministic Miller–Rabin test on every
/// `u64` input.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut base: u64, mut e: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    base %= m;
    while e > 0 {
        if e & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        e >>= 1;
    }
    result
}

/// Returns `true` when `n` is prime.
///
/// Uses Miller–Rabin with the first twelve primes as witnesses, which is
/// exact for all 64-bit integers.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &w in &WITNESSES {
        if n % w == 0 {
            return n == w;
        }
    }
    // n - 1 = d * 2^s with d odd
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;
    'witness: for &a in &WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        let primes: Vec<u64> = (0..50).filter(|&n| is_prime(n)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }

    #[test]
    fn test_large_primes_and_composites() {
        // 2^61 - 1 is a Mersenne prime; 2^64 - 59 is the largest u64 prime.
        assert!(is_prime((1u64 << 61) - 1));
        assert!(is_prime(u64::MAX - 58));
        assert!(is_prime(0xFFFF_FFFF_0000_0001));
        assert!(!is_prime(u64::MAX));
        // Strong pseudoprime to bases 2, 3, 5 and 7.
        assert!(!is_prime(3_215_031_751));
        // Carmichael number.
        assert!(!is_prime(561));
    }
}
