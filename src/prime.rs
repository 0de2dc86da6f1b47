//! Deterministic prime search used to derive default hash parameters.
//!
//! Trial division over `6j ± 1` candidates.  The moduli this crate accepts
//! stay below `2^32` (see [`crate::arith::update_bound`]), so the search
//! never tests more than about twenty thousand divisors.  Being `const`, the
//! defaults are fixed at compile time and identical in every build.

/// Returns `true` if `n` is prime.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Smallest prime `>= n`.
///
/// `n` must not exceed the largest 64‑bit prime (`2^64 − 59`).
///
/// ```
/// # use rollhash_rs::prime::next_prime;
/// assert_eq!(next_prime(1 << 25), 33_554_467);
/// assert_eq!(next_prime(13), 13);
/// ```
pub const fn next_prime(n: u64) -> u64 {
    let mut candidate = if n < 2 { 2 } else { n };
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

/// Integer ceiling square root: the smallest `r` with `r² >= n`.
pub const fn ceil_sqrt(n: u64) -> u64 {
    let r = floor_sqrt(n);
    if r * r == n {
        r
    } else {
        r + 1
    }
}

const fn floor_sqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    // lo² <= n < hi²
    let mut lo: u64 = 1;
    let mut hi: u64 = 1 << 32;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if mid <= n / mid {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_primes() {
        let primes: Vec<u64> = (0..60).filter(|&n| is_prime(n)).collect();
        assert_eq!(
            primes,
            [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59]
        );
    }

    #[test]
    fn composites_near_squares() {
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(5_791 * 5_801));
        assert!(!is_prime(4_294_967_297)); // 641 · 6700417
        assert!(is_prime(4_294_967_291));
        assert!(is_prime(1_000_003));
    }

    #[test]
    fn next_prime_values() {
        assert_eq!(next_prime(0), 2);
        assert_eq!(next_prime(1), 2);
        assert_eq!(next_prime(2), 2);
        assert_eq!(next_prime(5_793), 5_801);
        assert_eq!(next_prime(1 << 25), 33_554_467);
        assert_eq!(next_prime(4_294_967_280), 4_294_967_291);
    }

    #[test]
    fn ceil_sqrt_values() {
        assert_eq!(ceil_sqrt(0), 0);
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(2), 2);
        assert_eq!(ceil_sqrt(16), 4);
        assert_eq!(ceil_sqrt(17), 5);
        assert_eq!(ceil_sqrt(33_554_467), 5_793);
        assert_eq!(ceil_sqrt(u64::MAX), 1 << 32);
    }
}
