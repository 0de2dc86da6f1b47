//! Miscellaneous helpers shared by the rolling hasher and its callers.
//!
//! - **`window_hash`**: the polynomial hash of one window computed
//!   directly (Horner's rule, **O(k)**), i.e. the value
//!   [`RollingHash::next_hash`](crate::RollingHash::next_hash) must
//!   reproduce incrementally once the window is full.

/// Direct polynomial hash `Σ t_i · base^(len−1−i) mod modulus` of `tokens`,
/// oldest token first.
///
/// Every token must be below `modulus`, and `(base, modulus)` must satisfy
/// the same width bound as [`HashParams`](crate::HashParams).
///
/// # Examples
///
/// ```
/// # use rollhash_rs::util::window_hash;
/// assert_eq!(window_hash(&[7, 2, 9], 101, 1_000_003), 71_618);
/// assert_eq!(window_hash(&[], 101, 1_000_003), 0);
/// ```
#[inline]
pub fn window_hash(tokens: &[u64], base: u64, modulus: u64) -> u64 {
    tokens
        .iter()
        .fold(0, |h, &t| (base * h + t) % modulus)
}
