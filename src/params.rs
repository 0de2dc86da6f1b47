//! Validated rolling‑hash parameters `(k, base, modulus)`.
//!
//! A [`HashParams`] value is the only way to configure a
//! [`RollingHash`](crate::RollingHash): it is checked once when built and is
//! immutable afterwards, so the derived correction constant
//! [`max_base`](HashParams::max_base) never needs recomputing.
//!
//! The defaults follow a base ≈ √modulus sizing: with
//! `modulus = next_prime(2^25)` every intermediate product of the rolling
//! update stays far inside a `u64`.

use tracing::debug;

use crate::{
    arith::{mod_pow, update_bound},
    prime::{ceil_sqrt, is_prime, next_prime},
    Result, RollingHashError,
};

/// Default modulus: the smallest prime `>= 2^25`.
pub const DEFAULT_MODULUS: u64 = next_prime(1 << 25);

/// Default base: the smallest prime `>= ⌈√DEFAULT_MODULUS⌉`.
pub const DEFAULT_BASE: u64 = default_base_for(DEFAULT_MODULUS);

/// The base derived for a given modulus when the caller supplies none.
///
/// ```
/// # use rollhash_rs::params::{default_base_for, DEFAULT_BASE, DEFAULT_MODULUS};
/// assert_eq!(default_base_for(DEFAULT_MODULUS), DEFAULT_BASE);
/// assert_eq!(default_base_for(1_000_003), 1_009);
/// ```
pub const fn default_base_for(modulus: u64) -> u64 {
    next_prime(ceil_sqrt(modulus))
}

/// Immutable, validated parameters of a polynomial rolling hash.
///
/// Invariants upheld by every constructor:
/// - `k >= 1`
/// - `modulus` is prime and `>= 3`
/// - `2 <= base < modulus`
/// - the worst‑case update intermediate fits in a `u64`
/// - `max_base == modulus − base^k mod modulus`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawParams", into = "RawParams")
)]
pub struct HashParams {
    pub(crate) k: usize,
    pub(crate) base: u64,
    pub(crate) modulus: u64,
    pub(crate) max_base: u64,
}

impl HashParams {
    /// Window size `k` with the default base and modulus.
    ///
    /// # Errors
    ///
    /// Returns [`RollingHashError::InvalidK`] if `k == 0`.
    pub fn new(k: usize) -> Result<Self> {
        Self::with_base_modulus(k, DEFAULT_BASE, DEFAULT_MODULUS)
    }

    /// Window size `k` with a custom modulus; the base is derived with
    /// [`default_base_for`].
    pub fn with_modulus(k: usize, modulus: u64) -> Result<Self> {
        Self::with_base_modulus(k, default_base_for(modulus), modulus)
    }

    /// Fully explicit parameters.
    ///
    /// # Errors
    ///
    /// Fails fast if `k == 0`, the modulus is below 3 or not prime, the base
    /// lies outside `[2, modulus)`, or the rolling update could overflow a
    /// `u64` for this `(base, modulus)`.
    pub fn with_base_modulus(k: usize, base: u64, modulus: u64) -> Result<Self> {
        if let Err(err) = validate(k, base, modulus) {
            debug!(k, base, modulus, error = %err, "rejected rolling hash parameters");
            return Err(err);
        }

        let max_base = modulus - mod_pow(base, k as u64, modulus);
        Ok(Self {
            k,
            base,
            modulus,
            max_base,
        })
    }

    /// Window length.
    #[inline(always)]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline(always)]
    pub fn base(&self) -> u64 {
        self.base
    }

    #[inline(always)]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// `modulus − base^k mod modulus`: adding `max_base · t` is congruent to
    /// subtracting the outgoing token's weight `t · base^k`.
    #[inline(always)]
    pub fn max_base(&self) -> u64 {
        self.max_base
    }
}

fn validate(k: usize, base: u64, modulus: u64) -> Result<()> {
    if k == 0 {
        return Err(RollingHashError::InvalidK);
    }
    if modulus < 3 {
        return Err(RollingHashError::ModulusTooSmall { modulus });
    }
    if base < 2 || base >= modulus {
        return Err(RollingHashError::BaseOutOfRange { base, modulus });
    }
    if update_bound(base, modulus).is_none() {
        return Err(RollingHashError::ArithmeticOverflow { base, modulus });
    }
    // cheap: the overflow bound keeps modulus below 2^32
    if !is_prime(modulus) {
        return Err(RollingHashError::ModulusNotPrime { modulus });
    }
    Ok(())
}

/// Wire form of [`HashParams`]; `max_base` is re‑derived on load.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawParams {
    k: usize,
    base: u64,
    modulus: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawParams> for HashParams {
    type Error = RollingHashError;

    fn try_from(raw: RawParams) -> Result<Self> {
        Self::with_base_modulus(raw.k, raw.base, raw.modulus)
    }
}

#[cfg(feature = "serde")]
impl From<HashParams> for RawParams {
    fn from(p: HashParams) -> Self {
        Self {
            k: p.k,
            base: p.base,
            modulus: p.modulus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(DEFAULT_MODULUS, 33_554_467);
        assert_eq!(DEFAULT_BASE, 5_801);
        let p = HashParams::new(5).unwrap();
        assert_eq!((p.k(), p.base(), p.modulus()), (5, DEFAULT_BASE, DEFAULT_MODULUS));
        assert_eq!(p.max_base(), 20_660_629);
    }

    #[test]
    fn max_base_cancels_power() {
        for k in 1..=64 {
            let p = HashParams::with_base_modulus(k, 101, 1_000_003).unwrap();
            let pow = mod_pow(p.base(), k as u64, p.modulus());
            assert_eq!((p.max_base() + pow) % p.modulus(), 0, "k = {k}");
            assert!(p.max_base() < p.modulus());
        }
    }

    #[test]
    fn derived_base() {
        let p = HashParams::with_modulus(4, 1_000_003).unwrap();
        assert_eq!(p.base(), 1_009);
        let p = HashParams::with_modulus(4, 5).unwrap();
        assert_eq!(p.base(), 3);
    }

    #[test]
    fn rejects_invalid() {
        use RollingHashError::*;
        assert_eq!(HashParams::new(0), Err(InvalidK));
        assert_eq!(
            HashParams::with_base_modulus(3, 2, 2),
            Err(ModulusTooSmall { modulus: 2 })
        );
        assert_eq!(
            HashParams::with_base_modulus(3, 1, 101),
            Err(BaseOutOfRange { base: 1, modulus: 101 })
        );
        assert_eq!(
            HashParams::with_base_modulus(3, 101, 101),
            Err(BaseOutOfRange { base: 101, modulus: 101 })
        );
        assert_eq!(
            HashParams::with_base_modulus(3, 7, 1_000_001),
            Err(ModulusNotPrime { modulus: 1_000_001 })
        );
        assert_eq!(
            HashParams::with_base_modulus(3, 65_537, 4_294_967_291),
            Err(ArithmeticOverflow { base: 65_537, modulus: 4_294_967_291 })
        );
    }

    #[test]
    fn large_prime_modulus() {
        // 2_147_483_647 = 2^31 − 1
        let p = HashParams::with_base_modulus(8, 46_349, 2_147_483_647).unwrap();
        assert!(update_bound(p.base(), p.modulus()).is_some());
    }
}
