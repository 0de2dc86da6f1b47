//! Low‑level **modular arithmetic** primitives for the rolling hash.
//!
//! Everything here works on plain `u64` residues and never forms an
//! unreduced power: every product is of two values already reduced below
//! the modulus, so the only width requirement is that `(modulus − 1)²`
//! fits in a `u64`.  [`crate::HashParams`] checks that bound once at
//! construction; the functions below only `debug_assert!` it.
//!
//! All functions are `const fn` so default parameters can be derived at
//! compile time.

/// Modular exponentiation `base^exp mod modulus` by right‑to‑left binary
/// exponentiation (square‑and‑multiply).
///
/// The loop runs while `exp > 1`; the last set bit is folded in by one
/// extra multiply after the loop.  `exp == 0` yields `1 % modulus`.
///
/// Precondition: `modulus > 0` and `(modulus − 1)²` fits in a `u64`.
/// Use [`mod_pow_checked`] when the modulus is untrusted.
///
/// # Examples
///
/// ```
/// # use rollhash_rs::arith::mod_pow;
/// assert_eq!(mod_pow(2, 10, 1000), 24);
/// assert_eq!(mod_pow(9, 0, 7), 1);
/// assert_eq!(mod_pow(9, 0, 1), 0);
/// ```
#[inline]
pub const fn mod_pow(base: u64, exp: u64, modulus: u64) -> u64 {
    debug_assert!(
        square_fits(modulus),
        "modulus must be > 0 and (modulus - 1)^2 must fit in u64"
    );
    if exp == 0 {
        return 1 % modulus;
    }

    let mut base = base % modulus;
    let mut exp = exp;
    let mut acc = 1;
    while exp > 1 {
        if exp & 1 == 1 {
            acc = (base * acc) % modulus;
        }
        base = (base * base) % modulus;
        exp >>= 1;
    }
    (base * acc) % modulus
}

/// Like [`mod_pow`], but returns `None` instead of overflowing when
/// `modulus == 0` or `(modulus − 1)²` does not fit in a `u64`.
#[inline]
pub const fn mod_pow_checked(base: u64, exp: u64, modulus: u64) -> Option<u64> {
    if !square_fits(modulus) {
        return None;
    }
    Some(mod_pow(base, exp, modulus))
}

/// Largest intermediate value the rolling update can produce before its
/// final reduction, or `None` if it would not fit in a `u64`.
///
/// With every operand reduced below `modulus`, the update
/// `base·hash + token + max_base·oldest` is bounded by
/// `base·(m−1) + (m−1) + (m−1)²`.
#[inline]
pub const fn update_bound(base: u64, modulus: u64) -> Option<u64> {
    if modulus == 0 {
        return None;
    }
    let top = modulus - 1;
    let Some(square) = top.checked_mul(top) else {
        return None;
    };
    let Some(shifted) = base.checked_mul(top) else {
        return None;
    };
    let Some(partial) = square.checked_add(shifted) else {
        return None;
    };
    partial.checked_add(top)
}

#[inline(always)]
const fn square_fits(modulus: u64) -> bool {
    modulus > 0 && (modulus - 1).checked_mul(modulus - 1).is_some()
}
