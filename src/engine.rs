//! Rabin–Karp **rolling hash** over a fixed window of `k` tokens.
//!
//! [`RollingHash`] is fed one token at a time through
//! [`next_hash`](RollingHash::next_hash) and answers, in **O(1)** per token,
//! the polynomial hash of the trailing window
//!
//! ```text
//!   H(t_0 .. t_{k-1}) = Σ t_i · base^(k−1−i)   mod modulus
//! ```
//!
//! The last `k` tokens are kept in a fixed ring of `k` slots.  The slot under
//! the cursor holds the oldest token; it is read (to cancel its weight) and
//! overwritten by the incoming token in the same step.
//!
//! Before `k` tokens have been fed, the unseen leading slots count as zero
//! tokens, so the first `k − 1` outputs are **not** full‑window hashes; see
//! [`RollingHash::is_full`].
//!
//! A Rust‑idiomatic **builder + iterator** facade
//! (`RollingHashBuilder` / `WindowHashes`) is provided for streams where only
//! full windows matter.

use tracing::debug;

use crate::{
    params::{HashParams, DEFAULT_MODULUS},
    Result,
};

/// Incremental hasher of the last `k` tokens of a stream.
///
/// One engine per stream: the update is a read‑modify‑write of `hash`, one
/// ring slot and the cursor, so an engine shared across threads needs an
/// external lock.
#[derive(Debug, Clone)]
pub struct RollingHash {
    params: HashParams,
    hash: u64,
    memory: Box<[u64]>,
    cursor: usize,
    seen: usize,
}

impl RollingHash {
    /// Window size `k` with the default base and modulus.
    ///
    /// # Errors
    ///
    /// Returns [`RollingHashError::InvalidK`](crate::RollingHashError::InvalidK)
    /// if `k == 0`.
    pub fn new(k: usize) -> Result<Self> {
        Ok(Self::with_params(HashParams::new(k)?))
    }

    /// Window size `k` with an explicit base and modulus.
    ///
    /// # Errors
    ///
    /// See [`HashParams::with_base_modulus`].
    pub fn with_base_modulus(k: usize, base: u64, modulus: u64) -> Result<Self> {
        Ok(Self::with_params(HashParams::with_base_modulus(
            k, base, modulus,
        )?))
    }

    /// Build from already validated parameters.
    pub fn with_params(params: HashParams) -> Self {
        debug!(
            k = params.k,
            base = params.base,
            modulus = params.modulus,
            max_base = params.max_base,
            "rolling hash initialised"
        );
        Self {
            params,
            hash: 0,
            memory: vec![0; params.k].into_boxed_slice(),
            cursor: 0,
            seen: 0,
        }
    }

    /// Fold `token` into the window and return the new hash.
    ///
    /// `token` must be below the modulus. This is only checked in debug
    /// builds.
    ///
    /// ```
    /// # use rollhash_rs::RollingHash;
    /// let mut h = RollingHash::with_base_modulus(3, 101, 1_000_003)?;
    /// assert_eq!(h.next_hash(5), 5);
    /// assert_eq!(h.next_hash(7), 512);
    /// assert_eq!(h.next_hash(2), 51_714);
    /// assert_eq!(h.next_hash(9), 7 * 101 * 101 + 2 * 101 + 9);
    /// # Ok::<(), rollhash_rs::RollingHashError>(())
    /// ```
    #[inline]
    pub fn next_hash(&mut self, token: u64) -> u64 {
        let HashParams {
            base,
            modulus,
            max_base,
            ..
        } = self.params;
        debug_assert!(
            token < modulus,
            "token {token} is not below modulus {modulus}"
        );

        let oldest = self.memory[self.cursor];
        self.hash = (base * self.hash + token + max_base * oldest) % modulus;
        self.memory[self.cursor] = token;

        self.cursor += 1;
        if self.cursor == self.memory.len() {
            self.cursor = 0;
        }
        self.seen = self.seen.saturating_add(1);
        self.hash
    }

    /// Forget every token fed so far; parameters are kept.
    pub fn reset(&mut self) {
        self.memory.fill(0);
        self.hash = 0;
        self.cursor = 0;
        self.seen = 0;
    }

    /// Hash of the current window (the last value returned by
    /// [`next_hash`](Self::next_hash), or `0` before any token).
    #[inline(always)]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// `true` once at least `k` tokens have been fed, i.e. [`hash`](Self::hash)
    /// covers a complete window.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.seen >= self.params.k
    }

    /// Number of tokens fed since construction or the last [`reset`](Self::reset)
    /// (saturating).
    #[inline(always)]
    pub fn tokens_seen(&self) -> usize {
        self.seen
    }

    /// Ring slot holding the oldest token, i.e. the next one overwritten.
    #[inline(always)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline(always)]
    pub fn params(&self) -> &HashParams {
        &self.params
    }

    #[inline(always)]
    pub fn k(&self) -> usize {
        self.params.k
    }

    #[inline(always)]
    pub fn base(&self) -> u64 {
        self.params.base
    }

    #[inline(always)]
    pub fn modulus(&self) -> u64 {
        self.params.modulus
    }

    #[inline(always)]
    pub fn max_base(&self) -> u64 {
        self.params.max_base
    }

    /// Consume the hasher into an iterator over the full‑window hashes of
    /// `tokens`.
    pub fn windows<I>(self, tokens: I) -> WindowHashes<I::IntoIter>
    where
        I: IntoIterator,
        I::Item: Into<u64>,
    {
        WindowHashes {
            hasher: self,
            tokens: tokens.into_iter(),
        }
    }
}

// -------------------------------------------------------------------------
// Builder + Iterator facade
// -------------------------------------------------------------------------

/// Configure a [`RollingHash`]; unset base/modulus fall back to the defaults.
///
/// If only the modulus is set, the base is derived from it with
/// [`default_base_for`](crate::params::default_base_for).
#[derive(Debug, Clone, Copy, Default)]
pub struct RollingHashBuilder {
    k: usize,
    base: Option<u64>,
    modulus: Option<u64>,
}

impl RollingHashBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window length.
    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn base(mut self, base: u64) -> Self {
        self.base = Some(base);
        self
    }

    pub fn modulus(mut self, modulus: u64) -> Self {
        self.modulus = Some(modulus);
        self
    }

    /// Validate the configuration.
    pub fn params(&self) -> Result<HashParams> {
        match (self.base, self.modulus) {
            (None, None) => HashParams::new(self.k),
            (None, Some(modulus)) => HashParams::with_modulus(self.k, modulus),
            (Some(base), modulus) => HashParams::with_base_modulus(
                self.k,
                base,
                modulus.unwrap_or(DEFAULT_MODULUS),
            ),
        }
    }

    /// Finalize into a hasher.
    pub fn finish(self) -> Result<RollingHash> {
        Ok(RollingHash::with_params(self.params()?))
    }

    /// Finalize straight into a [`WindowHashes`] iterator over `tokens`.
    pub fn windows<I>(self, tokens: I) -> Result<WindowHashes<I::IntoIter>>
    where
        I: IntoIterator,
        I::Item: Into<u64>,
    {
        Ok(self.finish()?.windows(tokens))
    }
}

/// Iterator yielding `(start, hash)` for every complete window of a token
/// stream, `start` being the stream index of the window's oldest token.
///
/// The `k − 1` warm‑up outputs are consumed silently.  Indices count every
/// token the wrapped hasher has seen, including any fed before it was
/// wrapped.
///
/// ```
/// # use rollhash_rs::RollingHashBuilder;
/// let text = b"abcabc";
/// let hashes: Vec<_> = RollingHashBuilder::new().k(3).windows(text.iter().copied())?.collect();
/// assert_eq!(hashes.len(), 4);
/// assert_eq!(hashes[0].1, hashes[3].1);
/// # Ok::<(), rollhash_rs::RollingHashError>(())
/// ```
#[derive(Debug, Clone)]
pub struct WindowHashes<I> {
    hasher: RollingHash,
    tokens: I,
}

impl<I> WindowHashes<I> {
    /// The wrapped hasher, in its current state.
    pub fn hasher(&self) -> &RollingHash {
        &self.hasher
    }

    /// Stop iterating and take the hasher back.
    pub fn into_inner(self) -> RollingHash {
        self.hasher
    }
}

impl<I> Iterator for WindowHashes<I>
where
    I: Iterator,
    I::Item: Into<u64>,
{
    type Item = (usize, u64);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let token = self.tokens.next()?.into();
            let hash = self.hasher.next_hash(token);
            if self.hasher.is_full() {
                return Some((self.hasher.tokens_seen() - self.hasher.k(), hash));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let warmup = (self.hasher.k() - 1).saturating_sub(self.hasher.tokens_seen());
        let (lo, hi) = self.tokens.size_hint();
        (
            lo.saturating_sub(warmup),
            hi.map(|hi| hi.saturating_sub(warmup)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{util::window_hash, RollingHashError};

    #[test]
    fn worked_example() {
        let mut h = RollingHash::with_base_modulus(3, 101, 1_000_003).unwrap();
        assert_eq!(h.max_base(), 969_705);
        let out: Vec<u64> = [5, 7, 2, 9].iter().map(|&t| h.next_hash(t)).collect();
        assert_eq!(out, [5, 512, 51_714, 71_618]);
    }

    #[test]
    fn cursor_cycles_once_per_k_tokens() {
        let mut h = RollingHash::new(4).unwrap();
        for i in 0..12u64 {
            assert_eq!(h.cursor(), (i % 4) as usize);
            h.next_hash(i);
        }
        assert_eq!(h.cursor(), 0);
        assert_eq!(h.tokens_seen(), 12);
    }

    #[test]
    fn fills_after_k_tokens() {
        let mut h = RollingHash::new(3).unwrap();
        assert!(!h.is_full());
        h.next_hash(1);
        h.next_hash(2);
        assert!(!h.is_full());
        h.next_hash(3);
        assert!(h.is_full());
    }

    #[test]
    fn warmup_treats_unseen_slots_as_zero() {
        let mut h = RollingHash::new(4).unwrap();
        let (b, m) = (h.base(), h.modulus());
        h.next_hash(9);
        assert_eq!(h.hash(), window_hash(&[0, 0, 0, 9], b, m));
        h.next_hash(4);
        assert_eq!(h.hash(), window_hash(&[0, 0, 9, 4], b, m));
    }

    #[test]
    fn k_one_hashes_single_token() {
        let mut h = RollingHash::new(1).unwrap();
        for t in [0u64, 17, 255, DEFAULT_MODULUS - 1, 3] {
            assert_eq!(h.next_hash(t), t);
        }
    }

    #[test]
    fn reset_restores_fresh_state() {
        let mut h = RollingHash::new(5).unwrap();
        let first: Vec<u64> = b"rolling".iter().map(|&b| h.next_hash(b.into())).collect();
        h.reset();
        assert_eq!((h.hash(), h.cursor(), h.tokens_seen()), (0, 0, 0));
        let again: Vec<u64> = b"rolling".iter().map(|&b| h.next_hash(b.into())).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn builder_defaults_and_overrides() {
        let h = RollingHashBuilder::new().k(6).finish().unwrap();
        assert_eq!((h.base(), h.modulus()), (5_801, 33_554_467));

        let h = RollingHashBuilder::new().k(6).modulus(1_000_003).finish().unwrap();
        assert_eq!((h.base(), h.modulus()), (1_009, 1_000_003));

        let h = RollingHashBuilder::new().k(6).base(257).finish().unwrap();
        assert_eq!((h.base(), h.modulus()), (257, DEFAULT_MODULUS));

        assert_eq!(
            RollingHashBuilder::new().finish().unwrap_err(),
            RollingHashError::InvalidK
        );
    }

    #[test]
    fn windows_skip_warmup() {
        let tokens = [3u8, 1, 4, 1, 5, 9, 2, 6];
        let h = RollingHash::new(3).unwrap();
        let (b, m) = (h.base(), h.modulus());
        let iter = h.windows(tokens);
        assert_eq!(iter.size_hint(), (6, Some(6)));

        let got: Vec<(usize, u64)> = iter.collect();
        let expected: Vec<(usize, u64)> = tokens
            .windows(3)
            .enumerate()
            .map(|(i, w)| {
                let w: Vec<u64> = w.iter().map(|&t| t.into()).collect();
                (i, window_hash(&w, b, m))
            })
            .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn windows_shorter_than_k() {
        let mut iter = RollingHashBuilder::new().k(10).windows(*b"short").unwrap();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.into_inner().tokens_seen(), 5);
    }
}
