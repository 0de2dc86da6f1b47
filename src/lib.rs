//! # rollhash‑rs
//!
//! A small, pure‑Rust **Rabin–Karp rolling hash** over a sliding window of
//! `k` tokens (bytes, characters or token ids), the primitive behind k‑gram
//! fingerprinting of documents and source code.
//!
//! This crate provides:
//! - [`RollingHash`]: the stateful hasher; one [`next_hash`](RollingHash::next_hash)
//!   call per token, **O(1)** each, returning the hash of the last `k` tokens.
//! - [`RollingHashBuilder`] / [`WindowHashes`]: a builder + iterator facade
//!   that yields `(start, hash)` for every complete window of a stream.
//! - [`HashParams`]: validated `(k, base, modulus)` triples, with defaults
//!   derived at compile time (`modulus = next_prime(2^25)`,
//!   `base = next_prime(⌈√modulus⌉)`).
//!
//! Modular arithmetic lives in [`arith`], the prime search behind the
//! defaults in [`prime`], and the direct (non‑incremental) reference hash in
//! [`util`].
//!
//! ## Example
//!
//! ```rust
//! use rollhash_rs::{Result, RollingHash, RollingHashBuilder};
//!
//! fn main() -> Result<()> {
//!     // Low-level: feed tokens one at a time
//!     let mut hasher = RollingHash::new(4)?;
//!     let hashes: Vec<u64> = b"abcdabcd".iter().map(|&b| hasher.next_hash(b.into())).collect();
//!     // the first k-1 values are warm-up hashes; from the k-th on they
//!     // cover exactly the last 4 tokens
//!     assert_eq!(hashes[3], hashes[7]);
//!
//!     // Builder + iterator: only complete windows
//!     for (start, hash) in RollingHashBuilder::new().k(4).windows(b"abcdabcd".iter().copied())? {
//!         println!("window at {start}: {hash:#x}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod arith;
pub mod params;
pub mod prime;
pub mod util;
/// Stateful rolling hasher and its builder + iterator facade.
pub mod engine;

// ──────────────────────────────────────────────────────────────
// Re‑exports: public API surface
// --------------------------------------------------------------------------

/// Binary modular exponentiation.
pub use arith::mod_pow;
/// Smallest prime `>= n`.
pub use prime::next_prime;
/// Direct polynomial hash of one window.
pub use util::window_hash;

pub use params::HashParams;
pub use params::{DEFAULT_BASE, DEFAULT_MODULUS};

/// Primary rolling hasher.
///
/// See [`engine::RollingHash`] for full documentation.
pub use engine::RollingHash;
pub use engine::RollingHashBuilder;
pub use engine::WindowHashes;

// ──────────────────────────────────────────────────────────────
// Crate‑wide result and error types
// --------------------------------------------------------------------------

/// Shorthand `Result` alias for this crate’s operations.
pub type Result<T, E = RollingHashError> = std::result::Result<T, E>;

/// Parameter errors, all raised at construction time. Hashing itself never
/// fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RollingHashError {
    /// `k` was zero.
    #[error("k must be > 0")]
    InvalidK,

    #[error("modulus ({modulus}) must be at least 3")]
    ModulusTooSmall { modulus: u64 },

    #[error("modulus ({modulus}) is not prime")]
    ModulusNotPrime { modulus: u64 },

    /// The base must lie in `[2, modulus)`.
    #[error("base ({base}) must be in [2, {modulus})")]
    BaseOutOfRange { base: u64, modulus: u64 },

    /// `base·(m−1) + (m−1) + (m−1)²` does not fit in a `u64`.
    #[error("base ({base}) and modulus ({modulus}) overflow 64-bit intermediate arithmetic")]
    ArithmeticOverflow { base: u64, modulus: u64 },
}
