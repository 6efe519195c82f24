//! Random number generation.
//!
//! Built around a ChaCha20-based deterministic random bit generator (DRBG)
//! exposed through the [`RandomSource`] trait, so that `split`/`combine`
//! callers can choose where randomness comes from: the operating system's
//! entropy pool ([`Csprng`]), a fixed seed for reproducible tests
//! ([`DeterministicRandom`]), or a caller-supplied source.
//!
//! Design goals:
//! - Cryptographic security for the OS-backed source
//! - Deterministic expansion from a secure seed
//! - Forward secrecy through periodic rekeying
//! - No heap allocation in the block function itself
//! - Minimal and explicit API surface

pub(crate) mod chacha20;
mod csprng;

use crate::error::Error;

pub use csprng::Csprng;

/// A source of randomness usable by field element generation and
/// coefficient sampling.
///
/// Implementors may fail (an exhausted OS entropy source, a closed pipe
/// for a caller-supplied source, ...); failures propagate as
/// [`Error::Resource`] rather than panicking.
pub trait RandomSource {
    /// Fills `buf` with random bytes, or fails without partially filling it
    /// in a way the caller should trust.
    fn try_fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), Error>;
}

impl RandomSource for Csprng {
    fn try_fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(buf)
    }
}

/// A reproducible, non-cryptographic [`RandomSource`] for tests and for
/// documented deterministic examples. Internally just another instance of
/// the same ChaCha20 DRBG, seeded from a small integer instead of OS
/// entropy.
pub struct DeterministicRandom(Csprng);

impl DeterministicRandom {
    /// Builds a source whose entire output stream is determined by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        let mut expanded = [0u8; 32];
        expanded[..8].copy_from_slice(&seed.to_le_bytes());
        Self(Csprng::from_seed(expanded))
    }
}

impl RandomSource for DeterministicRandom {
    fn try_fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        self.0.fill_bytes(buf)
    }
}
