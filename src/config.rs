//! Split/combine option records.
//!
//! The historical reference tool threaded its options through process-wide
//! globals (`opt_threshold`, `opt_diffusion`, ...) set once by `getopt` and
//! read everywhere. Here the same options are explicit, caller-owned
//! values passed into [`crate::driver::split`] and [`crate::driver::combine`],
//! so the library has no global mutable state and is safe to call
//! concurrently with different configurations.

/// Options controlling [`crate::driver::split`].
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Number of shares required to reconstruct the secret (`T`).
    pub threshold: u8,
    /// Total number of shares to generate (`N`).
    pub shares: u8,
    /// Whether to run the secret through the diffusion layer before
    /// splitting.
    pub diffusion: bool,
    /// Optional label prefixed to each share's text encoding.
    pub token: Option<String>,
    /// Whether the secret is supplied/displayed as hex rather than ASCII.
    /// Shares themselves are always hex-encoded in text form.
    pub hex: bool,
    /// Explicit field degree in bits. Must be a positive multiple of 8, or
    /// `split` returns `InvalidParameter`. When set, the secret buffer is
    /// zero-padded on the left to `security_bits / 8` bytes before
    /// splitting, matching the historical tool's `-s` flag. When `None`,
    /// the field degree is simply `8 * secret.len()`.
    pub security_bits: Option<usize>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            threshold: 2,
            shares: 2,
            diffusion: true,
            token: None,
            hex: false,
            security_bits: None,
        }
    }
}

/// Options controlling [`crate::driver::combine`].
#[derive(Debug, Clone)]
pub struct CombineConfig {
    /// Number of shares the caller expects to supply (`T`).
    pub threshold: u8,
    /// Whether to reverse the diffusion layer after combining.
    pub diffusion: bool,
    /// Whether the recovered secret should be treated/printed as hex.
    pub hex: bool,
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            threshold: 2,
            diffusion: true,
            hex: false,
        }
    }
}
