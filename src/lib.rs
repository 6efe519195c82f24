//! Shamir's Secret Sharing over GF(2^m).
//!
//! This crate splits a secret byte buffer into `n` shares such that any
//! `t` of them reconstruct the original secret, while any `t - 1` reveal
//! nothing about it (information-theoretic security). The field degree is
//! derived from the secret's length (`m = 8 * len`), so secrets of any
//! byte length are supported directly, without block padding.
//!
//! The focus is on **clarity, predictability, and auditability**, in
//! keeping with the scheme's age and the wire format's history: shares
//! produced by this crate are compatible with the classic `ssss` command
//! line tool's binary and text encodings.
//!
//! # Module overview
//!
//! - `bigint`
//!   A fixed-capacity (1024-bit) unsigned integer primitive used to
//!   represent field elements and modulus polynomials.
//!
//! - `field`
//!   GF(2^m) arithmetic: addition, multiplication, inversion, and
//!   selection of an irreducible modulus polynomial for a given degree.
//!
//! - `polynomial`
//!   Horner evaluation of the secret-sharing polynomial, and
//!   column-pivoted Gaussian elimination for reconstruction.
//!
//! - `diffusion`
//!   An XTEA-based, length-preserving permutation applied to the secret
//!   before splitting and undone after combining. This widens each
//!   share's dependence on every byte of the secret; it is **not**
//!   encryption and provides no confidentiality on its own.
//!
//! - `rng`
//!   A ChaCha20-based CSPRNG used to sample polynomial coefficients,
//!   exposed behind the [`rng::RandomSource`] trait so tests and
//!   embedders can supply their own randomness.
//!
//! - `share`
//!   The `Share` type and its binary and text wire encodings.
//!
//! - `config`
//!   Plain option records (`SplitConfig`, `CombineConfig`) threaded
//!   through `split`/`combine` instead of process-global state.
//!
//! - `driver`
//!   The `split` and `combine` entry points, wiring together the field,
//!   polynomial, diffusion, and share modules.
//!
//! - `error`
//!   The crate's unified `Error` type.
//!
//! # Design goals
//!
//! - No silent failure: every fallible operation returns a `Result`.
//! - Explicit configuration over global or thread-local state.
//! - Secret and coefficient buffers are zeroized on every exit path.

mod bigint;
pub mod config;
pub mod diffusion;
pub mod driver;
pub mod error;
pub mod field;
mod os;
pub mod polynomial;
pub mod rng;
pub mod share;

pub use config::{CombineConfig, SplitConfig};
pub use driver::{combine, split};
pub use error::Error;
pub use share::Share;
