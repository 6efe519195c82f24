//! `split` and `combine` entry points.
//!
//! These wire together [`crate::field`], [`crate::polynomial`],
//! [`crate::diffusion`], and [`crate::share`] into the two public
//! operations of the scheme. Every coefficient and intermediate secret
//! buffer is wrapped in [`zeroize::Zeroizing`] so it is wiped on every
//! exit path, success or error.

use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::config::{CombineConfig, SplitConfig};
use crate::diffusion::{self, Direction};
use crate::error::Error;
use crate::field::{Field, FieldElement};
use crate::polynomial::{horner, index_to_element, reconstruct};
use crate::rng::RandomSource;
use crate::share::Share;

/// Splits `secret` into `cfg.shares` shares, `cfg.threshold` of which
/// reconstruct it.
///
/// # Errors
/// Returns [`Error::InvalidParameter`] if `cfg.threshold` or `cfg.shares`
/// is out of the supported range (`2 <= threshold <= shares <= 255`) or
/// `secret` is empty. Propagates [`Error::Resource`] from `rng` on
/// entropy failure.
pub fn split(secret: &[u8], cfg: &SplitConfig, rng: &mut dyn RandomSource) -> Result<Vec<Share>, Error> {
    if secret.is_empty() {
        return Err(Error::InvalidParameter("secret must not be empty"));
    }
    if cfg.threshold < 2 || cfg.shares < cfg.threshold {
        return Err(Error::InvalidParameter("threshold must be >= 2 and <= number of shares"));
    }

    debug!(len = secret.len(), threshold = cfg.threshold, shares = cfg.shares, "splitting secret");

    let mut buf = Zeroizing::new(secret.to_vec());
    if let Some(bits) = cfg.security_bits {
        if bits == 0 || bits % 8 != 0 {
            return Err(Error::InvalidParameter("security_bits must be a positive multiple of 8"));
        }
        let target_len = bits / 8;
        if target_len < buf.len() {
            return Err(Error::InvalidParameter("security_bits is smaller than the secret"));
        }
        if target_len > buf.len() {
            let mut padded = vec![0u8; target_len - buf.len()];
            padded.extend_from_slice(&buf);
            *buf = padded;
        }
    }
    if cfg.diffusion {
        diffusion::apply(&mut buf, Direction::Encode);
    }

    let field = Field::new(buf.len() * 8)?;
    let mut coeffs = Zeroizing::new(Vec::with_capacity(cfg.threshold as usize));
    coeffs.push(FieldElement::from_be_bytes(&buf));
    for _ in 1..cfg.threshold {
        coeffs.push(field.random_element(rng)?);
    }

    let mut shares = Vec::with_capacity(cfg.shares as usize);
    for idx in 1u8..=cfg.shares {
        let x = index_to_element(&field, idx);
        let y = horner(&field, x, &coeffs);
        trace!(index = idx, "evaluated share");
        shares.push(Share {
            threshold: cfg.threshold,
            index: idx,
            y: y.to_be_bytes(field.byte_len()),
        });
    }

    Ok(shares)
}

/// Reconstructs the secret from `shares`.
///
/// Exactly `cfg.threshold` shares must be supplied; this mirrors the
/// historical tool's behavior of reading precisely `threshold` lines
/// rather than accepting (and discarding) extras.
///
/// # Errors
/// - [`Error::InvalidParameter`] if `shares.len() != cfg.threshold as usize`,
///   the share set is empty, or shares disagree on secret length.
/// - [`Error::InvalidShare`] if a share's embedded threshold exceeds
///   `cfg.threshold`, or a share carries a zero index.
/// - [`Error::LinearDependence`] if the shares are linearly dependent
///   (most commonly, the same index supplied twice).
pub fn combine(shares: &[Share], cfg: &CombineConfig) -> Result<Vec<u8>, Error> {
    if shares.len() != cfg.threshold as usize {
        return Err(Error::InvalidParameter("number of shares supplied must equal the configured threshold"));
    }
    let Some(first) = shares.first() else {
        return Err(Error::InvalidParameter("at least one share is required"));
    };
    let secret_len = first.y.len();
    if secret_len == 0 {
        return Err(Error::InvalidShare("share carries an empty value".into()));
    }

    for share in shares {
        if share.index == 0 {
            return Err(Error::InvalidShare("share index must not be zero".into()));
        }
        if share.threshold != 0 && share.threshold > cfg.threshold {
            return Err(Error::InvalidShare(format!(
                "share threshold {} exceeds requested threshold {}",
                share.threshold, cfg.threshold
            )));
        }
        if share.y.len() != secret_len {
            return Err(Error::InvalidShare("shares have different secret lengths".into()));
        }
    }

    debug!(threshold = cfg.threshold, secret_len, "combining shares");

    let field = Field::new(secret_len * 8)?;
    let pairs: Vec<(u8, FieldElement)> = shares
        .iter()
        .map(|s| (s.index, FieldElement::from_be_bytes(&s.y)))
        .collect();

    let secret_element = reconstruct(&field, &pairs)?;
    let mut buf = Zeroizing::new(secret_element.to_be_bytes(secret_len));

    if cfg.diffusion {
        diffusion::apply(&mut buf, Direction::Decode);
    }

    Ok(buf.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::DeterministicRandom;

    #[test]
    fn round_trip_with_diffusion() {
        let secret = b"this is a sixteen byte secret!!".to_vec();
        let split_cfg = SplitConfig { threshold: 3, shares: 5, diffusion: true, token: None, hex: false, security_bits: None };
        let mut rng = DeterministicRandom::from_seed(123);
        let shares = split(&secret, &split_cfg, &mut rng).unwrap();
        assert_eq!(shares.len(), 5);

        let combine_cfg = CombineConfig { threshold: 3, diffusion: true, hex: false };
        let recovered = combine(&shares[1..4], &combine_cfg).unwrap();
        assert_eq!(recovered, secret);
    }

    #[test]
    fn round_trip_without_diffusion_short_secret() {
        let secret = vec![0x42];
        let split_cfg = SplitConfig { threshold: 2, shares: 3, diffusion: false, token: None, hex: false, security_bits: None };
        let mut rng = DeterministicRandom::from_seed(1);
        let shares = split(&secret, &split_cfg, &mut rng).unwrap();

        let combine_cfg = CombineConfig { threshold: 2, diffusion: false, hex: false };
        let recovered = combine(&shares[0..2], &combine_cfg).unwrap();
        assert_eq!(recovered, secret);
    }

    #[test]
    fn every_subset_of_five_choose_three_reconstructs() {
        let secret = b"ABCD".to_vec();
        let split_cfg = SplitConfig { threshold: 3, shares: 5, diffusion: false, token: None, hex: false, security_bits: None };
        let mut rng = DeterministicRandom::from_seed(2024);
        let shares = split(&secret, &split_cfg, &mut rng).unwrap();

        let combine_cfg = CombineConfig { threshold: 3, diffusion: false, hex: false };
        let indices = [0, 1, 2, 3, 4];
        for a in 0..5 {
            for b in (a + 1)..5 {
                for c in (b + 1)..5 {
                    let subset = vec![
                        shares[indices[a]].clone(),
                        shares[indices[b]].clone(),
                        shares[indices[c]].clone(),
                    ];
                    assert_eq!(combine(&subset, &combine_cfg).unwrap(), secret);
                }
            }
        }
    }

    #[test]
    fn insufficient_shares_is_invalid_parameter() {
        let secret = b"secret!!".to_vec();
        let split_cfg = SplitConfig { threshold: 3, shares: 4, diffusion: false, token: None, hex: false, security_bits: None };
        let mut rng = DeterministicRandom::from_seed(9);
        let shares = split(&secret, &split_cfg, &mut rng).unwrap();

        let combine_cfg = CombineConfig { threshold: 3, diffusion: false, hex: false };
        let err = combine(&shares[0..2], &combine_cfg).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn duplicate_share_is_linear_dependence() {
        let secret = b"secret!!".to_vec();
        let split_cfg = SplitConfig { threshold: 2, shares: 3, diffusion: false, token: None, hex: false, security_bits: None };
        let mut rng = DeterministicRandom::from_seed(5);
        let shares = split(&secret, &split_cfg, &mut rng).unwrap();

        let combine_cfg = CombineConfig { threshold: 2, diffusion: false, hex: false };
        let dup = vec![shares[0].clone(), shares[0].clone()];
        let err = combine(&dup, &combine_cfg).unwrap_err();
        assert!(matches!(err, Error::LinearDependence));
    }

    #[test]
    fn security_bits_pads_short_secret() {
        let secret = vec![0x42u8];
        let split_cfg = SplitConfig {
            threshold: 2,
            shares: 3,
            diffusion: false,
            token: None,
            hex: false,
            security_bits: Some(64),
        };
        let mut rng = DeterministicRandom::from_seed(11);
        let shares = split(&secret, &split_cfg, &mut rng).unwrap();
        assert_eq!(shares[0].y.len(), 8);

        let combine_cfg = CombineConfig { threshold: 2, diffusion: false, hex: false };
        let recovered = combine(&shares[0..2], &combine_cfg).unwrap();
        assert_eq!(recovered, vec![0u8, 0, 0, 0, 0, 0, 0, 0x42]);
    }

    #[test]
    fn security_bits_smaller_than_secret_is_rejected() {
        let secret = vec![0x42u8; 4];
        let split_cfg = SplitConfig {
            threshold: 2,
            shares: 3,
            diffusion: false,
            token: None,
            hex: false,
            security_bits: Some(16),
        };
        let mut rng = DeterministicRandom::from_seed(12);
        let err = split(&secret, &split_cfg, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn security_bits_not_a_multiple_of_eight_is_rejected() {
        let secret = vec![0x42u8; 4];
        let split_cfg = SplitConfig {
            threshold: 2,
            shares: 3,
            diffusion: false,
            token: None,
            hex: false,
            security_bits: Some(10),
        };
        let mut rng = DeterministicRandom::from_seed(13);
        let err = split(&secret, &split_cfg, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn share_with_excess_embedded_threshold_is_rejected() {
        let secret = b"secret!!".to_vec();
        let split_cfg = SplitConfig { threshold: 2, shares: 3, diffusion: false, token: None, hex: false, security_bits: None };
        let mut rng = DeterministicRandom::from_seed(6);
        let mut shares = split(&secret, &split_cfg, &mut rng).unwrap();
        shares[0].threshold = 99;

        let combine_cfg = CombineConfig { threshold: 2, diffusion: false, hex: false };
        let err = combine(&shares[0..2], &combine_cfg).unwrap_err();
        assert!(matches!(err, Error::InvalidShare(_)));
    }
}
