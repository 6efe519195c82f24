use gf2ss::rng::DeterministicRandom;
use gf2ss::{combine, split, CombineConfig, Error, SplitConfig};

fn split_cfg(threshold: u8, shares: u8, diffusion: bool) -> SplitConfig {
    SplitConfig { threshold, shares, diffusion, token: None, hex: false, security_bits: None }
}

fn combine_cfg(threshold: u8, diffusion: bool) -> CombineConfig {
    CombineConfig { threshold, diffusion, hex: false }
}

#[test]
fn split_and_combine_roundtrip() {
    let secret = b"shamir works!!!";
    let mut rng = DeterministicRandom::from_seed(1);
    let shares = split(secret, &split_cfg(3, 5, true), &mut rng).unwrap();
    let recovered = combine(&shares[..3], &combine_cfg(3, true)).unwrap();
    assert_eq!(recovered, secret);
}

#[test]
fn combine_order_independent() {
    let secret = b"order does not matter!!";
    let mut rng = DeterministicRandom::from_seed(2);
    let shares = split(secret, &split_cfg(3, 5, true), &mut rng).unwrap();

    let subset = vec![shares[4].clone(), shares[1].clone(), shares[3].clone()];
    let recovered = combine(&subset, &combine_cfg(3, true)).unwrap();
    assert_eq!(recovered, secret);
}

#[test]
fn combine_fails_with_not_enough_shares() {
    let secret = b"threshold matters!!";
    let mut rng = DeterministicRandom::from_seed(3);
    let shares = split(secret, &split_cfg(3, 5, false), &mut rng).unwrap();
    let result = combine(&shares[..2], &combine_cfg(3, false));
    assert!(matches!(result, Err(Error::InvalidParameter(_))));
}

#[test]
fn combine_fails_with_duplicate_indices() {
    let secret = b"duplicate indices!!";
    let mut rng = DeterministicRandom::from_seed(4);
    let mut shares = split(secret, &split_cfg(3, 5, false), &mut rng).unwrap();
    shares[1].index = shares[0].index;

    let result = combine(&shares[..3], &combine_cfg(3, false));
    assert!(matches!(result, Err(Error::LinearDependence)));
}

#[test]
fn combine_fails_with_excess_embedded_threshold() {
    let secret = b"inconsistent thresh";
    let mut rng = DeterministicRandom::from_seed(5);
    let mut shares = split(secret, &split_cfg(3, 5, false), &mut rng).unwrap();
    shares[0].threshold = 4;

    let result = combine(&shares[..3], &combine_cfg(3, false));
    assert!(matches!(result, Err(Error::InvalidShare(_))));
}

#[test]
fn combine_fails_with_inconsistent_length() {
    let secret = b"inconsistent length";
    let mut rng = DeterministicRandom::from_seed(6);
    let mut shares = split(secret, &split_cfg(3, 5, false), &mut rng).unwrap();
    shares[0].y.pop();

    let result = combine(&shares[..3], &combine_cfg(3, false));
    assert!(matches!(result, Err(Error::InvalidShare(_))));
}

#[test]
fn various_secret_sizes() {
    for size in [1usize, 2, 7, 16, 32, 64, 128] {
        let secret = vec![0x42u8; size];
        let mut rng = DeterministicRandom::from_seed(size as u64);
        let shares = split(&secret, &split_cfg(3, 5, true), &mut rng).unwrap();
        let recovered = combine(&shares[..3], &combine_cfg(3, true)).unwrap();
        assert_eq!(recovered, secret);
    }
}

#[test]
fn threshold_two_minimum() {
    // The scheme requires threshold >= 2; threshold-1 is "no redundancy",
    // not a supported configuration.
    let secret = b"threshold two";
    let mut rng = DeterministicRandom::from_seed(7);
    let err = split(secret, &split_cfg(1, 5, false), &mut rng).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
}

#[test]
fn every_two_of_three_reconstructs_constant_secret() {
    // Concrete scenario: T=2, N=3, L=1, S=0x42, deterministic coefficients.
    let secret = [0x42u8];
    let mut rng = DeterministicRandom::from_seed(99);
    let shares = split(&secret, &split_cfg(2, 3, false), &mut rng).unwrap();

    for (a, b) in [(0, 1), (0, 2), (1, 2)] {
        let subset = vec![shares[a].clone(), shares[b].clone()];
        assert_eq!(combine(&subset, &combine_cfg(2, false)).unwrap(), secret);
    }
}

#[test]
fn all_ones_secret_with_diffusion() {
    let secret = vec![0xFFu8; 8];
    let mut rng = DeterministicRandom::from_seed(77);
    let shares = split(&secret, &split_cfg(2, 2, true), &mut rng).unwrap();
    let recovered = combine(&shares, &combine_cfg(2, true)).unwrap();
    assert_eq!(recovered, secret);
}

#[test]
fn rejects_empty_secret() {
    let mut rng = DeterministicRandom::from_seed(8);
    let err = split(&[], &split_cfg(2, 3, false), &mut rng).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
}
