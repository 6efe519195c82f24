//! Fixed-upper-bound unsigned integer primitive.
//!
//! This module defines a fixed-size unsigned integer type (`Uint1024`) used
//! by the field module to represent GF(2^m) elements and the irreducible
//! polynomial that defines the field, for any `m` up to 1024 bits.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library: only the bit-level operations the field
//! module needs (compare, shift, XOR, bit test/set, byte import/export) are
//! provided. The internal representation is little-endian `u64` limbs (one
//! more than 1024 bits strictly needs, so a degree-1024 modulus's leading
//! bit has somewhere to live), which keeps shifting and bit indexing cheap;
//! conversion to and from the big-endian byte layout used on the wire is
//! handled at the edges.

use core::fmt;
use zeroize::Zeroize;

/// Number of 64-bit limbs backing [`Uint1024`].
///
/// One limb more than `MAX_BITS / 64` needs: a degree-`MAX_BITS` modulus
/// polynomial sets bit `MAX_BITS` itself (the leading `x^m` term), which
/// must fit without overflowing into a limb beyond the array.
pub const LIMBS: usize = 17;

/// The largest field degree this crate supports, in bits.
pub const MAX_BITS: usize = 1024;

/// Raw bit capacity of the backing limb array (`LIMBS * 64`), always
/// strictly greater than [`MAX_BITS`] so that a degree-`MAX_BITS` modulus's
/// leading bit has somewhere to live.
const CAPACITY_BITS: usize = LIMBS * 64;

/// A fixed-capacity unsigned integer of at most 1024 bits.
///
/// Limbs are stored least-significant first (`limbs[0]` holds bits `0..64`).
/// Values are always canonical: bits above the degree in use are expected to
/// be zero by callers, but `Uint1024` itself does not enforce any bit-length
/// beyond `MAX_BITS`.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Uint1024 {
    limbs: [u64; LIMBS],
}

impl Uint1024 {
    /// The additive identity.
    pub const ZERO: Self = Self { limbs: [0; LIMBS] };

    /// Builds a value from a small unsigned integer.
    pub fn from_u64(v: u64) -> Self {
        let mut limbs = [0u64; LIMBS];
        limbs[0] = v;
        Self { limbs }
    }

    /// Returns `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0)
    }

    /// Highest bit position with a 1, plus one; `0` for the zero value.
    pub fn bit_length(&self) -> usize {
        for (i, &limb) in self.limbs.iter().enumerate().rev() {
            if limb != 0 {
                return i * 64 + (64 - limb.leading_zeros() as usize);
            }
        }
        0
    }

    /// Tests bit `k` (0-indexed from the least significant bit).
    ///
    /// Returns `false` for `k >= CAPACITY_BITS` instead of panicking, since
    /// reduction loops routinely probe one bit past the current degree.
    #[inline]
    pub fn test_bit(&self, k: usize) -> bool {
        if k >= CAPACITY_BITS {
            return false;
        }
        (self.limbs[k / 64] >> (k % 64)) & 1 == 1
    }

    /// Sets bit `k` to 1.
    ///
    /// # Panics
    /// Panics if `k >= CAPACITY_BITS`; callers only ever set bits within
    /// the active field degree (at most [`MAX_BITS`], with one spare bit
    /// of headroom above it), which is checked before this is reached.
    #[inline]
    pub fn set_bit(&mut self, k: usize) {
        self.limbs[k / 64] |= 1 << (k % 64);
    }

    /// XORs `other` into `self` in place.
    #[inline]
    pub fn xor_assign(&mut self, other: &Self) {
        for (a, b) in self.limbs.iter_mut().zip(other.limbs.iter()) {
            *a ^= b;
        }
    }

    /// Returns `self ^ other` without mutating either operand.
    #[inline]
    pub fn xor(&self, other: &Self) -> Self {
        let mut out = *self;
        out.xor_assign(other);
        out
    }

    /// Shifts left by `k` bits, discarding bits that fall off the top.
    pub fn shl(&self, k: usize) -> Self {
        if k == 0 {
            return *self;
        }
        if k >= CAPACITY_BITS {
            return Self::ZERO;
        }
        let limb_shift = k / 64;
        let bit_shift = k % 64;
        let mut out = [0u64; LIMBS];
        for i in (0..LIMBS).rev() {
            if i < limb_shift {
                continue;
            }
            let src = i - limb_shift;
            let mut v = self.limbs[src] << bit_shift;
            if bit_shift != 0 && src > 0 {
                v |= self.limbs[src - 1] >> (64 - bit_shift);
            }
            out[i] = v;
        }
        Self { limbs: out }
    }

    /// Imports a big-endian byte slice of length `len` (`len <= MAX_BITS / 8`).
    ///
    /// Extra leading zero bytes are tolerated; the slice is not required to
    /// be exactly `ceil(degree/8)` bytes, only to fit within the fixed
    /// capacity.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        assert!(bytes.len() <= MAX_BITS / 8, "input wider than Uint1024");
        let mut limbs = [0u64; LIMBS];
        // Walk from the least significant byte (end of the slice) forward.
        for (i, &b) in bytes.iter().rev().enumerate() {
            let limb = i / 8;
            let shift = (i % 8) * 8;
            limbs[limb] |= (b as u64) << shift;
        }
        Self { limbs }
    }

    /// Exports the value as `len` big-endian bytes, truncating/zero-padding
    /// as needed so the output is always exactly `len` bytes.
    pub fn to_be_bytes(&self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        for (i, byte) in out.iter_mut().rev().enumerate() {
            let limb = i / 8;
            let shift = (i % 8) * 8;
            if limb < LIMBS {
                *byte = (self.limbs[limb] >> shift) as u8;
            }
        }
        out
    }
}

impl Zeroize for Uint1024 {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

impl fmt::Debug for Uint1024 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = (self.bit_length().max(8) + 7) / 8;
        write!(f, "Uint1024(0x{})", hex::encode(self.to_be_bytes(len)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_bytes() {
        let bytes = [0xDE, 0xAD, 0xBE, 0xEF];
        let v = Uint1024::from_be_bytes(&bytes);
        assert_eq!(v.to_be_bytes(4), bytes);
    }

    #[test]
    fn bit_length_examples() {
        assert_eq!(Uint1024::ZERO.bit_length(), 0);
        assert_eq!(Uint1024::from_u64(1).bit_length(), 1);
        assert_eq!(Uint1024::from_u64(0xFF).bit_length(), 8);
        assert_eq!(Uint1024::from_u64(0x100).bit_length(), 9);
    }

    #[test]
    fn test_and_set_bit() {
        let mut v = Uint1024::ZERO;
        assert!(!v.test_bit(200));
        v.set_bit(200);
        assert!(v.test_bit(200));
        assert!(!v.test_bit(199));
        assert!(!v.test_bit(201));
    }

    #[test]
    fn shift_left_crosses_limb_boundary() {
        let v = Uint1024::from_u64(1).shl(70);
        assert!(v.test_bit(70));
        assert_eq!(v.bit_length(), 71);
    }

    #[test]
    fn xor_is_self_inverse() {
        let a = Uint1024::from_be_bytes(&[0x12, 0x34, 0x56]);
        let b = Uint1024::from_be_bytes(&[0x78, 0x9A]);
        let c = a.xor(&b);
        assert_eq!(c.xor(&b), a);
    }
}
