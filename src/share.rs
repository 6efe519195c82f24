//! The `Share` type and its wire encodings.
//!
//! A share bundles the polynomial evaluation point (`index`), the
//! threshold the issuing split was configured with (`threshold`), and the
//! resulting field element (`y`). Two encodings are supported, both
//! carried over unchanged from the historical reference tool:
//!
//! - binary: `[threshold_byte, index_byte, y_bytes...]`
//! - text: `[token "-"] index "-" hex(y)`, index zero-padded to the width
//!   of the largest index in the share set.

use crate::error::Error;

/// A single share of a split secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    /// Threshold the issuing `split` call was configured with.
    pub threshold: u8,
    /// This share's evaluation point, `1..=255`. Never zero.
    pub index: u8,
    /// The share's field element, as big-endian bytes (length equals the
    /// secret's length).
    pub y: Vec<u8>,
}

impl Share {
    /// Encodes the share in the historical binary wire format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 + self.y.len());
        out.push(self.threshold);
        out.push(self.index);
        out.extend_from_slice(&self.y);
        out
    }

    /// Decodes a share from the historical binary wire format.
    ///
    /// # Errors
    /// Returns [`Error::InvalidShare`] if `bytes` is shorter than the
    /// two-byte metadata header.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < 2 {
            return Err(Error::InvalidShare("share too short to contain metadata".into()));
        }
        Ok(Self {
            threshold: bytes[0],
            index: bytes[1],
            y: bytes[2..].to_vec(),
        })
    }

    /// Encodes the share in the historical text wire format, with `index`
    /// zero-padded to `index_width` digits and an optional leading token.
    pub fn to_text(&self, token: Option<&str>, index_width: usize) -> String {
        let mut out = String::new();
        if let Some(t) = token {
            out.push_str(t);
            out.push('-');
        }
        out.push_str(&format!("{:0width$}", self.index, width = index_width));
        out.push('-');
        out.push_str(&hex::encode(&self.y));
        out
    }

    /// Decodes a share from the historical text wire format.
    ///
    /// An optional leading `token-` segment is accepted and discarded
    /// without validation, matching the reference parser.
    ///
    /// # Errors
    /// Returns [`Error::InvalidShare`] if the string has no `-`-separated
    /// index/value pair, the index is not a valid nonzero byte, or the
    /// value is not valid hex. The decoded share's `threshold` field is
    /// left at 0: text shares carry no threshold byte, unlike the binary
    /// format, and the caller's [`crate::config::CombineConfig::threshold`]
    /// is authoritative instead.
    pub fn from_text(s: &str) -> Result<Self, Error> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        let (index_str, hex_str) = match parts.len() {
            2 => (parts[0], parts[1]),
            3 => (parts[1], parts[2]),
            _ => return Err(Error::InvalidShare(format!("malformed share text {s:?}"))),
        };
        let index: u8 = index_str
            .parse()
            .map_err(|_| Error::InvalidShare(format!("invalid share index {index_str:?}")))?;
        if index == 0 {
            return Err(Error::InvalidShare("share index must not be zero".into()));
        }
        let y = hex::decode(hex_str).map_err(|e| Error::InvalidShare(format!("invalid hex value: {e}")))?;
        Ok(Self { threshold: 0, index, y })
    }
}
