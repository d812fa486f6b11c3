// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Big unsigned integer types
//!
//! Fixed-width 256-bit values as they appear in consensus parameters
//! (proof-of-work limits, minimum chain work). Arithmetic is delegated to
//! `rug::Integer`.
//!

use std::{error, fmt};
use std::str::FromStr;

use rug::Integer;
use rug::integer::Order;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 256-bit unsigned integer stored as big-endian bytes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Uint256([u8; 32]);

impl Uint256 {
    /// The value zero.
    pub const ZERO: Uint256 = Uint256([0u8; 32]);

    /// The largest representable value, 2^256 - 1.
    pub const MAX: Uint256 = Uint256([0xffu8; 32]);

    /// Creates a value from big-endian bytes.
    pub const fn from_be_bytes(bytes: [u8; 32]) -> Uint256 {
        Uint256(bytes)
    }

    /// Returns the big-endian bytes of this value.
    pub fn to_be_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Creates a value from a `u64`.
    pub fn from_u64(n: u64) -> Uint256 {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&n.to_be_bytes());
        Uint256(bytes)
    }

    /// Whether this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Converts to an arbitrary precision integer.
    pub fn to_integer(&self) -> Integer {
        Integer::from_digits(&self.0[..], Order::Msf)
    }

    /// Converts from an arbitrary precision integer.
    ///
    /// Returns `None` if the value is negative or does not fit in 256 bits.
    pub fn from_integer(n: &Integer) -> Option<Uint256> {
        if *n < 0 || n.significant_bits() > 256 {
            return None;
        }
        let digits = n.to_digits::<u8>(Order::Msf);
        let mut bytes = [0u8; 32];
        bytes[32 - digits.len()..].copy_from_slice(&digits);
        Some(Uint256(bytes))
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Uint256({})", self)
    }
}

/// Error returned when a hex string cannot be read as a [Uint256].
#[derive(Debug, Clone, PartialEq)]
pub enum ParseUint256Error {
    /// More than 64 hex digits.
    TooLong(usize),
    /// The digits are not valid hex.
    Hex(hex::FromHexError),
}

impl fmt::Display for ParseUint256Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseUint256Error::TooLong(len) => write!(f, "{} hex digits do not fit in 256 bits", len),
            ParseUint256Error::Hex(ref e) => write!(f, "invalid hex: {}", e),
        }
    }
}

impl error::Error for ParseUint256Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            ParseUint256Error::TooLong(_) => None,
            ParseUint256Error::Hex(ref e) => Some(e),
        }
    }
}

#[doc(hidden)]
impl From<hex::FromHexError> for ParseUint256Error {
    fn from(e: hex::FromHexError) -> ParseUint256Error {
        ParseUint256Error::Hex(e)
    }
}

impl FromStr for Uint256 {
    type Err = ParseUint256Error;

    /// Parses a big-endian hex string, optionally prefixed with `0x`.
    /// Shorter strings are zero-extended on the left, so `"0x00"` is zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        if s.len() > 64 {
            return Err(ParseUint256Error::TooLong(s.len()));
        }

        let mut bytes = [0u8; 32];
        hex::decode_to_slice(format!("{:0>64}", s), &mut bytes)?;
        Ok(Uint256(bytes))
    }
}
