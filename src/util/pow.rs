// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Proof-of-work
//!
//! Conversions between the compact "bits" encoding used in block headers
//! and full 256-bit targets, the work a target represents, and the check
//! that a block hash meets its target.
//!

use std::{error, fmt};

use hashes::Hash;
use rug::Integer;
use rug::integer::Order;

use crate::hash_types::BlockHash;
use crate::util::uint::Uint256;

/// Reasons a compact target or a proof of work is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The compact encoding has its sign bit set.
    NegativeTarget(u32),
    /// The compact encoding does not fit in 256 bits.
    TargetOverflow(u32),
    /// The target is zero, no hash can meet it.
    ZeroTarget(u32),
    /// The target is easier than the network allows.
    TargetAboveLimit {
        /// compact target of the block
        bits: u32,
        /// proof-of-work limit of the network
        limit: Uint256,
    },
    /// The block hash is above its target.
    HashAboveTarget {
        /// offending hash
        hash: BlockHash,
        /// compact target of the block
        bits: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::NegativeTarget(bits) => write!(f, "compact target {:#010x} is negative", bits),
            Error::TargetOverflow(bits) => write!(f, "compact target {:#010x} overflows 256 bits", bits),
            Error::ZeroTarget(bits) => write!(f, "compact target {:#010x} is zero", bits),
            Error::TargetAboveLimit { bits, ref limit } => {
                write!(f, "compact target {:#010x} is above the proof-of-work limit {}", bits, limit)
            }
            Error::HashAboveTarget { ref hash, bits } => {
                write!(f, "hash {} does not meet compact target {:#010x}", hash, bits)
            }
        }
    }
}

impl error::Error for Error {}

/// Decodes a compact target.
pub fn target_from_compact(bits: u32) -> Result<Uint256, Error> {
    let exponent = bits >> 24;
    let mantissa = bits & 0x007f_ffff;

    if mantissa != 0 && bits & 0x0080_0000 != 0 {
        return Err(Error::NegativeTarget(bits));
    }
    if mantissa != 0
        && (exponent > 34
            || (mantissa > 0xff && exponent > 33)
            || (mantissa > 0xffff && exponent > 32))
    {
        return Err(Error::TargetOverflow(bits));
    }

    let target = if exponent <= 3 {
        Integer::from(mantissa >> (8 * (3 - exponent)))
    } else {
        Integer::from(mantissa) << (8 * (exponent - 3))
    };
    Uint256::from_integer(&target).ok_or(Error::TargetOverflow(bits))
}

/// Encodes a target in compact form. Precision below the top three
/// significant bytes is lost.
pub fn target_to_compact(target: &Uint256) -> u32 {
    let target = target.to_integer();
    let mut size = ((target.significant_bits() + 7) / 8) as u32;
    let mut compact = if size <= 3 {
        (target << (8 * (3 - size))).to_u32_wrapping()
    } else {
        (target >> (8 * (size - 3))).to_u32_wrapping()
    };
    // the sign bit is not part of the mantissa
    if compact & 0x0080_0000 != 0 {
        compact >>= 8;
        size += 1;
    }
    compact | (size << 24)
}

/// Expected number of hashes needed to meet the given compact target,
/// `2^256 / (target + 1)`. Invalid or zero targets represent no work.
pub fn block_work(bits: u32) -> Uint256 {
    let target = match target_from_compact(bits) {
        Ok(target) if !target.is_zero() => target.to_integer(),
        _ => return Uint256::ZERO,
    };
    let work = (Integer::from(1) << 256) / (target + 1);
    Uint256::from_integer(&work).unwrap_or(Uint256::MAX)
}

/// Checks that `hash` satisfies the compact target `bits`, and that the
/// target is within `pow_limit`.
pub fn check_proof_of_work(hash: &BlockHash, bits: u32, pow_limit: &Uint256) -> Result<(), Error> {
    let target = target_from_compact(bits)?;
    if target.is_zero() {
        return Err(Error::ZeroTarget(bits));
    }
    if target > *pow_limit {
        return Err(Error::TargetAboveLimit { bits, limit: *pow_limit });
    }

    // block hashes are little endian numbers
    let value = Integer::from_digits(&hash.as_byte_array()[..], Order::Lsf);
    if value > target.to_integer() {
        return Err(Error::HashAboveTarget { hash: *hash, bits });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const MAIN_POW_LIMIT: &str = "00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

    #[test]
    fn compact_target_test() {
        let target = target_from_compact(0x1d00ffff).unwrap();
        assert_eq!(
            target.to_string(),
            "00000000ffff0000000000000000000000000000000000000000000000000000"
        );
        assert_eq!(target_to_compact(&target), 0x1d00ffff);

        assert_eq!(target_from_compact(0x1804dafe).map(|t| target_to_compact(&t)), Ok(0x1804dafe));
        assert_eq!(target_from_compact(0x01003456), Ok(Uint256::ZERO));
        assert_eq!(target_from_compact(0x02123456), Ok(Uint256::from_u64(0x1234)));
        assert_eq!(target_from_compact(0x04923456), Err(Error::NegativeTarget(0x04923456)));
        assert_eq!(target_from_compact(0xff123456), Err(Error::TargetOverflow(0xff123456)));
        assert_eq!(target_to_compact(&Uint256::from_u64(0x80)), 0x02008000);
    }

    #[test]
    fn block_work_test() {
        // the well known amount of work in a difficulty 1 block
        assert_eq!(block_work(0x1d00ffff), Uint256::from_u64(0x1_0001_0001));
        assert_eq!(block_work(0x01003456), Uint256::ZERO);
        assert_eq!(block_work(0x04923456), Uint256::ZERO);
    }

    #[test]
    fn check_proof_of_work_test() {
        let limit = Uint256::from_str(MAIN_POW_LIMIT).unwrap();
        let hash = BlockHash::from_str("00000000671e78e128aa4b3943689e2675d80410c280a81d9e102036716f1a0e").unwrap();
        assert_eq!(check_proof_of_work(&hash, 0x1d00ffff, &limit), Ok(()));

        let easy = BlockHash::from_str("00000001671e78e128aa4b3943689e2675d80410c280a81d9e102036716f1a0e").unwrap();
        assert_eq!(
            check_proof_of_work(&easy, 0x1d00ffff, &limit),
            Err(Error::HashAboveTarget { hash: easy, bits: 0x1d00ffff })
        );
        assert_eq!(
            check_proof_of_work(&hash, 0x2100ffff, &limit),
            Err(Error::TargetAboveLimit { bits: 0x2100ffff, limit })
        );
        assert_eq!(check_proof_of_work(&hash, 0x01003456, &limit), Err(Error::ZeroTarget(0x01003456)));
    }
}
