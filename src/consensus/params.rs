// Rust Bitcoin Library
// Written in 2014 by
//   Andrew Poelstra <apoelstra@wpsoftware.net>
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//
// Changes for rust-tapyrus is licensed as below.
// Copyright (c) 2019 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Consensus parameters
//!
//! This module provides predefined set of parameters for different chains.
//!
//! Rule changes activate either at a block [`Height`] or at a wall-clock
//! [`ActivationTime`] compared against the median time past. The two are
//! distinct types so one can never be checked against the other.
//!

use std::fmt;

use hashes::Hash;
use hex_lit::hex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::blockdata::constants::{DEFAULT_EXCESSIVE_BLOCK_SIZE, ONE_MEGABYTE};
use crate::hash_types::{BlockHash, TxMerkleNode};
use crate::network::constants::Network;
use crate::util::uint::Uint256;

/// Block height at which a rule change takes effect.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Height(pub u32);

impl Height {
    /// Whether the rule applies to a block at `height`.
    pub fn is_active_at(self, height: u32) -> bool {
        height >= self.0
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Unix time at which a rule change takes effect, compared against the
/// median time past of the previous block.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActivationTime(pub i64);

impl ActivationTime {
    /// Whether the rule applies given the median time past of the previous
    /// block.
    pub fn is_active_at(self, median_time_past: i64) -> bool {
        median_time_past >= self.0
    }
}

impl fmt::Display for ActivationTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Upgrades that activate at a block height.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum HeightUpgrade {
    /// Pay to script hash
    Bip16,
    /// Height in coinbase
    Bip34,
    /// OP_CHECKLOCKTIMEVERIFY
    Bip65,
    /// Strict DER signatures
    Bip66,
    /// OP_CHECKSEQUENCEVERIFY and relative lock times
    Csv,
    /// August 1, 2017 hard fork
    Uahf,
    /// November 13, 2017 difficulty adjustment hard fork
    Daa,
    /// November 15, 2018 hard fork
    MagneticAnomaly,
    /// November 15, 2019 upgrade
    Graviton,
    /// May 15, 2020 upgrade
    Phonon,
}

/// Upgrades that activate at a median time past.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TimeUpgrade {
    /// November 15, 2020 upgrade
    Axion,
    /// May 15, 2022 upgrade
    Upgrade8,
    /// May 15, 2023 upgrade
    Upgrade9,
}

/// Fixed reference point for the ASERT difficulty adjustment algorithm.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AsertAnchor {
    /// Height of the anchor block
    pub height: u32,
    /// Compact target of the anchor block
    pub bits: u32,
    /// Timestamp of the anchor block's parent
    pub prev_block_time: i64,
}

/// Parameters that influence chain consensus.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Params {
    /// Network for which parameters are valid.
    pub network: Network,
    /// Hash of the genesis block.
    pub hash_genesis_block: BlockHash,
    /// Merkle root of the genesis block.
    pub genesis_merkle_root: TxMerkleNode,
    /// Number of blocks between subsidy halvings.
    pub subsidy_halving_interval: u32,
    /// Pay to script hash.
    pub bip16_height: Height,
    /// Height in coinbase.
    pub bip34_height: Height,
    /// Hash of the block at `bip34_height`.
    pub bip34_hash: BlockHash,
    /// OP_CHECKLOCKTIMEVERIFY.
    pub bip65_height: Height,
    /// Strict DER signatures.
    pub bip66_height: Height,
    /// OP_CHECKSEQUENCEVERIFY.
    pub csv_height: Height,
    /// August 1, 2017 hard fork.
    pub uahf_height: Height,
    /// November 13, 2017 hard fork.
    pub daa_height: Height,
    /// November 15, 2018 hard fork.
    pub magnetic_anomaly_height: Height,
    /// November 15, 2019 protocol upgrade.
    pub graviton_height: Height,
    /// May 15, 2020 protocol upgrade.
    pub phonon_height: Height,
    /// November 15, 2020 protocol upgrade.
    pub axion_activation_time: ActivationTime,
    /// May 15, 2022 protocol upgrade.
    pub upgrade8_activation_time: ActivationTime,
    /// May 15, 2023 protocol upgrade.
    pub upgrade9_activation_time: ActivationTime,
    /// Proof of work limit, the easiest target allowed.
    pub pow_limit: Uint256,
    /// Expected time for a full retarget period, in seconds.
    pub pow_target_timespan: i64,
    /// Expected time between blocks, in seconds.
    pub pow_target_spacing: i64,
    /// Allow minimum difficulty blocks after a long gap.
    pub allow_min_difficulty_blocks: bool,
    /// Never change the difficulty.
    pub no_pow_retargeting: bool,
    /// For every `asert_half_life` seconds the chain falls behind schedule,
    /// difficulty halves. It doubles when blocks are that far ahead.
    pub asert_half_life: i64,
    /// The best chain should have at least this much work.
    pub minimum_chain_work: Uint256,
    /// Signatures in ancestors of this block are assumed valid.
    pub default_assume_valid: BlockHash,
    /// Default limit for block size, in bytes.
    pub default_excessive_block_size: u64,
    /// Default size of mined blocks, in bytes.
    pub default_generated_block_size: u64,
    /// ASERT anchor, absent where the chain is expected to be reset.
    pub asert_anchor: Option<AsertAnchor>,
}

const TWO_WEEKS: i64 = 14 * 24 * 60 * 60;
const TEN_MINUTES: i64 = 10 * 60;
const TWO_DAYS: i64 = 2 * 24 * 60 * 60;
const ONE_HOUR: i64 = 60 * 60;

const POW_LIMIT: Uint256 =
    Uint256::from_be_bytes(hex!("00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff"));
const REGTEST_POW_LIMIT: Uint256 =
    Uint256::from_be_bytes(hex!("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"));

/// Genesis hash, displayed big endian, shared by every network.
const GENESIS_HASH: &str = "00000000671e78e128aa4b3943689e2675d80410c280a81d9e102036716f1a0e";
/// Genesis merkle root, displayed big endian, shared by every network.
const GENESIS_MERKLE_ROOT: &str = "47e610f3c0282e7318658c16dfbb6e34b32a8d16b41b36ff693a460d50967077";
const SCALENET_BIP34_HASH: &str = "00000000c8c35eaac40e0089a83bf5c5d9ecf831601f98c21ed4a7cb511a07d8";

fn block_hash(s: &str) -> BlockHash {
    s.parse().expect("valid block hash literal")
}

fn merkle_node(s: &str) -> TxMerkleNode {
    s.parse().expect("valid merkle root literal")
}

impl Params {
    /// Creates parameters set for the given network.
    pub fn new(network: Network) -> Self {
        match network {
            Network::Main => Params {
                network: Network::Main,
                hash_genesis_block: block_hash(GENESIS_HASH),
                genesis_merkle_root: merkle_node(GENESIS_MERKLE_ROOT),
                subsidy_halving_interval: 210_000,
                bip16_height: Height(1),
                bip34_height: Height(1),
                bip34_hash: block_hash(GENESIS_HASH),
                bip65_height: Height(1),
                bip66_height: Height(1),
                csv_height: Height(1),
                uahf_height: Height(1),
                daa_height: Height(1),
                magnetic_anomaly_height: Height(1),
                graviton_height: Height(1),
                phonon_height: Height(1),
                axion_activation_time: ActivationTime(1),
                upgrade8_activation_time: ActivationTime(1),
                upgrade9_activation_time: ActivationTime(1),
                pow_limit: POW_LIMIT,
                pow_target_timespan: TWO_WEEKS,
                pow_target_spacing: TEN_MINUTES,
                allow_min_difficulty_blocks: false,
                no_pow_retargeting: false,
                asert_half_life: TWO_DAYS,
                minimum_chain_work: Uint256::ZERO,
                default_assume_valid: BlockHash::all_zeros(),
                default_excessive_block_size: DEFAULT_EXCESSIVE_BLOCK_SIZE,
                default_generated_block_size: 8 * ONE_MEGABYTE,
                asert_anchor: Some(AsertAnchor {
                    height: 661_647,
                    bits: 0x1804dafe,
                    prev_block_time: 1_605_447_844,
                }),
            },
            Network::Testnet => Params {
                network: Network::Testnet,
                hash_genesis_block: block_hash(GENESIS_HASH),
                genesis_merkle_root: merkle_node(GENESIS_MERKLE_ROOT),
                subsidy_halving_interval: 210_000,
                bip16_height: Height(1),
                bip34_height: Height(1),
                bip34_hash: block_hash(GENESIS_HASH),
                bip65_height: Height(1),
                bip66_height: Height(1),
                csv_height: Height(1),
                uahf_height: Height(1),
                daa_height: Height(1),
                magnetic_anomaly_height: Height(1),
                graviton_height: Height(1),
                phonon_height: Height(1),
                axion_activation_time: ActivationTime(1),
                upgrade8_activation_time: ActivationTime(1),
                upgrade9_activation_time: ActivationTime(1),
                pow_limit: POW_LIMIT,
                pow_target_timespan: TWO_WEEKS,
                pow_target_spacing: TEN_MINUTES,
                allow_min_difficulty_blocks: true,
                no_pow_retargeting: false,
                asert_half_life: ONE_HOUR,
                minimum_chain_work: Uint256::ZERO,
                default_assume_valid: BlockHash::all_zeros(),
                default_excessive_block_size: DEFAULT_EXCESSIVE_BLOCK_SIZE,
                default_generated_block_size: 8 * ONE_MEGABYTE,
                asert_anchor: Some(AsertAnchor {
                    height: 1_421_481,
                    bits: 0x1d00ffff,
                    prev_block_time: 1_605_445_400,
                }),
            },
            Network::Testnet4 => Params {
                network: Network::Testnet4,
                hash_genesis_block: block_hash(GENESIS_HASH),
                genesis_merkle_root: merkle_node(GENESIS_MERKLE_ROOT),
                subsidy_halving_interval: 210_000,
                bip16_height: Height(1),
                bip34_height: Height(1),
                bip34_hash: block_hash(GENESIS_HASH),
                bip65_height: Height(1),
                bip66_height: Height(1),
                csv_height: Height(1),
                uahf_height: Height(1),
                daa_height: Height(1),
                magnetic_anomaly_height: Height(1),
                graviton_height: Height(1),
                // sigops are counted with the post-Phonon rules from genesis
                phonon_height: Height(0),
                axion_activation_time: ActivationTime(1),
                upgrade8_activation_time: ActivationTime(1),
                upgrade9_activation_time: ActivationTime(1),
                pow_limit: POW_LIMIT,
                pow_target_timespan: TWO_WEEKS,
                pow_target_spacing: TEN_MINUTES,
                allow_min_difficulty_blocks: true,
                no_pow_retargeting: false,
                asert_half_life: ONE_HOUR,
                minimum_chain_work: Uint256::ZERO,
                default_assume_valid: BlockHash::all_zeros(),
                default_excessive_block_size: 2 * ONE_MEGABYTE,
                default_generated_block_size: 2 * ONE_MEGABYTE,
                asert_anchor: Some(AsertAnchor {
                    height: 16_844,
                    bits: 0x1d00ffff,
                    prev_block_time: 1_605_451_779,
                }),
            },
            Network::Scalenet => Params {
                network: Network::Scalenet,
                hash_genesis_block: block_hash(GENESIS_HASH),
                genesis_merkle_root: merkle_node(GENESIS_MERKLE_ROOT),
                subsidy_halving_interval: 210_000,
                bip16_height: Height(1),
                bip34_height: Height(1),
                bip34_hash: block_hash(SCALENET_BIP34_HASH),
                bip65_height: Height(1),
                bip66_height: Height(1),
                csv_height: Height(1),
                uahf_height: Height(1),
                daa_height: Height(1),
                magnetic_anomaly_height: Height(1),
                graviton_height: Height(1),
                phonon_height: Height(0),
                axion_activation_time: ActivationTime(1),
                upgrade8_activation_time: ActivationTime(1),
                upgrade9_activation_time: ActivationTime(1),
                pow_limit: POW_LIMIT,
                pow_target_timespan: TWO_WEEKS,
                pow_target_spacing: TEN_MINUTES,
                allow_min_difficulty_blocks: true,
                no_pow_retargeting: false,
                asert_half_life: TWO_DAYS,
                minimum_chain_work: Uint256::ZERO,
                default_assume_valid: BlockHash::all_zeros(),
                default_excessive_block_size: 256 * ONE_MEGABYTE,
                default_generated_block_size: 8 * ONE_MEGABYTE,
                // reorged back to height 10,000 periodically, so no fixed anchor
                asert_anchor: None,
            },
            Network::Regtest => Params {
                network: Network::Regtest,
                hash_genesis_block: block_hash(GENESIS_HASH),
                genesis_merkle_root: merkle_node(GENESIS_MERKLE_ROOT),
                subsidy_halving_interval: 150,
                bip16_height: Height(0),
                // far in the future so version 1 blocks are not rejected in tests
                bip34_height: Height(100_000_000),
                bip34_hash: BlockHash::all_zeros(),
                bip65_height: Height(1351),
                bip66_height: Height(1251),
                csv_height: Height(576),
                uahf_height: Height(0),
                daa_height: Height(0),
                magnetic_anomaly_height: Height(0),
                graviton_height: Height(0),
                phonon_height: Height(0),
                axion_activation_time: ActivationTime(1_605_441_600),
                upgrade8_activation_time: ActivationTime(1_652_616_000),
                upgrade9_activation_time: ActivationTime(1_684_152_000),
                pow_limit: REGTEST_POW_LIMIT,
                pow_target_timespan: TWO_WEEKS,
                pow_target_spacing: TEN_MINUTES,
                allow_min_difficulty_blocks: true,
                no_pow_retargeting: true,
                // unused, regtest has no difficulty adjustment
                asert_half_life: TWO_DAYS,
                minimum_chain_work: Uint256::ZERO,
                default_assume_valid: BlockHash::all_zeros(),
                default_excessive_block_size: DEFAULT_EXCESSIVE_BLOCK_SIZE,
                default_generated_block_size: 8 * ONE_MEGABYTE,
                asert_anchor: None,
            },
        }
    }

    /// Number of blocks between difficulty retargets.
    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    /// Height at which the given upgrade activates.
    pub fn upgrade_height(&self, upgrade: HeightUpgrade) -> Height {
        match upgrade {
            HeightUpgrade::Bip16 => self.bip16_height,
            HeightUpgrade::Bip34 => self.bip34_height,
            HeightUpgrade::Bip65 => self.bip65_height,
            HeightUpgrade::Bip66 => self.bip66_height,
            HeightUpgrade::Csv => self.csv_height,
            HeightUpgrade::Uahf => self.uahf_height,
            HeightUpgrade::Daa => self.daa_height,
            HeightUpgrade::MagneticAnomaly => self.magnetic_anomaly_height,
            HeightUpgrade::Graviton => self.graviton_height,
            HeightUpgrade::Phonon => self.phonon_height,
        }
    }

    /// Time at which the given upgrade activates.
    pub fn upgrade_time(&self, upgrade: TimeUpgrade) -> ActivationTime {
        match upgrade {
            TimeUpgrade::Axion => self.axion_activation_time,
            TimeUpgrade::Upgrade8 => self.upgrade8_activation_time,
            TimeUpgrade::Upgrade9 => self.upgrade9_activation_time,
        }
    }

    /// Whether the upgrade's rules apply to a block at `height`.
    pub fn is_enabled_at_height(&self, upgrade: HeightUpgrade, height: u32) -> bool {
        self.upgrade_height(upgrade).is_active_at(height)
    }

    /// Whether the upgrade's rules apply given the previous block's median
    /// time past.
    pub fn is_enabled_at_time(&self, upgrade: TimeUpgrade, median_time_past: i64) -> bool {
        self.upgrade_time(upgrade).is_active_at(median_time_past)
    }
}
