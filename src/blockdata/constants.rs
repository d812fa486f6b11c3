// Rust Bitcoin Library
// Written in 2014 by
//     Andrew Poelstra <apoelstra@wpsoftware.net>
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

//! Blockdata constants
//!
//! This module provides various constants relating to the blockchain and
//! consensus code. In particular, it defines how a genesis block and its
//! single transaction are built.
//!

use hashes::Hash;
use hex_lit::hex;

use crate::blockdata::block::{Block, BlockHeader};
use crate::blockdata::script::{self, Script};
use crate::blockdata::transaction::{OutPoint, Transaction, TxIn, TxOut};
use crate::hash_types::{BlockHash, TxMerkleNode};
use crate::util::amount::Amount;
use crate::util::key::PublicKey;

/// The maximum allowable sequence number
pub const MAX_SEQUENCE: u32 = 0xFFFFFFFF;
/// How many satoshis are in one coin
pub const COIN_VALUE: u64 = 100_000_000;
/// One megabyte, in bytes. Block sizes use decimal units.
pub const ONE_MEGABYTE: u64 = 1_000_000;
/// The block size every network accepted before the 2017 fork. Excessive
/// block sizes must stay strictly above it.
pub const LEGACY_MAX_BLOCK_SIZE: u64 = ONE_MEGABYTE;
/// Default limit above which a block is considered excessive
pub const DEFAULT_EXCESSIVE_BLOCK_SIZE: u64 = 32 * ONE_MEGABYTE;
/// Default mempool capacity per megabyte of excessive block size
pub const DEFAULT_MAX_MEMPOOL_SIZE_PER_MB: u64 = 10;
/// Whether addresses are displayed in cashaddr format by default
pub const DEFAULT_USE_CASHADDR: bool = true;

/// Payload embedded in the genesis coinbase input
pub const GENESIS_TIMESTAMP: &[u8] = b"hi twitter";
/// Uncompressed public key paid by the genesis coinbase output
pub const GENESIS_OUTPUT_KEY: [u8; 65] = hex!(
    "04855b21edaac2ed5a5690674dc2f925321b2d33bf8acc22fa86b36f37a268e0ee5a5f37fab6d0b04bb56762d54aa683b86ae23857b4ad8a17287ed302afc37871"
);
/// Height marker pushed first in the genesis coinbase input
const GENESIS_HEIGHT_MARKER: i64 = 486_604_799;
/// Constant pushed second in the genesis coinbase input
const GENESIS_EXTRA_NONCE: i64 = 4;

/// Pay-to-pubkey script paying [`GENESIS_OUTPUT_KEY`].
///
/// # Panics
///
/// If the embedded key is not a point on the curve, which means the binary
/// itself is broken.
pub fn genesis_output_script() -> Script {
    match PublicKey::from_slice(&GENESIS_OUTPUT_KEY) {
        Ok(key) => Script::new_p2pk(&key),
        Err(e) => {
            log::error!("genesis output key is invalid: {}", e);
            panic!("genesis output key is invalid: {}", e);
        }
    }
}

/// Constructs the coinbase (and only) transaction of a genesis block
fn genesis_tx(timestamp: &[u8], output_script: Script, reward: Amount) -> Transaction {
    // Base
    let mut ret = Transaction { version: 1, lock_time: 0, input: vec![], output: vec![] };

    // Inputs
    let in_script = script::Builder::new()
        .push_int(GENESIS_HEIGHT_MARKER)
        .push_scriptint(GENESIS_EXTRA_NONCE)
        .push_slice(timestamp)
        .into_script();
    ret.input.push(TxIn {
        previous_output: OutPoint::null(),
        script_sig: in_script,
        sequence: MAX_SEQUENCE,
    });

    // Outputs
    ret.output.push(TxOut { value: reward, script_pubkey: output_script });

    // end
    ret
}

/// Builds a genesis block from its literal inputs.
///
/// The coinbase input pushes a height marker, a small constant and then
/// `timestamp`. The single output pays `reward` to `output_script`. The
/// header has an all-zero previous block hash and the coinbase txid as its
/// merkle root. The same inputs always give a byte-identical block.
pub fn build_genesis_block(
    timestamp: &[u8],
    output_script: Script,
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: Amount,
) -> Block {
    let txdata = vec![genesis_tx(timestamp, output_script, reward)];
    let merkle_root = TxMerkleNode::from_raw_hash(txdata[0].txid().to_raw_hash());
    Block {
        header: BlockHeader {
            version,
            prev_blockhash: BlockHash::all_zeros(),
            merkle_root,
            time,
            bits,
            nonce,
        },
        txdata,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::consensus::encode::serialize;
    use crate::hash_types::Txid;

    fn hi_twitter() -> Block {
        build_genesis_block(
            GENESIS_TIMESTAMP,
            genesis_output_script(),
            1638317164,
            1607403406,
            0x1d00ffff,
            1,
            Amount::from_sat(50 * COIN_VALUE),
        )
    }

    #[test]
    fn genesis_first_transaction() {
        let gen = hi_twitter().txdata.remove(0);

        assert_eq!(gen.version, 1);
        assert_eq!(gen.input.len(), 1);
        assert_eq!(gen.input[0].previous_output.txid, Txid::all_zeros());
        assert_eq!(gen.input[0].previous_output.vout, 0xFFFFFFFF);
        assert_eq!(
            hex::encode(gen.input[0].script_sig.as_bytes()),
            "04ffff001d01040a68692074776974746572"
        );
        assert_eq!(gen.input[0].sequence, MAX_SEQUENCE);
        assert_eq!(gen.output.len(), 1);
        assert_eq!(
            hex::encode(gen.output[0].script_pubkey.as_bytes()),
            format!("41{}ac", hex::encode(&GENESIS_OUTPUT_KEY[..]))
        );
        assert_eq!(gen.output[0].value, Amount::from_sat(5_000_000_000));
        assert_eq!(gen.lock_time, 0);
        assert!(gen.is_coin_base());

        assert_eq!(
            gen.txid().to_string(),
            "47e610f3c0282e7318658c16dfbb6e34b32a8d16b41b36ff693a460d50967077"
        );
    }

    #[test]
    fn genesis_full_block() {
        let gen = hi_twitter();

        assert_eq!(gen.header.version, 1);
        assert_eq!(gen.header.prev_blockhash, BlockHash::all_zeros());
        assert_eq!(
            gen.header.merkle_root.to_string(),
            "47e610f3c0282e7318658c16dfbb6e34b32a8d16b41b36ff693a460d50967077"
        );
        assert_eq!(gen.header.time, 1638317164);
        assert_eq!(gen.header.bits, 0x1d00ffff);
        assert_eq!(gen.header.nonce, 1607403406);
        assert_eq!(
            gen.block_hash().to_string(),
            "00000000671e78e128aa4b3943689e2675d80410c280a81d9e102036716f1a0e"
        );
        assert!(gen.check_merkle_root());
    }

    #[test]
    fn genesis_is_deterministic() {
        assert_eq!(serialize(&hi_twitter()), serialize(&hi_twitter()));
        let other = build_genesis_block(
            b"other",
            genesis_output_script(),
            1638317164,
            1607403406,
            0x1d00ffff,
            1,
            Amount::from_sat(50 * COIN_VALUE),
        );
        assert_ne!(other.block_hash(), hi_twitter().block_hash());
    }

    #[test]
    fn block_size_constants() {
        assert_eq!(DEFAULT_EXCESSIVE_BLOCK_SIZE, 32_000_000);
        assert_eq!(LEGACY_MAX_BLOCK_SIZE, 1_000_000);
        assert!(DEFAULT_USE_CASHADDR);
    }
}
