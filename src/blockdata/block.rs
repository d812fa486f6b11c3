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

//! Blocks
//!
//! A block is a bundle of transactions with a proof-of-work attached,
//! which commits to an earlier block to form the blockchain. This
//! module describes structures and functions needed to describe
//! these blocks and the blockchain.
//!

use std::fmt;

use hashes::{sha256d, Hash};

use crate::blockdata::transaction::Transaction;
use crate::consensus::encode::serialize;
use crate::hash_types::{BlockHash, TxMerkleNode};

/// A block header, which contains all the block's information except
/// the actual transactions
#[derive(Copy, PartialEq, Eq, Clone, PartialOrd, Ord, Hash)]
pub struct BlockHeader {
    /// The protocol version. Should always be 1.
    pub version: i32,
    /// Reference to the previous block in the chain
    pub prev_blockhash: BlockHash,
    /// The root hash of the merkle tree of transactions in the block
    pub merkle_root: TxMerkleNode,
    /// The timestamp of the block, as claimed by the miner
    pub time: u32,
    /// The target value below which the blockhash must lie, encoded as a
    /// a float (with well-defined rounding, of course)
    pub bits: u32,
    /// The nonce, selected to obtain a low enough blockhash
    pub nonce: u32,
}
impl_consensus_encoding!(BlockHeader, version, prev_blockhash, merkle_root, time, bits, nonce);

impl BlockHeader {
    /// The number of bytes that the block header contributes to the size of a block.
    pub const SIZE: usize = 4 + 32 + 32 + 4 + 4 + 4; // 80

    /// Returns the block hash.
    pub fn block_hash(&self) -> BlockHash {
        BlockHash::hash(&serialize(self))
    }
}

impl fmt::Debug for BlockHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BlockHeader")
            .field("block_hash", &self.block_hash())
            .field("version", &self.version)
            .field("prev_blockhash", &self.prev_blockhash)
            .field("merkle_root", &self.merkle_root)
            .field("time", &self.time)
            .field("bits", &format_args!("{:#010x}", self.bits))
            .field("nonce", &self.nonce)
            .finish()
    }
}

/// A block: a header plus the transactions it commits to
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Block {
    /// The block header
    pub header: BlockHeader,
    /// List of transactions contained in the block
    pub txdata: Vec<Transaction>,
}
impl_consensus_encoding!(Block, header, txdata);

impl Block {
    /// Returns the block hash.
    pub fn block_hash(&self) -> BlockHash {
        self.header.block_hash()
    }

    /// Returns the coinbase transaction, if one is present.
    pub fn coinbase(&self) -> Option<&Transaction> {
        self.txdata.first()
    }

    /// Checks if merkle root of header matches merkle root of the transaction list.
    pub fn check_merkle_root(&self) -> bool {
        match self.compute_merkle_root() {
            Some(merkle_root) => self.header.merkle_root == merkle_root,
            None => false,
        }
    }

    /// Computes the transaction merkle root, or `None` for a block without
    /// transactions.
    pub fn compute_merkle_root(&self) -> Option<TxMerkleNode> {
        let hashes = self.txdata.iter().map(|tx| tx.txid().to_raw_hash());
        calculate_root(hashes).map(TxMerkleNode::from_raw_hash)
    }
}

/// Calculates the merkle root of a list of hashes. An odd level is padded
/// by repeating its last hash.
fn calculate_root<I>(hashes: I) -> Option<sha256d::Hash>
where
    I: Iterator<Item = sha256d::Hash>,
{
    let mut level: Vec<sha256d::Hash> = hashes.collect();
    if level.is_empty() {
        return None;
    }
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let left = pair[0];
                let right = pair.get(1).copied().unwrap_or(left);
                let mut data = [0u8; 64];
                data[..32].copy_from_slice(left.as_byte_array());
                data[32..].copy_from_slice(right.as_byte_array());
                sha256d::Hash::hash(&data)
            })
            .collect();
    }
    Some(level[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockdata::script::Builder;
    use crate::blockdata::transaction::{OutPoint, TxIn, TxOut};
    use crate::util::amount::Amount;

    fn tx(tag: u8) -> Transaction {
        Transaction {
            version: 1,
            lock_time: 0,
            input: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig: Builder::new().push_slice(&[tag]).into_script(),
                sequence: 0xffffffff,
            }],
            output: vec![TxOut { value: Amount::ONE_SAT, ..Default::default() }],
        }
    }

    fn block(txdata: Vec<Transaction>) -> Block {
        let mut block = Block {
            header: BlockHeader {
                version: 1,
                prev_blockhash: BlockHash::all_zeros(),
                merkle_root: TxMerkleNode::all_zeros(),
                time: 0,
                bits: 0x207fffff,
                nonce: 0,
            },
            txdata,
        };
        if let Some(root) = block.compute_merkle_root() {
            block.header.merkle_root = root;
        }
        block
    }

    #[test]
    fn header_size() {
        let block = block(vec![tx(0)]);
        assert_eq!(serialize(&block.header).len(), BlockHeader::SIZE);
    }

    #[test]
    fn single_tx_merkle_root_is_txid() {
        let block = block(vec![tx(0)]);
        assert_eq!(block.header.merkle_root.to_raw_hash(), block.txdata[0].txid().to_raw_hash());
        assert!(block.check_merkle_root());
        assert_eq!(block.coinbase(), Some(&block.txdata[0]));
    }

    #[test]
    fn odd_level_duplicates_last() {
        let three = block(vec![tx(0), tx(1), tx(2)]);
        let four = block(vec![tx(0), tx(1), tx(2), tx(2)]);
        assert_eq!(three.header.merkle_root, four.header.merkle_root);

        let two = block(vec![tx(0), tx(1)]);
        let mut data = [0u8; 64];
        data[..32].copy_from_slice(tx(0).txid().as_byte_array());
        data[32..].copy_from_slice(tx(1).txid().as_byte_array());
        assert_eq!(two.header.merkle_root.to_raw_hash(), sha256d::Hash::hash(&data));
    }

    #[test]
    fn empty_block_has_no_root() {
        let empty = block(vec![]);
        assert_eq!(empty.compute_merkle_root(), None);
        assert!(!empty.check_merkle_root());
        assert_eq!(empty.coinbase(), None);
    }

    #[test]
    fn block_hash_changes_with_nonce() {
        let mut block = block(vec![tx(0)]);
        let hash = block.block_hash();
        block.header.nonce += 1;
        assert_ne!(hash, block.block_hash());
    }
}
