// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Hash types
//!
//! This module defines types for hashes used throughout the library. These
//! types are needed in order to avoid mixing data of the same hash format
//! (like SHA256d) but of different meaning (transaction id, block hash).
//!

use hashes::{hash_newtype, sha256d};

hash_newtype! {
    /// A transaction hash/transaction ID.
    pub struct Txid(sha256d::Hash);
    /// A block hash.
    pub struct BlockHash(sha256d::Hash);
    /// A hash of the merkle tree branch or root for transactions.
    pub struct TxMerkleNode(sha256d::Hash);
}

impl_hashencode!(Txid);
impl_hashencode!(BlockHash);
impl_hashencode!(TxMerkleNode);
