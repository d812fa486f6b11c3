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

//! Transactions
//!
//! A transaction describes a transfer of money. It consumes previously
//! unspent transaction outputs and produces new ones. The genesis block
//! holds a single coinbase transaction whose input spends nothing.
//!

use hashes::Hash;

use crate::blockdata::constants::MAX_SEQUENCE;
use crate::blockdata::script::Script;
use crate::consensus::encode::serialize;
use crate::hash_types::Txid;
use crate::util::amount::Amount;

/// A reference to a transaction output
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct OutPoint {
    /// The referenced transaction's txid
    pub txid: Txid,
    /// The index of the referenced output in its transaction's vout
    pub vout: u32,
}
impl_consensus_encoding!(OutPoint, txid, vout);

impl OutPoint {
    /// Creates a new `OutPoint`.
    #[inline]
    pub fn new(txid: Txid, vout: u32) -> OutPoint {
        OutPoint { txid, vout }
    }

    /// Creates a "null" `OutPoint`.
    ///
    /// This value is used for coinbase transactions because they don't have
    /// any previous outputs.
    #[inline]
    pub fn null() -> OutPoint {
        OutPoint { txid: Txid::all_zeros(), vout: u32::MAX }
    }

    /// Checks if an `OutPoint` is "null".
    #[inline]
    pub fn is_null(&self) -> bool {
        *self == OutPoint::null()
    }
}

impl Default for OutPoint {
    fn default() -> Self {
        OutPoint::null()
    }
}

/// A transaction input, which defines old coins to be consumed
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct TxIn {
    /// The reference to the previous output that is being used an an input
    pub previous_output: OutPoint,
    /// The script which pushes values on the stack which will cause
    /// the referenced output's script to accept
    pub script_sig: Script,
    /// The sequence number, which suggests to miners which of two
    /// conflicting transactions should be preferred, or 0xFFFFFFFF
    /// to ignore this feature. This is generally never used since
    /// the miner behaviour cannot be enforced.
    pub sequence: u32,
}
impl_consensus_encoding!(TxIn, previous_output, script_sig, sequence);

impl Default for TxIn {
    fn default() -> TxIn {
        TxIn { previous_output: OutPoint::default(), script_sig: Script::new(), sequence: MAX_SEQUENCE }
    }
}

/// A transaction output, which defines new coins to be created from old ones.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct TxOut {
    /// The value of the output
    pub value: Amount,
    /// The script which must satisfy for the output to be spent
    pub script_pubkey: Script,
}
impl_consensus_encoding!(TxOut, value, script_pubkey);

/// A transaction
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Transaction {
    /// The protocol version, is currently expected to be 1 or 2 (BIP 68).
    pub version: i32,
    /// Block number before which this transaction is valid, or 0 for
    /// valid immediately.
    pub lock_time: u32,
    /// List of inputs
    pub input: Vec<TxIn>,
    /// List of outputs
    pub output: Vec<TxOut>,
}
impl_consensus_encoding!(Transaction, version, input, output, lock_time);

impl Transaction {
    /// Computes the txid, the double SHA256 of the serialized transaction.
    pub fn txid(&self) -> Txid {
        Txid::hash(&serialize(self))
    }

    /// Is this a coin base transaction?
    pub fn is_coin_base(&self) -> bool {
        self.input.len() == 1 && self.input[0].previous_output.is_null()
    }

    /// Gets the serialized size of the transaction in bytes
    pub fn get_size(&self) -> usize {
        serialize(self).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockdata::script::Builder;

    fn coinbase() -> Transaction {
        Transaction {
            version: 1,
            lock_time: 0,
            input: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig: Builder::new().push_slice(b"coinbase").into_script(),
                sequence: MAX_SEQUENCE,
            }],
            output: vec![TxOut { value: Amount::from_sat(50), script_pubkey: Script::new() }],
        }
    }

    #[test]
    fn outpoint_null() {
        let null = OutPoint::null();
        assert!(null.is_null());
        assert_eq!(null.vout, 0xffffffff);
        assert_eq!(null, OutPoint::default());
        assert!(!OutPoint::new(Txid::all_zeros(), 0).is_null());

        let encoded = serialize(&null);
        assert_eq!(encoded.len(), 36);
        assert_eq!(&encoded[32..], &[0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn transaction_layout() {
        let tx = coinbase();
        assert!(tx.is_coin_base());
        let encoded = serialize(&tx);
        // version
        assert_eq!(&encoded[..4], &[1, 0, 0, 0]);
        // one input
        assert_eq!(encoded[4], 1);
        // locktime last
        assert_eq!(&encoded[encoded.len() - 4..], &[0, 0, 0, 0]);
        // version + count + outpoint + script + sequence + count + value + script + locktime
        assert_eq!(tx.get_size(), 4 + 1 + 36 + 9 + 4 + 1 + 8 + 1 + 4);
    }

    #[test]
    fn txid_commits_to_contents() {
        let tx = coinbase();
        assert_eq!(tx.txid(), Txid::hash(&serialize(&tx)));
        let mut other = coinbase();
        other.lock_time = 1;
        assert_ne!(tx.txid(), other.txid());
    }
}
