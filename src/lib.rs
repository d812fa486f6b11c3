// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! # Chain parameters
//!
//! This library holds, for every network a full node can run on, the
//! consensus rules, the network identity constants and the genesis block
//! the node treats as ground truth.
//!
//! Each [`ChainParams`] is built from a literal table, and building it
//! reconstructs the genesis block and checks it against the hashes the
//! network is known by. A mismatch means the binary disagrees with the chain
//! it claims to follow, and construction panics.
//!
//! ```rust
//! use chainparams::{ChainParams, Network};
//!
//! let params = ChainParams::new(Network::Main);
//! assert_eq!(params.default_port, 8333);
//! assert_eq!(
//!     params.genesis.block_hash().to_string(),
//!     "00000000671e78e128aa4b3943689e2675d80410c280a81d9e102036716f1a0e"
//! );
//! assert!(params.consensus.asert_anchor.is_some());
//! ```
//!

// Coding conventions
#![forbid(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(missing_docs)]

// Re-exported dependencies.
pub extern crate hashes;
pub extern crate secp256k1;

#[cfg(target_pointer_width = "16")]
compile_error!("chainparams cannot be used on 16-bit architectures");

#[macro_use]
mod internal_macros;
pub mod network;
pub mod blockdata;
pub mod util;
pub mod consensus;
pub mod chainparams;
pub mod config;
pub mod hash_types;

pub use crate::hash_types::*;
pub use crate::blockdata::block::Block;
pub use crate::blockdata::block::BlockHeader;
pub use crate::blockdata::script::Script;
pub use crate::blockdata::transaction::Transaction;
pub use crate::blockdata::transaction::TxIn;
pub use crate::blockdata::transaction::TxOut;
pub use crate::blockdata::transaction::OutPoint;
pub use crate::chainparams::ChainParams;
pub use crate::chainparams::ChainParamsRegistry;
pub use crate::chainparams::{create_chain_params, params, select_params, try_params};
pub use crate::config::NodeConfig;
pub use crate::consensus::encode::VarInt;
pub use crate::consensus::params::{ActivationTime, Height, Params};
pub use crate::network::constants::Magic;
pub use crate::network::constants::Network;
pub use crate::network::seeds::SeedSpec;
pub use crate::util::Error;
pub use crate::util::amount::Amount;
pub use crate::util::key::PublicKey;
pub use crate::util::uint::Uint256;
