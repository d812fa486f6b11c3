// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Chain parameters
//!
//! A [`ChainParams`] is everything a node needs to know about the network it
//! runs on: consensus rules, magic bytes, ports, seeds, address prefixes and
//! the genesis block. Building one reconstructs the genesis block and checks
//! it against the hashes the network is known by.
//!
//! The process selects one network at startup through
//! [`ChainParamsRegistry::select`] (or [`select_params`] for the global
//! registry). After that the parameters are read-only and shared.
//!

use std::collections::BTreeMap;
use std::{error, fmt};

use once_cell::sync::OnceCell;

use crate::blockdata::block::Block;
use crate::blockdata::constants::{self, COIN_VALUE};
use crate::consensus::params::Params;
use crate::hash_types::{BlockHash, TxMerkleNode};
use crate::network::constants::{Magic, Network};
use crate::network::seeds::{self, SeedSpec};
use crate::util::amount::Amount;
use crate::util::pow;

/// Disk magic shared by every network.
const DISK_MAGIC: Magic = Magic::from_bytes([0xfa, 0xbf, 0xb5, 0xda]);
/// Net magic shared by every network.
const NET_MAGIC: Magic = Magic::from_bytes([0xe4, 0xe2, 0xf4, 0xe9]);

const MAIN_DNS_SEEDS: &[&str] = &[
    "seed.flowee.cash",
    "seed-bch.bitcoinforks.org",
    "btccash-seeder.bitcoinunlimited.info",
    "seed.bchd.cash",
    "seed.bch.loping.net",
    "dnsseed.electroncash.de",
    "bchseed.c3-soft.com",
    "bch.bitjson.com",
];
const TESTNET_DNS_SEEDS: &[&str] = &[
    "testnet-seed-bch.bitcoinforks.org",
    "testnet-seed.bchd.cash",
    "seed.tbch.loping.net",
    "testnet-seed.bitcoinunlimited.info",
];
const TESTNET4_DNS_SEEDS: &[&str] = &[
    "testnet4-seed-bch.bitcoinforks.org",
    "testnet4-seed-bch.toom.im",
    "seed.tbch4.loping.net",
    "testnet4-seed.flowee.cash",
    "testnet4.bitjson.com",
];
const SCALENET_DNS_SEEDS: &[&str] =
    &["scalenet-seed-bch.bitcoinforks.org", "scalenet-seed-bch.toom.im", "seed.sbch.loping.net"];

// Fixed seeds ship empty until the seed generator output is vendored.
const MAIN_FIXED_SEEDS: &[&str] = &[];
const TESTNET_FIXED_SEEDS: &[&str] = &[];
const TESTNET4_FIXED_SEEDS: &[&str] = &[];
const SCALENET_FIXED_SEEDS: &[&str] = &[];

/// Kinds of base58 encoded data.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Base58Type {
    /// Pay to public key hash address
    PubkeyAddress,
    /// Pay to script hash address
    ScriptAddress,
    /// WIF private key
    SecretKey,
    /// BIP32 extended public key
    ExtPublicKey,
    /// BIP32 extended private key
    ExtSecretKey,
}

/// Version bytes prepended to base58 encoded data.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Base58Prefixes {
    /// Pay to public key hash address
    pub pubkey_address: Vec<u8>,
    /// Pay to script hash address
    pub script_address: Vec<u8>,
    /// WIF private key
    pub secret_key: Vec<u8>,
    /// BIP32 extended public key
    pub ext_public_key: Vec<u8>,
    /// BIP32 extended private key
    pub ext_secret_key: Vec<u8>,
}

impl Base58Prefixes {
    fn main() -> Base58Prefixes {
        Base58Prefixes {
            pubkey_address: vec![0],
            script_address: vec![5],
            secret_key: vec![128],
            ext_public_key: vec![0x04, 0x88, 0xB2, 0x1E],
            ext_secret_key: vec![0x04, 0x88, 0xAD, 0xE4],
        }
    }

    fn test() -> Base58Prefixes {
        Base58Prefixes {
            pubkey_address: vec![111],
            script_address: vec![196],
            secret_key: vec![239],
            ext_public_key: vec![0x04, 0x35, 0x87, 0xCF],
            ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
        }
    }

    /// Prefix for the given kind of data.
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }
}

/// Known block hashes at given heights.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CheckpointData {
    /// Block hash by height
    pub checkpoints: BTreeMap<u32, BlockHash>,
}

/// Transaction statistics used to estimate verification progress.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct ChainTxData {
    /// Unix timestamp of the last known number of transactions
    pub time: i64,
    /// Total number of transactions between genesis and that timestamp
    pub tx_count: u64,
    /// Estimated number of transactions per second after that timestamp
    pub tx_rate: f64,
}

/// Chain parameters of one network.
#[derive(Clone, PartialEq, Debug)]
pub struct ChainParams {
    /// Network these parameters describe
    pub network: Network,
    /// Consensus rules
    pub consensus: Params,
    /// Magic prefixing block records on disk
    pub disk_magic: Magic,
    /// Magic prefixing P2P messages
    pub net_magic: Magic,
    /// Default P2P port
    pub default_port: u16,
    /// Blocks below this height are never pruned
    pub prune_after_height: u64,
    /// Expected size of the block files, in gigabytes
    pub assumed_blockchain_size: u64,
    /// Expected size of the chain state, in gigabytes
    pub assumed_chain_state_size: u64,
    /// The genesis block
    pub genesis: Block,
    /// Seeder host names
    pub dns_seeds: Vec<String>,
    /// Hard-coded peer addresses
    pub fixed_seeds: Vec<SeedSpec>,
    /// Base58 version bytes
    pub base58_prefixes: Base58Prefixes,
    /// Human readable part of cashaddr addresses
    pub cashaddr_prefix: String,
    /// Whether expensive internal consistency checks run by default
    pub default_consistency_checks: bool,
    /// Whether only standard transactions are relayed and mined
    pub require_standard: bool,
    /// Whether this is a test chain
    pub is_test_chain: bool,
    /// Known block hashes
    pub checkpoints: CheckpointData,
    /// Transaction statistics
    pub chain_tx_data: ChainTxData,
}

/// Inputs the genesis block of a network is built from.
struct GenesisInputs {
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: Amount,
}

fn genesis_inputs(network: Network) -> GenesisInputs {
    match network {
        // every network starts from the same block
        Network::Main | Network::Testnet | Network::Testnet4 | Network::Scalenet | Network::Regtest => {
            GenesisInputs {
                time: 1_638_317_164,
                nonce: 1_607_403_406,
                bits: 0x1d00ffff,
                version: 1,
                reward: Amount::from_sat(50 * COIN_VALUE),
            }
        }
    }
}

fn genesis_block(network: Network) -> Block {
    let inputs = genesis_inputs(network);
    constants::build_genesis_block(
        constants::GENESIS_TIMESTAMP,
        constants::genesis_output_script(),
        inputs.time,
        inputs.nonce,
        inputs.bits,
        inputs.version,
        inputs.reward,
    )
}

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl ChainParams {
    /// Builds the parameters of `network`.
    ///
    /// # Panics
    ///
    /// If the rebuilt genesis block does not match the recorded hashes, or
    /// any other check of [`ChainParams::check_consistency`] fails. Either
    /// means the binary is broken.
    pub fn new(network: Network) -> ChainParams {
        let consensus = Params::new(network);
        let genesis = genesis_block(network);

        let params = match network {
            Network::Main => ChainParams {
                network,
                consensus,
                disk_magic: DISK_MAGIC,
                net_magic: NET_MAGIC,
                default_port: 8333,
                prune_after_height: 100_000,
                assumed_blockchain_size: 240,
                assumed_chain_state_size: 5,
                genesis,
                dns_seeds: strings(MAIN_DNS_SEEDS),
                fixed_seeds: seeds::parse_seeds(MAIN_FIXED_SEEDS.iter().copied()),
                base58_prefixes: Base58Prefixes::main(),
                cashaddr_prefix: "tbj".to_owned(),
                default_consistency_checks: false,
                require_standard: true,
                is_test_chain: false,
                checkpoints: CheckpointData::default(),
                chain_tx_data: ChainTxData::default(),
            },
            Network::Testnet => ChainParams {
                network,
                consensus,
                disk_magic: DISK_MAGIC,
                net_magic: NET_MAGIC,
                default_port: 18333,
                prune_after_height: 1000,
                assumed_blockchain_size: 60,
                assumed_chain_state_size: 2,
                genesis,
                dns_seeds: strings(TESTNET_DNS_SEEDS),
                fixed_seeds: seeds::parse_seeds(TESTNET_FIXED_SEEDS.iter().copied()),
                base58_prefixes: Base58Prefixes::test(),
                cashaddr_prefix: "bchtest".to_owned(),
                default_consistency_checks: false,
                require_standard: false,
                is_test_chain: true,
                checkpoints: CheckpointData::default(),
                chain_tx_data: ChainTxData::default(),
            },
            Network::Testnet4 => ChainParams {
                network,
                consensus,
                disk_magic: DISK_MAGIC,
                net_magic: NET_MAGIC,
                default_port: 28333,
                prune_after_height: 1000,
                assumed_blockchain_size: 1,
                assumed_chain_state_size: 1,
                genesis,
                dns_seeds: strings(TESTNET4_DNS_SEEDS),
                fixed_seeds: seeds::parse_seeds(TESTNET4_FIXED_SEEDS.iter().copied()),
                base58_prefixes: Base58Prefixes::test(),
                cashaddr_prefix: "bchtest".to_owned(),
                default_consistency_checks: false,
                require_standard: true,
                is_test_chain: true,
                checkpoints: CheckpointData::default(),
                chain_tx_data: ChainTxData::default(),
            },
            Network::Scalenet => ChainParams {
                network,
                consensus,
                disk_magic: DISK_MAGIC,
                net_magic: NET_MAGIC,
                default_port: 38333,
                prune_after_height: 10_000,
                assumed_blockchain_size: 200,
                assumed_chain_state_size: 20,
                genesis,
                dns_seeds: strings(SCALENET_DNS_SEEDS),
                fixed_seeds: seeds::parse_seeds(SCALENET_FIXED_SEEDS.iter().copied()),
                base58_prefixes: Base58Prefixes::test(),
                cashaddr_prefix: "bchtest".to_owned(),
                default_consistency_checks: false,
                require_standard: false,
                is_test_chain: true,
                checkpoints: CheckpointData::default(),
                chain_tx_data: ChainTxData::default(),
            },
            Network::Regtest => ChainParams {
                network,
                consensus,
                disk_magic: DISK_MAGIC,
                net_magic: NET_MAGIC,
                default_port: 18444,
                prune_after_height: 1000,
                assumed_blockchain_size: 0,
                assumed_chain_state_size: 0,
                genesis,
                // regtest never looks for peers
                dns_seeds: vec![],
                fixed_seeds: vec![],
                base58_prefixes: Base58Prefixes::test(),
                cashaddr_prefix: "bchreg".to_owned(),
                default_consistency_checks: true,
                require_standard: true,
                is_test_chain: true,
                checkpoints: CheckpointData::default(),
                chain_tx_data: ChainTxData::default(),
            },
        };

        if let Err(e) = params.check_consistency() {
            log::error!("{} chain parameters are inconsistent: {}", network, e);
            panic!("{} chain parameters are inconsistent: {}", network, e);
        }
        log::debug!(
            "built {} chain parameters, genesis {}",
            network,
            params.consensus.hash_genesis_block
        );
        params
    }

    /// Checks that the genesis block matches the recorded hashes and meets
    /// its own proof of work, and that generated blocks fit under the
    /// excessive block size.
    pub fn check_consistency(&self) -> Result<(), Error> {
        let hash = self.genesis.block_hash();
        if hash != self.consensus.hash_genesis_block {
            return Err(Error::GenesisHashMismatch {
                expected: self.consensus.hash_genesis_block,
                computed: hash,
            });
        }
        let merkle_root = self.genesis.header.merkle_root;
        if merkle_root != self.consensus.genesis_merkle_root
            || self.genesis.compute_merkle_root() != Some(merkle_root)
        {
            return Err(Error::GenesisMerkleRootMismatch {
                expected: self.consensus.genesis_merkle_root,
                computed: merkle_root,
            });
        }
        pow::check_proof_of_work(&hash, self.genesis.header.bits, &self.consensus.pow_limit)
            .map_err(Error::GenesisProofOfWork)?;

        let generated = self.consensus.default_generated_block_size;
        let excessive = self.consensus.default_excessive_block_size;
        if generated > excessive {
            return Err(Error::GeneratedBlockSizeTooLarge { generated, excessive });
        }
        Ok(())
    }

    /// Base58 prefix for the given kind of data.
    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.base58_prefixes.get(kind)
    }

    /// Hash of the genesis block.
    pub fn genesis_hash(&self) -> BlockHash {
        self.consensus.hash_genesis_block
    }
}

/// Chain parameter errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The name does not match any network.
    UnknownNetwork(String),
    /// Parameters were already selected for this process.
    AlreadySelected(Network),
    /// The rebuilt genesis block has an unexpected hash.
    GenesisHashMismatch {
        /// recorded hash
        expected: BlockHash,
        /// hash of the rebuilt block
        computed: BlockHash,
    },
    /// The rebuilt genesis block has an unexpected merkle root.
    GenesisMerkleRootMismatch {
        /// recorded merkle root
        expected: TxMerkleNode,
        /// merkle root of the rebuilt block
        computed: TxMerkleNode,
    },
    /// The genesis block does not meet its proof of work.
    GenesisProofOfWork(pow::Error),
    /// Generated blocks would exceed the excessive block size.
    GeneratedBlockSizeTooLarge {
        /// default generated block size
        generated: u64,
        /// default excessive block size
        excessive: u64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::UnknownNetwork(ref name) => write!(f, "unknown chain {:?}", name),
            Error::AlreadySelected(network) => {
                write!(f, "chain parameters already selected for {}", network)
            }
            Error::GenesisHashMismatch { ref expected, ref computed } => {
                write!(f, "genesis hash {} does not match recorded {}", computed, expected)
            }
            Error::GenesisMerkleRootMismatch { ref expected, ref computed } => {
                write!(f, "genesis merkle root {} does not match recorded {}", computed, expected)
            }
            Error::GenesisProofOfWork(ref e) => write!(f, "genesis proof of work: {}", e),
            Error::GeneratedBlockSizeTooLarge { generated, excessive } => write!(
                f,
                "generated block size {} exceeds excessive block size {}",
                generated, excessive
            ),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::GenesisProofOfWork(ref e) => Some(e),
            _ => None,
        }
    }
}

/// Builds the parameters of the network named `name`.
pub fn create_chain_params(name: &str) -> Result<ChainParams, Error> {
    let network = Network::from_core_arg(name).map_err(|e| Error::UnknownNetwork(e.0))?;
    Ok(ChainParams::new(network))
}

/// Holds the parameters a process selected. Selection happens once; every
/// later read shares the same instance.
#[derive(Debug, Default)]
pub struct ChainParamsRegistry {
    active: OnceCell<ChainParams>,
}

impl ChainParamsRegistry {
    /// Creates a registry with nothing selected.
    pub const fn new() -> ChainParamsRegistry {
        ChainParamsRegistry { active: OnceCell::new() }
    }

    /// Builds the parameters of the network named `name` without selecting
    /// them.
    pub fn create(&self, name: &str) -> Result<ChainParams, Error> {
        create_chain_params(name)
    }

    /// Selects the network named `name`. An unknown name or a second
    /// selection fails and leaves the registry unchanged.
    pub fn select(&self, name: &str) -> Result<&ChainParams, Error> {
        let network = Network::from_core_arg(name).map_err(|e| Error::UnknownNetwork(e.0))?;
        if let Some(active) = self.active.get() {
            log::warn!("ignoring selection of {}, {} is already active", network, active.network);
            return Err(Error::AlreadySelected(active.network));
        }

        match self.active.try_insert(ChainParams::new(network)) {
            Ok(active) => {
                log::info!("selected {} chain parameters", active.network);
                Ok(active)
            }
            Err((active, _)) => Err(Error::AlreadySelected(active.network)),
        }
    }

    /// The selected parameters, if any.
    pub fn try_active(&self) -> Option<&ChainParams> {
        self.active.get()
    }

    /// The selected parameters.
    ///
    /// # Panics
    ///
    /// If no network was selected yet.
    pub fn active(&self) -> &ChainParams {
        match self.active.get() {
            Some(params) => params,
            None => {
                log::error!("chain parameters read before a network was selected");
                panic!("chain parameters read before a network was selected");
            }
        }
    }
}

static GLOBAL: ChainParamsRegistry = ChainParamsRegistry::new();

/// Selects the process-wide chain parameters.
pub fn select_params(name: &str) -> Result<&'static ChainParams, Error> {
    GLOBAL.select(name)
}

/// The process-wide chain parameters.
///
/// # Panics
///
/// If [`select_params`] has not succeeded yet.
pub fn params() -> &'static ChainParams {
    GLOBAL.active()
}

/// The process-wide chain parameters, if selected.
pub fn try_params() -> Option<&'static ChainParams> {
    GLOBAL.try_active()
}

#[cfg(test)]
mod tests {
    use hashes::Hash;

    use super::*;

    const GENESIS_HASH: &str = "00000000671e78e128aa4b3943689e2675d80410c280a81d9e102036716f1a0e";
    const GENESIS_MERKLE_ROOT: &str = "47e610f3c0282e7318658c16dfbb6e34b32a8d16b41b36ff693a460d50967077";

    #[test]
    fn genesis_of_every_network() {
        for network in Network::ALL.iter() {
            let params = ChainParams::new(*network);
            assert_eq!(params.network, *network);
            assert_eq!(params.genesis.block_hash().to_string(), GENESIS_HASH);
            assert_eq!(params.genesis_hash().to_string(), GENESIS_HASH);
            assert_eq!(params.genesis.header.merkle_root.to_string(), GENESIS_MERKLE_ROOT);
            assert_eq!(params.genesis.txdata.len(), 1);
            assert_eq!(params.genesis.header.prev_blockhash, BlockHash::all_zeros());
            assert_eq!(params.check_consistency(), Ok(()));
        }
    }

    #[test]
    fn construction_is_deterministic() {
        for network in Network::ALL.iter() {
            assert_eq!(ChainParams::new(*network), ChainParams::new(*network));
        }
    }

    #[test]
    fn create_by_name() {
        for network in Network::ALL.iter() {
            let params = create_chain_params(network.to_core_arg()).unwrap();
            assert_eq!(params.network, *network);
        }
        assert_eq!(create_chain_params("mynet"), Err(Error::UnknownNetwork("mynet".to_owned())));
        assert_eq!(create_chain_params("Main"), Err(Error::UnknownNetwork("Main".to_owned())));
        assert_eq!(create_chain_params("test"), Err(Error::UnknownNetwork("test".to_owned())));
        assert_eq!(Error::UnknownNetwork("mynet".to_owned()).to_string(), "unknown chain \"mynet\"");
    }

    fn main_prefixes() -> Base58Prefixes {
        Base58Prefixes {
            pubkey_address: vec![0],
            script_address: vec![5],
            secret_key: vec![128],
            ext_public_key: vec![0x04, 0x88, 0xb2, 0x1e],
            ext_secret_key: vec![0x04, 0x88, 0xad, 0xe4],
        }
    }

    fn test_prefixes() -> Base58Prefixes {
        Base58Prefixes {
            pubkey_address: vec![111],
            script_address: vec![196],
            secret_key: vec![239],
            ext_public_key: vec![0x04, 0x35, 0x87, 0xcf],
            ext_secret_key: vec![0x04, 0x35, 0x83, 0x94],
        }
    }

    /// Fields every network sets the same way.
    fn assert_common(params: &ChainParams) {
        assert_eq!(params.consensus, Params::new(params.network));
        assert_eq!(params.disk_magic.to_string(), "fabfb5da");
        assert_eq!(params.net_magic.to_string(), "e4e2f4e9");
        assert_eq!(params.genesis.block_hash().to_string(), GENESIS_HASH);
        assert!(params.fixed_seeds.is_empty());
        assert!(params.checkpoints.checkpoints.is_empty());
        assert_eq!(params.chain_tx_data, ChainTxData::default());
    }

    #[test]
    fn main_identity() {
        let params = ChainParams::new(Network::Main);
        assert_common(&params);
        assert_eq!(params.default_port, 8333);
        assert_eq!(params.prune_after_height, 100_000);
        assert_eq!(params.assumed_blockchain_size, 240);
        assert_eq!(params.assumed_chain_state_size, 5);
        assert_eq!(
            params.dns_seeds,
            vec![
                "seed.flowee.cash",
                "seed-bch.bitcoinforks.org",
                "btccash-seeder.bitcoinunlimited.info",
                "seed.bchd.cash",
                "seed.bch.loping.net",
                "dnsseed.electroncash.de",
                "bchseed.c3-soft.com",
                "bch.bitjson.com",
            ]
        );
        assert_eq!(params.base58_prefixes, main_prefixes());
        assert_eq!(params.base58_prefix(Base58Type::PubkeyAddress), &[0]);
        assert_eq!(params.base58_prefix(Base58Type::ExtSecretKey), &[0x04, 0x88, 0xad, 0xe4]);
        assert_eq!(params.cashaddr_prefix, "tbj");
        assert!(!params.default_consistency_checks);
        assert!(params.require_standard);
        assert!(!params.is_test_chain);
    }

    #[test]
    fn testnet_identity() {
        let params = ChainParams::new(Network::Testnet);
        assert_common(&params);
        assert_eq!(params.default_port, 18333);
        assert_eq!(params.prune_after_height, 1000);
        assert_eq!(params.assumed_blockchain_size, 60);
        assert_eq!(params.assumed_chain_state_size, 2);
        assert_eq!(
            params.dns_seeds,
            vec![
                "testnet-seed-bch.bitcoinforks.org",
                "testnet-seed.bchd.cash",
                "seed.tbch.loping.net",
                "testnet-seed.bitcoinunlimited.info",
            ]
        );
        assert_eq!(params.base58_prefixes, test_prefixes());
        assert_eq!(params.cashaddr_prefix, "bchtest");
        assert!(!params.default_consistency_checks);
        assert!(!params.require_standard);
        assert!(params.is_test_chain);
    }

    #[test]
    fn testnet4_identity() {
        let params = ChainParams::new(Network::Testnet4);
        assert_common(&params);
        assert_eq!(params.default_port, 28333);
        assert_eq!(params.prune_after_height, 1000);
        assert_eq!(params.assumed_blockchain_size, 1);
        assert_eq!(params.assumed_chain_state_size, 1);
        assert_eq!(
            params.dns_seeds,
            vec![
                "testnet4-seed-bch.bitcoinforks.org",
                "testnet4-seed-bch.toom.im",
                "seed.tbch4.loping.net",
                "testnet4-seed.flowee.cash",
                "testnet4.bitjson.com",
            ]
        );
        assert_eq!(params.base58_prefixes, test_prefixes());
        assert_eq!(params.base58_prefix(Base58Type::ScriptAddress), &[196]);
        assert_eq!(params.cashaddr_prefix, "bchtest");
        assert!(!params.default_consistency_checks);
        assert!(params.require_standard);
        assert!(params.is_test_chain);
    }

    #[test]
    fn scalenet_identity() {
        let params = ChainParams::new(Network::Scalenet);
        assert_common(&params);
        assert_eq!(params.default_port, 38333);
        assert_eq!(params.prune_after_height, 10_000);
        assert_eq!(params.assumed_blockchain_size, 200);
        assert_eq!(params.assumed_chain_state_size, 20);
        assert_eq!(
            params.dns_seeds,
            vec!["scalenet-seed-bch.bitcoinforks.org", "scalenet-seed-bch.toom.im", "seed.sbch.loping.net"]
        );
        assert_eq!(params.base58_prefixes, test_prefixes());
        assert_eq!(params.cashaddr_prefix, "bchtest");
        assert!(!params.default_consistency_checks);
        assert!(!params.require_standard);
        assert!(params.is_test_chain);
    }

    #[test]
    fn regtest_identity() {
        let params = ChainParams::new(Network::Regtest);
        assert_common(&params);
        assert_eq!(params.default_port, 18444);
        assert_eq!(params.prune_after_height, 1000);
        assert_eq!(params.assumed_blockchain_size, 0);
        assert_eq!(params.assumed_chain_state_size, 0);
        assert!(params.dns_seeds.is_empty());
        assert_eq!(params.base58_prefixes, test_prefixes());
        assert_eq!(params.cashaddr_prefix, "bchreg");
        assert!(params.default_consistency_checks);
        assert!(params.require_standard);
        assert!(params.is_test_chain);
    }

    #[test]
    fn generated_size_never_exceeds_excessive() {
        for network in Network::ALL.iter() {
            let consensus = ChainParams::new(*network).consensus;
            assert!(consensus.default_generated_block_size <= consensus.default_excessive_block_size);
        }
    }

    #[test]
    fn inconsistencies_are_reported() {
        let mut params = ChainParams::new(Network::Main);
        params.genesis.header.nonce += 1;
        match params.check_consistency() {
            Err(Error::GenesisHashMismatch { expected, .. }) => {
                assert_eq!(expected.to_string(), GENESIS_HASH)
            }
            other => panic!("unexpected {:?}", other),
        }

        let mut params = ChainParams::new(Network::Main);
        params.consensus.default_generated_block_size = params.consensus.default_excessive_block_size + 1;
        assert!(matches!(
            params.check_consistency(),
            Err(Error::GeneratedBlockSizeTooLarge { .. })
        ));

        let mut params = ChainParams::new(Network::Main);
        params.consensus.pow_limit = crate::util::uint::Uint256::from_u64(1);
        assert!(matches!(params.check_consistency(), Err(Error::GenesisProofOfWork(_))));
    }

    #[test]
    fn registry_selects_once() {
        let registry = ChainParamsRegistry::new();
        assert!(registry.try_active().is_none());

        assert_eq!(registry.select("mynet"), Err(Error::UnknownNetwork("mynet".to_owned())));
        assert!(registry.try_active().is_none());

        let selected = registry.select("testnet4").unwrap();
        assert_eq!(selected.network, Network::Testnet4);
        assert_eq!(registry.active().network, Network::Testnet4);
        assert!(std::ptr::eq(selected, registry.active()));

        assert_eq!(registry.select("main"), Err(Error::AlreadySelected(Network::Testnet4)));
        assert_eq!(registry.active().network, Network::Testnet4);

        let other = registry.create("regtest").unwrap();
        assert_eq!(other.network, Network::Regtest);
        assert_eq!(registry.active().network, Network::Testnet4);
    }

    #[test]
    #[should_panic(expected = "read before a network was selected")]
    fn registry_active_before_select() {
        ChainParamsRegistry::new().active();
    }
}
