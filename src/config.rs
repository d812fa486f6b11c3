// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Node configuration
//!
//! Runtime settings layered over the selected [`ChainParams`]. The chain
//! parameters stay read-only; only the settings owned here can change.
//!

use std::{error, fmt};

use crate::blockdata::constants::{
    DEFAULT_EXCESSIVE_BLOCK_SIZE, DEFAULT_MAX_MEMPOOL_SIZE_PER_MB, DEFAULT_USE_CASHADDR,
    LEGACY_MAX_BLOCK_SIZE,
};
use crate::chainparams::{self, ChainParams};
use crate::util::amount::Amount;

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Excessive block sizes must be larger than the legacy 1MB limit.
    ExcessiveBlockSizeTooLow {
        /// rejected size, in bytes
        requested: u64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::ExcessiveBlockSizeTooLow { requested } => write!(
                f,
                "excessive block size {} must be larger than {}",
                requested, LEGACY_MAX_BLOCK_SIZE
            ),
        }
    }
}

impl error::Error for Error {}

/// Node settings borrowing the chain parameters they apply to.
#[derive(Debug, Clone)]
pub struct NodeConfig<'a> {
    params: &'a ChainParams,
    use_cash_addr: bool,
    excessive_block_size: u64,
    excess_utxo_charge: Amount,
    max_mempool_size: u64,
}

impl<'a> NodeConfig<'a> {
    /// Creates a configuration with every setting at its default.
    pub fn new(params: &'a ChainParams) -> NodeConfig<'a> {
        NodeConfig {
            params,
            use_cash_addr: DEFAULT_USE_CASHADDR,
            excessive_block_size: params.consensus.default_excessive_block_size,
            excess_utxo_charge: Amount::ZERO,
            max_mempool_size: DEFAULT_EXCESSIVE_BLOCK_SIZE * DEFAULT_MAX_MEMPOOL_SIZE_PER_MB,
        }
    }

    /// The chain parameters this configuration applies to.
    pub fn chain_params(&self) -> &'a ChainParams {
        self.params
    }

    /// Sets the largest block the node accepts. Sizes up to the legacy 1MB
    /// limit are rejected and the current value is kept.
    pub fn set_excessive_block_size(&mut self, size: u64) -> Result<(), Error> {
        if size <= LEGACY_MAX_BLOCK_SIZE {
            log::warn!(
                "rejected excessive block size {}, keeping {}",
                size,
                self.excessive_block_size
            );
            return Err(Error::ExcessiveBlockSizeTooLow { requested: size });
        }
        self.excessive_block_size = size;
        Ok(())
    }

    /// The largest block the node accepts, in bytes.
    pub fn excessive_block_size(&self) -> u64 {
        self.excessive_block_size
    }

    /// Sets whether addresses are shown in cashaddr format.
    pub fn set_cash_addr_encoding(&mut self, use_cash_addr: bool) {
        self.use_cash_addr = use_cash_addr;
    }

    /// Whether addresses are shown in cashaddr format.
    pub fn use_cash_addr_encoding(&self) -> bool {
        self.use_cash_addr
    }

    /// Sets the extra fee charged per created UTXO.
    pub fn set_excess_utxo_charge(&mut self, charge: Amount) {
        self.excess_utxo_charge = charge;
    }

    /// The extra fee charged per created UTXO.
    pub fn excess_utxo_charge(&self) -> Amount {
        self.excess_utxo_charge
    }

    /// Sets the mempool capacity, in bytes.
    pub fn set_max_mempool_size(&mut self, size: u64) {
        self.max_mempool_size = size;
    }

    /// The mempool capacity, in bytes.
    pub fn max_mempool_size(&self) -> u64 {
        self.max_mempool_size
    }
}

impl NodeConfig<'static> {
    /// Configuration over the process-wide chain parameters.
    ///
    /// # Panics
    ///
    /// If no network was selected yet.
    pub fn global() -> NodeConfig<'static> {
        NodeConfig::new(chainparams::params())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::constants::Network;

    #[test]
    fn defaults() {
        let params = ChainParams::new(Network::Testnet4);
        let config = NodeConfig::new(&params);
        assert_eq!(config.excessive_block_size(), 2_000_000);
        assert!(config.use_cash_addr_encoding());
        assert_eq!(config.excess_utxo_charge(), Amount::ZERO);
        assert_eq!(config.max_mempool_size(), 320_000_000);
        assert_eq!(config.chain_params().network, Network::Testnet4);

        let params = ChainParams::new(Network::Main);
        assert_eq!(NodeConfig::new(&params).excessive_block_size(), 32_000_000);
    }

    #[test]
    fn excessive_block_size() {
        let params = ChainParams::new(Network::Regtest);
        let mut config = NodeConfig::new(&params);

        assert_eq!(
            config.set_excessive_block_size(1_000_000),
            Err(Error::ExcessiveBlockSizeTooLow { requested: 1_000_000 })
        );
        assert_eq!(config.excessive_block_size(), 32_000_000);
        assert!(config.set_excessive_block_size(0).is_err());
        assert_eq!(config.excessive_block_size(), 32_000_000);

        assert_eq!(config.set_excessive_block_size(1_000_001), Ok(()));
        assert_eq!(config.excessive_block_size(), 1_000_001);

        // the chain parameters are untouched
        assert_eq!(params.consensus.default_excessive_block_size, 32_000_000);
    }

    #[test]
    fn plain_settings() {
        let params = ChainParams::new(Network::Scalenet);
        let mut config = NodeConfig::new(&params);

        config.set_cash_addr_encoding(false);
        assert!(!config.use_cash_addr_encoding());
        config.set_cash_addr_encoding(true);
        assert!(config.use_cash_addr_encoding());

        config.set_excess_utxo_charge(Amount::from_sat(500));
        assert_eq!(config.excess_utxo_charge(), Amount::from_sat(500));

        config.set_max_mempool_size(1);
        assert_eq!(config.max_mempool_size(), 1);
    }

    #[test]
    fn error_display() {
        let e = Error::ExcessiveBlockSizeTooLow { requested: 5 };
        assert_eq!(e.to_string(), "excessive block size 5 must be larger than 1000000");
    }
}
