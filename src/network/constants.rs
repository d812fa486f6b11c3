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

//! Network constants
//!
//! This module provides the [`Network`] tag naming each chain a node can run
//! on, and the [`Magic`] byte sequences that frame wire messages and block
//! files on that chain.
//!
//! # Example: encoding a network's magic bytes
//!
//! ```rust
//! use chainparams::network::constants::Magic;
//! use chainparams::consensus::encode::serialize;
//!
//! let magic = Magic::from_bytes([0xe4, 0xe2, 0xf4, 0xe9]);
//! let bytes = serialize(&magic);
//!
//! assert_eq!(&bytes[..], &[0xe4, 0xe2, 0xf4, 0xe9]);
//! ```

use std::{error, fmt, io};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::consensus::encode::Encodable;

/// The network to act on.
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Network {
    /// Production network
    Main,
    /// Public test network (v3)
    Testnet,
    /// Public test network (v4), with small blocks
    Testnet4,
    /// Large block test network, periodically reset
    Scalenet,
    /// Local regression test network
    Regtest,
}

impl Network {
    /// Every network, in selection order.
    pub const ALL: [Network; 5] = [
        Network::Main,
        Network::Testnet,
        Network::Testnet4,
        Network::Scalenet,
        Network::Regtest,
    ];

    /// Converts a `Network` to the name used to select it on the command line.
    pub fn to_core_arg(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "testnet",
            Network::Testnet4 => "testnet4",
            Network::Scalenet => "scalenet",
            Network::Regtest => "regtest",
        }
    }

    /// Converts a command line network name to its `Network`. Names are
    /// case sensitive.
    pub fn from_core_arg(core_arg: &str) -> Result<Self, ParseNetworkError> {
        use Network::*;

        let network = match core_arg {
            "main" => Main,
            "testnet" => Testnet,
            "testnet4" => Testnet4,
            "scalenet" => Scalenet,
            "regtest" => Regtest,
            _ => return Err(ParseNetworkError(core_arg.to_owned())),
        };
        Ok(network)
    }
}

#[cfg(feature = "serde")]
pub mod as_core_arg {
    //! Module for serialization/deserialization of network variants into/from command line names
    #![allow(missing_docs)]

    use crate::Network;

    pub fn serialize<S>(network: &Network, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(network.to_core_arg())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct NetworkVisitor;

        impl<'de> serde::de::Visitor<'de> for NetworkVisitor {
            type Value = Network;

            fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Self::Value, E> {
                Network::from_core_arg(s).map_err(|_| {
                    E::invalid_value(
                        serde::de::Unexpected::Str(s),
                        &"network encoded as a string (main, testnet, testnet4, scalenet or regtest)",
                    )
                })
            }

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(
                    formatter,
                    "network encoded as a string (main, testnet, testnet4, scalenet or regtest)"
                )
            }
        }

        deserializer.deserialize_str(NetworkVisitor)
    }
}

/// An error in parsing network string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNetworkError(pub String);

impl fmt::Display for ParseNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "unknown network {:?}", self.0)
    }
}

impl error::Error for ParseNetworkError {}

impl FromStr for Network {
    type Err = ParseNetworkError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::from_core_arg(s)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_core_arg())
    }
}

/// Four bytes prefixed to every wire message or block record, identifying
/// the network it belongs to.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Magic([u8; 4]);

impl Magic {
    /// Creates a magic from its bytes, in the order they appear on the wire.
    pub const fn from_bytes(bytes: [u8; 4]) -> Magic {
        Magic(bytes)
    }

    /// Returns the bytes in the order they appear on the wire.
    pub fn to_bytes(self) -> [u8; 4] {
        self.0
    }

    /// Whether `data` starts with this magic.
    pub fn is_prefix_of(&self, data: &[u8]) -> bool {
        data.starts_with(&self.0)
    }
}

impl fmt::Display for Magic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Magic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Magic({})", self)
    }
}

impl Encodable for Magic {
    #[inline]
    fn consensus_encode<W: io::Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        self.0.consensus_encode(w)
    }
}

#[cfg(test)]
mod tests {
    use super::{Magic, Network};
    use crate::consensus::encode::serialize;

    #[test]
    fn serialize_test() {
        let magic = Magic::from_bytes([0xfa, 0xbf, 0xb5, 0xda]);
        assert_eq!(serialize(&magic), &[0xfa, 0xbf, 0xb5, 0xda]);
        assert_eq!(magic.to_string(), "fabfb5da");
        assert_eq!(format!("{:?}", magic), "Magic(fabfb5da)");

        assert!(magic.is_prefix_of(&[0xfa, 0xbf, 0xb5, 0xda, 0x00]));
        assert!(!magic.is_prefix_of(&[0xe4, 0xe2, 0xf4, 0xe9]));
        assert!(!magic.is_prefix_of(&[0xfa, 0xbf]));

        assert_eq!(Magic::from_bytes([0x00, 0x01, 0x0a, 0xff]).to_string(), "00010aff");
    }

    #[test]
    fn string_test() {
        assert_eq!(Network::Main.to_string(), "main");
        assert_eq!(Network::Testnet.to_string(), "testnet");
        assert_eq!(Network::Testnet4.to_string(), "testnet4");
        assert_eq!(Network::Scalenet.to_string(), "scalenet");
        assert_eq!(Network::Regtest.to_string(), "regtest");

        assert_eq!("main".parse::<Network>().unwrap(), Network::Main);
        assert_eq!("regtest".parse::<Network>().unwrap(), Network::Regtest);
        assert!("fakenet".parse::<Network>().is_err());
        assert!("Main".parse::<Network>().is_err());
        assert!("test".parse::<Network>().is_err());
    }

    #[test]
    fn from_to_core_arg() {
        for net in Network::ALL.iter() {
            assert_eq!(Network::from_core_arg(net.to_core_arg()), Ok(*net));
        }
        let err = Network::from_core_arg("mynet").unwrap_err();
        assert_eq!(err.0, "mynet");
        assert_eq!(err.to_string(), "unknown network \"mynet\"");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_roundtrip() {
        use Network::*;
        let tests = vec![
            (Main, "main"),
            (Testnet, "testnet"),
            (Testnet4, "testnet4"),
            (Scalenet, "scalenet"),
            (Regtest, "regtest"),
        ];

        for tc in tests {
            let network = tc.0;

            let want = format!("\"{}\"", tc.1);
            let got = serde_json::to_string(&tc.0).expect("failed to serialize network");
            assert_eq!(got, want);

            let back: Network = serde_json::from_str(&got).expect("failed to deserialize network");
            assert_eq!(back, network);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_core_arg() {
        use serde::{Deserialize, Serialize};

        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct T {
            #[serde(with = "crate::network::constants::as_core_arg")]
            pub network: Network,
        }

        serde_test::assert_tokens(
            &T { network: Network::Testnet4 },
            &[
                serde_test::Token::Struct { name: "T", len: 1 },
                serde_test::Token::Str("network"),
                serde_test::Token::Str("testnet4"),
                serde_test::Token::StructEnd,
            ],
        );
    }
}
