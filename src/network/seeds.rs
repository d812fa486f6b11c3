// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Fixed seeds
//!
//! Peers compiled into the binary as a fallback when DNS seeding fails.
//! Entries are written as numeric `host:port` literals and are checked for
//! being usable peer addresses before they are accepted. Nothing in this
//! module performs name resolution.
//!
//! Each seed is stored as an 18-byte record: the address in 16-byte IPv6
//! form (IPv4 addresses are IPv4-mapped) followed by the port in network
//! byte order.
//!

use std::{error, fmt};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a seed literal could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The host part is not a numeric IPv4 or IPv6 address.
    InvalidHost,
    /// No port follows the host.
    MissingPort,
    /// The port is not a number between 0 and 65535.
    InvalidPort,
    /// The port is zero.
    ZeroPort,
    /// The address is unspecified, the broadcast address or reserved for
    /// documentation, none of which can name a peer.
    InvalidAddress,
}

/// A fixed seed error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The literal could not be parsed into an address and port.
    Parse {
        /// the offending literal
        input: String,
        /// what was wrong with it
        kind: ParseErrorKind,
    },
    /// The address parsed fine but cannot be reached over the internet.
    NotRoutable(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Parse { ref input, kind } => {
                let reason = match kind {
                    ParseErrorKind::InvalidHost => "host is not a numeric IP address",
                    ParseErrorKind::MissingPort => "missing port",
                    ParseErrorKind::InvalidPort => "invalid port",
                    ParseErrorKind::ZeroPort => "port is zero",
                    ParseErrorKind::InvalidAddress => "address cannot name a peer",
                };
                write!(f, "unable to parse numeric-IP:port pair {}: {}", input, reason)
            }
            Error::NotRoutable(ref input) => write!(f, "not routable: {}", input),
        }
    }
}

impl error::Error for Error {}

/// A validated fixed seed: a routable address and a non-zero port.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeedSpec {
    addr: [u8; 16],
    port: u16,
}

impl SeedSpec {
    /// Size of the binary record of a seed.
    pub const SIZE: usize = 18;

    /// Parses and validates a numeric `host:port` literal. IPv6 hosts must be
    /// bracketed, as in `[2001:4860::1]:8333`.
    pub fn parse(text: &str) -> Result<SeedSpec, Error> {
        let parse_err = |kind| Error::Parse { input: text.to_owned(), kind };

        let (host, port) = split_host_port(text);
        let ip = IpAddr::from_str(host).map_err(|_| parse_err(ParseErrorKind::InvalidHost))?;
        let port = match port {
            None => return Err(parse_err(ParseErrorKind::MissingPort)),
            Some(p) => p.parse::<u16>().map_err(|_| parse_err(ParseErrorKind::InvalidPort))?,
        };
        if port == 0 {
            return Err(parse_err(ParseErrorKind::ZeroPort));
        }

        let ip = unmap(ip);
        if !is_valid(&ip) {
            return Err(parse_err(ParseErrorKind::InvalidAddress));
        }
        if !is_routable(&ip) {
            return Err(Error::NotRoutable(text.to_owned()));
        }

        let addr = match ip {
            IpAddr::V4(v4) => v4.to_ipv6_mapped().octets(),
            IpAddr::V6(v6) => v6.octets(),
        };
        Ok(SeedSpec { addr, port })
    }

    /// The address in 16-byte IPv6 form.
    pub fn addr(&self) -> [u8; 16] {
        self.addr
    }

    /// The port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// The address and port as a socket address, with IPv4-mapped addresses
    /// turned back into IPv4.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(unmap(IpAddr::V6(Ipv6Addr::from(self.addr))), self.port)
    }

    /// Encodes the seed as its 18-byte record.
    pub fn to_bytes(&self) -> [u8; 18] {
        let mut bytes = [0u8; 18];
        bytes[..16].copy_from_slice(&self.addr);
        bytes[16..].copy_from_slice(&self.port.to_be_bytes());
        bytes
    }

    /// Decodes an 18-byte record. Records are compiled in, so only the
    /// layout is checked here, not routability.
    pub fn from_bytes(bytes: [u8; 18]) -> SeedSpec {
        let mut addr = [0u8; 16];
        addr.copy_from_slice(&bytes[..16]);
        SeedSpec { addr, port: u16::from_be_bytes([bytes[16], bytes[17]]) }
    }
}

impl FromStr for SeedSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeedSpec::parse(s)
    }
}

impl fmt::Display for SeedSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.socket_addr(), f)
    }
}

/// Parses every literal, logging and skipping the ones that are unusable.
pub fn parse_seeds<'a, I>(literals: I) -> Vec<SeedSpec>
where
    I: IntoIterator<Item = &'a str>,
{
    literals
        .into_iter()
        .filter_map(|text| match SeedSpec::parse(text) {
            Ok(seed) => Some(seed),
            Err(e) => {
                log::warn!("skipping fixed seed: {}", e);
                None
            }
        })
        .collect()
}

/// Splits `host:port`. A colon only separates a port when the host is
/// bracketed or contains no other colon, so a bare IPv6 address has no port.
fn split_host_port(text: &str) -> (&str, Option<&str>) {
    match text.rfind(':') {
        Some(colon) => {
            let host = &text[..colon];
            let port = &text[colon + 1..];
            if host.starts_with('[') && host.ends_with(']') {
                (&host[1..host.len() - 1], Some(port))
            } else if !host.contains(':') {
                (host, Some(port))
            } else if text.starts_with('[') && text.ends_with(']') {
                (&text[1..text.len() - 1], None)
            } else {
                (text, None)
            }
        }
        None => (text, None),
    }
}

fn unmap(ip: IpAddr) -> IpAddr {
    match ip {
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        },
        v4 => v4,
    }
}

/// Whether the address could name a peer at all.
fn is_valid(ip: &IpAddr) -> bool {
    match *ip {
        IpAddr::V4(v4) => !v4.is_unspecified() && v4 != Ipv4Addr::BROADCAST,
        // RFC3849 documentation prefix 2001:db8::/32
        IpAddr::V6(v6) => !v6.is_unspecified() && !(v6.segments()[0] == 0x2001 && v6.segments()[1] == 0x0db8),
    }
}

/// Whether the address is reachable over the public internet.
fn is_routable(ip: &IpAddr) -> bool {
    match *ip {
        IpAddr::V4(v4) => {
            let o = v4.octets();
            !(o[0] == 127 || o[0] == 0                                    // local
                || o[0] == 10                                             // RFC1918
                || (o[0] == 192 && o[1] == 168)
                || (o[0] == 172 && (16..=31).contains(&o[1]))
                || (o[0] == 198 && (o[1] == 18 || o[1] == 19))            // RFC2544
                || (o[0] == 169 && o[1] == 254)                           // RFC3927
                || (o[0] == 100 && (o[1] & 0xc0) == 64)                   // RFC6598
                || (o[0] == 192 && o[1] == 0 && o[2] == 2)                // RFC5737
                || (o[0] == 198 && o[1] == 51 && o[2] == 100)
                || (o[0] == 203 && o[1] == 0 && o[2] == 113))
        }
        IpAddr::V6(v6) => {
            let s = v6.segments();
            !(v6.is_loopback()
                || (s[0] == 0xfe80 && s[1] == 0 && s[2] == 0 && s[3] == 0) // RFC4862
                || (s[0] & 0xfe00) == 0xfc00                               // RFC4193
                || (s[0] == 0x2001 && (s[1] & 0xfff0) == 0x0010)           // RFC4843
                || (s[0] == 0x2001 && (s[1] & 0xfff0) == 0x0020))          // RFC7343
        }
    }
}
