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

//! Utility functions
//!
//! Functions needed by all parts of the library, and the library-wide
//! error type.
//!

pub mod amount;
pub mod key;
pub mod pow;
pub mod uint;

use std::{error, fmt};

use crate::chainparams;
use crate::config;
use crate::network::constants::ParseNetworkError;
use crate::network::seeds;

/// A general error code, other errors should implement conversions to/from this
/// if appropriate.
#[derive(Debug)]
pub enum Error {
    /// Chain selection error
    ChainParams(chainparams::Error),
    /// Runtime configuration error
    Config(config::Error),
    /// Network name parsing error
    Network(ParseNetworkError),
    /// Fixed seed parsing error
    Seed(seeds::Error),
    /// Proof-of-work error
    Pow(pow::Error),
    /// Public key error
    Key(key::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::ChainParams(ref e) => fmt::Display::fmt(e, f),
            Error::Config(ref e) => fmt::Display::fmt(e, f),
            Error::Network(ref e) => fmt::Display::fmt(e, f),
            Error::Seed(ref e) => fmt::Display::fmt(e, f),
            Error::Pow(ref e) => fmt::Display::fmt(e, f),
            Error::Key(ref e) => fmt::Display::fmt(e, f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::ChainParams(ref e) => Some(e),
            Error::Config(ref e) => Some(e),
            Error::Network(ref e) => Some(e),
            Error::Seed(ref e) => Some(e),
            Error::Pow(ref e) => Some(e),
            Error::Key(ref e) => Some(e),
        }
    }
}

#[doc(hidden)]
impl From<chainparams::Error> for Error {
    fn from(e: chainparams::Error) -> Error {
        Error::ChainParams(e)
    }
}

#[doc(hidden)]
impl From<config::Error> for Error {
    fn from(e: config::Error) -> Error {
        Error::Config(e)
    }
}

#[doc(hidden)]
impl From<ParseNetworkError> for Error {
    fn from(e: ParseNetworkError) -> Error {
        Error::Network(e)
    }
}

#[doc(hidden)]
impl From<seeds::Error> for Error {
    fn from(e: seeds::Error) -> Error {
        Error::Seed(e)
    }
}

#[doc(hidden)]
impl From<pow::Error> for Error {
    fn from(e: pow::Error) -> Error {
        Error::Pow(e)
    }
}

#[doc(hidden)]
impl From<key::Error> for Error {
    fn from(e: key::Error) -> Error {
        Error::Key(e)
    }
}
