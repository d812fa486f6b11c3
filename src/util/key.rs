// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Public keys
//!
//! A thin wrapper over the secp256k1 public key that remembers whether it
//! should be serialized compressed, as scripts commit to the exact bytes.
//!

use std::{error, fmt};

/// A key-related error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A secp256k1 error
    Secp256k1(secp256k1::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Secp256k1(ref e) => write!(f, "invalid public key: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Secp256k1(ref e) => Some(e),
        }
    }
}

impl From<secp256k1::Error> for Error {
    fn from(e: secp256k1::Error) -> Error {
        Error::Secp256k1(e)
    }
}

/// A secp256k1 public key, used for verification of signatures
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct PublicKey {
    /// Whether this public key should be serialized as compressed
    pub compressed: bool,
    /// The actual secp256k1 key
    pub key: secp256k1::PublicKey,
}

impl PublicKey {
    /// Deserialize a public key from a slice. Both the 33-byte compressed
    /// and the 65-byte uncompressed forms are accepted.
    pub fn from_slice(data: &[u8]) -> Result<PublicKey, Error> {
        let key = secp256k1::PublicKey::from_slice(data)?;
        Ok(PublicKey {
            compressed: data.len() == secp256k1::constants::PUBLIC_KEY_SIZE,
            key,
        })
    }

    /// Serialize the public key to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        if self.compressed {
            self.key.serialize().to_vec()
        } else {
            self.key.serialize_uncompressed().to_vec()
        }
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::PublicKey;

    const UNCOMPRESSED: &str = "04855b21edaac2ed5a5690674dc2f925321b2d33bf8acc22fa86b36f37a268e0ee5a5f37fab6d0b04bb56762d54aa683b86ae23857b4ad8a17287ed302afc37871";

    #[test]
    fn uncompressed_key_roundtrip() {
        let bytes = hex::decode(UNCOMPRESSED).unwrap();
        let key = PublicKey::from_slice(&bytes).unwrap();
        assert!(!key.compressed);
        assert_eq!(key.to_bytes(), bytes);
        assert_eq!(key.to_string(), UNCOMPRESSED);
    }

    #[test]
    fn compressed_key_roundtrip() {
        let bytes = hex::decode("032e58afe51f9ed8ad3cc7897f634d881fdbe49a81564629ded8156bebd2ffd1af").unwrap();
        let key = PublicKey::from_slice(&bytes).unwrap();
        assert!(key.compressed);
        assert_eq!(key.to_bytes(), bytes);
        assert_eq!(key.to_string(), "032e58afe51f9ed8ad3cc7897f634d881fdbe49a81564629ded8156bebd2ffd1af");
    }

    #[test]
    fn invalid_key_test() {
        assert!(PublicKey::from_slice(&[0x04; 65]).is_err());
        assert!(PublicKey::from_slice(&[]).is_err());
    }
}
