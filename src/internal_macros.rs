// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Internal Macros
//!
//! Macros meant to be used inside the library only.
//!

/// Implements `Encodable` for a struct by encoding its fields in order.
macro_rules! impl_consensus_encoding {
    ($thing:ident, $($field:ident),+) => (
        impl $crate::consensus::encode::Encodable for $thing {
            #[inline]
            fn consensus_encode<W: ::std::io::Write + ?Sized>(
                &self,
                w: &mut W,
            ) -> Result<usize, ::std::io::Error> {
                let mut len = 0;
                $(len += $crate::consensus::encode::Encodable::consensus_encode(&self.$field, w)?;)+
                Ok(len)
            }
        }
    );
}

/// Implements `Encodable` for a hash newtype by writing its raw bytes.
macro_rules! impl_hashencode {
    ($hashtype:ident) => {
        impl $crate::consensus::encode::Encodable for $hashtype {
            fn consensus_encode<W: ::std::io::Write + ?Sized>(
                &self,
                w: &mut W,
            ) -> Result<usize, ::std::io::Error> {
                $crate::consensus::encode::Encodable::consensus_encode(
                    hashes::Hash::as_byte_array(self),
                    w,
                )
            }
        }
    };
}
