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

//! Script
//!
//! Scripts define the spending conditions of outputs and carry the
//! arbitrary coinbase data of a block. Only construction is supported
//! here; scripts are never interpreted.
//!

use std::{fmt, io};

use crate::blockdata::opcodes;
use crate::consensus::encode::Encodable;
use crate::util::key::PublicKey;

/// A script, a sequence of opcodes and pushed data
#[derive(Clone, Default, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct Script(Vec<u8>);

impl Script {
    /// Creates a new empty script
    pub fn new() -> Script {
        Script(vec![])
    }

    /// Generates a pay-to-pubkey output script
    pub fn new_p2pk(pubkey: &PublicKey) -> Script {
        Builder::new().push_key(pubkey).push_opcode(opcodes::OP_CHECKSIG).into_script()
    }

    /// The length in bytes of the script
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the script is the empty script
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the script data
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Convert the script into a byte vector
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Script {
    fn from(v: Vec<u8>) -> Script {
        Script(v)
    }
}

impl fmt::LowerHex for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Script({:x})", self)
    }
}

impl Encodable for Script {
    #[inline]
    fn consensus_encode<W: io::Write + ?Sized>(&self, w: &mut W) -> Result<usize, io::Error> {
        self.0.consensus_encode(w)
    }
}

/// Encodes `n` as a minimal little-endian script number, with the sign in
/// the high bit of the last byte.
pub fn build_scriptint(n: i64) -> Vec<u8> {
    if n == 0 {
        return vec![];
    }

    let neg = n < 0;

    let mut abs = n.unsigned_abs();
    let mut v = vec![];
    while abs > 0xFF {
        v.push((abs & 0xFF) as u8);
        abs >>= 8;
    }
    // If the number's value causes the sign bit to be set, we need an extra
    // byte to get the correct value and correct sign bit
    if abs & 0x80 != 0 {
        v.push(abs as u8);
        v.push(if neg { 0x80u8 } else { 0u8 });
    }
    // Otherwise we just set the sign bit ourselves
    else {
        abs |= if neg { 0x80 } else { 0 };
        v.push(abs as u8);
    }
    v
}

/// An object which can be used to construct a script piece by piece
#[derive(PartialEq, Eq, Clone, Default)]
pub struct Builder(Vec<u8>);

impl Builder {
    /// Creates a new empty script
    pub fn new() -> Builder {
        Builder(vec![])
    }

    /// The length in bytes of the script
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the script is the empty script
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds instructions to push an integer onto the stack. Zero, -1 and
    /// 1 through 16 use their dedicated opcodes, everything else is pushed
    /// as a script number.
    pub fn push_int(self, data: i64) -> Builder {
        if data == -1 || (1..=16).contains(&data) {
            let opcode = (data - 1 + 0x51) as u8;
            self.push_opcode(opcode)
        } else if data == 0 {
            self.push_opcode(opcodes::OP_0)
        } else {
            self.push_scriptint(data)
        }
    }

    /// Adds instructions to push an integer onto the stack as data, never
    /// using the small integer opcodes.
    pub fn push_scriptint(self, data: i64) -> Builder {
        self.push_slice(&build_scriptint(data))
    }

    /// Adds instructions to push some arbitrary data onto the stack
    pub fn push_slice(mut self, data: &[u8]) -> Builder {
        // Start with a PUSH opcode
        match data.len() as u64 {
            n if n < opcodes::OP_PUSHDATA1 as u64 => {
                self.0.push(n as u8);
            }
            n if n < 0x100 => {
                self.0.push(opcodes::OP_PUSHDATA1);
                self.0.push(n as u8);
            }
            n if n < 0x10000 => {
                self.0.push(opcodes::OP_PUSHDATA2);
                self.0.extend_from_slice(&(n as u16).to_le_bytes());
            }
            n if n < 0x100000000 => {
                self.0.push(opcodes::OP_PUSHDATA4);
                self.0.extend_from_slice(&(n as u32).to_le_bytes());
            }
            _ => panic!("tried to put a 4bn+ sized object into a script!"),
        }
        // Then push the raw bytes
        self.0.extend_from_slice(data);
        self
    }

    /// Pushes a public key
    pub fn push_key(self, key: &PublicKey) -> Builder {
        self.push_slice(&key.to_bytes())
    }

    /// Adds a single opcode to the script
    pub fn push_opcode(mut self, data: u8) -> Builder {
        self.0.push(data);
        self
    }

    /// Converts the `Builder` into an unmodifiable `Script`
    pub fn into_script(self) -> Script {
        Script(self.0)
    }
}

impl From<Builder> for Script {
    fn from(builder: Builder) -> Script {
        builder.into_script()
    }
}
