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

//! Opcodes
//!
//! The opcodes needed to build genesis scripts. Pushes of fewer than
//! `OP_PUSHDATA1` bytes use the length itself as the opcode.
//!

/// Read the next byte as N; push the next N bytes as an array onto the stack
pub const OP_PUSHDATA1: u8 = 0x4c;
/// Read the next 2 bytes as N; push the next N bytes as an array onto the stack
pub const OP_PUSHDATA2: u8 = 0x4d;
/// Read the next 4 bytes as N; push the next N bytes as an array onto the stack
pub const OP_PUSHDATA4: u8 = 0x4e;
/// Push an empty array onto the stack
pub const OP_0: u8 = 0x00;
/// Pop a public key and a signature and push 1 if the signature is valid
pub const OP_CHECKSIG: u8 = 0xac;
