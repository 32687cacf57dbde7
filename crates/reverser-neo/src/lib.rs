//! Reverser NEO
//!
//! NEO virtual machine dialect for `reverser-core`: opcode table, jump
//! resolution for the JMP/CALL family and occurrence categories for
//! syscalls and embedded script hashes.

pub mod dialect;
pub mod jumps;
pub mod occurrences;
pub mod opcodes;
pub mod utils;

pub use dialect::{neo_reverser, neo_reverser_with_config, NeoDialect, NEO_DIALECT};
pub use occurrences::{SYSCALLS, UINT160_ADDRESSES, UINT256_ADDRESSES};
pub use opcodes::NEO_OPCODES;
