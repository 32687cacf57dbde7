use reverser_core::{Instruction, Occurrences};

use crate::opcodes::SYSCALL;
use crate::utils::{uint160_label, uint256_label};

pub const SYSCALLS: &str = "SysCalls";
pub const UINT160_ADDRESSES: &str = "UInt160-Addresses";
pub const UINT256_ADDRESSES: &str = "UInt256-Addresses";

/// Interop service name of a SYSCALL
pub fn syscall(instruction: &Instruction) -> Option<String> {
    if instruction.opcode.raw_value != SYSCALL {
        return None;
    }
    instruction.argument.as_ref().map(|argument| argument.ascii())
}

/// Any 20-byte operand, read as a script hash
pub fn uint160_address(instruction: &Instruction) -> Option<String> {
    uint160_label(instruction.argument.as_ref()?.raw_value())
}

/// Any 32-byte operand, read as a transaction or block hash
pub fn uint256_address(instruction: &Instruction) -> Option<String> {
    uint256_label(instruction.argument.as_ref()?.raw_value())
}

pub fn register(occurrences: &mut Occurrences) {
    occurrences.register(SYSCALLS, syscall);
    occurrences.register(UINT160_ADDRESSES, uint160_address);
    occurrences.register(UINT256_ADDRESSES, uint256_address);
}
