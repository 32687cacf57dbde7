use reverser_core::{
    Dialect, Instruction, JumpAnnotation, OffsetRelationCache, OpCode, Occurrences, Reverser,
    ReverserConfig,
};

use crate::{jumps, occurrences, opcodes};

/// Name shared by NEO execution contexts
pub const NEO_DIALECT: &str = "neo";

/// NEO (v2) virtual machine bytecode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeoDialect;

impl Dialect for NeoDialect {
    fn name(&self) -> &'static str {
        NEO_DIALECT
    }

    fn opcode(&self, byte: u8) -> Option<&'static OpCode> {
        opcodes::opcode(byte)
    }

    fn resolve_jump(&self, instruction: &Instruction, cache: &OffsetRelationCache) -> Option<JumpAnnotation> {
        jumps::resolve(instruction, cache)
    }

    fn register_occurrences(&self, occurrences: &mut Occurrences) {
        occurrences::register(occurrences);
    }
}

pub fn neo_reverser() -> Reverser<NeoDialect> {
    Reverser::new(NeoDialect)
}

pub fn neo_reverser_with_config(config: ReverserConfig) -> Reverser<NeoDialect> {
    Reverser::with_config(NeoDialect, config)
}
