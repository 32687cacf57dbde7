use reverser_core::{DynamicKind, Instruction, Jump, JumpAnnotation, OffsetRelationCache};
use tracing::trace;

use crate::dialect::NEO_DIALECT;
use crate::opcodes::{CALL, JMP, JMPIF, JMPIFNOT, RET};

/// Destination of a JMP/CALL family instruction: the signed 16-bit argument
/// is relative to the instruction's own offset.
pub fn relative_target(instruction: &Instruction) -> Option<u32> {
    let delta = instruction.argument.as_ref()?.as_i16().ok()?;
    let target = instruction.offset.checked_add_signed(i32::from(delta));
    if target.is_none() {
        trace!(offset = instruction.offset, delta, "relative jump before start of script");
    }
    target
}

/// Jump hook for NEO instructions. Unconditional transfers resolve against
/// the instructions decoded so far; branches and returns stay dynamic.
pub fn resolve(instruction: &Instruction, cache: &OffsetRelationCache) -> Option<JumpAnnotation> {
    match instruction.opcode.raw_value {
        JMP | CALL => {
            let target = relative_target(instruction)?;
            let verb = if instruction.opcode.raw_value == CALL { "Call" } else { "Jump" };
            Some(
                JumpAnnotation::new(Jump::to_offset(target, cache.index_of(target)))
                    .with_comment(format!("{} to 0x{:04X}", verb, target)),
            )
        }
        JMPIF | JMPIFNOT => {
            let target = relative_target(instruction)?;
            let taken_when = instruction.opcode.raw_value == JMPIF;
            let condition = if taken_when { "if" } else { "ifnot" };
            Some(
                JumpAnnotation::new(Jump::dynamic(
                    NEO_DIALECT,
                    DynamicKind::Conditional { target, taken_when },
                ))
                .with_comment(format!("Jump [{}] to 0x{:04X}", condition, target)),
            )
        }
        RET => Some(JumpAnnotation::new(Jump::dynamic(NEO_DIALECT, DynamicKind::Return))),
        _ => None,
    }
}
