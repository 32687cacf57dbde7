/*!
 * Decodificador
 *
 * Percorre o stream em ordem, produzindo a sequência de instruções e o
 * cache offset ↔ índice. O gancho de saltos do dialeto roda após cada
 * instrução, quando o cache contém apenas as instruções já decodificadas.
 */

use bytes::Bytes;
use tracing::{debug, trace, warn};

use crate::argument::{Argument, ReadFailure};
use crate::cache::OffsetRelationCache;
use crate::config::ReverserConfig;
use crate::dialect::Dialect;
use crate::error::{DecodeError, Result};
use crate::instruction::Instruction;
use crate::result::ReverseResult;

/// Decodifica `stream` por completo. Falhas são atômicas: nenhuma instrução
/// parcial é devolvida.
pub fn decode<D>(dialect: &D, stream: Bytes, config: &ReverserConfig) -> Result<ReverseResult>
where
    D: Dialect + ?Sized,
{
    let len = stream.len();
    if u32::try_from(len).is_err() {
        warn!(len, "stream exceeds offset range");
        return Err(DecodeError::StreamTooLarge { len });
    }

    let mut instructions: Vec<Instruction> = Vec::new();
    let mut cache = OffsetRelationCache::with_capacity(len / 2);
    let mut pos = 0usize;

    while pos < len {
        let index = instructions.len();
        if let Some(limit) = config.max_instructions {
            if index >= limit {
                warn!(limit, offset = pos, "instruction limit reached");
                return Err(DecodeError::InstructionLimit { limit });
            }
        }

        // len cabe em u32, verificado acima
        let offset = pos as u32;
        let byte = stream[pos];
        let opcode = match dialect.opcode(byte) {
            Some(opcode) => opcode,
            None => {
                warn!(dialect = dialect.name(), offset, byte, "unknown opcode");
                return Err(DecodeError::UnknownOpCode { offset, byte });
            }
        };

        let (argument, consumed) = Argument::read(opcode.shape, &stream, pos + 1).map_err(|failure| {
            warn!(dialect = dialect.name(), offset, opcode = opcode.name, "argument does not fit stream");
            match failure {
                ReadFailure::Truncated(t) => DecodeError::TruncatedArgument {
                    offset,
                    byte,
                    opcode: opcode.name,
                    needed: t.needed,
                    available: t.available,
                },
                ReadFailure::Oversized { declared, available } => DecodeError::OversizedArgument {
                    offset,
                    byte,
                    opcode: opcode.name,
                    declared,
                    available,
                },
            }
        })?;

        cache.insert(offset, index);
        instructions.push(Instruction::new(index, offset, opcode, argument));

        let instruction = &mut instructions[index];
        if let Some(annotation) = dialect.resolve_jump(instruction, &cache) {
            if config.annotate_jumps {
                if let Some(comment) = annotation.comment {
                    instruction.annotate(comment);
                }
            }
            instruction.jump = Some(annotation.jump);
        }
        trace!(offset, index, opcode = opcode.name, "decoded instruction");

        pos += 1 + consumed;
    }

    let mut result = ReverseResult::new(instructions, cache);
    if config.resolve_forward_jumps {
        let resolved = result.resolve_pending_jumps();
        trace!(resolved, "forward jumps resolved");
    }

    debug!(
        dialect = dialect.name(),
        bytes = len,
        instructions = result.len(),
        "stream decoded"
    );
    Ok(result)
}
