use serde::Serialize;
use std::fmt;
use std::io;

use crate::argument::Argument;
use crate::jump::Jump;
use crate::opcode::OpCode;
use crate::traits::ExecutionContext;
use crate::utils::format_offset;

/// Instrução decodificada
#[derive(Debug, Clone, Serialize)]
pub struct Instruction {
    /// Posição na sequência, a partir de zero
    pub instruction_number: usize,
    /// Posição em bytes no stream original
    pub offset: u32,
    pub opcode: &'static OpCode,
    pub argument: Option<Argument>,
    pub comment: Option<String>,
    pub jump: Option<Jump>,
}

impl Instruction {
    pub fn new(
        instruction_number: usize,
        offset: u32,
        opcode: &'static OpCode,
        argument: Option<Argument>,
    ) -> Self {
        Self {
            instruction_number,
            offset,
            opcode,
            argument,
            comment: None,
            jump: None,
        }
    }

    /// Bytes ocupados no stream (opcode + argumento)
    pub fn encoded_len(&self) -> usize {
        1 + self.argument.as_ref().map_or(0, Argument::encoded_len)
    }

    /// Offset do primeiro byte após a instrução
    pub fn end_offset(&self) -> u64 {
        u64::from(self.offset) + self.encoded_len() as u64
    }

    /// Reescreve a instrução como estava no stream
    pub fn write<W: io::Write>(&self, writer: &mut W) -> io::Result<usize> {
        writer.write_all(&[self.opcode.raw_value])?;
        let written = match &self.argument {
            Some(argument) => argument.write(writer)?,
            None => 0,
        };
        Ok(1 + written)
    }

    /// Define o comentário se ainda não houver um
    pub fn annotate(&mut self, comment: impl Into<String>) {
        if self.comment.as_deref().map_or(true, str::is_empty) {
            self.comment = Some(comment.into());
        }
    }

    /// Resolve o destino do salto desta instrução, se houver
    pub fn resolve_jump(&self, context: Option<&dyn ExecutionContext>) -> Option<u32> {
        self.jump.as_ref()?.resolve(context, self)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let argument = self
            .argument
            .as_ref()
            .map(ToString::to_string)
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| self.opcode.name.to_string());

        write!(f, "[{}] {} [{}]", format_offset(self.offset), self.opcode, argument)?;

        if let Some(comment) = self.comment.as_deref().filter(|c| !c.is_empty()) {
            write!(f, " # {}", comment)?;
        }
        Ok(())
    }
}
