use serde::Serialize;
use std::io;

use crate::cache::OffsetRelationCache;
use crate::instruction::Instruction;
use crate::jump::Jump;
use crate::occurrence::Occurrences;

/// Resultado da engenharia reversa de um stream
#[derive(Debug, Default, Serialize)]
pub struct ReverseResult {
    instructions: Vec<Instruction>,
    #[serde(skip)]
    cache: OffsetRelationCache,
    occurrences: Occurrences,
}

impl ReverseResult {
    pub(crate) fn new(instructions: Vec<Instruction>, cache: OffsetRelationCache) -> Self {
        Self {
            instructions,
            cache,
            occurrences: Occurrences::new(),
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn instruction(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Instrução que começa exatamente em `offset`
    pub fn instruction_at(&self, offset: u32) -> Option<&Instruction> {
        self.cache
            .index_of(offset)
            .and_then(|index| self.instructions.get(index))
    }

    pub fn cache(&self) -> &OffsetRelationCache {
        &self.cache
    }

    pub fn occurrences(&self) -> &Occurrences {
        &self.occurrences
    }

    pub fn occurrences_mut(&mut self) -> &mut Occurrences {
        &mut self.occurrences
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Preenche o índice de saltos estáticos cujo destino só foi decodificado
    /// depois deles. Retorna quantos foram resolvidos.
    pub fn resolve_pending_jumps(&mut self) -> usize {
        let cache = &self.cache;
        let mut resolved = 0;
        for instruction in &mut self.instructions {
            if let Some(Jump::Static { offset, index }) = instruction.jump.as_mut() {
                if index.is_none() {
                    *index = cache.index_of(*offset);
                    resolved += usize::from(index.is_some());
                }
            }
        }
        resolved
    }

    /// Executa a varredura de ocorrências sobre todas as instruções
    pub fn scan_occurrences(&mut self) -> usize {
        self.occurrences.scan(&self.instructions)
    }

    /// Listagem textual, uma instrução por linha
    pub fn listing(&self) -> String {
        self.instructions
            .iter()
            .map(|instruction| format!("{}\n", instruction))
            .collect()
    }

    /// Reescreve todas as instruções, reproduzindo o stream decodificado
    pub fn write<W: io::Write>(&self, writer: &mut W) -> io::Result<usize> {
        let mut total = 0;
        for instruction in &self.instructions {
            total += instruction.write(writer)?;
        }
        Ok(total)
    }
}
