use crate::cache::OffsetRelationCache;
use crate::instruction::Instruction;
use crate::jump::Jump;
use crate::occurrence::Occurrences;
use crate::opcode::OpCode;

/// Salto produzido pelo gancho do dialeto, com comentário opcional para a
/// listagem
#[derive(Debug, Clone)]
pub struct JumpAnnotation {
    pub jump: Jump,
    pub comment: Option<String>,
}

impl JumpAnnotation {
    pub fn new(jump: Jump) -> Self {
        Self { jump, comment: None }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Capacidades de um dialeto de bytecode
pub trait Dialect: Send + Sync {
    /// Nome do dialeto, comparado com o de contextos de execução
    fn name(&self) -> &'static str;

    /// Busca na tabela de opcodes do dialeto
    fn opcode(&self, byte: u8) -> Option<&'static OpCode>;

    /// Anota uma instrução recém-decodificada com seu salto. `cache` contém
    /// apenas as instruções decodificadas até aqui.
    fn resolve_jump(&self, instruction: &Instruction, cache: &OffsetRelationCache) -> Option<JumpAnnotation>;

    /// Registra as categorias de ocorrência do dialeto
    fn register_occurrences(&self, occurrences: &mut Occurrences);
}
