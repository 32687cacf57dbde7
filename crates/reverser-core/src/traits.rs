/*!
 * Reverser Traits
 *
 * Interfaces com colaboradores externos: o contexto de execução ao vivo
 * (depurador) e o ponto de inscrição para mudanças de instrução corrente.
 */

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ContextError;

/// Visão somente leitura de uma execução em andamento, consultada apenas
/// para anotar saltos dinâmicos
pub trait ExecutionContext {
    /// Nome do dialeto executado pelo contexto
    fn dialect(&self) -> &str;

    /// Índice da instrução corrente, se a execução estiver parada em uma
    fn current_instruction_index(&self) -> Option<usize>;

    /// Offset de retorno do frame de chamada corrente
    fn call_frame_return_offset(&self) -> Result<u32, ContextError>;

    /// Valor booleano no topo da pilha de avaliação
    fn evaluation_stack_top_bool(&self) -> Result<bool, ContextError>;
}

/// Identificador de inscrição
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

/// Receptor de notificações de instrução corrente
pub trait InstructionListener: Send + Sync {
    /// Chamado quando `source` passa a estar na instrução `instruction_index`
    fn on_instruction(&self, source: &str, instruction_index: usize);
}

/// Emissor de notificações de instrução corrente. A biblioteca define apenas
/// o contrato; quem depura fornece a implementação.
pub trait InstructionNotifier {
    /// Inscreve um receptor
    fn subscribe(&self, listener: Arc<dyn InstructionListener>) -> SubscriptionId;

    /// Remove uma inscrição; retorna `false` se ela não existir
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
