/*!
 * Saltos
 *
 * Arestas de controle de fluxo: estáticas, resolvidas na decodificação, ou
 * dinâmicas, resolvidas a cada consulta contra um contexto de execução.
 */

use parking_lot::Mutex;
use serde::Serialize;
use tracing::trace;

use crate::error::ContextError;
use crate::instruction::Instruction;
use crate::traits::ExecutionContext;

/// Ênfase de desenho de uma aresta dinâmica
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum EdgeEmphasis {
    /// Aresta viva e tomada
    Taken,
    /// Aresta viva e não tomada
    NotTaken,
    /// Instrução dona não é a corrente
    #[default]
    Inactive,
}

/// Como uma aresta dinâmica é resolvida
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DynamicKind {
    /// Desvio para `target`, tomado quando o topo da pilha de avaliação é
    /// igual a `taken_when`
    Conditional { target: u32, taken_when: bool },
    /// Retorno ao chamador; o destino vem do frame corrente
    Return,
}

/// Aresta cujo destino depende do estado de execução
#[derive(Debug, Serialize)]
pub struct DynamicJump {
    dialect: &'static str,
    kind: DynamicKind,
    emphasis: Mutex<EdgeEmphasis>,
}

impl DynamicJump {
    pub fn new(dialect: &'static str, kind: DynamicKind) -> Self {
        Self {
            dialect,
            kind,
            emphasis: Mutex::new(EdgeEmphasis::default()),
        }
    }

    pub fn dialect(&self) -> &'static str {
        self.dialect
    }

    pub fn kind(&self) -> DynamicKind {
        self.kind
    }

    pub fn emphasis(&self) -> EdgeEmphasis {
        *self.emphasis.lock()
    }

    /// Resolve o destino contra o contexto ao vivo. Qualquer falha do
    /// contexto resulta em `None` e ênfase `Inactive`.
    pub fn resolve(&self, context: Option<&dyn ExecutionContext>, owner: &Instruction) -> Option<u32> {
        let Some(context) = context else {
            *self.emphasis.lock() = EdgeEmphasis::Inactive;
            return None;
        };
        match self.try_resolve(context, owner) {
            Ok(target) => target,
            Err(err) => {
                trace!(offset = owner.offset, error = %err, "dynamic jump unresolved");
                *self.emphasis.lock() = EdgeEmphasis::Inactive;
                None
            }
        }
    }

    fn try_resolve(
        &self,
        context: &dyn ExecutionContext,
        owner: &Instruction,
    ) -> Result<Option<u32>, ContextError> {
        if context.dialect() != self.dialect {
            return Err(ContextError::DialectMismatch {
                expected: self.dialect.to_string(),
                found: context.dialect().to_string(),
            });
        }

        let live = context.current_instruction_index() == Some(owner.instruction_number);
        match self.kind {
            DynamicKind::Return => {
                if !live {
                    return Ok(None);
                }
                context.call_frame_return_offset().map(Some)
            }
            DynamicKind::Conditional { target, taken_when } => {
                let emphasis = if !live {
                    EdgeEmphasis::Inactive
                } else if context.evaluation_stack_top_bool()? == taken_when {
                    EdgeEmphasis::Taken
                } else {
                    EdgeEmphasis::NotTaken
                };
                *self.emphasis.lock() = emphasis;
                Ok(Some(target))
            }
        }
    }
}

impl Clone for DynamicJump {
    fn clone(&self) -> Self {
        Self {
            dialect: self.dialect,
            kind: self.kind,
            emphasis: Mutex::new(self.emphasis()),
        }
    }
}

/// Transferência de controle potencial a partir de uma instrução
#[derive(Debug, Clone, Serialize)]
pub enum Jump {
    /// Destino conhecido na decodificação; `index` é preenchido quando o
    /// offset cai no início de uma instrução
    Static { offset: u32, index: Option<usize> },
    Dynamic(DynamicJump),
}

impl Jump {
    pub fn to_offset(offset: u32, index: Option<usize>) -> Self {
        Jump::Static { offset, index }
    }

    pub fn dynamic(dialect: &'static str, kind: DynamicKind) -> Self {
        Jump::Dynamic(DynamicJump::new(dialect, kind))
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Jump::Static { .. })
    }

    /// Offset de destino de um salto estático
    pub fn static_offset(&self) -> Option<u32> {
        match self {
            Jump::Static { offset, .. } => Some(*offset),
            Jump::Dynamic(_) => None,
        }
    }

    /// Índice de destino de um salto estático, se conhecido
    pub fn static_index(&self) -> Option<usize> {
        match self {
            Jump::Static { index, .. } => *index,
            Jump::Dynamic(_) => None,
        }
    }

    /// Ênfase atual; saltos estáticos são sempre tomados
    pub fn emphasis(&self) -> EdgeEmphasis {
        match self {
            Jump::Static { .. } => EdgeEmphasis::Taken,
            Jump::Dynamic(dynamic) => dynamic.emphasis(),
        }
    }

    /// Resolve o offset de destino. Saltos estáticos ignoram o contexto.
    pub fn resolve(&self, context: Option<&dyn ExecutionContext>, owner: &Instruction) -> Option<u32> {
        match self {
            Jump::Static { offset, .. } => Some(*offset),
            Jump::Dynamic(dynamic) => dynamic.resolve(context, owner),
        }
    }
}
