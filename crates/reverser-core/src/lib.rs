/*!
 * Reverser Core
 *
 * Decodificação de bytecode de máquinas de pilha em uma listagem
 * endereçável, reconstrução de arestas de controle de fluxo (inclusive as
 * que dependem do estado de execução) e classificação de instruções em
 * categorias de ocorrência. Polimórfico sobre dialetos via [`Dialect`].
 */

pub mod argument;
pub mod cache;
pub mod config;
pub mod decoder;
pub mod dialect;
pub mod error;
pub mod instruction;
pub mod jump;
pub mod occurrence;
pub mod opcode;
pub mod result;
pub mod reverser;
pub mod traits;
pub mod utils;

// Re-exportações públicas
pub use argument::Argument;
pub use cache::OffsetRelationCache;
pub use config::ReverserConfig;
pub use dialect::{Dialect, JumpAnnotation};
pub use error::{ArgumentError, ConfigError, ContextError, DecodeError, Result};
pub use instruction::Instruction;
pub use jump::{DynamicJump, DynamicKind, EdgeEmphasis, Jump};
pub use occurrence::{Occurrence, OccurrenceCollection, Occurrences};
pub use opcode::{ArgumentShape, OpCode, PrefixWidth, StaticOpCodeTable};
pub use result::ReverseResult;
pub use reverser::Reverser;
pub use traits::{ExecutionContext, InstructionListener, InstructionNotifier, SubscriptionId};
