use thiserror::Error;

/// Erros que abortam a decodificação de um stream de bytecode
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Byte ausente da tabela de opcodes do dialeto
    #[error("Opcode desconhecido 0x{byte:02x} no offset 0x{offset:04x}")]
    UnknownOpCode { offset: u32, byte: u8 },

    /// O stream terminou antes do argumento declarado pelo opcode
    #[error("Argumento truncado de {opcode} (0x{byte:02x}) no offset 0x{offset:04x}: {needed} bytes necessários, {available} disponíveis")]
    TruncatedArgument {
        offset: u32,
        byte: u8,
        opcode: &'static str,
        needed: usize,
        available: usize,
    },

    /// O campo de tamanho declara um argumento maior do que o endereçável
    #[error("Argumento de {opcode} (0x{byte:02x}) no offset 0x{offset:04x} declara {declared} bytes, {available} disponíveis")]
    OversizedArgument {
        offset: u32,
        byte: u8,
        opcode: &'static str,
        declared: u64,
        available: usize,
    },

    /// Limite de instruções configurado atingido
    #[error("Limite de {limit} instruções atingido")]
    InstructionLimit { limit: usize },

    /// Stream maior do que o espaço de offsets de 32 bits
    #[error("Stream de {len} bytes excede o espaço de offsets endereçável")]
    StreamTooLarge { len: usize },

    /// Entrada hexadecimal inválida
    #[error("Hexadecimal inválido: {0}")]
    InvalidHex(String),
}

/// Falhas das visões tipadas de um argumento
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Argumento tem {actual} bytes, a visão exige exatamente {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Falhas ao consultar um contexto de execução ao vivo.
///
/// Nunca atravessam a resolução de saltos dinâmicos: são convertidas em
/// "sem destino" no ponto da consulta.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("Contexto de execução indisponível")]
    Unavailable,

    #[error("Dialeto do contexto {found} difere de {expected}")]
    DialectMismatch { expected: String, found: String },

    #[error("Pilha de avaliação vazia")]
    EmptyStack,

    #[error("Nenhum frame de chamada disponível")]
    EmptyFrame,

    #[error("{0}")]
    Other(String),
}

/// Erros de carregamento de configuração
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Falha ao ler configuração: {0}")]
    Io(#[from] std::io::Error),

    #[error("Falha ao interpretar configuração: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tipo de resultado usado pela decodificação
pub type Result<T> = std::result::Result<T, DecodeError>;
