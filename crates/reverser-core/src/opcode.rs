/*!
 * Opcodes
 *
 * Modelo de opcode e tabela estática por dialeto
 */

use serde::Serialize;
use std::fmt;

/// Largura do campo de tamanho de um argumento prefixado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrefixWidth {
    U8,
    U16,
    U32,
}

impl PrefixWidth {
    /// Quantidade de bytes do campo de tamanho
    pub const fn size(self) -> usize {
        match self {
            PrefixWidth::U8 => 1,
            PrefixWidth::U16 => 2,
            PrefixWidth::U32 => 4,
        }
    }
}

/// Formato do argumento que segue um opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArgumentShape {
    /// Sem argumento
    None,
    /// Quantidade fixa de bytes
    Fixed(usize),
    /// Tamanho little-endian de largura fixa seguido dos bytes
    Prefixed(PrefixWidth),
    /// Tamanho em inteiro variável (0xFD/0xFE/0xFF) seguido dos bytes
    VarInt,
}

/// Opcode de um dialeto. Entradas vivem em tabelas estáticas e são
/// referenciadas pelas instruções.
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct OpCode {
    pub raw_value: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub shape: ArgumentShape,
}

impl OpCode {
    pub const fn new(
        raw_value: u8,
        name: &'static str,
        description: &'static str,
        shape: ArgumentShape,
    ) -> Self {
        Self {
            raw_value,
            name,
            description,
            shape,
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Tabela byte → opcode com busca O(1)
#[derive(Debug, Clone)]
pub struct StaticOpCodeTable {
    entries: [Option<&'static OpCode>; 256],
}

impl StaticOpCodeTable {
    /// Cria uma tabela vazia
    pub fn new() -> Self {
        Self { entries: [None; 256] }
    }

    /// Registra um conjunto de opcodes; entradas posteriores substituem
    /// as anteriores com o mesmo byte
    pub fn extend(&mut self, opcodes: &'static [OpCode]) {
        for opcode in opcodes {
            self.entries[usize::from(opcode.raw_value)] = Some(opcode);
        }
    }

    /// Busca o opcode de um byte
    pub fn get(&self, byte: u8) -> Option<&'static OpCode> {
        self.entries[usize::from(byte)]
    }

    /// Busca um opcode pelo nome
    pub fn by_name(&self, name: &str) -> Option<&'static OpCode> {
        self.iter().find(|opcode| opcode.name == name)
    }

    /// Itera os opcodes registrados em ordem de byte
    pub fn iter(&self) -> impl Iterator<Item = &'static OpCode> + '_ {
        self.entries.iter().filter_map(|entry| *entry)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StaticOpCodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&'static [OpCode]> for StaticOpCodeTable {
    fn from(opcodes: &'static [OpCode]) -> Self {
        let mut table = Self::new();
        table.extend(opcodes);
        table
    }
}
