use std::collections::HashMap;

/// Relação bidirecional offset ↔ índice de instrução.
///
/// Cada offset mapeia para exatamente um índice e vice-versa.
#[derive(Debug, Default, Clone)]
pub struct OffsetRelationCache {
    offset_to_index: HashMap<u32, usize>,
    index_to_offset: HashMap<usize, u32>,
}

impl OffsetRelationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            offset_to_index: HashMap::with_capacity(capacity),
            index_to_offset: HashMap::with_capacity(capacity),
        }
    }

    /// Registra a relação nos dois sentidos. Retorna `false` sem alterar
    /// nada se o offset ou o índice já estiverem registrados.
    pub fn insert(&mut self, offset: u32, index: usize) -> bool {
        if self.offset_to_index.contains_key(&offset) || self.index_to_offset.contains_key(&index) {
            return false;
        }
        self.offset_to_index.insert(offset, index);
        self.index_to_offset.insert(index, offset);
        true
    }

    /// Índice da instrução que começa em `offset`
    pub fn index_of(&self, offset: u32) -> Option<usize> {
        self.offset_to_index.get(&offset).copied()
    }

    /// Offset da instrução `index`
    pub fn offset_of(&self, index: usize) -> Option<u32> {
        self.index_to_offset.get(&index).copied()
    }

    pub fn contains_offset(&self, offset: u32) -> bool {
        self.offset_to_index.contains_key(&offset)
    }

    pub fn len(&self) -> usize {
        self.offset_to_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offset_to_index.is_empty()
    }
}
