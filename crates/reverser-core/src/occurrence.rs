/*!
 * Ocorrências
 *
 * Categorias nomeadas de instruções detectadas por verificadores.
 */

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::instruction::Instruction;

/// Verificador de uma categoria: devolve o rótulo quando a instrução casa
pub type OccurrenceChecker = Box<dyn Fn(&Instruction) -> Option<String> + Send + Sync>;

/// Instrução que casou com uma categoria
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub label: String,
    pub instruction_index: usize,
}

/// Verificador de uma categoria e suas ocorrências, em ordem de instrução
#[derive(Serialize)]
pub struct OccurrenceCollection {
    #[serde(skip)]
    checker: OccurrenceChecker,
    matches: Vec<Occurrence>,
}

impl OccurrenceCollection {
    pub fn new<F>(checker: F) -> Self
    where
        F: Fn(&Instruction) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            checker: Box::new(checker),
            matches: Vec::new(),
        }
    }

    /// Aplica o verificador; registra e retorna `true` em caso de rótulo
    /// não vazio
    pub fn check(&mut self, instruction: &Instruction) -> bool {
        match (self.checker)(instruction) {
            Some(label) if !label.is_empty() => {
                self.matches.push(Occurrence {
                    label,
                    instruction_index: instruction.instruction_number,
                });
                true
            }
            _ => false,
        }
    }

    pub fn matches(&self) -> &[Occurrence] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    fn clear(&mut self) {
        self.matches.clear();
    }
}

impl fmt::Debug for OccurrenceCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OccurrenceCollection")
            .field("matches", &self.matches)
            .finish_non_exhaustive()
    }
}

/// Categorias registradas, mantidas em ordem de registro
#[derive(Debug, Default)]
pub struct Occurrences {
    categories: Vec<(String, OccurrenceCollection)>,
}

impl Occurrences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra uma categoria. Nomes já registrados são ignorados e a
    /// função retorna `false`.
    pub fn register<F>(&mut self, name: impl Into<String>, checker: F) -> bool
    where
        F: Fn(&Instruction) -> Option<String> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.categories.push((name, OccurrenceCollection::new(checker)));
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&OccurrenceCollection> {
        self.categories
            .iter()
            .find(|(category, _)| category == name)
            .map(|(_, collection)| collection)
    }

    /// Nomes das categorias em ordem de registro
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OccurrenceCollection)> {
        self.categories
            .iter()
            .map(|(name, collection)| (name.as_str(), collection))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Passa cada instrução, em sequência, por todos os verificadores na
    /// ordem de registro. Ocorrências de uma varredura anterior são
    /// descartadas.
    pub fn scan(&mut self, instructions: &[Instruction]) -> usize {
        for (_, collection) in &mut self.categories {
            collection.clear();
        }

        let mut found = 0;
        for instruction in instructions {
            for (_, collection) in &mut self.categories {
                if collection.check(instruction) {
                    found += 1;
                }
            }
        }
        found
    }
}

impl Serialize for Occurrences {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (name, collection) in &self.categories {
            map.serialize_entry(name, collection)?;
        }
        map.end()
    }
}
