use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Variável de ambiente com o caminho de um arquivo JSON de configuração
pub const CONFIG_ENV_VAR: &str = "REVERSER_CONFIG";

/// Configuração do pipeline de engenharia reversa
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverserConfig {
    /// Escreve comentários descritivos em instruções de salto
    pub annotate_jumps: bool,
    /// Preenche, após a decodificação, índices de saltos estáticos para frente
    pub resolve_forward_jumps: bool,
    /// Executa a varredura de ocorrências em `reverse`
    pub scan_occurrences: bool,
    /// Aborta a decodificação ao exceder este número de instruções
    pub max_instructions: Option<usize>,
}

impl Default for ReverserConfig {
    fn default() -> Self {
        Self {
            annotate_jumps: true,
            resolve_forward_jumps: true,
            scan_occurrences: true,
            max_instructions: None,
        }
    }
}

impl ReverserConfig {
    /// Lê a configuração de um documento JSON; campos ausentes usam o padrão
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Lê a configuração de um arquivo JSON
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Usa o arquivo apontado por `REVERSER_CONFIG`, ou o padrão
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.is_empty() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }
}
