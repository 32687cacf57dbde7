use bytes::Bytes;
use tracing::debug;

use crate::config::ReverserConfig;
use crate::decoder;
use crate::dialect::Dialect;
use crate::error::Result;
use crate::result::ReverseResult;
use crate::utils::decode_hex;

/// Orquestra decodificação → registro de ocorrências → varredura para um
/// dialeto
#[derive(Debug, Clone)]
pub struct Reverser<D: Dialect> {
    dialect: D,
    config: ReverserConfig,
}

impl<D: Dialect> Reverser<D> {
    pub fn new(dialect: D) -> Self {
        Self::with_config(dialect, ReverserConfig::default())
    }

    pub fn with_config(dialect: D, config: ReverserConfig) -> Self {
        Self { dialect, config }
    }

    pub fn dialect(&self) -> &D {
        &self.dialect
    }

    pub fn config(&self) -> &ReverserConfig {
        &self.config
    }

    /// Decodifica o stream em instruções e saltos
    pub fn decode(&self, stream: impl Into<Bytes>) -> Result<ReverseResult> {
        decoder::decode(&self.dialect, stream.into(), &self.config)
    }

    /// Registra as categorias de ocorrência. O núcleo não define categorias
    /// próprias; todas vêm do dialeto.
    pub fn prepare_occurrences(&self, result: &mut ReverseResult) {
        self.dialect.register_occurrences(result.occurrences_mut());
    }

    /// Executa a varredura de ocorrências
    pub fn run_occurrence_scan(&self, result: &mut ReverseResult) -> usize {
        let found = result.scan_occurrences();
        debug!(
            dialect = self.dialect.name(),
            categories = result.occurrences().len(),
            found,
            "occurrence scan finished"
        );
        found
    }

    /// Pipeline completo
    pub fn reverse(&self, stream: impl Into<Bytes>) -> Result<ReverseResult> {
        let mut result = self.decode(stream)?;
        self.prepare_occurrences(&mut result);
        if self.config.scan_occurrences {
            self.run_occurrence_scan(&mut result);
        }
        Ok(result)
    }

    /// Pipeline completo a partir de uma string hexadecimal
    pub fn reverse_hex(&self, input: &str) -> Result<ReverseResult> {
        self.reverse(decode_hex(input)?)
    }
}
