/*!
 * Argumentos
 *
 * Codec de operandos: consome os bytes declarados pelo formato do opcode e
 * expõe visões tipadas little-endian calculadas sob demanda.
 */

use bytes::Bytes;
use serde::Serialize;
use std::fmt;
use std::io;

use crate::error::ArgumentError;
use crate::opcode::ArgumentShape;
use crate::utils::serialize_hex;

/// Falta de bytes ao ler um argumento
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncation {
    pub needed: usize,
    pub available: usize,
}

/// Falha ao ler um argumento do stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadFailure {
    Truncated(Truncation),
    /// Campo de tamanho declara mais bytes do que é endereçável
    Oversized { declared: u64, available: usize },
}

impl From<Truncation> for ReadFailure {
    fn from(truncation: Truncation) -> Self {
        ReadFailure::Truncated(truncation)
    }
}

/// Operando de uma instrução. `prefix` guarda o campo de tamanho exatamente
/// como aparece no stream; `raw` contém apenas o payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    shape: ArgumentShape,
    #[serde(skip)]
    prefix: Bytes,
    #[serde(rename = "raw_value", serialize_with = "serialize_hex")]
    raw: Bytes,
}

impl Argument {
    /// Argumento de tamanho fixo
    pub fn fixed(raw: impl Into<Bytes>) -> Self {
        let raw = raw.into();
        Self {
            shape: ArgumentShape::Fixed(raw.len()),
            prefix: Bytes::new(),
            raw,
        }
    }

    /// Lê o argumento de formato `shape` iniciando em `pos`. Retorna o
    /// argumento (se o formato tiver um) e o total de bytes consumidos.
    pub fn read(
        shape: ArgumentShape,
        stream: &Bytes,
        pos: usize,
    ) -> Result<(Option<Argument>, usize), ReadFailure> {
        let available = stream.len().saturating_sub(pos);
        let (prefix_len, payload_len) = match shape {
            ArgumentShape::None => return Ok((None, 0)),
            ArgumentShape::Fixed(n) => (0, n as u64),
            ArgumentShape::Prefixed(width) => {
                let size = width.size();
                let field = take(stream, pos, size, available)?;
                (size, read_le(field))
            }
            ArgumentShape::VarInt => {
                let marker = take(stream, pos, 1, available)?[0];
                let size = match marker {
                    0xfd => 2,
                    0xfe => 4,
                    0xff => 8,
                    _ => 0,
                };
                if size == 0 {
                    (1, u64::from(marker))
                } else {
                    let field = take(stream, pos + 1, size, available - 1)
                        .map_err(|t| Truncation { needed: t.needed + 1, available })?;
                    (1 + size, read_le(field))
                }
            }
        };

        let needed = usize::try_from(payload_len)
            .ok()
            .and_then(|payload| payload.checked_add(prefix_len))
            .ok_or(ReadFailure::Oversized {
                declared: payload_len,
                available,
            })?;
        if needed > available {
            return Err(Truncation { needed, available }.into());
        }

        let argument = Argument {
            shape,
            prefix: stream.slice(pos..pos + prefix_len),
            raw: stream.slice(pos + prefix_len..pos + needed),
        };
        Ok((Some(argument), needed))
    }

    pub fn shape(&self) -> ArgumentShape {
        self.shape
    }

    /// Payload sem o campo de tamanho
    pub fn raw_value(&self) -> &[u8] {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Bytes ocupados no stream (prefixo + payload)
    pub fn encoded_len(&self) -> usize {
        self.prefix.len() + self.raw.len()
    }

    /// Reescreve o argumento como estava no stream
    pub fn write<W: io::Write>(&self, writer: &mut W) -> io::Result<usize> {
        writer.write_all(&self.prefix)?;
        writer.write_all(&self.raw)?;
        Ok(self.encoded_len())
    }

    fn exact<const N: usize>(&self) -> Result<[u8; N], ArgumentError> {
        self.raw
            .as_ref()
            .try_into()
            .map_err(|_| ArgumentError::LengthMismatch {
                expected: N,
                actual: self.raw.len(),
            })
    }

    pub fn as_u8(&self) -> Result<u8, ArgumentError> {
        self.exact::<1>().map(u8::from_le_bytes)
    }

    pub fn as_i8(&self) -> Result<i8, ArgumentError> {
        self.exact::<1>().map(i8::from_le_bytes)
    }

    pub fn as_u16(&self) -> Result<u16, ArgumentError> {
        self.exact::<2>().map(u16::from_le_bytes)
    }

    pub fn as_i16(&self) -> Result<i16, ArgumentError> {
        self.exact::<2>().map(i16::from_le_bytes)
    }

    pub fn as_u32(&self) -> Result<u32, ArgumentError> {
        self.exact::<4>().map(u32::from_le_bytes)
    }

    pub fn as_i32(&self) -> Result<i32, ArgumentError> {
        self.exact::<4>().map(i32::from_le_bytes)
    }

    pub fn as_u64(&self) -> Result<u64, ArgumentError> {
        self.exact::<8>().map(u64::from_le_bytes)
    }

    pub fn as_i64(&self) -> Result<i64, ArgumentError> {
        self.exact::<8>().map(i64::from_le_bytes)
    }

    /// Payload como ASCII; bytes fora da faixa viram `?`
    pub fn ascii(&self) -> String {
        self.raw
            .iter()
            .map(|&b| if b.is_ascii() { char::from(b) } else { '?' })
            .collect()
    }

    /// Payload em hexadecimal minúsculo, sem prefixo
    pub fn hex(&self) -> String {
        hex::encode(&self.raw)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.raw.is_empty() {
            return Ok(());
        }
        write!(f, "0x{}", self.hex())
    }
}

fn take(stream: &Bytes, pos: usize, size: usize, available: usize) -> Result<&[u8], Truncation> {
    if size > available {
        return Err(Truncation { needed: size, available });
    }
    Ok(&stream[pos..pos + size])
}

fn read_le(field: &[u8]) -> u64 {
    field
        .iter()
        .rev()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_le_handles_all_widths() {
        assert_eq!(read_le(&[0x03]), 3);
        assert_eq!(read_le(&[0x34, 0x12]), 0x1234);
        assert_eq!(read_le(&[0x78, 0x56, 0x34, 0x12]), 0x1234_5678);
    }

    #[test]
    fn ascii_replaces_non_ascii_bytes() {
        let arg = Argument::fixed(vec![b'O', b'k', 0xc3]);
        assert_eq!(arg.ascii(), "Ok?");
    }
}
