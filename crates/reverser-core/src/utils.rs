/*!
 * Utilitários
 *
 * Conversões hexadecimais e formatação compartilhadas pela workspace
 */

use bytes::Bytes;
use serde::Serializer;

use crate::error::DecodeError;

/// Converte uma string hexadecimal (com ou sem `0x`/`0X`) para bytes
pub fn decode_hex(input: &str) -> Result<Bytes, DecodeError> {
    let trimmed = input.trim();
    let hex_str = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(hex_str)
        .map(Bytes::from)
        .map_err(|e| DecodeError::InvalidHex(e.to_string()))
}

/// Formata um offset como na listagem: hexadecimal minúsculo, mínimo de
/// dois dígitos, alinhado à direita em quatro colunas
pub fn format_offset(offset: u32) -> String {
    format!("{:>4}", format!("{:02x}", offset))
}

/// Serializa bytes como string hexadecimal com prefixo `0x`
pub fn serialize_hex<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: AsRef<[u8]>,
{
    serializer.serialize_str(&format!("0x{}", hex::encode(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_hex_accepts_prefix() {
        assert_eq!(decode_hex("0x0102").unwrap(), vec![1u8, 2]);
        assert_eq!(decode_hex("0102").unwrap(), vec![1u8, 2]);
        assert_eq!(decode_hex("0X0A0b").unwrap(), vec![0x0au8, 0x0b]);
        assert!(matches!(decode_hex("0xzz"), Err(DecodeError::InvalidHex(_))));
    }

    #[test]
    fn offsets_are_padded() {
        assert_eq!(format_offset(0), "  00");
        assert_eq!(format_offset(0x1a), "  1a");
        assert_eq!(format_offset(0x1234), "1234");
        assert_eq!(format_offset(0x12345), "12345");
    }
}
