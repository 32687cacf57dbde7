use ethereum_types::{H160, H256};

/// Script hashes are stored little-endian in NEO bytecode; labels show them
/// the way block explorers do.
pub fn uint160_label(bytes: &[u8]) -> Option<String> {
    if bytes.len() != H160::len_bytes() {
        return None;
    }
    Some(format!("0x{:x}", H160::from_slice(&reversed(bytes))))
}

/// Same as [`uint160_label`] for 32-byte hashes.
pub fn uint256_label(bytes: &[u8]) -> Option<String> {
    if bytes.len() != H256::len_bytes() {
        return None;
    }
    Some(format!("0x{:x}", H256::from_slice(&reversed(bytes))))
}

fn reversed(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uint160_is_reversed() {
        let bytes: Vec<u8> = (1..=20).collect();
        assert_eq!(
            uint160_label(&bytes).unwrap(),
            "0x14131211100f0e0d0c0b0a090807060504030201"
        );
    }

    #[test]
    fn wrong_lengths_are_rejected() {
        assert!(uint160_label(&[0u8; 19]).is_none());
        assert!(uint160_label(&[0u8; 21]).is_none());
        assert!(uint256_label(&[0u8; 20]).is_none());
    }

    #[test]
    fn uint256_keeps_leading_zeros() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xab;
        let label = uint256_label(&bytes).unwrap();
        assert_eq!(label.len(), 2 + 64);
        assert!(label.ends_with("ab"));
    }
}
