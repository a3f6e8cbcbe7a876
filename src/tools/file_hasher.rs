/// 計算整份檔案內容的 BLAKE3 指紋（64 個十六進位字元）
#[must_use]
pub fn calculate_content_hash(content: &[u8]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(content);
    hasher.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_content_hash() {
        let hash = calculate_content_hash(b"test content");
        assert!(!hash.is_empty());
        assert_eq!(hash.len(), 64); // BLAKE3 produces 256-bit (64 hex chars) hash
    }

    #[test]
    fn test_same_content_same_hash() {
        let hash1 = calculate_content_hash(b"identical content");
        let hash2 = calculate_content_hash(b"identical content");

        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_different_content_different_hash() {
        let hash1 = calculate_content_hash(b"content A");
        let hash2 = calculate_content_hash(b"content B");

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_empty_content_hash() {
        assert_eq!(
            calculate_content_hash(b""),
            blake3::hash(b"").to_hex().to_string()
        );
    }
}
