//! Checksum of the raw launch data file.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 checksum of the CSV bytes.
///
/// Reported by the health endpoint so a reloaded dashboard can tell whether
/// it is looking at the same dataset.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let result = hasher.finalize();
    hex::encode(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_consistency() {
        let content = b"Launch Site,class\nCCAFS LC-40,1\n";
        assert_eq!(calculate_checksum(content), calculate_checksum(content));
        assert_eq!(calculate_checksum(content).len(), 64);
    }

    #[test]
    fn test_different_content_different_checksum() {
        let checksum1 = calculate_checksum(b"CCAFS LC-40,0");
        let checksum2 = calculate_checksum(b"CCAFS LC-40,1");
        assert_ne!(checksum1, checksum2);
    }
}
