use sha3::{Digest, Keccak256};
use crate::types::ProofValue;

/// Derives a puzzle proof value from the inputs a miner controls.
///
/// Implementations must be pure: the same inputs always produce the same value.
pub trait ProofHasher: Send + Sync {
    fn derive(
        &self,
        session_id: u64,
        nonce: u64,
        complexity: u8,
        significance: u8,
    ) -> ProofValue;
}

/// keccak256(session_id_le ‖ nonce_le ‖ complexity ‖ significance), first 16 bytes big-endian.
#[derive(Clone, Copy, Debug, Default)]
pub struct Keccak256Hasher;

impl ProofHasher for Keccak256Hasher {
    fn derive(
        &self,
        session_id: u64,
        nonce: u64,
        complexity: u8,
        significance: u8,
    ) -> ProofValue {
        let mut hasher = Keccak256::new();
        hasher.update(session_id.to_le_bytes());
        hasher.update(nonce.to_le_bytes());
        hasher.update([complexity, significance]);
        let digest = hasher.finalize();

        let mut head = [0u8; 16];
        head.copy_from_slice(&digest[..16]);
        ProofValue::from_be_bytes(head)
    }
}
