//! Name-based lookup of the engine's storage account.
//!
//! The registry maps a symbolic storage name to the state PDA
//! `[ENGINE_SEED, blake3(name)]`. The engine only consults it while being
//! initialized; afterwards the PDA address is the only reference.

use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::{ENGINE_SEED, MAX_STORAGE_NAME_LEN};
use crate::error::EngineError;

pub fn storage_name_hash(name: &str) -> Result<[u8; 32], EngineError> {
    if name.is_empty() || name.len() > MAX_STORAGE_NAME_LEN {
        return Err(EngineError::InvalidConfig);
    }
    Ok(*blake3::hash(name.as_bytes()).as_bytes())
}

pub fn storage_address(name: &str, program_id: &Pubkey) -> Result<(Pubkey, u8), EngineError> {
    let hash = storage_name_hash(name)?;
    Ok(Pubkey::find_program_address(
        &[ENGINE_SEED, hash.as_ref()],
        program_id,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_and_name_specific() {
        let a = storage_name_hash("token-storage").unwrap();
        assert_eq!(a, storage_name_hash("token-storage").unwrap());
        assert_ne!(a, storage_name_hash("token-storage-v2").unwrap());
    }

    #[test]
    fn rejects_empty_and_oversized_names() {
        assert!(storage_name_hash("").is_err());
        assert!(storage_name_hash(&"x".repeat(MAX_STORAGE_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn address_is_deterministic() {
        let (a, bump_a) = storage_address("token-storage", &crate::ID).unwrap();
        let (b, bump_b) = storage_address("token-storage", &crate::ID).unwrap();
        assert_eq!((a, bump_a), (b, bump_b));
    }
}
