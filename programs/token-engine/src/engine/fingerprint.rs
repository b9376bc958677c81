//! State commitment used to confirm engine state survives a program upgrade.

use anchor_lang::prelude::*;
use std::result::Result;
use bytemuck::{Pod, Zeroable};

use super::TokenEngine;
use crate::error::EngineError;

/// Fixed-layout supply summary hashed ahead of the full state encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct SupplySnapshot {
    pub total_minted: u64,
    pub total_in_circulation: u64,
    pub reserve_balance: u64,
    pub escrow_balance: u64,
    pub account_count: u64,
    pub schedule_count: u64,
}

impl TokenEngine {
    pub fn supply_snapshot(&self) -> SupplySnapshot {
        SupplySnapshot {
            total_minted: self.ledger.total_minted(),
            total_in_circulation: self.ledger.total_in_circulation(),
            reserve_balance: self.ledger.reserve_balance(),
            escrow_balance: self.ledger.escrow_balance(),
            account_count: self.ledger.account_count() as u64,
            schedule_count: self.vesting.len() as u64,
        }
    }

    /// blake3 over the supply snapshot bytes followed by the Borsh encoding
    /// of the whole engine.
    pub fn state_fingerprint(&self) -> Result<[u8; 32], EngineError> {
        let mut hasher = blake3::Hasher::new();
        hasher.update(bytemuck::bytes_of(&self.supply_snapshot()));
        self.serialize(&mut hasher)
            .map_err(|_| EngineError::SerializationFailed)?;
        Ok(*hasher.finalize().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    #[test]
    fn fingerprint_survives_reencoding() {
        let mut engine = TokenEngine::default();
        engine.initialize(key(1), key(2), key(3)).unwrap();
        engine.mint(&key(1), 500).unwrap();

        let mut bytes = Vec::new();
        engine.serialize(&mut bytes).unwrap();
        let restored = TokenEngine::deserialize(&mut bytes.as_slice()).unwrap();

        assert_eq!(restored, engine);
        assert_eq!(
            restored.state_fingerprint().unwrap(),
            engine.state_fingerprint().unwrap()
        );
    }

    #[test]
    fn fingerprint_tracks_mutation() {
        let mut engine = TokenEngine::default();
        engine.initialize(key(1), key(2), key(3)).unwrap();
        let before = engine.state_fingerprint().unwrap();
        engine.freeze_token(&key(1), false).unwrap();
        assert_ne!(before, engine.state_fingerprint().unwrap());
        assert_eq!(engine.supply_snapshot().total_minted, 0);
    }
}
