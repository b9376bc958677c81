use anchor_lang::prelude::*;

use crate::engine::TokenEngine;

/// Engine state PDA at `[ENGINE_SEED, storage_name_hash]`.
#[account]
pub struct EngineAccount {
    pub bump: u8,
    /// blake3 of the registry name this storage was resolved from.
    pub storage_name_hash: [u8; 32],
    /// SPL mint buyers pay with.
    pub payment_mint: Pubkey,
    pub engine: TokenEngine,
}

impl EngineAccount {
    /// Space for discriminator + header + engine at full capacity.
    pub const fn space() -> usize {
        8 + 1 + 32 + 32 + TokenEngine::SIZE
    }
}
