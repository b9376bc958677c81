use anchor_lang::prelude::*;

use crate::constants::ENGINE_SEED;
use crate::state::EngineAccount;

/// Signed call against the engine state. Every gated operation resolves the
/// caller's role from `caller`.
#[derive(Accounts)]
pub struct EngineCall<'info> {
    #[account(
        mut,
        seeds = [ENGINE_SEED, engine.storage_name_hash.as_ref()],
        bump = engine.bump
    )]
    pub engine: Box<Account<'info, EngineAccount>>,

    pub caller: Signer<'info>,
}

/// Read-only access for quote and checkpoint instructions.
#[derive(Accounts)]
pub struct EngineView<'info> {
    #[account(
        seeds = [ENGINE_SEED, engine.storage_name_hash.as_ref()],
        bump = engine.bump
    )]
    pub engine: Box<Account<'info, EngineAccount>>,
}
