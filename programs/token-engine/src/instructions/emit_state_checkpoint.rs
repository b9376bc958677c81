use anchor_lang::prelude::*;

use super::EngineView;

/// Logs the state fingerprint so it can be compared across a program upgrade.
pub fn emit_state_checkpoint(ctx: Context<EngineView>) -> Result<()> {
    let engine = &ctx.accounts.engine.engine;
    let fingerprint = engine.state_fingerprint()?;
    let snapshot = engine.supply_snapshot();

    msg!(
        "checkpoint: minted {} circulating {} accounts {}",
        snapshot.total_minted,
        snapshot.total_in_circulation,
        snapshot.account_count
    );
    emit!(StateCheckpoint {
        fingerprint,
        total_minted: snapshot.total_minted,
        total_in_circulation: snapshot.total_in_circulation,
        slot: Clock::get()?.slot,
    });
    Ok(())
}

#[event]
pub struct StateCheckpoint {
    pub fingerprint: [u8; 32],
    pub total_minted: u64,
    pub total_in_circulation: u64,
    pub slot: u64,
}
