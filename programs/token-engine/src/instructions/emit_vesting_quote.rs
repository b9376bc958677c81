use anchor_lang::prelude::*;

use super::EngineView;

pub fn emit_vesting_quote(ctx: Context<EngineView>, beneficiary: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let position = ctx
        .accounts
        .engine
        .engine
        .vesting_position(&beneficiary, now)?;

    emit!(VestingQuote {
        beneficiary,
        quoted_at: now,
        vested_amount: position.vested,
        released_amount: position.released,
        releasable: position.releasable,
    });

    Ok(())
}

#[event]
pub struct VestingQuote {
    pub beneficiary: Pubkey,
    pub quoted_at: i64,
    pub vested_amount: u64,
    pub released_amount: u64,
    pub releasable: u64,
}
