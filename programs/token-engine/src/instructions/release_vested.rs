use anchor_lang::prelude::*;

use super::EngineCall;

pub fn release_vested_tokens(ctx: Context<EngineCall>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.caller.key();
    let outcome = ctx
        .accounts
        .engine
        .engine
        .release_vested_tokens(&caller, now)?;
    if outcome.value == 0 {
        msg!("nothing releasable for {}", caller);
    }
    outcome.emit_all();
    Ok(())
}

/// Permissionless: anyone may push a beneficiary's vested tokens to them.
pub fn release_vested_tokens_for_beneficiary(
    ctx: Context<EngineCall>,
    beneficiary: Pubkey,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let outcome = ctx
        .accounts
        .engine
        .engine
        .release_vested_tokens_for_beneficiary(beneficiary, now)?;
    if outcome.value == 0 {
        msg!("nothing releasable for {}", beneficiary);
    }
    outcome.emit_all();
    Ok(())
}
