use anchor_lang::prelude::*;

use super::EngineCall;

pub fn revoke_vesting(ctx: Context<EngineCall>, beneficiary: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.caller.key();
    let outcome = ctx
        .accounts
        .engine
        .engine
        .revoke_vesting(&caller, beneficiary, now)?;
    msg!(
        "vesting for {} revoked, {} returned to reserve",
        beneficiary,
        outcome.value
    );
    outcome.emit_all();
    Ok(())
}
