use anchor_lang::prelude::*;

use super::EngineCall;

pub fn freeze_account(ctx: Context<EngineCall>, account: Pubkey, frozen: bool) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .freeze_account(&caller, account, frozen)?
        .emit_all();
    Ok(())
}

/// Also locks and unlocks the purchase configuration.
pub fn freeze_token(ctx: Context<EngineCall>, frozen: bool) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .freeze_token(&caller, frozen)?
        .emit_all();
    Ok(())
}
