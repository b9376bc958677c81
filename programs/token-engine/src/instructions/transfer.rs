use anchor_lang::prelude::*;

use super::EngineCall;

pub fn transfer(ctx: Context<EngineCall>, to: Pubkey, amount: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .transfer(&caller, to, amount)?
        .emit_all();
    Ok(())
}

/// `caller` spends its allowance from `owner`.
pub fn transfer_from(
    ctx: Context<EngineCall>,
    owner: Pubkey,
    to: Pubkey,
    amount: u64,
) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .transfer_from(&caller, owner, to, amount)?
        .emit_all();
    Ok(())
}
