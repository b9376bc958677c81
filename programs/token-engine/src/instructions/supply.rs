use anchor_lang::prelude::*;

use super::EngineCall;

pub fn mint(ctx: Context<EngineCall>, amount: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts.engine.engine.mint(&caller, amount)?.emit_all();
    Ok(())
}

pub fn issue_tokens(ctx: Context<EngineCall>, to: Pubkey, amount: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .issue_tokens(&caller, to, amount)?
        .emit_all();
    Ok(())
}

pub fn ledger_transfer(
    ctx: Context<EngineCall>,
    from: Pubkey,
    to: Pubkey,
    amount: u64,
) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .ledger_transfer(&caller, from, to, amount)?
        .emit_all();
    Ok(())
}
