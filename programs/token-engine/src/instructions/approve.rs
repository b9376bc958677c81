use anchor_lang::prelude::*;

use super::EngineCall;

pub fn approve(ctx: Context<EngineCall>, spender: Pubkey, amount: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .approve(&caller, spender, amount)?
        .emit_all();
    Ok(())
}

pub fn increase_approval(ctx: Context<EngineCall>, spender: Pubkey, added: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .increase_approval(&caller, spender, added)?
        .emit_all();
    Ok(())
}

pub fn decrease_approval(ctx: Context<EngineCall>, spender: Pubkey, subtracted: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .decrease_approval(&caller, spender, subtracted)?
        .emit_all();
    Ok(())
}
