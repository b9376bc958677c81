use anchor_lang::prelude::*;

use super::EngineCall;

pub fn add_admin(ctx: Context<EngineCall>, account: Pubkey) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .add_admin(&caller, account)?
        .emit_all();
    Ok(())
}

pub fn remove_admin(ctx: Context<EngineCall>, account: Pubkey) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .remove_admin(&caller, account)?
        .emit_all();
    Ok(())
}

pub fn add_super_admin(ctx: Context<EngineCall>, account: Pubkey) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .add_super_admin(&caller, account)?
        .emit_all();
    Ok(())
}

pub fn remove_super_admin(ctx: Context<EngineCall>, account: Pubkey) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .remove_super_admin(&caller, account)?
        .emit_all();
    Ok(())
}
