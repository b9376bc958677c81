use anchor_lang::prelude::*;

use super::EngineCall;
use crate::engine::GrantParams;

pub fn grant_vested_tokens(ctx: Context<EngineCall>, params: GrantParams) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .grant_vested_tokens(&caller, params, now)?
        .emit_all();
    Ok(())
}
