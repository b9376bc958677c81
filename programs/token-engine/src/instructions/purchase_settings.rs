use anchor_lang::prelude::*;

use super::EngineCall;
use crate::state::{PurchaseConfig, PurchaseLimits};

pub fn configure_purchase(ctx: Context<EngineCall>, config: PurchaseConfig) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .configure_purchase(&caller, config)?
        .emit_all();
    Ok(())
}

pub fn override_purchase_limits(ctx: Context<EngineCall>, limits: PurchaseLimits) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .override_purchase_limits(&caller, limits)?
        .emit_all();
    Ok(())
}

pub fn set_purchase_halted(ctx: Context<EngineCall>, halted: bool) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .set_purchase_halted(&caller, halted)?
        .emit_all();
    Ok(())
}

pub fn set_buyer_whitelisted(
    ctx: Context<EngineCall>,
    buyer: Pubkey,
    whitelisted: bool,
) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .set_buyer_whitelisted(&caller, buyer, whitelisted)?
        .emit_all();
    Ok(())
}

pub fn set_custom_buyer_cap(ctx: Context<EngineCall>, buyer: Pubkey, cap: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .engine
        .engine
        .set_custom_buyer_cap(&caller, buyer, cap)?
        .emit_all();
    Ok(())
}
