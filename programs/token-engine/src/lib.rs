use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
pub mod error;
pub mod events;
pub mod instructions;
pub mod registry;
pub mod state;
pub mod utils;

pub use instructions::*;

use crate::engine::GrantParams;
use crate::state::{PurchaseConfig, PurchaseLimits};

declare_id!("5oAsGqLXXT8EYsHweXtKaJDQVHwEJJWVkoHLmFZxUECm");

#[program]
pub mod token_engine {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        storage_name: String,
        storage_name_hash: [u8; 32],
    ) -> Result<()> {
        instructions::initialize(ctx, storage_name, storage_name_hash)
    }

    pub fn add_admin(ctx: Context<EngineCall>, account: Pubkey) -> Result<()> {
        instructions::add_admin(ctx, account)
    }

    pub fn remove_admin(ctx: Context<EngineCall>, account: Pubkey) -> Result<()> {
        instructions::remove_admin(ctx, account)
    }

    pub fn add_super_admin(ctx: Context<EngineCall>, account: Pubkey) -> Result<()> {
        instructions::add_super_admin(ctx, account)
    }

    pub fn remove_super_admin(ctx: Context<EngineCall>, account: Pubkey) -> Result<()> {
        instructions::remove_super_admin(ctx, account)
    }

    pub fn freeze_account(ctx: Context<EngineCall>, account: Pubkey, frozen: bool) -> Result<()> {
        instructions::freeze_account(ctx, account, frozen)
    }

    pub fn freeze_token(ctx: Context<EngineCall>, frozen: bool) -> Result<()> {
        instructions::freeze_token(ctx, frozen)
    }

    pub fn mint(ctx: Context<EngineCall>, amount: u64) -> Result<()> {
        instructions::mint(ctx, amount)
    }

    pub fn issue_tokens(ctx: Context<EngineCall>, to: Pubkey, amount: u64) -> Result<()> {
        instructions::issue_tokens(ctx, to, amount)
    }

    pub fn ledger_transfer(
        ctx: Context<EngineCall>,
        from: Pubkey,
        to: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::ledger_transfer(ctx, from, to, amount)
    }

    pub fn transfer(ctx: Context<EngineCall>, to: Pubkey, amount: u64) -> Result<()> {
        instructions::transfer(ctx, to, amount)
    }

    pub fn transfer_from(
        ctx: Context<EngineCall>,
        owner: Pubkey,
        to: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::transfer_from(ctx, owner, to, amount)
    }

    pub fn approve(ctx: Context<EngineCall>, spender: Pubkey, amount: u64) -> Result<()> {
        instructions::approve(ctx, spender, amount)
    }

    pub fn increase_approval(ctx: Context<EngineCall>, spender: Pubkey, added: u64) -> Result<()> {
        instructions::increase_approval(ctx, spender, added)
    }

    pub fn decrease_approval(
        ctx: Context<EngineCall>,
        spender: Pubkey,
        subtracted: u64,
    ) -> Result<()> {
        instructions::decrease_approval(ctx, spender, subtracted)
    }

    pub fn buy(ctx: Context<Buy>, payment: u64) -> Result<()> {
        instructions::buy(ctx, payment)
    }

    pub fn configure_purchase(ctx: Context<EngineCall>, config: PurchaseConfig) -> Result<()> {
        instructions::configure_purchase(ctx, config)
    }

    pub fn override_purchase_limits(
        ctx: Context<EngineCall>,
        limits: PurchaseLimits,
    ) -> Result<()> {
        instructions::override_purchase_limits(ctx, limits)
    }

    pub fn set_purchase_halted(ctx: Context<EngineCall>, halted: bool) -> Result<()> {
        instructions::set_purchase_halted(ctx, halted)
    }

    pub fn set_buyer_whitelisted(
        ctx: Context<EngineCall>,
        buyer: Pubkey,
        whitelisted: bool,
    ) -> Result<()> {
        instructions::set_buyer_whitelisted(ctx, buyer, whitelisted)
    }

    pub fn set_custom_buyer_cap(ctx: Context<EngineCall>, buyer: Pubkey, cap: u64) -> Result<()> {
        instructions::set_custom_buyer_cap(ctx, buyer, cap)
    }

    pub fn withdraw_proceeds(ctx: Context<WithdrawProceeds>, amount: u64) -> Result<()> {
        instructions::withdraw_proceeds(ctx, amount)
    }

    pub fn grant_vested_tokens(ctx: Context<EngineCall>, params: GrantParams) -> Result<()> {
        instructions::grant_vested_tokens(ctx, params)
    }

    pub fn release_vested_tokens(ctx: Context<EngineCall>) -> Result<()> {
        instructions::release_vested_tokens(ctx)
    }

    pub fn release_vested_tokens_for_beneficiary(
        ctx: Context<EngineCall>,
        beneficiary: Pubkey,
    ) -> Result<()> {
        instructions::release_vested_tokens_for_beneficiary(ctx, beneficiary)
    }

    pub fn revoke_vesting(ctx: Context<EngineCall>, beneficiary: Pubkey) -> Result<()> {
        instructions::revoke_vesting(ctx, beneficiary)
    }

    pub fn emit_vesting_quote(ctx: Context<EngineView>, beneficiary: Pubkey) -> Result<()> {
        instructions::emit_vesting_quote(ctx, beneficiary)
    }

    pub fn emit_state_checkpoint(ctx: Context<EngineView>) -> Result<()> {
        instructions::emit_state_checkpoint(ctx)
    }
}
