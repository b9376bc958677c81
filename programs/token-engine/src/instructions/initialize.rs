use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{ENGINE_SEED, PROCEEDS_SEED, RESERVE_SEED, VESTING_ESCROW_SEED};
use crate::error::EngineError;
use crate::registry;
use crate::state::EngineAccount;

pub fn initialize(
    ctx: Context<Initialize>,
    storage_name: String,
    storage_name_hash: [u8; 32],
) -> Result<()> {
    let engine_key = ctx.accounts.engine.key();
    let (expected, _) = registry::storage_address(&storage_name, &crate::ID)?;
    require_keys_eq!(engine_key, expected, EngineError::InvalidConfig);
    let (reserve, _) =
        Pubkey::find_program_address(&[RESERVE_SEED, engine_key.as_ref()], &crate::ID);
    let (vesting_escrow, _) =
        Pubkey::find_program_address(&[VESTING_ESCROW_SEED, engine_key.as_ref()], &crate::ID);

    let owner = ctx.accounts.owner.key();
    let account = &mut ctx.accounts.engine;
    account.bump = ctx.bumps.engine;
    account.storage_name_hash = storage_name_hash;
    account.payment_mint = ctx.accounts.payment_mint.key();
    let outcome = account.engine.initialize(owner, reserve, vesting_escrow)?;

    msg!(
        "engine '{}' initialized at {} (owner {})",
        storage_name,
        engine_key,
        owner
    );
    outcome.emit_all();
    Ok(())
}

#[derive(Accounts)]
#[instruction(storage_name: String, storage_name_hash: [u8; 32])]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = EngineAccount::space(),
        seeds = [ENGINE_SEED, storage_name_hash.as_ref()],
        bump
    )]
    pub engine: Box<Account<'info, EngineAccount>>,

    #[account(
        init,
        payer = owner,
        token::mint = payment_mint,
        token::authority = engine,
        seeds = [PROCEEDS_SEED, engine.key().as_ref()],
        bump
    )]
    pub proceeds_vault: Account<'info, TokenAccount>,

    pub payment_mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
