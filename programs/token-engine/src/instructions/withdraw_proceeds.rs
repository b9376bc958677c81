use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{ENGINE_SEED, PROCEEDS_SEED};
use crate::error::EngineError;
use crate::state::EngineAccount;

/// Super admin only. Moves collected purchase payments out of the vault.
pub fn withdraw_proceeds(ctx: Context<WithdrawProceeds>, amount: u64) -> Result<()> {
    require!(amount > 0, EngineError::InvalidAmount);

    let engine = &ctx.accounts.engine;
    let admin = ctx.accounts.admin.key();
    engine.engine.ensure_super_admin(&admin)?;
    require!(
        ctx.accounts.proceeds_vault.amount >= amount,
        EngineError::InsufficientProceeds
    );

    let bump = [engine.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[ENGINE_SEED, engine.storage_name_hash.as_ref(), &bump]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.proceeds_vault.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: engine.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    msg!("{} withdrew {} in proceeds", admin, amount);
    emit!(ProceedsWithdrawn {
        admin,
        destination: ctx.accounts.destination.key(),
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawProceeds<'info> {
    #[account(
        seeds = [ENGINE_SEED, engine.storage_name_hash.as_ref()],
        bump = engine.bump
    )]
    pub engine: Box<Account<'info, EngineAccount>>,

    #[account(
        mut,
        seeds = [PROCEEDS_SEED, engine.key().as_ref()],
        bump,
        constraint = proceeds_vault.mint == engine.payment_mint @ EngineError::InvalidPaymentMint,
    )]
    pub proceeds_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = destination.mint == engine.payment_mint @ EngineError::InvalidPaymentMint,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ProceedsWithdrawn {
    pub admin: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}
