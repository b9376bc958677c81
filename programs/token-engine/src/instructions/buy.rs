use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{ENGINE_SEED, PROCEEDS_SEED};
use crate::engine::Purchase;
use crate::error::EngineError;
use crate::state::EngineAccount;

/// Buys tokens from the reserve with `payment` units of the payment mint.
/// Only `token_amount * price` is charged; the remainder stays with the buyer.
pub fn buy(ctx: Context<Buy>, payment: u64) -> Result<()> {
    let buyer = ctx.accounts.buyer.key();
    let outcome = ctx.accounts.engine.engine.buy(&buyer, payment)?;
    let Purchase { token_amount, cost } = outcome.value;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.buyer_payment_account.to_account_info(),
                to: ctx.accounts.proceeds_vault.to_account_info(),
                authority: ctx.accounts.buyer.to_account_info(),
            },
        ),
        cost,
    )?;

    msg!("{} bought {} tokens for {}", buyer, token_amount, cost);
    outcome.emit_all();
    Ok(())
}

#[derive(Accounts)]
pub struct Buy<'info> {
    #[account(
        mut,
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
        constraint = buyer_payment_account.mint == engine.payment_mint
            @ EngineError::InvalidPaymentMint,
        constraint = buyer_payment_account.owner == buyer.key() @ EngineError::InvalidTokenAccount,
    )]
    pub buyer_payment_account: Account<'info, TokenAccount>,

    pub buyer: Signer<'info>,

    pub token_program: Program<'info, Token>,
}
