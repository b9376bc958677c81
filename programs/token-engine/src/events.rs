//! Events produced by engine operations.
//!
//! Operations return their events in order inside an [`crate::engine::Outcome`];
//! instruction handlers log them with `emit!` only after the call succeeded.

use anchor_lang::prelude::*;

use crate::state::Role;

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineInitialized {
    pub owner: Pubkey,
    pub reserve: Pubkey,
    pub vesting_escrow: Pubkey,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleGranted {
    pub role: Role,
    pub account: Pubkey,
    pub granted_by: Pubkey,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleRevoked {
    pub role: Role,
    pub account: Pubkey,
    pub revoked_by: Pubkey,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountFreezeSet {
    pub account: Pubkey,
    pub frozen: bool,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenFreezeSet {
    pub frozen: bool,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Minted {
    pub amount: u64,
    pub total_minted: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

/// Carries the resulting absolute allowance, not the delta.
#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Approval {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchaseConfigured {
    pub buy_price_per_unit: u64,
    pub circulation_cap: u64,
    pub default_balance_limit: u64,
    pub contribution_minimum: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchaseHaltSet {
    pub halted: bool,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuyerWhitelistSet {
    pub buyer: Pubkey,
    pub whitelisted: bool,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuyerCapSet {
    pub buyer: Pubkey,
    pub cap: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VestingGranted {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub start_time: i64,
    pub cliff_time: i64,
    pub vesting_duration: u64,
    pub revocable: bool,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VestedTokensReleased {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub released_total: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VestingRevoked {
    pub beneficiary: Pubkey,
    pub revoke_time: i64,
    /// Unreleased amount taken back out of circulation.
    pub returned: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    EngineInitialized(EngineInitialized),
    RoleGranted(RoleGranted),
    RoleRevoked(RoleRevoked),
    AccountFreezeSet(AccountFreezeSet),
    TokenFreezeSet(TokenFreezeSet),
    Minted(Minted),
    Transfer(Transfer),
    Approval(Approval),
    PurchaseConfigured(PurchaseConfigured),
    PurchaseHaltSet(PurchaseHaltSet),
    BuyerWhitelistSet(BuyerWhitelistSet),
    BuyerCapSet(BuyerCapSet),
    VestingGranted(VestingGranted),
    VestedTokensReleased(VestedTokensReleased),
    VestingRevoked(VestingRevoked),
}

impl EngineEvent {
    pub fn transfer(from: Pubkey, to: Pubkey, amount: u64) -> Self {
        Self::Transfer(Transfer { from, to, amount })
    }

    pub fn approval(owner: Pubkey, spender: Pubkey, amount: u64) -> Self {
        Self::Approval(Approval {
            owner,
            spender,
            amount,
        })
    }

    /// Logs the event through the program log.
    pub fn emit(&self) {
        match self {
            Self::EngineInitialized(e) => {
                emit!(e.clone());
            }
            Self::RoleGranted(e) => {
                emit!(e.clone());
            }
            Self::RoleRevoked(e) => {
                emit!(e.clone());
            }
            Self::AccountFreezeSet(e) => {
                emit!(e.clone());
            }
            Self::TokenFreezeSet(e) => {
                emit!(e.clone());
            }
            Self::Minted(e) => {
                emit!(e.clone());
            }
            Self::Transfer(e) => {
                emit!(e.clone());
            }
            Self::Approval(e) => {
                emit!(e.clone());
            }
            Self::PurchaseConfigured(e) => {
                emit!(e.clone());
            }
            Self::PurchaseHaltSet(e) => {
                emit!(e.clone());
            }
            Self::BuyerWhitelistSet(e) => {
                emit!(e.clone());
            }
            Self::BuyerCapSet(e) => {
                emit!(e.clone());
            }
            Self::VestingGranted(e) => {
                emit!(e.clone());
            }
            Self::VestedTokensReleased(e) => {
                emit!(e.clone());
            }
            Self::VestingRevoked(e) => {
                emit!(e.clone());
            }
        }
    }
}
