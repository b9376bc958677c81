//! ERC20-style transfers and allowances on top of the ledger.

use anchor_lang::prelude::*;
use std::result::Result;

use super::{Outcome, TokenEngine};
use crate::error::EngineError;
use crate::events::EngineEvent;
use crate::utils::math;

impl TokenEngine {
    pub fn transfer(
        &mut self,
        caller: &Pubkey,
        to: Pubkey,
        amount: u64,
    ) -> Result<Outcome, EngineError> {
        let from = *caller;
        self.transact(|engine, events| {
            engine.freeze.ensure_not_frozen(&[from, to])?;
            engine.ensure_user_accounts(&[from, to])?;
            let cap = engine.engine_authority();
            engine.ledger.transfer(&cap, from, to, amount)?;
            events.push(EngineEvent::transfer(from, to, amount));
            Ok(())
        })
    }

    /// Sets the allowance. Moving a nonzero allowance to another nonzero
    /// value requires going through zero first.
    pub fn approve(
        &mut self,
        caller: &Pubkey,
        spender: Pubkey,
        amount: u64,
    ) -> Result<Outcome, EngineError> {
        let owner = *caller;
        self.transact(|engine, events| {
            engine.ensure_can_approve(owner, spender)?;
            if amount != 0 && engine.allowances.get(&owner, &spender) != 0 {
                return Err(EngineError::AllowanceNotZero);
            }
            engine.allowances.set(owner, spender, amount)?;
            events.push(EngineEvent::approval(owner, spender, amount));
            Ok(())
        })
    }

    pub fn increase_approval(
        &mut self,
        caller: &Pubkey,
        spender: Pubkey,
        added: u64,
    ) -> Result<Outcome, EngineError> {
        let owner = *caller;
        self.transact(|engine, events| {
            engine.ensure_can_approve(owner, spender)?;
            let amount = math::checked_add(engine.allowances.get(&owner, &spender), added)?;
            engine.allowances.set(owner, spender, amount)?;
            events.push(EngineEvent::approval(owner, spender, amount));
            Ok(())
        })
    }

    /// Floors at zero instead of underflowing.
    pub fn decrease_approval(
        &mut self,
        caller: &Pubkey,
        spender: Pubkey,
        subtracted: u64,
    ) -> Result<Outcome, EngineError> {
        let owner = *caller;
        self.transact(|engine, events| {
            engine.ensure_can_approve(owner, spender)?;
            let amount = engine
                .allowances
                .get(&owner, &spender)
                .saturating_sub(subtracted);
            engine.allowances.set(owner, spender, amount)?;
            events.push(EngineEvent::approval(owner, spender, amount));
            Ok(())
        })
    }

    /// Spends `caller`'s allowance from `owner` to move tokens to `to`.
    pub fn transfer_from(
        &mut self,
        caller: &Pubkey,
        owner: Pubkey,
        to: Pubkey,
        amount: u64,
    ) -> Result<Outcome, EngineError> {
        let spender = *caller;
        self.transact(|engine, events| {
            engine.freeze.ensure_not_frozen(&[owner, spender, to])?;
            engine.ensure_user_accounts(&[owner, to])?;
            let allowance = engine.allowances.get(&owner, &spender);
            if amount > allowance {
                return Err(EngineError::InsufficientAllowance);
            }
            if amount > engine.ledger.balance_of(&owner) {
                return Err(EngineError::InsufficientBalance);
            }
            engine.allowances.set(owner, spender, allowance - amount)?;
            let cap = engine.engine_authority();
            engine.ledger.transfer(&cap, owner, to, amount)?;
            events.push(EngineEvent::transfer(owner, to, amount));
            Ok(())
        })
    }

    pub fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u64 {
        self.allowances.get(owner, spender)
    }

    fn ensure_can_approve(&self, owner: Pubkey, spender: Pubkey) -> Result<(), EngineError> {
        self.freeze.ensure_not_frozen(&[owner, spender])?;
        self.ensure_user_accounts(&[owner, spender])?;
        if owner == spender {
            return Err(EngineError::SelfApproval);
        }
        Ok(())
    }
}
