use anchor_lang::prelude::*;
use std::result::Result;

use super::{Outcome, TokenEngine};
use crate::error::EngineError;
use crate::events::{EngineEvent, Minted};
use crate::state::{BalanceEntry, Role};
use crate::utils::math;

impl TokenEngine {
    /// Adds `amount` to the reserve. Circulation is unchanged.
    pub fn mint(&mut self, caller: &Pubkey, amount: u64) -> Result<Outcome, EngineError> {
        let cap = self.gate(caller, Role::Admin)?;
        if amount == 0 {
            return Err(EngineError::InvalidAmount);
        }
        self.transact(|engine, events| {
            engine.ledger.mint(&cap, amount)?;
            events.push(EngineEvent::Minted(Minted {
                amount,
                total_minted: engine.ledger.total_minted(),
            }));
            Ok(())
        })
    }

    /// Admin grant straight from the reserve, bounded by the circulation cap.
    pub fn issue_tokens(
        &mut self,
        caller: &Pubkey,
        to: Pubkey,
        amount: u64,
    ) -> Result<Outcome, EngineError> {
        let cap = self.gate(caller, Role::Admin)?;
        if amount == 0 {
            return Err(EngineError::InvalidAmount);
        }
        self.ensure_user_accounts(&[to])?;
        self.transact(|engine, events| {
            let circulating = math::checked_add(engine.ledger.total_in_circulation(), amount)?;
            if circulating > engine.purchase.config.circulation_cap {
                return Err(EngineError::CirculationCapExceeded);
            }
            engine.ledger.issue(&cap, to, amount)?;
            events.push(EngineEvent::transfer(engine.ledger.reserve, to, amount));
            Ok(())
        })
    }

    /// Admin-forced move between two user accounts. Freeze flags do not apply.
    pub fn ledger_transfer(
        &mut self,
        caller: &Pubkey,
        from: Pubkey,
        to: Pubkey,
        amount: u64,
    ) -> Result<Outcome, EngineError> {
        let cap = self.gate(caller, Role::Admin)?;
        self.ensure_user_accounts(&[from, to])?;
        self.transact(|engine, events| {
            engine.ledger.transfer(&cap, from, to, amount)?;
            events.push(EngineEvent::transfer(from, to, amount));
            Ok(())
        })
    }

    pub fn balance_of(&self, account: &Pubkey) -> u64 {
        self.ledger.balance_of(account)
    }

    pub fn total_minted(&self) -> u64 {
        self.ledger.total_minted()
    }

    pub fn total_in_circulation(&self) -> u64 {
        self.ledger.total_in_circulation()
    }

    pub fn reserve_balance(&self) -> u64 {
        self.ledger.reserve_balance()
    }

    pub fn account_count(&self) -> usize {
        self.ledger.account_count()
    }

    pub fn account_at(&self, index: usize) -> Option<&BalanceEntry> {
        self.ledger.account_at(index)
    }
}
