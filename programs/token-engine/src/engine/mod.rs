//! The token engine: ledger, roles, accounting, purchases and vesting behind
//! one transactional entry surface.
//!
//! Every public mutating operation runs through [`TokenEngine::transact`]:
//! it executes against a draft copy, the ledger's conservation check runs on
//! the draft, and only then is the draft committed. A failing call leaves no
//! state change and yields no events.

pub mod access;
pub mod accounting;
pub mod fingerprint;
pub mod ledger_ops;
pub mod purchase;
pub mod vesting;

pub use fingerprint::*;
pub use purchase::Purchase;
pub use vesting::{GrantParams, VestingPosition};

use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::EngineError;
use crate::events::{EngineEvent, EngineInitialized};
use crate::state::{
    AdminCapability, Allowances, FreezeState, Ledger, PurchaseState, Role, Roles, VestingBook,
};

/// Result of a successful call: its value plus the events it produced, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome<T = ()> {
    pub value: T,
    pub events: Vec<EngineEvent>,
}

impl<T> Outcome<T> {
    pub fn emit_all(&self) {
        for event in &self.events {
            event.emit();
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenEngine {
    pub initialized: bool,
    pub ledger: Ledger,
    pub roles: Roles,
    pub allowances: Allowances,
    pub freeze: FreezeState,
    pub purchase: PurchaseState,
    pub vesting: VestingBook,
}

impl TokenEngine {
    pub const SIZE: usize = 1
        + Ledger::SIZE
        + Roles::SIZE
        + Allowances::SIZE
        + FreezeState::SIZE
        + PurchaseState::SIZE
        + VestingBook::SIZE;

    /// One-shot setup. `owner` becomes the first super admin and the token
    /// starts frozen.
    pub fn initialize(
        &mut self,
        owner: Pubkey,
        reserve: Pubkey,
        vesting_escrow: Pubkey,
    ) -> Result<Outcome, EngineError> {
        if self.initialized {
            return Err(EngineError::AlreadyInitialized);
        }
        if reserve == vesting_escrow || owner == reserve || owner == vesting_escrow {
            return Err(EngineError::InvalidConfig);
        }
        *self = Self {
            initialized: true,
            ledger: Ledger::new(reserve, vesting_escrow),
            roles: Roles::genesis(owner)?,
            freeze: FreezeState::genesis(),
            ..Self::default()
        };
        Ok(Outcome {
            value: (),
            events: vec![EngineEvent::EngineInitialized(EngineInitialized {
                owner,
                reserve,
                vesting_escrow,
            })],
        })
    }

    /// Runs `op` against a draft and commits only if it succeeds and the
    /// ledger still conserves supply.
    pub(crate) fn transact<T>(
        &mut self,
        op: impl FnOnce(&mut TokenEngine, &mut Vec<EngineEvent>) -> Result<T, EngineError>,
    ) -> Result<Outcome<T>, EngineError> {
        if !self.initialized {
            return Err(EngineError::NotInitialized);
        }
        let mut draft = self.clone();
        let mut events = Vec::new();
        let value = op(&mut draft, &mut events)?;
        draft.ledger.check_conservation()?;
        *self = draft;
        Ok(Outcome { value, events })
    }

    /// Role gate shared by every privileged entry point.
    pub fn gate(&self, caller: &Pubkey, role: Role) -> Result<AdminCapability, EngineError> {
        if !self.initialized {
            return Err(EngineError::NotInitialized);
        }
        self.roles.authorize(caller, role)
    }

    /// Authority the engine uses for its own ledger bookkeeping.
    pub(crate) fn engine_authority(&self) -> AdminCapability {
        AdminCapability::engine(self.ledger.reserve)
    }

    /// Rejects the reserve and vesting escrow as user-facing parties.
    pub(crate) fn ensure_user_accounts(&self, parties: &[Pubkey]) -> Result<(), EngineError> {
        if parties.iter().any(|p| self.ledger.is_engine_account(p)) {
            return Err(EngineError::ReservedAccount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    #[test]
    fn second_initialize_fails() {
        let mut engine = TokenEngine::default();
        let outcome = engine.initialize(key(1), key(2), key(3)).unwrap();
        assert_eq!(outcome.events.len(), 1);
        assert!(engine.freeze.token_frozen());
        assert!(engine.roles.is_super_admin(&key(1)));

        assert!(matches!(
            engine.initialize(key(4), key(5), key(6)),
            Err(EngineError::AlreadyInitialized)
        ));
        assert!(engine.roles.is_super_admin(&key(1)));
        assert!(!engine.roles.is_super_admin(&key(4)));
    }

    #[test]
    fn operations_require_initialization() {
        let mut engine = TokenEngine::default();
        assert!(matches!(
            engine.mint(&key(1), 10),
            Err(EngineError::NotInitialized)
        ));
        assert!(matches!(
            engine.transfer(&key(1), key(2), 0),
            Err(EngineError::NotInitialized)
        ));
    }

    #[test]
    fn failed_call_leaves_state_untouched() {
        let mut engine = TokenEngine::default();
        engine.initialize(key(1), key(2), key(3)).unwrap();
        engine.mint(&key(1), 100).unwrap();
        let before = engine.clone();

        // Issues 60 to one account and then fails on the second leg.
        let result = engine.transact(|draft, events| {
            let cap = draft.engine_authority();
            draft.ledger.issue(&cap, key(7), 60)?;
            events.push(EngineEvent::transfer(key(2), key(7), 60));
            draft.ledger.issue(&cap, key(8), 60)
        });
        assert!(matches!(result, Err(EngineError::InsufficientReserve)));
        assert_eq!(engine, before);
    }

    #[test]
    fn commit_rejects_unbalanced_ledger() {
        let mut engine = TokenEngine::default();
        engine.initialize(key(1), key(2), key(3)).unwrap();
        let result = engine.transact(|draft, _| {
            let cap = draft.engine_authority();
            draft.ledger.debit(&cap, key(9), 5)
        });
        assert!(matches!(result, Err(EngineError::InvariantViolation)));
        assert_eq!(engine.ledger.balance_of(&key(9)), 0);
    }
}
