use anchor_lang::prelude::*;
use std::result::Result;

use super::{Outcome, TokenEngine};
use crate::error::EngineError;
use crate::events::{AccountFreezeSet, EngineEvent, RoleGranted, RoleRevoked, TokenFreezeSet};
use crate::state::{IndexSlot, Role};

impl TokenEngine {
    pub fn add_admin(&mut self, caller: &Pubkey, account: Pubkey) -> Result<Outcome, EngineError> {
        self.grant_role(caller, Role::Admin, account)
    }

    pub fn remove_admin(
        &mut self,
        caller: &Pubkey,
        account: Pubkey,
    ) -> Result<Outcome, EngineError> {
        self.revoke_role(caller, Role::Admin, account)
    }

    pub fn add_super_admin(
        &mut self,
        caller: &Pubkey,
        account: Pubkey,
    ) -> Result<Outcome, EngineError> {
        self.grant_role(caller, Role::SuperAdmin, account)
    }

    pub fn remove_super_admin(
        &mut self,
        caller: &Pubkey,
        account: Pubkey,
    ) -> Result<Outcome, EngineError> {
        self.revoke_role(caller, Role::SuperAdmin, account)
    }

    fn grant_role(
        &mut self,
        caller: &Pubkey,
        role: Role,
        account: Pubkey,
    ) -> Result<Outcome, EngineError> {
        let cap = self.gate(caller, Role::SuperAdmin)?;
        self.transact(|engine, events| {
            if engine.roles.grant(&cap, role, account)? {
                events.push(EngineEvent::RoleGranted(RoleGranted {
                    role,
                    account,
                    granted_by: cap.holder(),
                }));
            }
            Ok(())
        })
    }

    fn revoke_role(
        &mut self,
        caller: &Pubkey,
        role: Role,
        account: Pubkey,
    ) -> Result<Outcome, EngineError> {
        let cap = self.gate(caller, Role::SuperAdmin)?;
        self.transact(|engine, events| {
            if engine.roles.revoke(&cap, role, &account)? {
                events.push(EngineEvent::RoleRevoked(RoleRevoked {
                    role,
                    account,
                    revoked_by: cap.holder(),
                }));
            }
            Ok(())
        })
    }

    pub fn freeze_account(
        &mut self,
        caller: &Pubkey,
        account: Pubkey,
        frozen: bool,
    ) -> Result<Outcome, EngineError> {
        self.gate(caller, Role::Admin)?;
        self.transact(|engine, events| {
            if engine.freeze.set_account(account, frozen)? {
                events.push(EngineEvent::AccountFreezeSet(AccountFreezeSet { account, frozen }));
            }
            Ok(())
        })
    }

    pub fn freeze_token(&mut self, caller: &Pubkey, frozen: bool) -> Result<Outcome, EngineError> {
        self.gate(caller, Role::Admin)?;
        self.transact(|engine, events| {
            if engine.freeze.set_token(frozen) {
                events.push(EngineEvent::TokenFreezeSet(TokenFreezeSet { frozen }));
            }
            Ok(())
        })
    }

    /// Fails unless `caller` is an active super admin.
    pub fn ensure_super_admin(&self, caller: &Pubkey) -> Result<(), EngineError> {
        self.gate(caller, Role::SuperAdmin).map(|_| ())
    }

    pub fn is_admin(&self, account: &Pubkey) -> bool {
        self.roles.is_admin(account)
    }

    pub fn is_super_admin(&self, account: &Pubkey) -> bool {
        self.roles.is_super_admin(account)
    }

    pub fn admin_count(&self) -> usize {
        self.roles.members(Role::Admin).len()
    }

    pub fn admin_at(&self, index: usize) -> Option<&IndexSlot> {
        self.roles.members(Role::Admin).get(index)
    }

    pub fn super_admin_count(&self) -> usize {
        self.roles.members(Role::SuperAdmin).len()
    }

    pub fn super_admin_at(&self, index: usize) -> Option<&IndexSlot> {
        self.roles.members(Role::SuperAdmin).get(index)
    }

    pub fn is_frozen(&self, account: &Pubkey) -> bool {
        self.freeze.is_frozen(account)
    }

    pub fn is_token_frozen(&self) -> bool {
        self.freeze.token_frozen()
    }

    pub fn frozen_account_count(&self) -> usize {
        self.freeze.accounts().len()
    }

    pub fn frozen_account_at(&self, index: usize) -> Option<&IndexSlot> {
        self.freeze.accounts().get(index)
    }
}
