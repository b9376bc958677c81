use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::MAX_ACCOUNTS;
use crate::error::EngineError;
use crate::state::AdminCapability;
use crate::utils::math::{checked_add, checked_sub};

/// Balance of one ledger account. Entries are appended on first touch and
/// their position is the account's enumeration index.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BalanceEntry {
    pub owner: Pubkey,
    pub amount: u64,
}

impl BalanceEntry {
    pub const SIZE: usize = 32 + 8;
}

/// Balance storage and supply aggregates.
///
/// Invariants checked by [`Ledger::check_conservation`]:
/// - the sum of all balances equals `total_minted`
/// - `total_in_circulation <= total_minted`
/// - the reserve account holds exactly `total_minted - total_in_circulation`
///
/// Naming follows the storage contract this ledger models: `debit` adds to
/// an account, `credit` takes from it.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    /// Holds minted, uncirculated supply.
    pub reserve: Pubkey,
    /// Holds granted but unreleased vesting tokens (already in circulation).
    pub vesting_escrow: Pubkey,
    total_minted: u64,
    total_in_circulation: u64,
    entries: Vec<BalanceEntry>,
}

impl Ledger {
    pub const SIZE: usize = 32 + 32 + 8 + 8 + 4 + MAX_ACCOUNTS * BalanceEntry::SIZE;

    pub fn new(reserve: Pubkey, vesting_escrow: Pubkey) -> Self {
        Self {
            reserve,
            vesting_escrow,
            ..Self::default()
        }
    }

    pub fn total_minted(&self) -> u64 {
        self.total_minted
    }

    pub fn total_in_circulation(&self) -> u64 {
        self.total_in_circulation
    }

    pub fn balance_of(&self, account: &Pubkey) -> u64 {
        self.entries
            .iter()
            .find(|e| e.owner == *account)
            .map_or(0, |e| e.amount)
    }

    pub fn reserve_balance(&self) -> u64 {
        self.balance_of(&self.reserve)
    }

    pub fn escrow_balance(&self) -> u64 {
        self.balance_of(&self.vesting_escrow)
    }

    pub fn is_engine_account(&self, account: &Pubkey) -> bool {
        *account == self.reserve || *account == self.vesting_escrow
    }

    pub fn account_count(&self) -> usize {
        self.entries.len()
    }

    pub fn account_at(&self, index: usize) -> Option<&BalanceEntry> {
        self.entries.get(index)
    }

    fn entry_mut(&mut self, account: Pubkey) -> Result<&mut BalanceEntry, EngineError> {
        let idx = match self.entries.iter().position(|e| e.owner == account) {
            Some(idx) => idx,
            None => {
                if self.entries.len() >= MAX_ACCOUNTS {
                    return Err(EngineError::StorageFull);
                }
                self.entries.push(BalanceEntry {
                    owner: account,
                    amount: 0,
                });
                self.entries.len() - 1
            }
        };
        Ok(&mut self.entries[idx])
    }

    /// Creates `amount` new tokens in the reserve. Circulation is unchanged.
    pub fn mint(&mut self, cap: &AdminCapability, amount: u64) -> Result<(), EngineError> {
        self.total_minted = checked_add(self.total_minted, amount)?;
        let reserve = self.reserve;
        self.debit(cap, reserve, amount)
    }

    /// Increases `account`'s balance.
    pub fn debit(
        &mut self,
        _cap: &AdminCapability,
        account: Pubkey,
        amount: u64,
    ) -> Result<(), EngineError> {
        let entry = self.entry_mut(account)?;
        entry.amount = checked_add(entry.amount, amount)?;
        Ok(())
    }

    /// Decreases `account`'s balance.
    pub fn credit(
        &mut self,
        _cap: &AdminCapability,
        account: Pubkey,
        amount: u64,
    ) -> Result<(), EngineError> {
        if self.balance_of(&account) < amount {
            return Err(EngineError::InsufficientBalance);
        }
        let entry = self.entry_mut(account)?;
        entry.amount = checked_sub(entry.amount, amount)?;
        Ok(())
    }

    pub fn transfer(
        &mut self,
        cap: &AdminCapability,
        from: Pubkey,
        to: Pubkey,
        amount: u64,
    ) -> Result<(), EngineError> {
        self.credit(cap, from, amount)?;
        self.debit(cap, to, amount)
    }

    /// Moves reserve tokens to `to`, bringing them into circulation.
    pub fn issue(
        &mut self,
        cap: &AdminCapability,
        to: Pubkey,
        amount: u64,
    ) -> Result<(), EngineError> {
        if amount > self.reserve_balance() {
            return Err(EngineError::InsufficientReserve);
        }
        let reserve = self.reserve;
        self.transfer(cap, reserve, to, amount)?;
        self.total_in_circulation = checked_add(self.total_in_circulation, amount)?;
        Ok(())
    }

    /// Issues `amount` into the vesting escrow.
    pub fn earmark(&mut self, cap: &AdminCapability, amount: u64) -> Result<(), EngineError> {
        let escrow = self.vesting_escrow;
        self.issue(cap, escrow, amount)
    }

    /// Pays earmarked tokens out to a beneficiary. Circulation is unchanged.
    pub fn settle(
        &mut self,
        cap: &AdminCapability,
        to: Pubkey,
        amount: u64,
    ) -> Result<(), EngineError> {
        let escrow = self.vesting_escrow;
        self.transfer(cap, escrow, to, amount)
    }

    /// Returns earmarked tokens to the reserve, taking them out of circulation.
    pub fn retire(&mut self, cap: &AdminCapability, amount: u64) -> Result<(), EngineError> {
        let (escrow, reserve) = (self.vesting_escrow, self.reserve);
        self.transfer(cap, escrow, reserve, amount)?;
        self.total_in_circulation = checked_sub(self.total_in_circulation, amount)
            .map_err(|_| EngineError::InvariantViolation)?;
        Ok(())
    }

    pub fn check_conservation(&self) -> Result<(), EngineError> {
        let sum: u128 = self.entries.iter().map(|e| e.amount as u128).sum();
        if sum != self.total_minted as u128 {
            return Err(EngineError::InvariantViolation);
        }
        let uncirculated = self
            .total_minted
            .checked_sub(self.total_in_circulation)
            .ok_or(EngineError::InvariantViolation)?;
        if self.reserve_balance() != uncirculated {
            return Err(EngineError::InvariantViolation);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Role, Roles};

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn setup() -> (Ledger, AdminCapability) {
        let roles = Roles::genesis(key(1)).unwrap();
        let cap = roles.authorize(&key(1), Role::Admin).unwrap();
        (Ledger::new(key(100), key(101)), cap)
    }

    #[test]
    fn mint_fills_reserve_without_circulating() {
        let (mut ledger, cap) = setup();
        ledger.mint(&cap, 100).unwrap();
        assert_eq!(ledger.total_minted(), 100);
        assert_eq!(ledger.total_in_circulation(), 0);
        assert_eq!(ledger.reserve_balance(), 100);
        ledger.check_conservation().unwrap();
    }

    #[test]
    fn credit_cannot_go_negative() {
        let (mut ledger, cap) = setup();
        ledger.debit(&cap, key(2), 5).unwrap();
        assert!(matches!(
            ledger.credit(&cap, key(2), 6),
            Err(EngineError::InsufficientBalance)
        ));
        assert!(matches!(
            ledger.transfer(&cap, key(3), key(2), 1),
            Err(EngineError::InsufficientBalance)
        ));
        assert_eq!(ledger.balance_of(&key(2)), 5);
    }

    #[test]
    fn first_touch_appends_once_in_order() {
        let (mut ledger, cap) = setup();
        ledger.mint(&cap, 50).unwrap();
        ledger.issue(&cap, key(7), 10).unwrap();
        ledger.issue(&cap, key(5), 10).unwrap();
        ledger.issue(&cap, key(7), 10).unwrap();

        let order: Vec<Pubkey> = (0..ledger.account_count())
            .map(|i| ledger.account_at(i).unwrap().owner)
            .collect();
        assert_eq!(order, vec![key(100), key(7), key(5)]);
    }

    #[test]
    fn earmark_settle_retire_keep_supply_consistent() {
        let (mut ledger, cap) = setup();
        ledger.mint(&cap, 100).unwrap();
        ledger.earmark(&cap, 40).unwrap();
        assert_eq!(ledger.total_in_circulation(), 40);
        assert_eq!(ledger.escrow_balance(), 40);

        ledger.settle(&cap, key(9), 15).unwrap();
        ledger.retire(&cap, 25).unwrap();
        assert_eq!(ledger.balance_of(&key(9)), 15);
        assert_eq!(ledger.total_in_circulation(), 15);
        assert_eq!(ledger.reserve_balance(), 85);
        ledger.check_conservation().unwrap();
    }

    #[test]
    fn issue_beyond_reserve_is_rejected() {
        let (mut ledger, cap) = setup();
        ledger.mint(&cap, 10).unwrap();
        assert!(matches!(
            ledger.issue(&cap, key(2), 11),
            Err(EngineError::InsufficientReserve)
        ));
    }

    #[test]
    fn unbalanced_debit_fails_conservation() {
        let (mut ledger, cap) = setup();
        ledger.mint(&cap, 10).unwrap();
        ledger.debit(&cap, key(2), 1).unwrap();
        assert!(matches!(
            ledger.check_conservation(),
            Err(EngineError::InvariantViolation)
        ));
    }
}
