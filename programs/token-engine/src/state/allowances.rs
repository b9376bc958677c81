use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::MAX_ALLOWANCES;
use crate::error::EngineError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllowanceEntry {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
}

impl AllowanceEntry {
    pub const SIZE: usize = 32 + 32 + 8;
}

/// Remaining spend per (owner, spender). Absent pairs read as zero; slots
/// whose amount dropped to zero are recycled for new pairs.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Allowances {
    entries: Vec<AllowanceEntry>,
}

impl Allowances {
    pub const SIZE: usize = 4 + MAX_ALLOWANCES * AllowanceEntry::SIZE;

    pub fn get(&self, owner: &Pubkey, spender: &Pubkey) -> u64 {
        self.entries
            .iter()
            .find(|e| e.owner == *owner && e.spender == *spender)
            .map_or(0, |e| e.amount)
    }

    pub fn set(&mut self, owner: Pubkey, spender: Pubkey, amount: u64) -> Result<(), EngineError> {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.owner == owner && e.spender == spender)
        {
            entry.amount = amount;
            return Ok(());
        }
        if amount == 0 {
            return Ok(());
        }
        let fresh = AllowanceEntry {
            owner,
            spender,
            amount,
        };
        if let Some(slot) = self.entries.iter_mut().find(|e| e.amount == 0) {
            *slot = fresh;
            return Ok(());
        }
        if self.entries.len() >= MAX_ALLOWANCES {
            return Err(EngineError::StorageFull);
        }
        self.entries.push(fresh);
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
    fn pairs_are_directional() {
        let mut allowances = Allowances::default();
        allowances.set(key(1), key(2), 30).unwrap();
        assert_eq!(allowances.get(&key(1), &key(2)), 30);
        assert_eq!(allowances.get(&key(2), &key(1)), 0);
    }

    #[test]
    fn zeroed_slots_are_recycled() {
        let mut allowances = Allowances::default();
        for n in 0..MAX_ALLOWANCES as u8 {
            allowances.set(key(1), key(n + 10), 1).unwrap();
        }
        assert!(matches!(
            allowances.set(key(2), key(3), 1),
            Err(EngineError::StorageFull)
        ));

        allowances.set(key(1), key(10), 0).unwrap();
        allowances.set(key(2), key(3), 7).unwrap();
        assert_eq!(allowances.get(&key(2), &key(3)), 7);
        assert_eq!(allowances.get(&key(1), &key(10)), 0);
    }
}
