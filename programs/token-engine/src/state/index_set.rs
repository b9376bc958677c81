use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::EngineError;

/// One slot of an append-only index.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexSlot {
    pub key: Pubkey,
    pub active: bool,
}

impl IndexSlot {
    pub const SIZE: usize = 32 + 1;
}

/// Enumerable address set. Slots are appended on first insert and never
/// removed or renumbered; removal only clears `active`, and re-inserting a
/// key reactivates its original slot.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexedSet {
    slots: Vec<IndexSlot>,
}

impl IndexedSet {
    /// Borsh space for `capacity` slots (vec header included).
    pub const fn space(capacity: usize) -> usize {
        4 + capacity * IndexSlot::SIZE
    }

    pub fn position(&self, key: &Pubkey) -> Option<usize> {
        self.slots.iter().position(|s| s.key == *key)
    }

    pub fn contains(&self, key: &Pubkey) -> bool {
        self.slots.iter().any(|s| s.key == *key && s.active)
    }

    /// Returns `true` when membership changed.
    pub fn insert(&mut self, key: Pubkey, capacity: usize) -> Result<bool, EngineError> {
        if let Some(idx) = self.position(&key) {
            let slot = &mut self.slots[idx];
            let changed = !slot.active;
            slot.active = true;
            return Ok(changed);
        }
        if self.slots.len() >= capacity {
            return Err(EngineError::StorageFull);
        }
        self.slots.push(IndexSlot { key, active: true });
        Ok(true)
    }

    /// Returns `true` when membership changed.
    pub fn remove(&mut self, key: &Pubkey) -> bool {
        match self.slots.iter_mut().find(|s| s.key == *key) {
            Some(slot) if slot.active => {
                slot.active = false;
                true
            }
            _ => false,
        }
    }

    /// Number of slots ever allocated (active or not).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&IndexSlot> {
        self.slots.get(index)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    #[test]
    fn insertion_order_is_stable() {
        let mut set = IndexedSet::default();
        assert!(set.insert(key(3), 8).unwrap());
        assert!(set.insert(key(1), 8).unwrap());
        assert!(set.insert(key(2), 8).unwrap());
        assert!(!set.insert(key(1), 8).unwrap());

        let order: Vec<Pubkey> = (0..set.len()).map(|i| set.get(i).unwrap().key).collect();
        assert_eq!(order, vec![key(3), key(1), key(2)]);
    }

    #[test]
    fn removal_keeps_slot_and_reinsert_reuses_it() {
        let mut set = IndexedSet::default();
        set.insert(key(1), 8).unwrap();
        set.insert(key(2), 8).unwrap();

        assert!(set.remove(&key(1)));
        assert!(!set.remove(&key(1)));
        assert!(!set.contains(&key(1)));
        assert_eq!(set.len(), 2);
        assert_eq!(set.active_count(), 1);
        assert_eq!(set.get(0), Some(&IndexSlot { key: key(1), active: false }));

        assert!(set.insert(key(1), 8).unwrap());
        assert_eq!(set.len(), 2);
        assert_eq!(set.position(&key(1)), Some(0));
    }

    #[test]
    fn capacity_is_enforced_on_new_slots_only() {
        let mut set = IndexedSet::default();
        set.insert(key(1), 1).unwrap();
        assert!(matches!(set.insert(key(2), 1), Err(EngineError::StorageFull)));
        set.remove(&key(1));
        assert!(set.insert(key(1), 1).unwrap());
    }
}
