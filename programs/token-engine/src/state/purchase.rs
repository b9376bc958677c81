use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::MAX_BUYERS;
use crate::error::EngineError;

/// Fixed-price sale parameters.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PurchaseConfig {
    /// Payment units per whole token.
    pub buy_price_per_unit: u64,
    /// Ceiling on total circulation.
    pub circulation_cap: u64,
    /// Max balance for buyers without a custom cap. Zero blocks them.
    pub default_balance_limit: u64,
    /// Minimum first purchase for a buyer holding nothing.
    pub contribution_minimum: u64,
}

impl PurchaseConfig {
    pub const SIZE: usize = 8 * 4;
}

/// Every field except the price; may change while the token trades.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PurchaseLimits {
    pub circulation_cap: u64,
    pub default_balance_limit: u64,
    pub contribution_minimum: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuyerEntry {
    pub buyer: Pubkey,
    pub whitelisted: bool,
    /// Zero means "no custom cap".
    pub custom_cap: u64,
}

impl BuyerEntry {
    pub const SIZE: usize = 32 + 1 + 8;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PurchaseState {
    pub config: PurchaseConfig,
    pub halted: bool,
    buyers: Vec<BuyerEntry>,
}

impl PurchaseState {
    pub const SIZE: usize = PurchaseConfig::SIZE + 1 + 4 + MAX_BUYERS * BuyerEntry::SIZE;

    fn entry(&self, buyer: &Pubkey) -> Option<&BuyerEntry> {
        self.buyers.iter().find(|b| b.buyer == *buyer)
    }

    fn entry_mut(&mut self, buyer: Pubkey) -> Result<&mut BuyerEntry, EngineError> {
        let idx = match self.buyers.iter().position(|b| b.buyer == buyer) {
            Some(idx) => idx,
            None => {
                if self.buyers.len() >= MAX_BUYERS {
                    return Err(EngineError::StorageFull);
                }
                self.buyers.push(BuyerEntry {
                    buyer,
                    whitelisted: false,
                    custom_cap: 0,
                });
                self.buyers.len() - 1
            }
        };
        Ok(&mut self.buyers[idx])
    }

    pub fn is_whitelisted(&self, buyer: &Pubkey) -> bool {
        self.entry(buyer).is_some_and(|b| b.whitelisted)
    }

    pub fn custom_cap(&self, buyer: &Pubkey) -> u64 {
        self.entry(buyer).map_or(0, |b| b.custom_cap)
    }

    /// Whitelisted, or holding a nonzero custom cap.
    pub fn is_eligible(&self, buyer: &Pubkey) -> bool {
        self.is_whitelisted(buyer) || self.custom_cap(buyer) > 0
    }

    /// Custom cap when nonzero, otherwise the default limit.
    pub fn effective_cap(&self, buyer: &Pubkey) -> u64 {
        match self.custom_cap(buyer) {
            0 => self.config.default_balance_limit,
            cap => cap,
        }
    }

    /// Whole tokens bought by `payment`; the remainder stays with the payer.
    pub fn token_amount(&self, payment: u64) -> Result<u64, EngineError> {
        match self.config.buy_price_per_unit {
            0 => Err(EngineError::InvalidConfig),
            price => Ok(payment / price),
        }
    }

    pub fn set_whitelisted(&mut self, buyer: Pubkey, whitelisted: bool) -> Result<(), EngineError> {
        if !whitelisted && self.entry(&buyer).is_none() {
            return Ok(());
        }
        self.entry_mut(buyer)?.whitelisted = whitelisted;
        Ok(())
    }

    pub fn set_custom_cap(&mut self, buyer: Pubkey, cap: u64) -> Result<(), EngineError> {
        if cap == 0 && self.entry(&buyer).is_none() {
            return Ok(());
        }
        self.entry_mut(buyer)?.custom_cap = cap;
        Ok(())
    }

    pub fn apply_limits(&mut self, limits: PurchaseLimits) {
        self.config.circulation_cap = limits.circulation_cap;
        self.config.default_balance_limit = limits.default_balance_limit;
        self.config.contribution_minimum = limits.contribution_minimum;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    #[test]
    fn zero_custom_cap_falls_back_to_default() {
        let mut state = PurchaseState::default();
        state.config.default_balance_limit = 10;
        state.set_whitelisted(key(1), true).unwrap();
        state.set_custom_cap(key(1), 0).unwrap();
        assert_eq!(state.effective_cap(&key(1)), 10);

        state.set_custom_cap(key(1), 40).unwrap();
        assert_eq!(state.effective_cap(&key(1)), 40);
    }

    #[test]
    fn custom_cap_alone_makes_buyer_eligible() {
        let mut state = PurchaseState::default();
        assert!(!state.is_eligible(&key(2)));
        state.set_custom_cap(key(2), 5).unwrap();
        assert!(state.is_eligible(&key(2)));
        assert!(!state.is_whitelisted(&key(2)));
    }

    #[test]
    fn token_amount_truncates() {
        let mut state = PurchaseState::default();
        assert!(matches!(state.token_amount(10), Err(EngineError::InvalidConfig)));
        state.config.buy_price_per_unit = 3;
        assert_eq!(state.token_amount(10).unwrap(), 3);
        assert_eq!(state.token_amount(2).unwrap(), 0);
    }
}
