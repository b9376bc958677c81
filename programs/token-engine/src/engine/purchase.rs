//! Fixed-price buy flow and its configuration.

use anchor_lang::prelude::*;
use std::result::Result;

use super::{Outcome, TokenEngine};
use crate::error::EngineError;
use crate::events::{
    BuyerCapSet, BuyerWhitelistSet, EngineEvent, PurchaseConfigured, PurchaseHaltSet,
};
use crate::state::{PurchaseConfig, PurchaseLimits, Role};
use crate::utils::math;

/// What a successful buy settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Purchase {
    pub token_amount: u64,
    /// `token_amount * price`; the truncated remainder of the payment is
    /// never charged.
    pub cost: u64,
}

impl TokenEngine {
    pub fn buy(&mut self, caller: &Pubkey, payment: u64) -> Result<Outcome<Purchase>, EngineError> {
        let buyer = *caller;
        self.transact(|engine, events| {
            let purchase = &engine.purchase;
            if purchase.halted {
                return Err(EngineError::PurchaseHalted);
            }
            if !purchase.is_eligible(&buyer) {
                return Err(EngineError::NotWhitelisted);
            }
            engine.freeze.ensure_not_frozen(&[buyer])?;
            engine.ensure_user_accounts(&[buyer])?;

            let token_amount = purchase.token_amount(payment)?;
            if token_amount == 0 {
                return Err(EngineError::InvalidAmount);
            }
            if token_amount > engine.ledger.reserve_balance() {
                return Err(EngineError::InsufficientReserve);
            }
            let circulating =
                math::checked_add(engine.ledger.total_in_circulation(), token_amount)?;
            if circulating > purchase.config.circulation_cap {
                return Err(EngineError::CirculationCapExceeded);
            }
            let held = engine.ledger.balance_of(&buyer);
            if math::checked_add(held, token_amount)? > purchase.effective_cap(&buyer) {
                return Err(EngineError::BalanceLimitExceeded);
            }
            if held == 0 && token_amount < purchase.config.contribution_minimum {
                return Err(EngineError::BelowContributionMinimum);
            }
            let cost = token_amount
                .checked_mul(purchase.config.buy_price_per_unit)
                .ok_or(EngineError::MathOverflow)?;

            let cap = engine.engine_authority();
            engine.ledger.issue(&cap, buyer, token_amount)?;
            events.push(EngineEvent::transfer(engine.ledger.reserve, buyer, token_amount));
            Ok(Purchase { token_amount, cost })
        })
    }

    /// Replaces the whole sale configuration. Only allowed while the token is
    /// frozen so price and caps cannot move mid-sale.
    pub fn configure_purchase(
        &mut self,
        caller: &Pubkey,
        config: PurchaseConfig,
    ) -> Result<Outcome, EngineError> {
        self.gate(caller, Role::Admin)?;
        if !self.freeze.token_frozen() {
            return Err(EngineError::ConfigurationLocked);
        }
        if config.buy_price_per_unit == 0 {
            return Err(EngineError::InvalidConfig);
        }
        self.transact(|engine, events| {
            engine.purchase.config = config;
            events.push(configured_event(&config));
            Ok(())
        })
    }

    /// Super admin path for every non-price field, allowed at any time.
    pub fn override_purchase_limits(
        &mut self,
        caller: &Pubkey,
        limits: PurchaseLimits,
    ) -> Result<Outcome, EngineError> {
        self.gate(caller, Role::SuperAdmin)?;
        self.transact(|engine, events| {
            engine.purchase.apply_limits(limits);
            events.push(configured_event(&engine.purchase.config));
            Ok(())
        })
    }

    pub fn set_purchase_halted(
        &mut self,
        caller: &Pubkey,
        halted: bool,
    ) -> Result<Outcome, EngineError> {
        self.gate(caller, Role::Admin)?;
        self.transact(|engine, events| {
            if engine.purchase.halted != halted {
                engine.purchase.halted = halted;
                events.push(EngineEvent::PurchaseHaltSet(PurchaseHaltSet { halted }));
            }
            Ok(())
        })
    }

    pub fn set_buyer_whitelisted(
        &mut self,
        caller: &Pubkey,
        buyer: Pubkey,
        whitelisted: bool,
    ) -> Result<Outcome, EngineError> {
        self.gate(caller, Role::Admin)?;
        self.ensure_user_accounts(&[buyer])?;
        self.transact(|engine, events| {
            engine.purchase.set_whitelisted(buyer, whitelisted)?;
            events.push(EngineEvent::BuyerWhitelistSet(BuyerWhitelistSet { buyer, whitelisted }));
            Ok(())
        })
    }

    pub fn set_custom_buyer_cap(
        &mut self,
        caller: &Pubkey,
        buyer: Pubkey,
        cap: u64,
    ) -> Result<Outcome, EngineError> {
        self.gate(caller, Role::Admin)?;
        self.ensure_user_accounts(&[buyer])?;
        self.transact(|engine, events| {
            engine.purchase.set_custom_cap(buyer, cap)?;
            events.push(EngineEvent::BuyerCapSet(BuyerCapSet { buyer, cap }));
            Ok(())
        })
    }

    pub fn purchase_config(&self) -> &PurchaseConfig {
        &self.purchase.config
    }

    pub fn is_purchase_halted(&self) -> bool {
        self.purchase.halted
    }

    pub fn is_whitelisted(&self, buyer: &Pubkey) -> bool {
        self.purchase.is_whitelisted(buyer)
    }

    pub fn custom_buyer_cap(&self, buyer: &Pubkey) -> u64 {
        self.purchase.custom_cap(buyer)
    }
}

fn configured_event(config: &PurchaseConfig) -> EngineEvent {
    EngineEvent::PurchaseConfigured(PurchaseConfigured {
        buy_price_per_unit: config.buy_price_per_unit,
        circulation_cap: config.circulation_cap,
        default_balance_limit: config.default_balance_limit,
        contribution_minimum: config.contribution_minimum,
    })
}
