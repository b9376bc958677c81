//! Linear vesting grants, releases and revocation.
//!
//! A grant earmarks the full amount (reserve -> vesting escrow) and counts it
//! in circulation right away; releases only move tokens from the escrow to
//! the beneficiary, and revocation sends the unreleased remainder back to the
//! reserve.

use anchor_lang::prelude::*;
use std::result::Result;

use super::{Outcome, TokenEngine};
use crate::error::EngineError;
use crate::events::{EngineEvent, VestedTokensReleased, VestingGranted, VestingRevoked};
use crate::state::{IndexSlot, Role, VestingSchedule};
use crate::utils::{math, time};

/// Parameters of a new vesting grant.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrantParams {
    pub beneficiary: Pubkey,
    pub fully_vested_amount: u64,
    /// Unix seconds; 0 means "now".
    pub start_time: i64,
    pub cliff_duration: u64,
    pub vesting_duration: u64,
    pub revocable: bool,
}

/// Snapshot of a beneficiary's vesting position at some instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingPosition {
    pub vested: u64,
    pub released: u64,
    pub releasable: u64,
}

impl TokenEngine {
    pub fn grant_vested_tokens(
        &mut self,
        caller: &Pubkey,
        params: GrantParams,
        now: i64,
    ) -> Result<Outcome, EngineError> {
        self.gate(caller, Role::Admin)?;
        let GrantParams {
            beneficiary,
            fully_vested_amount,
            start_time,
            cliff_duration,
            vesting_duration,
            revocable,
        } = params;
        if cliff_duration > vesting_duration {
            return Err(EngineError::CliffExceedsDuration);
        }
        if fully_vested_amount == 0 {
            return Err(EngineError::InvalidAmount);
        }
        if self.freeze.is_frozen(&beneficiary) {
            return Err(EngineError::BeneficiaryFrozen);
        }
        self.ensure_user_accounts(&[beneficiary])?;

        self.transact(|engine, events| {
            // Escrowed grants are already part of circulation; count them once.
            let outside_escrow = math::checked_sub(
                engine.ledger.total_in_circulation(),
                engine.ledger.escrow_balance(),
            )?;
            let committed = math::checked_add(
                math::checked_add(outside_escrow, engine.vesting.aggregate_unreleased()?)?,
                fully_vested_amount,
            )?;
            let capacity = engine
                .purchase
                .config
                .circulation_cap
                .min(engine.ledger.total_minted());
            if committed > capacity {
                return Err(EngineError::CapacityExceeded);
            }

            let start_time = time::resolve_start(start_time, now)?;
            let schedule = VestingSchedule {
                beneficiary,
                start_time,
                cliff_time: time::offset(start_time, cliff_duration)?,
                vesting_duration,
                fully_vested_amount,
                released_amount: 0,
                revocable,
                revoked_at: None,
            };
            schedule.end_time()?;
            engine.vesting.install(schedule)?;

            let cap = engine.engine_authority();
            engine.ledger.earmark(&cap, fully_vested_amount)?;
            events.push(EngineEvent::VestingGranted(VestingGranted {
                beneficiary,
                amount: fully_vested_amount,
                start_time,
                cliff_time: schedule.cliff_time,
                vesting_duration,
                revocable,
            }));
            Ok(())
        })
    }

    /// Releases the caller's own vested tokens.
    pub fn release_vested_tokens(
        &mut self,
        caller: &Pubkey,
        now: i64,
    ) -> Result<Outcome<u64>, EngineError> {
        self.release_vested_tokens_for_beneficiary(*caller, now)
    }

    /// Anyone may trigger a release on behalf of any beneficiary. Returns the
    /// amount released; zero is a no-op without events.
    pub fn release_vested_tokens_for_beneficiary(
        &mut self,
        beneficiary: Pubkey,
        now: i64,
    ) -> Result<Outcome<u64>, EngineError> {
        self.transact(|engine, events| {
            if engine.vesting.get(&beneficiary).is_none() {
                return Err(EngineError::ScheduleNotFound);
            }
            engine.freeze.ensure_accounts_not_frozen(&[beneficiary])?;
            engine.settle_vested(beneficiary, now, events)
        })
    }

    /// Super admin only. Pays out whatever has vested, stops accrual at `now`
    /// and returns the unreleased remainder to the reserve.
    pub fn revoke_vesting(
        &mut self,
        caller: &Pubkey,
        beneficiary: Pubkey,
        now: i64,
    ) -> Result<Outcome<u64>, EngineError> {
        self.gate(caller, Role::SuperAdmin)?;
        self.transact(|engine, events| {
            let schedule = engine
                .vesting
                .get(&beneficiary)
                .ok_or(EngineError::ScheduleNotFound)?;
            if !schedule.revocable {
                return Err(EngineError::NotRevocable);
            }
            if schedule.is_revoked() {
                return Err(EngineError::AlreadyRevoked);
            }
            if schedule.vested_at(now)? == schedule.fully_vested_amount {
                return Err(EngineError::FullyVested);
            }

            engine.settle_vested(beneficiary, now, events)?;

            let schedule = engine
                .vesting
                .get_mut(&beneficiary)
                .ok_or(EngineError::ScheduleNotFound)?;
            schedule.revoked_at = Some(now);
            let returned =
                math::checked_sub(schedule.fully_vested_amount, schedule.released_amount)?;

            let cap = engine.engine_authority();
            engine.ledger.retire(&cap, returned)?;
            events.push(EngineEvent::VestingRevoked(VestingRevoked {
                beneficiary,
                revoke_time: now,
                returned,
            }));
            Ok(returned)
        })
    }

    /// Moves the releasable amount out of escrow. No events when nothing is due.
    fn settle_vested(
        &mut self,
        beneficiary: Pubkey,
        now: i64,
        events: &mut Vec<EngineEvent>,
    ) -> Result<u64, EngineError> {
        let schedule = self
            .vesting
            .get_mut(&beneficiary)
            .ok_or(EngineError::ScheduleNotFound)?;
        let releasable = schedule.releasable_at(now)?;
        if releasable == 0 {
            return Ok(0);
        }
        schedule.released_amount = math::checked_add(schedule.released_amount, releasable)?;
        let released_total = schedule.released_amount;

        let cap = self.engine_authority();
        self.ledger.settle(&cap, beneficiary, releasable)?;
        events.push(EngineEvent::transfer(
            self.ledger.vesting_escrow,
            beneficiary,
            releasable,
        ));
        events.push(EngineEvent::VestedTokensReleased(VestedTokensReleased {
            beneficiary,
            amount: releasable,
            released_total,
        }));
        Ok(releasable)
    }

    pub fn vesting_schedule(&self, beneficiary: &Pubkey) -> Option<&VestingSchedule> {
        self.vesting.get(beneficiary)
    }

    pub fn vesting_position(
        &self,
        beneficiary: &Pubkey,
        now: i64,
    ) -> Result<VestingPosition, EngineError> {
        let schedule = self
            .vesting
            .get(beneficiary)
            .ok_or(EngineError::ScheduleNotFound)?;
        Ok(VestingPosition {
            vested: schedule.vested_at(now)?,
            released: schedule.released_amount,
            releasable: schedule.releasable_at(now)?,
        })
    }

    pub fn vested_amount(&self, beneficiary: &Pubkey, now: i64) -> Result<u64, EngineError> {
        Ok(self.vesting_position(beneficiary, now)?.vested)
    }

    pub fn releasable_amount(&self, beneficiary: &Pubkey, now: i64) -> Result<u64, EngineError> {
        Ok(self.vesting_position(beneficiary, now)?.releasable)
    }

    pub fn vesting_beneficiary_count(&self) -> usize {
        self.vesting.len()
    }

    /// Beneficiary at `index`; `active` is false once the schedule can be
    /// replaced (exhausted or revoked).
    pub fn vesting_beneficiary_at(&self, index: usize) -> Option<IndexSlot> {
        self.vesting.at(index).map(|s| IndexSlot {
            key: s.beneficiary,
            active: !s.is_replaceable(),
        })
    }
}
