use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::MAX_VESTING_SCHEDULES;
use crate::error::EngineError;
use crate::utils::{math, time};

/// Linear vesting schedule with a cliff, one per beneficiary.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    pub beneficiary: Pubkey,
    /// Vesting start (Unix seconds).
    pub start_time: i64,
    /// `start_time + cliff_duration`; nothing vests before it.
    pub cliff_time: i64,
    /// Seconds from start until everything is vested.
    pub vesting_duration: u64,
    pub fully_vested_amount: u64,
    pub released_amount: u64,
    pub revocable: bool,
    /// Accrual stops here once revoked.
    pub revoked_at: Option<i64>,
}

impl VestingSchedule {
    pub const SIZE: usize = 32 + 8 + 8 + 8 + 8 + 8 + 1 + (1 + 8);

    pub fn end_time(&self) -> Result<i64, EngineError> {
        time::offset(self.start_time, self.vesting_duration)
    }

    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Fully vested and fully released, never revoked.
    pub fn is_exhausted(&self) -> bool {
        self.released_amount == self.fully_vested_amount && self.revoked_at.is_none()
    }

    /// A new grant may replace this schedule.
    pub fn is_replaceable(&self) -> bool {
        self.is_exhausted() || self.is_revoked()
    }

    /// Amount vested at `now`, accrual capped at the revocation time.
    pub fn vested_at(&self, now: i64) -> Result<u64, EngineError> {
        let t = match self.revoked_at {
            Some(revoked) => now.min(revoked),
            None => now,
        };
        if t < self.cliff_time {
            return Ok(0);
        }
        if t >= self.end_time()? {
            return Ok(self.fully_vested_amount);
        }
        math::mul_div_floor(
            self.fully_vested_amount,
            time::elapsed(self.start_time, t),
            self.vesting_duration,
        )
    }

    pub fn releasable_at(&self, now: i64) -> Result<u64, EngineError> {
        math::checked_sub(self.vested_at(now)?, self.released_amount)
    }

    /// Granted amount not yet paid out, still held in the vesting escrow.
    /// Zero once revoked: revocation settles what vested and returns the rest.
    pub fn unreleased(&self) -> Result<u64, EngineError> {
        if self.is_revoked() {
            return Ok(0);
        }
        math::checked_sub(self.fully_vested_amount, self.released_amount)
    }
}

/// Schedules in beneficiary insertion order. A replacing grant reuses the
/// beneficiary's slot, so enumeration indices stay stable.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct VestingBook {
    schedules: Vec<VestingSchedule>,
}

impl VestingBook {
    pub const SIZE: usize = 4 + MAX_VESTING_SCHEDULES * VestingSchedule::SIZE;

    pub fn get(&self, beneficiary: &Pubkey) -> Option<&VestingSchedule> {
        self.schedules.iter().find(|s| s.beneficiary == *beneficiary)
    }

    pub fn get_mut(&mut self, beneficiary: &Pubkey) -> Option<&mut VestingSchedule> {
        self.schedules
            .iter_mut()
            .find(|s| s.beneficiary == *beneficiary)
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    pub fn at(&self, index: usize) -> Option<&VestingSchedule> {
        self.schedules.get(index)
    }

    /// Stores `schedule`, replacing a replaceable one for the same beneficiary.
    pub fn install(&mut self, schedule: VestingSchedule) -> Result<(), EngineError> {
        if let Some(existing) = self.get_mut(&schedule.beneficiary) {
            if !existing.is_replaceable() {
                return Err(EngineError::ExistingActiveSchedule);
            }
            *existing = schedule;
            return Ok(());
        }
        if self.schedules.len() >= MAX_VESTING_SCHEDULES {
            return Err(EngineError::StorageFull);
        }
        self.schedules.push(schedule);
        Ok(())
    }

    /// Sum of [`VestingSchedule::unreleased`]; always equals the escrow balance.
    pub fn aggregate_unreleased(&self) -> Result<u64, EngineError> {
        self.schedules
            .iter()
            .try_fold(0u64, |acc, s| math::checked_add(acc, s.unreleased()?))
    }
}
