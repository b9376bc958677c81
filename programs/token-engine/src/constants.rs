//! Program-wide constants: PDA seeds and storage bounds.
//!
//! The engine state lives in a single PDA, so every growable collection is
//! bounded; the bounds below size that account.

/// Seed prefix of the engine state PDA (followed by the storage name hash).
pub const ENGINE_SEED: &[u8] = b"engine";

/// Seed prefix of the ledger address that holds uncirculated supply.
pub const RESERVE_SEED: &[u8] = b"reserve";

/// Seed prefix of the ledger address that holds granted, unreleased vesting.
pub const VESTING_ESCROW_SEED: &[u8] = b"vesting_escrow";

/// Seed prefix of the SPL token account collecting purchase payments.
pub const PROCEEDS_SEED: &[u8] = b"proceeds";

/// Max distinct ledger accounts (reserve and escrow included).
pub const MAX_ACCOUNTS: usize = 64;

/// Max admin index slots.
pub const MAX_ADMINS: usize = 16;

/// Max super admin index slots.
pub const MAX_SUPER_ADMINS: usize = 8;

/// Max frozen-account index slots.
pub const MAX_FROZEN_ACCOUNTS: usize = 32;

/// Max live (owner, spender) allowance pairs.
pub const MAX_ALLOWANCES: usize = 24;

/// Max buyers carrying a whitelist flag or a custom cap.
pub const MAX_BUYERS: usize = 32;

/// Max vesting beneficiaries.
pub const MAX_VESTING_SCHEDULES: usize = 16;

/// Max length of the symbolic storage name accepted at initialization.
pub const MAX_STORAGE_NAME_LEN: usize = 64;
