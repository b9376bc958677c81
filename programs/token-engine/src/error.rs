use anchor_lang::prelude::*;

/// Error codes for the token engine. Every error aborts the whole call.
#[error_code]
pub enum EngineError {
    #[msg("Unauthorized: caller lacks the required role")]
    Unauthorized,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Insufficient allowance")]
    InsufficientAllowance,

    #[msg("Allowance must be reset to zero before setting a new nonzero value")]
    AllowanceNotZero,

    #[msg("Owner and spender must differ")]
    SelfApproval,

    #[msg("Account is frozen")]
    AccountFrozen,

    #[msg("Token is frozen")]
    TokenFrozen,

    #[msg("Beneficiary is frozen")]
    BeneficiaryFrozen,

    #[msg("Engine-owned account cannot take part in this operation")]
    ReservedAccount,

    #[msg("Purchases are halted")]
    PurchaseHalted,

    #[msg("Buyer is not whitelisted")]
    NotWhitelisted,

    #[msg("Insufficient reserve balance")]
    InsufficientReserve,

    #[msg("Circulation cap would be exceeded")]
    CirculationCapExceeded,

    #[msg("Buyer balance limit would be exceeded")]
    BalanceLimitExceeded,

    #[msg("Purchase is below the contribution minimum")]
    BelowContributionMinimum,

    #[msg("Purchase configuration can only change while the token is frozen")]
    ConfigurationLocked,

    #[msg("Cliff exceeds vesting duration")]
    CliffExceedsDuration,

    #[msg("Vesting grant would exceed circulation capacity")]
    CapacityExceeded,

    #[msg("Beneficiary already has an active vesting schedule")]
    ExistingActiveSchedule,

    #[msg("Vesting schedule not found")]
    ScheduleNotFound,

    #[msg("Vesting schedule is not revocable")]
    NotRevocable,

    #[msg("Vesting schedule is already revoked")]
    AlreadyRevoked,

    #[msg("Vesting schedule is fully vested")]
    FullyVested,

    #[msg("Engine is already initialized")]
    AlreadyInitialized,

    #[msg("Engine is not initialized")]
    NotInitialized,

    #[msg("Cannot remove the last super admin")]
    LastSuperAdmin,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Storage capacity reached")]
    StorageFull,

    #[msg("Invalid payment mint")]
    InvalidPaymentMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient proceeds vault balance")]
    InsufficientProceeds,

    #[msg("Ledger conservation check failed")]
    InvariantViolation,

    #[msg("State serialization failed")]
    SerializationFailed,

    #[msg("Math overflow")]
    MathOverflow,
}
