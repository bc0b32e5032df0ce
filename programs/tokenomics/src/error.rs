use anchor_lang::prelude::*;

/// Custom error codes for the tokenomics program.
#[error_code]
pub enum CoreError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Supply is paused")]
    SupplyPaused,

    #[msg("Supply is not paused")]
    SupplyNotPaused,

    #[msg("Mint would exceed max supply")]
    ExceedsMaxSupply,

    #[msg("Amounts and recipients differ in length")]
    LengthMismatch,

    #[msg("Empty batch")]
    EmptyBatch,

    #[msg("Batch size too large")]
    BatchTooLarge,

    #[msg("Insufficient pool balance")]
    InsufficientPoolBalance,

    #[msg("Vesting duration must be greater than zero")]
    InvalidSchedule,

    #[msg("Schedule is already revoked")]
    AlreadyRevoked,

    #[msg("Schedule is not revocable")]
    NotRevocable,

    #[msg("Nothing to release")]
    NothingToRelease,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Math overflow")]
    MathOverflow,
}
