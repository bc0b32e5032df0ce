use anchor_lang::prelude::*;

/// Observational rollup over all schedules created under one admin.
/// Counters track lifetime totals; they are only ever touched together
/// with the schedule they describe, inside the same instruction.
#[account]
pub struct VestingRegistry {
    /// Only this key may create schedules under the registry.
    pub admin: Pubkey,
    /// Number of schedules ever created.
    pub total_schedules: u64,
    /// Base units locked via `create_schedule`, minus amounts returned by revocation.
    pub total_locked: u64,
    /// Base units released to beneficiaries (releases and revoke settlements).
    pub total_released: u64,
}

impl VestingRegistry {
    pub const SIZE: usize =
        32 + // admin
        8 +  // total_schedules
        8 +  // total_locked
        8;   // total_released
}

/// One vesting grant. Funds sit in a token vault PDA whose authority is
/// this account; the remaining vault balance is always
/// `total_amount - released_amount` until revocation empties it.
#[account]
pub struct VestingSchedule {
    /// Registry this schedule was created under.
    pub registry: Pubkey,
    /// Receives every release; cannot be redirected.
    pub beneficiary: Pubkey,
    /// The admin who created (and may revoke) the schedule. Fixed at creation.
    pub grantor: Pubkey,
    /// Mint of the locked tokens.
    pub mint: Pubkey,
    /// Total granted, in base units.
    pub total_amount: u64,
    /// Cumulative amount paid out to the beneficiary.
    pub released_amount: u64,
    /// Vesting start, ms since epoch.
    pub start_time: u64,
    /// Cliff length in ms, counted from `start_time`.
    pub cliff_duration: u64,
    /// Linear vesting length in ms, counted after the cliff. Always > 0.
    pub vesting_duration: u64,
    /// Whether the grantor may revoke.
    pub revocable: bool,
    /// One-way terminal flag; set by `revoke`.
    pub revoked: bool,
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // registry
        32 + // beneficiary
        32 + // grantor
        32 + // mint
        8 +  // total_amount
        8 +  // released_amount
        8 +  // start_time
        8 +  // cliff_duration
        8 +  // vesting_duration
        1 +  // revocable
        1;   // revoked
}
