use anchor_lang::prelude::*;

/// Custodial reward pool of the native coin. Lamports are held in a
/// system-owned vault PDA; this account carries the accounting.
///
/// Invariant: `balance == total_deposited - total_distributed - total_withdrawn`.
#[account]
pub struct RewardPool {
    /// Creator of the pool (fixed; part of the PDA seeds).
    pub creator: Pubkey,
    /// Current admin; transferable.
    pub admin: Pubkey,
    /// Lamports currently held in the vault.
    pub balance: u64,
    /// Lifetime lamports deposited.
    pub total_deposited: u64,
    /// Lifetime lamports paid out to winners.
    pub total_distributed: u64,
    /// Lifetime lamports drained back to the admin (not counted as distributed).
    pub total_withdrawn: u64,
    /// Number of individual reward payouts.
    pub distribution_count: u64,
}

impl RewardPool {
    pub const SIZE: usize =
        32 + // creator
        32 + // admin
        8 +  // balance
        8 +  // total_deposited
        8 +  // total_distributed
        8 +  // total_withdrawn
        8;   // distribution_count
}
