//! Program-wide constants.

/// Max entries processed per `mint_batch` / `distribute_batch` call
/// (compute budget bound).
pub const MAX_BATCH_SIZE: usize = 16;

/// Milliseconds per second; schedule times are stored in ms since epoch,
/// the Clock sysvar reports seconds.
pub const MS_PER_SECOND: u64 = 1_000;
