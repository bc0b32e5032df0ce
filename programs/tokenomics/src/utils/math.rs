//! Pure vesting/accounting arithmetic shared by the instruction handlers.
//!
//! All amounts are u64 base units. Additions feeding a cap or balance
//! comparison are checked; the vesting product is widened to u128 before
//! the floor division so `total_amount * t` cannot overflow.

use crate::constants::MS_PER_SECOND;
use crate::error::CoreError;

/// Convert a Clock sysvar reading (seconds) to ms since epoch.
pub fn now_ms(unix_ts: i64) -> Result<u64, CoreError> {
    if unix_ts < 0 {
        return Err(CoreError::InvalidTimestamp);
    }
    (unix_ts as u64)
        .checked_mul(MS_PER_SECOND)
        .ok_or(CoreError::MathOverflow)
}

/// Piecewise-linear vesting with cliff:
/// - 0 before `start_time + cliff_duration`
/// - `total_amount` once `cliff_duration + vesting_duration` has elapsed
/// - linear in between, floor division.
pub fn vested_amount(
    total_amount: u64,
    start_time: u64,
    cliff_duration: u64,
    vesting_duration: u64,
    now: u64,
) -> Result<u64, CoreError> {
    if vesting_duration == 0 {
        return Err(CoreError::InvalidSchedule);
    }
    let elapsed = now.saturating_sub(start_time);
    if elapsed < cliff_duration {
        return Ok(0);
    }
    let t = elapsed - cliff_duration;
    if t >= vesting_duration {
        return Ok(total_amount);
    }
    let scaled = (total_amount as u128)
        .checked_mul(t as u128)
        .ok_or(CoreError::MathOverflow)?;
    let vested = scaled / (vesting_duration as u128);
    u64::try_from(vested).map_err(|_| CoreError::MathOverflow)
}

/// Vested-but-unreleased amount; zero unconditionally once revoked.
pub fn releasable_amount(
    total_amount: u64,
    released_amount: u64,
    start_time: u64,
    cliff_duration: u64,
    vesting_duration: u64,
    now: u64,
    revoked: bool,
) -> Result<u64, CoreError> {
    if revoked {
        return Ok(0);
    }
    let vested = vested_amount(
        total_amount,
        start_time,
        cliff_duration,
        vesting_duration,
        now,
    )?;
    vested
        .checked_sub(released_amount)
        .ok_or(CoreError::MathOverflow)
}

/// Sum of a batch in u128 so the accumulation itself cannot wrap; the
/// caller compares the result against its u64 cap/headroom.
pub fn batch_total(amounts: &[u64]) -> Result<u128, CoreError> {
    let mut sum: u128 = 0;
    for a in amounts {
        sum = sum
            .checked_add(*a as u128)
            .ok_or(CoreError::MathOverflow)?;
    }
    Ok(sum)
}

/// Validate a payout batch against a draining balance, in order: each
/// entry must be non-zero and fit in what is left after the entries
/// before it. Returns the batch total. Callers apply transfers only
/// after this succeeds, so a failure commits nothing.
pub fn plan_drawdown(balance: u64, amounts: &[u64]) -> Result<u64, CoreError> {
    let mut remaining = balance;
    let mut total: u64 = 0;
    for &a in amounts {
        if a == 0 {
            return Err(CoreError::ZeroAmount);
        }
        if a > remaining {
            return Err(CoreError::InsufficientPoolBalance);
        }
        remaining -= a;
        total = total.checked_add(a).ok_or(CoreError::MathOverflow)?;
    }
    Ok(total)
}

/// Headroom left under the supply cap.
pub fn remaining_supply(supply: u64, max_supply: u64) -> Result<u64, CoreError> {
    max_supply
        .checked_sub(supply)
        .ok_or(CoreError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOTAL: u64 = 1_000_000_000_000;
    const CLIFF_30D: u64 = 2_592_000_000;
    const YEAR_365D: u64 = 31_536_000_000;

    #[test]
    fn zero_before_and_through_cliff() {
        // Before start, at start, and one ms short of the cliff edge.
        assert_eq!(vested_amount(TOTAL, 100, CLIFF_30D, YEAR_365D, 0).unwrap(), 0);
        assert_eq!(vested_amount(TOTAL, 0, CLIFF_30D, YEAR_365D, 0).unwrap(), 0);
        assert_eq!(
            vested_amount(TOTAL, 0, CLIFF_30D, YEAR_365D, CLIFF_30D - 1).unwrap(),
            0
        );
        // Exactly at the cliff edge the linear leg starts at t = 0.
        assert_eq!(
            vested_amount(TOTAL, 0, CLIFF_30D, YEAR_365D, CLIFF_30D).unwrap(),
            0
        );
    }

    #[test]
    fn fully_vested_at_and_past_end() {
        let end = CLIFF_30D + YEAR_365D;
        assert_eq!(vested_amount(TOTAL, 0, CLIFF_30D, YEAR_365D, end).unwrap(), TOTAL);
        assert_eq!(
            vested_amount(TOTAL, 0, CLIFF_30D, YEAR_365D, end + 1).unwrap(),
            TOTAL
        );
        assert_eq!(
            vested_amount(TOTAL, 0, CLIFF_30D, YEAR_365D, u64::MAX).unwrap(),
            TOTAL
        );
    }

    #[test]
    fn linear_at_half_duration() {
        // 30d cliff + 182.5d of a 365d duration => exactly half.
        let now = CLIFF_30D + YEAR_365D / 2;
        assert_eq!(
            vested_amount(TOTAL, 0, CLIFF_30D, YEAR_365D, now).unwrap(),
            500_000_000_000
        );
    }

    #[test]
    fn vested_is_monotonic() {
        let mut prev = 0;
        for now in (0..CLIFF_30D + YEAR_365D + 10_000_000).step_by(500_000_000) {
            let v = vested_amount(TOTAL, 0, CLIFF_30D, YEAR_365D, now).unwrap();
            assert!(v >= prev, "vested decreased at t={now}");
            prev = v;
        }
    }

    #[test]
    fn widened_multiply_near_u64_max() {
        // total * t overflows u64 by far; the u128 intermediate must not.
        let total = u64::MAX;
        let v = vested_amount(total, 0, 0, YEAR_365D, YEAR_365D - 1).unwrap();
        assert!(v < total);
        assert_eq!(vested_amount(total, 0, 0, YEAR_365D, YEAR_365D).unwrap(), total);
    }

    #[test]
    fn zero_vesting_duration_rejected() {
        assert!(matches!(
            vested_amount(TOTAL, 0, CLIFF_30D, 0, CLIFF_30D),
            Err(CoreError::InvalidSchedule)
        ));
    }

    #[test]
    fn releasable_idempotent_at_fixed_clock() {
        let now = CLIFF_30D + YEAR_365D / 2;
        let first =
            releasable_amount(TOTAL, 0, 0, CLIFF_30D, YEAR_365D, now, false).unwrap();
        assert_eq!(first, 500_000_000_000);
        // After releasing, the same clock reading yields zero.
        let second =
            releasable_amount(TOTAL, first, 0, CLIFF_30D, YEAR_365D, now, false).unwrap();
        assert_eq!(second, 0);
    }

    #[test]
    fn releasable_zero_once_revoked() {
        let now = CLIFF_30D + YEAR_365D;
        assert_eq!(
            releasable_amount(TOTAL, 0, 0, CLIFF_30D, YEAR_365D, now, true).unwrap(),
            0
        );
    }

    #[test]
    fn revoke_split_quarter_through_vesting() {
        // 30d cliff + 91.25d of 365d => 25% vested. The revoke settlement
        // pays the vested quarter to the beneficiary and returns the rest.
        let now = 2_592_000_000 + 7_884_000_000;
        let to_beneficiary =
            releasable_amount(TOTAL, 0, 0, CLIFF_30D, YEAR_365D, now, false).unwrap();
        assert_eq!(to_beneficiary, 250_000_000_000);
        let to_grantor = TOTAL - to_beneficiary;
        assert_eq!(to_grantor, 750_000_000_000);
        assert_eq!(to_beneficiary + to_grantor, TOTAL);
    }

    #[test]
    fn batch_total_accumulates_past_u64() {
        let sum = batch_total(&[u64::MAX, u64::MAX, 1]).unwrap();
        assert_eq!(sum, (u64::MAX as u128) * 2 + 1);
        // Any such sum exceeds every u64 cap.
        assert!(sum > u64::MAX as u128);
    }

    #[test]
    fn drawdown_rejects_zero_entry() {
        assert!(matches!(
            plan_drawdown(100, &[50, 0, 10]),
            Err(CoreError::ZeroAmount)
        ));
    }

    #[test]
    fn drawdown_checks_against_draining_balance() {
        // [6, 6] against 10: the first entry fits, the second sees only 4
        // left and aborts the whole batch.
        assert!(matches!(
            plan_drawdown(10, &[6, 6]),
            Err(CoreError::InsufficientPoolBalance)
        ));
        assert_eq!(plan_drawdown(10, &[6, 4]).unwrap(), 10);
        assert!(matches!(
            plan_drawdown(10, &[6, 5]),
            Err(CoreError::InsufficientPoolBalance)
        ));
        // Earlier entries can exhaust funds for later ones; the caller
        // controls the order.
        assert_eq!(plan_drawdown(10, &[10]).unwrap(), 10);
        assert!(matches!(
            plan_drawdown(10, &[10, 1]),
            Err(CoreError::InsufficientPoolBalance)
        ));
    }

    #[test]
    fn remaining_supply_boundaries() {
        assert_eq!(remaining_supply(0, u64::MAX).unwrap(), u64::MAX);
        assert_eq!(remaining_supply(u64::MAX, u64::MAX).unwrap(), 0);
        assert!(matches!(remaining_supply(1, 0), Err(CoreError::MathOverflow)));
    }

    #[test]
    fn now_ms_rejects_negative_clock() {
        assert!(matches!(now_ms(-1), Err(CoreError::InvalidTimestamp)));
        assert_eq!(now_ms(1_700_000_000).unwrap(), 1_700_000_000_000);
    }
}
