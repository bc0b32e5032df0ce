use anchor_lang::prelude::*;

use crate::state::VestingSchedule;
use crate::utils::math;

/// View-via-event read of a schedule at the current clock.
pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>) -> Result<()> {
    let schedule = &ctx.accounts.schedule;
    let now = math::now_ms(Clock::get()?.unix_timestamp)?;

    let vested = if schedule.revoked {
        schedule.released_amount
    } else {
        math::vested_amount(
            schedule.total_amount,
            schedule.start_time,
            schedule.cliff_duration,
            schedule.vesting_duration,
            now,
        )?
    };
    let releasable = math::releasable_amount(
        schedule.total_amount,
        schedule.released_amount,
        schedule.start_time,
        schedule.cliff_duration,
        schedule.vesting_duration,
        now,
        schedule.revoked,
    )?;

    emit!(VestingQuote {
        schedule: schedule.key(),
        beneficiary: schedule.beneficiary,
        vested_amount: vested,
        released_amount: schedule.released_amount,
        releasable,
        revoked: schedule.revoked,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitVestingQuote<'info> {
    #[account(
        seeds = [b"vesting_schedule", schedule.registry.as_ref(), schedule.beneficiary.as_ref()],
        bump
    )]
    pub schedule: Account<'info, VestingSchedule>,
}

#[event]
pub struct VestingQuote {
    pub schedule: Pubkey,
    pub beneficiary: Pubkey,
    pub vested_amount: u64,
    pub released_amount: u64,
    pub releasable: u64,
    pub revoked: bool,
}
