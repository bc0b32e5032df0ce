use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::CoreError;
use crate::state::{VestingRegistry, VestingSchedule};
use crate::utils::math;

/// Grantor-only early termination. Settles in two legs inside one atomic
/// call: the currently vested-but-unreleased amount goes to the
/// beneficiary exactly as `release` would pay it, then everything left in
/// the vault returns to the grantor and the schedule is permanently
/// disabled.
pub fn revoke(ctx: Context<Revoke>) -> Result<()> {
    let schedule_ai = ctx.accounts.schedule.to_account_info();
    let schedule_bump = ctx.bumps.schedule;
    let registry_key = ctx.accounts.registry.key();
    let beneficiary = ctx.accounts.schedule.beneficiary;

    let schedule = &ctx.accounts.schedule;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        schedule.grantor,
        CoreError::UnauthorizedAdmin
    );
    require!(schedule.revocable, CoreError::NotRevocable);
    require!(!schedule.revoked, CoreError::AlreadyRevoked);
    require_keys_eq!(
        ctx.accounts.schedule_vault.mint,
        schedule.mint,
        CoreError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        schedule.mint,
        CoreError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        beneficiary,
        CoreError::InvalidTokenAccount
    );
    require_keys_eq!(
        ctx.accounts.grantor_token_account.mint,
        schedule.mint,
        CoreError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.grantor_token_account.owner,
        schedule.grantor,
        CoreError::InvalidTokenAccount
    );

    let now = math::now_ms(Clock::get()?.unix_timestamp)?;
    let releasable = math::releasable_amount(
        schedule.total_amount,
        schedule.released_amount,
        schedule.start_time,
        schedule.cliff_duration,
        schedule.vesting_duration,
        now,
        schedule.revoked,
    )?;

    let signer_seeds: &[&[&[u8]]] = &[&[
        b"vesting_schedule",
        registry_key.as_ref(),
        beneficiary.as_ref(),
        &[schedule_bump],
    ]];

    // Leg 1: settle whatever has vested by now to the beneficiary.
    if releasable > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.schedule_vault.to_account_info(),
                    to: ctx.accounts.beneficiary_token_account.to_account_info(),
                    authority: schedule_ai.clone(),
                },
                signer_seeds,
            ),
            releasable,
        )?;
    }

    let schedule = &mut ctx.accounts.schedule;
    schedule.released_amount = schedule
        .released_amount
        .checked_add(releasable)
        .ok_or(CoreError::MathOverflow)?;

    // Leg 2: return the unvested remainder to the grantor.
    let remainder = schedule
        .total_amount
        .checked_sub(schedule.released_amount)
        .ok_or(CoreError::MathOverflow)?;
    if remainder > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.schedule_vault.to_account_info(),
                    to: ctx.accounts.grantor_token_account.to_account_info(),
                    authority: schedule_ai,
                },
                signer_seeds,
            ),
            remainder,
        )?;
    }

    let schedule = &mut ctx.accounts.schedule;
    schedule.revoked = true;

    let registry = &mut ctx.accounts.registry;
    registry.total_released = registry
        .total_released
        .checked_add(releasable)
        .ok_or(CoreError::MathOverflow)?;
    registry.total_locked = registry
        .total_locked
        .checked_sub(remainder)
        .ok_or(CoreError::MathOverflow)?;

    emit!(ScheduleRevoked {
        registry: registry_key,
        schedule: ctx.accounts.schedule.key(),
        beneficiary,
        grantor: ctx.accounts.schedule.grantor,
        released_to_beneficiary: releasable,
        returned_to_grantor: remainder,
        released_total: ctx.accounts.schedule.released_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Revoke<'info> {
    #[account(mut, seeds = [b"vesting_registry", registry.admin.as_ref()], bump)]
    pub registry: Account<'info, VestingRegistry>,

    #[account(
        mut,
        seeds = [b"vesting_schedule", registry.key().as_ref(), schedule.beneficiary.as_ref()],
        bump,
        constraint = schedule.registry == registry.key() @ CoreError::InvalidPubkey,
    )]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        mut,
        seeds = [b"schedule_vault", schedule.key().as_ref()],
        bump,
        constraint = schedule_vault.mint == schedule.mint @ CoreError::InvalidTokenMint,
    )]
    pub schedule_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub grantor_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ScheduleRevoked {
    pub registry: Pubkey,
    pub schedule: Pubkey,
    pub beneficiary: Pubkey,
    pub grantor: Pubkey,
    pub released_to_beneficiary: u64,
    pub returned_to_grantor: u64,
    pub released_total: u64,
}
