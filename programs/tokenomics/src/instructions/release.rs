use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::CoreError;
use crate::state::{VestingRegistry, VestingSchedule};
use crate::utils::math;

/// Permissionless: anyone may trigger a release, but the tokens always
/// flow to the schedule's beneficiary.
pub fn release(ctx: Context<Release>) -> Result<()> {
    // Capture AccountInfo/keys before taking mutable borrows.
    let schedule_ai = ctx.accounts.schedule.to_account_info();
    let schedule_bump = ctx.bumps.schedule;
    let registry_key = ctx.accounts.registry.key();
    let beneficiary = ctx.accounts.schedule.beneficiary;

    let schedule = &ctx.accounts.schedule;
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
    require!(releasable > 0, CoreError::NothingToRelease);

    let signer_seeds: &[&[&[u8]]] = &[&[
        b"vesting_schedule",
        registry_key.as_ref(),
        beneficiary.as_ref(),
        &[schedule_bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.schedule_vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: schedule_ai,
            },
            signer_seeds,
        ),
        releasable,
    )?;

    let schedule = &mut ctx.accounts.schedule;
    schedule.released_amount = schedule
        .released_amount
        .checked_add(releasable)
        .ok_or(CoreError::MathOverflow)?;
    let registry = &mut ctx.accounts.registry;
    registry.total_released = registry
        .total_released
        .checked_add(releasable)
        .ok_or(CoreError::MathOverflow)?;

    emit!(TokensReleased {
        registry: registry_key,
        schedule: ctx.accounts.schedule.key(),
        beneficiary,
        amount: releasable,
        released_total: ctx.accounts.schedule.released_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Release<'info> {
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

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensReleased {
    pub registry: Pubkey,
    pub schedule: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub released_total: u64,
}
