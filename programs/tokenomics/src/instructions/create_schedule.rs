use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::CoreError;
use crate::state::{VestingRegistry, VestingSchedule};

pub fn create_schedule(
    ctx: Context<CreateSchedule>,
    amount: u64,
    start_time: u64,
    cliff_duration: u64,
    vesting_duration: u64,
    revocable: bool,
) -> Result<()> {
    require!(amount > 0, CoreError::ZeroAmount);
    require!(vesting_duration > 0, CoreError::InvalidSchedule);
    require!(
        ctx.accounts.beneficiary.key() != Pubkey::default(),
        CoreError::InvalidPubkey
    );

    let registry = &ctx.accounts.registry;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        registry.admin,
        CoreError::UnauthorizedAdmin
    );
    require_keys_eq!(
        ctx.accounts.grantor_token_account.mint,
        ctx.accounts.mint.key(),
        CoreError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.grantor_token_account.owner,
        ctx.accounts.admin.key(),
        CoreError::InvalidTokenAccount
    );

    // The full grant is escrowed up front; releases draw the vault down.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.grantor_token_account.to_account_info(),
                to: ctx.accounts.schedule_vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )?;

    let schedule = &mut ctx.accounts.schedule;
    schedule.registry = ctx.accounts.registry.key();
    schedule.beneficiary = ctx.accounts.beneficiary.key();
    schedule.grantor = ctx.accounts.admin.key();
    schedule.mint = ctx.accounts.mint.key();
    schedule.total_amount = amount;
    schedule.released_amount = 0;
    schedule.start_time = start_time;
    schedule.cliff_duration = cliff_duration;
    schedule.vesting_duration = vesting_duration;
    schedule.revocable = revocable;
    schedule.revoked = false;

    let registry = &mut ctx.accounts.registry;
    registry.total_schedules = registry
        .total_schedules
        .checked_add(1)
        .ok_or(CoreError::MathOverflow)?;
    registry.total_locked = registry
        .total_locked
        .checked_add(amount)
        .ok_or(CoreError::MathOverflow)?;

    emit!(ScheduleCreated {
        registry: registry.key(),
        schedule: ctx.accounts.schedule.key(),
        beneficiary: ctx.accounts.schedule.beneficiary,
        grantor: ctx.accounts.schedule.grantor,
        amount,
        start_time,
        cliff_duration,
        vesting_duration,
        revocable,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateSchedule<'info> {
    #[account(mut, seeds = [b"vesting_registry", registry.admin.as_ref()], bump)]
    pub registry: Account<'info, VestingRegistry>,

    #[account(
        init,
        payer = admin,
        space = 8 + VestingSchedule::SIZE,
        seeds = [b"vesting_schedule", registry.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = schedule,
        seeds = [b"schedule_vault", schedule.key().as_ref()],
        bump
    )]
    pub schedule_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub grantor_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    /// CHECK: key only; the beneficiary never signs at creation.
    pub beneficiary: UncheckedAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct ScheduleCreated {
    pub registry: Pubkey,
    pub schedule: Pubkey,
    pub beneficiary: Pubkey,
    pub grantor: Pubkey,
    pub amount: u64,
    pub start_time: u64,
    pub cliff_duration: u64,
    pub vesting_duration: u64,
    pub revocable: bool,
}
