use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::error::CoreError;
use crate::state::RewardPool;

pub fn distribute_reward(ctx: Context<DistributeReward>, amount: u64) -> Result<()> {
    require!(amount > 0, CoreError::ZeroAmount);

    let pool = &ctx.accounts.pool;
    require_keys_eq!(ctx.accounts.admin.key(), pool.admin, CoreError::UnauthorizedAdmin);
    require!(amount <= pool.balance, CoreError::InsufficientPoolBalance);

    let pool_key = pool.key();
    let signer_seeds: &[&[&[u8]]] = &[&[
        b"pool_vault",
        pool_key.as_ref(),
        &[ctx.bumps.pool_vault],
    ]];
    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.pool_vault.to_account_info(),
                to: ctx.accounts.recipient.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    let pool = &mut ctx.accounts.pool;
    pool.balance = pool
        .balance
        .checked_sub(amount)
        .ok_or(CoreError::MathOverflow)?;
    pool.total_distributed = pool
        .total_distributed
        .checked_add(amount)
        .ok_or(CoreError::MathOverflow)?;
    pool.distribution_count = pool
        .distribution_count
        .checked_add(1)
        .ok_or(CoreError::MathOverflow)?;

    emit!(RewardDistributed {
        pool: pool.key(),
        recipient: ctx.accounts.recipient.key(),
        amount,
        balance: pool.balance,
        total_distributed: pool.total_distributed,
        distribution_count: pool.distribution_count,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DistributeReward<'info> {
    #[account(mut, seeds = [b"reward_pool", pool.creator.as_ref()], bump)]
    pub pool: Account<'info, RewardPool>,

    #[account(mut, seeds = [b"pool_vault", pool.key().as_ref()], bump)]
    pub pool_vault: SystemAccount<'info>,

    /// CHECK: plain lamport destination chosen by the admin.
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct RewardDistributed {
    pub pool: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub balance: u64,
    pub total_distributed: u64,
    pub distribution_count: u64,
}
