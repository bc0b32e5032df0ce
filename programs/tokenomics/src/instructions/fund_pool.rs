use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::error::CoreError;
use crate::state::RewardPool;

pub fn fund_pool(ctx: Context<FundPool>, amount: u64) -> Result<()> {
    require!(amount > 0, CoreError::ZeroAmount);

    let pool = &ctx.accounts.pool;
    require_keys_eq!(ctx.accounts.admin.key(), pool.admin, CoreError::UnauthorizedAdmin);

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin.to_account_info(),
                to: ctx.accounts.pool_vault.to_account_info(),
            },
        ),
        amount,
    )?;

    let pool = &mut ctx.accounts.pool;
    pool.balance = pool
        .balance
        .checked_add(amount)
        .ok_or(CoreError::MathOverflow)?;
    pool.total_deposited = pool
        .total_deposited
        .checked_add(amount)
        .ok_or(CoreError::MathOverflow)?;

    emit!(PoolFunded {
        pool: pool.key(),
        admin: pool.admin,
        amount,
        balance: pool.balance,
        total_deposited: pool.total_deposited,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FundPool<'info> {
    #[account(mut, seeds = [b"reward_pool", pool.creator.as_ref()], bump)]
    pub pool: Account<'info, RewardPool>,

    #[account(mut, seeds = [b"pool_vault", pool.key().as_ref()], bump)]
    pub pool_vault: SystemAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct PoolFunded {
    pub pool: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    pub balance: u64,
    pub total_deposited: u64,
}
