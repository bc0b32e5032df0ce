use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::error::CoreError;
use crate::state::RewardPool;

/// Emergency drain back to the admin. Accounted separately from rewards:
/// `total_withdrawn` grows, `total_distributed` does not.
pub fn withdraw_pool(ctx: Context<WithdrawPool>, amount: u64) -> Result<()> {
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
                to: ctx.accounts.admin.to_account_info(),
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
    pool.total_withdrawn = pool
        .total_withdrawn
        .checked_add(amount)
        .ok_or(CoreError::MathOverflow)?;

    emit!(PoolWithdrawn {
        pool: pool.key(),
        admin: pool.admin,
        amount,
        balance: pool.balance,
        total_withdrawn: pool.total_withdrawn,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawPool<'info> {
    #[account(mut, seeds = [b"reward_pool", pool.creator.as_ref()], bump)]
    pub pool: Account<'info, RewardPool>,

    #[account(mut, seeds = [b"pool_vault", pool.key().as_ref()], bump)]
    pub pool_vault: SystemAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct PoolWithdrawn {
    pub pool: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    pub balance: u64,
    pub total_withdrawn: u64,
}
