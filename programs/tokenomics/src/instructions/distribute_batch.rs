use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::constants::MAX_BATCH_SIZE;
use crate::error::CoreError;
use crate::state::RewardPool;
use crate::utils::math;

/// Pay several winners in one call. Each entry is validated in order
/// against the balance as it drains within the call, so an earlier entry
/// can exhaust funds for a later one; the caller controls the order. Any
/// failing entry aborts the whole batch. Recipient accounts are passed
/// as remaining accounts in the same order as `recipients`.
pub fn distribute_batch<'info>(
    ctx: Context<'_, '_, '_, 'info, DistributeBatch<'info>>,
    amounts: Vec<u64>,
    recipients: Vec<Pubkey>,
) -> Result<()> {
    let pool = &ctx.accounts.pool;
    require_keys_eq!(ctx.accounts.admin.key(), pool.admin, CoreError::UnauthorizedAdmin);

    require!(amounts.len() == recipients.len(), CoreError::LengthMismatch);
    require!(!amounts.is_empty(), CoreError::EmptyBatch);
    require!(amounts.len() <= MAX_BATCH_SIZE, CoreError::BatchTooLarge);
    require!(
        ctx.remaining_accounts.len() == recipients.len(),
        CoreError::LengthMismatch
    );
    for (acc_info, recipient) in ctx.remaining_accounts.iter().zip(recipients.iter()) {
        require_keys_eq!(acc_info.key(), *recipient, CoreError::InvalidPubkey);
    }

    let total = math::plan_drawdown(pool.balance, &amounts)?;

    let pool_key = pool.key();
    let signer_seeds: &[&[&[u8]]] = &[&[
        b"pool_vault",
        pool_key.as_ref(),
        &[ctx.bumps.pool_vault],
    ]];
    for (acc_info, amount) in ctx.remaining_accounts.iter().zip(amounts.iter()) {
        system_program::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.pool_vault.to_account_info(),
                    to: acc_info.clone(),
                },
                signer_seeds,
            ),
            *amount,
        )?;
    }

    let count = amounts.len() as u64;
    let pool = &mut ctx.accounts.pool;
    pool.balance = pool
        .balance
        .checked_sub(total)
        .ok_or(CoreError::MathOverflow)?;
    pool.total_distributed = pool
        .total_distributed
        .checked_add(total)
        .ok_or(CoreError::MathOverflow)?;
    pool.distribution_count = pool
        .distribution_count
        .checked_add(count)
        .ok_or(CoreError::MathOverflow)?;

    emit!(RewardBatchDistributed {
        pool: pool.key(),
        count,
        total_amount: total,
        balance: pool.balance,
        total_distributed: pool.total_distributed,
        distribution_count: pool.distribution_count,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DistributeBatch<'info> {
    #[account(mut, seeds = [b"reward_pool", pool.creator.as_ref()], bump)]
    pub pool: Account<'info, RewardPool>,

    #[account(mut, seeds = [b"pool_vault", pool.key().as_ref()], bump)]
    pub pool_vault: SystemAccount<'info>,

    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct RewardBatchDistributed {
    pub pool: Pubkey,
    pub count: u64,
    pub total_amount: u64,
    pub balance: u64,
    pub total_distributed: u64,
    pub distribution_count: u64,
}
