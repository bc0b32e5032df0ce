use anchor_lang::prelude::*;

use crate::error::CoreError;
use crate::state::RewardPool;

pub fn transfer_pool_admin(ctx: Context<TransferPoolAdmin>, new_admin: Pubkey) -> Result<()> {
    require!(new_admin != Pubkey::default(), CoreError::InvalidPubkey);

    let pool = &mut ctx.accounts.pool;
    require_keys_eq!(ctx.accounts.admin.key(), pool.admin, CoreError::UnauthorizedAdmin);

    let old = pool.admin;
    pool.admin = new_admin;

    emit!(PoolAdminTransferred {
        pool: pool.key(),
        old_admin: old,
        new_admin,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferPoolAdmin<'info> {
    #[account(mut, seeds = [b"reward_pool", pool.creator.as_ref()], bump)]
    pub pool: Account<'info, RewardPool>,

    pub admin: Signer<'info>,
}

#[event]
pub struct PoolAdminTransferred {
    pub pool: Pubkey,
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}
