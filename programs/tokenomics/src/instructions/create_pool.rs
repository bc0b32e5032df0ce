use anchor_lang::prelude::*;

use crate::state::RewardPool;

pub fn create_pool(ctx: Context<CreatePool>) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.creator = ctx.accounts.creator.key();
    pool.admin = ctx.accounts.creator.key();
    pool.balance = 0;
    pool.total_deposited = 0;
    pool.total_distributed = 0;
    pool.total_withdrawn = 0;
    pool.distribution_count = 0;

    emit!(RewardPoolCreated {
        pool: pool.key(),
        admin: pool.admin,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(
        init,
        payer = creator,
        space = 8 + RewardPool::SIZE,
        seeds = [b"reward_pool", creator.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, RewardPool>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct RewardPoolCreated {
    pub pool: Pubkey,
    pub admin: Pubkey,
}
