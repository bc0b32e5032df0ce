use anchor_lang::prelude::*;

use crate::state::VestingRegistry;

pub fn create_registry(ctx: Context<CreateRegistry>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.admin = ctx.accounts.admin.key();
    registry.total_schedules = 0;
    registry.total_locked = 0;
    registry.total_released = 0;

    emit!(RegistryCreated {
        registry: registry.key(),
        admin: registry.admin,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateRegistry<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + VestingRegistry::SIZE,
        seeds = [b"vesting_registry", admin.key().as_ref()],
        bump
    )]
    pub registry: Account<'info, VestingRegistry>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct RegistryCreated {
    pub registry: Pubkey,
    pub admin: Pubkey,
}
