use anchor_lang::prelude::*;

use crate::error::CoreError;
use crate::state::SupplyConfig;

pub fn unpause_supply(ctx: Context<UnpauseSupply>) -> Result<()> {
    let st = &mut ctx.accounts.supply_config;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, CoreError::UnauthorizedAdmin);
    require!(st.paused, CoreError::SupplyNotPaused);
    st.paused = false;
    emit!(SupplyUnpausedEvent {
        mint: st.mint,
        admin: st.admin,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UnpauseSupply<'info> {
    #[account(mut, seeds = [b"supply_config", supply_config.mint.as_ref()], bump)]
    pub supply_config: Account<'info, SupplyConfig>,
    pub admin: Signer<'info>,
}

#[event]
pub struct SupplyUnpausedEvent {
    pub mint: Pubkey,
    pub admin: Pubkey,
}
