use anchor_lang::prelude::*;

use crate::error::CoreError;
use crate::state::SupplyConfig;

pub fn transfer_supply_admin(
    ctx: Context<TransferSupplyAdmin>,
    new_admin: Pubkey,
) -> Result<()> {
    require!(new_admin != Pubkey::default(), CoreError::InvalidPubkey);

    let st = &mut ctx.accounts.supply_config;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, CoreError::UnauthorizedAdmin);

    let old = st.admin;
    st.admin = new_admin;

    emit!(SupplyAdminTransferred {
        mint: st.mint,
        old_admin: old,
        new_admin,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferSupplyAdmin<'info> {
    #[account(mut, seeds = [b"supply_config", supply_config.mint.as_ref()], bump)]
    pub supply_config: Account<'info, SupplyConfig>,

    pub admin: Signer<'info>,
}

#[event]
pub struct SupplyAdminTransferred {
    pub mint: Pubkey,
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}
