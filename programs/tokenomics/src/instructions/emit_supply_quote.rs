use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::state::SupplyConfig;
use crate::utils::math;

/// View-via-event read of the supply accounting.
pub fn emit_supply_quote(ctx: Context<EmitSupplyQuote>) -> Result<()> {
    let st = &ctx.accounts.supply_config;
    let supply = ctx.accounts.mint.supply;

    emit!(SupplyQuote {
        mint: st.mint,
        total_supply: supply,
        max_supply: st.max_supply,
        remaining_supply: math::remaining_supply(supply, st.max_supply)?,
        paused: st.paused,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitSupplyQuote<'info> {
    #[account(seeds = [b"supply_config", mint.key().as_ref()], bump)]
    pub supply_config: Account<'info, SupplyConfig>,

    pub mint: Account<'info, Mint>,
}

#[event]
pub struct SupplyQuote {
    pub mint: Pubkey,
    pub total_supply: u64,
    pub max_supply: u64,
    pub remaining_supply: u64,
    pub paused: bool,
}
