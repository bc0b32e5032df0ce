use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{Mint, Token};

use crate::error::CoreError;
use crate::state::SupplyConfig;

pub fn initialize_supply(ctx: Context<InitializeSupply>, max_supply: u64) -> Result<()> {
    require!(max_supply > 0, CoreError::ZeroAmount);

    let mint = &ctx.accounts.mint;
    // The config PDA must already hold the mint authority so every future
    // mint is forced through the cap check.
    require!(
        mint.mint_authority == COption::Some(ctx.accounts.supply_config.key()),
        CoreError::InvalidTokenMint
    );
    require!(mint.supply <= max_supply, CoreError::ExceedsMaxSupply);

    let st = &mut ctx.accounts.supply_config;
    st.mint = mint.key();
    st.admin = ctx.accounts.admin.key();
    st.max_supply = max_supply;
    st.paused = false;

    emit!(SupplyInitialized {
        mint: st.mint,
        admin: st.admin,
        max_supply: st.max_supply,
        current_supply: mint.supply,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeSupply<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + SupplyConfig::SIZE,
        seeds = [b"supply_config", mint.key().as_ref()],
        bump
    )]
    pub supply_config: Account<'info, SupplyConfig>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct SupplyInitialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub max_supply: u64,
    pub current_supply: u64,
}
