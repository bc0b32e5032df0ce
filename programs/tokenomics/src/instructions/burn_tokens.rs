use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

use crate::error::CoreError;
use crate::state::SupplyConfig;

/// Burning shrinks supply, so it stays allowed while minting is paused.
pub fn burn_tokens(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, CoreError::ZeroAmount);

    let st = &ctx.accounts.supply_config;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, CoreError::UnauthorizedAdmin);
    require_keys_eq!(ctx.accounts.mint.key(), st.mint, CoreError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.admin_token_account.mint,
        st.mint,
        CoreError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        ctx.accounts.admin.key(),
        CoreError::InvalidTokenAccount
    );

    token::burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.mint.to_account_info(),
                from: ctx.accounts.admin_token_account.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.mint.reload()?;

    emit!(TokensBurned {
        mint: st.mint,
        admin: st.admin,
        amount,
        total_supply: ctx.accounts.mint.supply,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct BurnTokens<'info> {
    #[account(seeds = [b"supply_config", mint.key().as_ref()], bump)]
    pub supply_config: Account<'info, SupplyConfig>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensBurned {
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    pub total_supply: u64,
}
