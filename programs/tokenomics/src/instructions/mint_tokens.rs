use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::error::CoreError;
use crate::state::SupplyConfig;
use crate::utils::math;

pub fn mint_tokens(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, CoreError::ZeroAmount);

    let st = &ctx.accounts.supply_config;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, CoreError::UnauthorizedAdmin);
    require!(!st.paused, CoreError::SupplyPaused);
    require_keys_eq!(ctx.accounts.mint.key(), st.mint, CoreError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.recipient_token_account.mint,
        st.mint,
        CoreError::InvalidTokenMint
    );

    // An overflowing sum necessarily exceeds the cap, so both failures
    // surface as ExceedsMaxSupply.
    let new_supply = ctx
        .accounts
        .mint
        .supply
        .checked_add(amount)
        .ok_or(CoreError::ExceedsMaxSupply)?;
    require!(new_supply <= st.max_supply, CoreError::ExceedsMaxSupply);

    let mint_key = st.mint;
    let signer_seeds: &[&[&[u8]]] = &[&[
        b"supply_config",
        mint_key.as_ref(),
        &[ctx.bumps.supply_config],
    ]];
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.recipient_token_account.to_account_info(),
                authority: ctx.accounts.supply_config.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(TokensMinted {
        mint: mint_key,
        recipient: ctx.accounts.recipient_token_account.key(),
        amount,
        total_supply: new_supply,
        remaining_supply: math::remaining_supply(new_supply, st.max_supply)?,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct MintTokens<'info> {
    #[account(
        seeds = [b"supply_config", mint.key().as_ref()],
        bump,
        constraint = supply_config.mint == mint.key() @ CoreError::InvalidTokenMint,
    )]
    pub supply_config: Account<'info, SupplyConfig>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensMinted {
    pub mint: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub total_supply: u64,
    pub remaining_supply: u64,
}
