use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::constants::MAX_BATCH_SIZE;
use crate::error::CoreError;
use crate::state::SupplyConfig;
use crate::utils::math;

/// Mint to several recipients in one call. The cap is validated once
/// against the combined batch total, not per entry; recipient token
/// accounts are passed as remaining accounts in the same order as
/// `recipients`. All validation happens before the first credit.
pub fn mint_batch<'info>(
    ctx: Context<'_, '_, 'info, 'info, MintBatch<'info>>,
    amounts: Vec<u64>,
    recipients: Vec<Pubkey>,
) -> Result<()> {
    let st = &ctx.accounts.supply_config;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, CoreError::UnauthorizedAdmin);
    require!(!st.paused, CoreError::SupplyPaused);
    require_keys_eq!(ctx.accounts.mint.key(), st.mint, CoreError::InvalidTokenMint);

    require!(amounts.len() == recipients.len(), CoreError::LengthMismatch);
    require!(!amounts.is_empty(), CoreError::EmptyBatch);
    require!(amounts.len() <= MAX_BATCH_SIZE, CoreError::BatchTooLarge);
    require!(
        ctx.remaining_accounts.len() == recipients.len(),
        CoreError::LengthMismatch
    );

    let total = math::batch_total(&amounts)?;
    let headroom = math::remaining_supply(ctx.accounts.mint.supply, st.max_supply)?;
    require!(total <= headroom as u128, CoreError::ExceedsMaxSupply);

    // Validate every destination before crediting any of them.
    let mut destinations: Vec<Account<TokenAccount>> =
        Vec::with_capacity(ctx.remaining_accounts.len());
    for (acc_info, wallet) in ctx.remaining_accounts.iter().zip(recipients.iter()) {
        let token_account: Account<TokenAccount> =
            Account::try_from(acc_info).map_err(|_| CoreError::InvalidTokenAccount)?;
        require_keys_eq!(token_account.mint, st.mint, CoreError::InvalidTokenMint);
        require_keys_eq!(token_account.owner, *wallet, CoreError::InvalidTokenAccount);
        destinations.push(token_account);
    }

    let mint_key = st.mint;
    let signer_seeds: &[&[&[u8]]] = &[&[
        b"supply_config",
        mint_key.as_ref(),
        &[ctx.bumps.supply_config],
    ]];
    for (destination, amount) in destinations.iter().zip(amounts.iter()) {
        token::mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.mint.to_account_info(),
                    to: destination.to_account_info(),
                    authority: ctx.accounts.supply_config.to_account_info(),
                },
                signer_seeds,
            ),
            *amount,
        )?;
    }

    // total <= headroom, so it fits in u64 and the post-supply cannot wrap.
    let total = total as u64;
    let new_supply = ctx
        .accounts
        .mint
        .supply
        .checked_add(total)
        .ok_or(CoreError::MathOverflow)?;

    emit!(MintBatchExecuted {
        mint: mint_key,
        count: amounts.len() as u64,
        total_amount: total,
        total_supply: new_supply,
        remaining_supply: math::remaining_supply(new_supply, st.max_supply)?,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct MintBatch<'info> {
    #[account(seeds = [b"supply_config", mint.key().as_ref()], bump)]
    pub supply_config: Account<'info, SupplyConfig>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct MintBatchExecuted {
    pub mint: Pubkey,
    pub count: u64,
    pub total_amount: u64,
    pub total_supply: u64,
    pub remaining_supply: u64,
}
