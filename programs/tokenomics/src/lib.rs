pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use instructions::*;

declare_id!("8Z7ENXjPypbDJVM3RAgkqVWkYoCBZmLJvrLHxQkz5Sck");

#[program]
pub mod tokenomics {
    use super::*;

    // --- Supply manager ---

    pub fn initialize_supply(ctx: Context<InitializeSupply>, max_supply: u64) -> Result<()> {
        instructions::initialize_supply::initialize_supply(ctx, max_supply)
    }

    pub fn pause_supply(ctx: Context<PauseSupply>) -> Result<()> {
        instructions::pause_supply::pause_supply(ctx)
    }

    pub fn unpause_supply(ctx: Context<UnpauseSupply>) -> Result<()> {
        instructions::unpause_supply::unpause_supply(ctx)
    }

    pub fn transfer_supply_admin(
        ctx: Context<TransferSupplyAdmin>,
        new_admin: Pubkey,
    ) -> Result<()> {
        instructions::transfer_supply_admin::transfer_supply_admin(ctx, new_admin)
    }

    pub fn mint_tokens(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
        instructions::mint_tokens::mint_tokens(ctx, amount)
    }

    pub fn mint_batch<'info>(
        ctx: Context<'_, '_, 'info, 'info, MintBatch<'info>>,
        amounts: Vec<u64>,
        recipients: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::mint_batch::mint_batch(ctx, amounts, recipients)
    }

    pub fn burn_tokens(ctx: Context<BurnTokens>, amount: u64) -> Result<()> {
        instructions::burn_tokens::burn_tokens(ctx, amount)
    }

    pub fn emit_supply_quote(ctx: Context<EmitSupplyQuote>) -> Result<()> {
        instructions::emit_supply_quote::emit_supply_quote(ctx)
    }

    // --- Reward pool ---

    pub fn create_pool(ctx: Context<CreatePool>) -> Result<()> {
        instructions::create_pool::create_pool(ctx)
    }

    pub fn fund_pool(ctx: Context<FundPool>, amount: u64) -> Result<()> {
        instructions::fund_pool::fund_pool(ctx, amount)
    }

    pub fn distribute_reward(ctx: Context<DistributeReward>, amount: u64) -> Result<()> {
        instructions::distribute_reward::distribute_reward(ctx, amount)
    }

    pub fn distribute_batch<'info>(
        ctx: Context<'_, '_, '_, 'info, DistributeBatch<'info>>,
        amounts: Vec<u64>,
        recipients: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::distribute_batch::distribute_batch(ctx, amounts, recipients)
    }

    pub fn withdraw_pool(ctx: Context<WithdrawPool>, amount: u64) -> Result<()> {
        instructions::withdraw_pool::withdraw_pool(ctx, amount)
    }

    pub fn transfer_pool_admin(
        ctx: Context<TransferPoolAdmin>,
        new_admin: Pubkey,
    ) -> Result<()> {
        instructions::transfer_pool_admin::transfer_pool_admin(ctx, new_admin)
    }

    // --- Vesting engine ---

    pub fn create_registry(ctx: Context<CreateRegistry>) -> Result<()> {
        instructions::create_registry::create_registry(ctx)
    }

    pub fn create_schedule(
        ctx: Context<CreateSchedule>,
        amount: u64,
        start_time: u64,
        cliff_duration: u64,
        vesting_duration: u64,
        revocable: bool,
    ) -> Result<()> {
        instructions::create_schedule::create_schedule(
            ctx,
            amount,
            start_time,
            cliff_duration,
            vesting_duration,
            revocable,
        )
    }

    pub fn release(ctx: Context<Release>) -> Result<()> {
        instructions::release::release(ctx)
    }

    pub fn revoke(ctx: Context<Revoke>) -> Result<()> {
        instructions::revoke::revoke(ctx)
    }

    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>) -> Result<()> {
        instructions::emit_vesting_quote::emit_vesting_quote(ctx)
    }
}
