use anchor_lang::prelude::*;

/// Issuance policy PDA for one mint. The PDA itself is the mint authority;
/// every mint goes through this program and is checked against `max_supply`.
/// `minted_total` is not duplicated here: the SPL mint's `supply` field is
/// authoritative.
#[account]
pub struct SupplyConfig {
    /// Token mint governed by this config.
    pub mint: Pubkey,
    /// Admin authority for mint/burn/pause.
    pub admin: Pubkey,
    /// Hard cap on `mint.supply`, in base units.
    pub max_supply: u64,
    /// Pause flag; blocks minting only, burning stays allowed.
    pub paused: bool,
}

impl SupplyConfig {
    pub const SIZE: usize =
        32 + // mint
        32 + // admin
        8 +  // max_supply
        1;   // paused
}
