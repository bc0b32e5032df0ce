pub mod initialize_supply;
pub mod pause_supply;
pub mod unpause_supply;
pub mod transfer_supply_admin;
pub mod mint_tokens;
pub mod mint_batch;
pub mod burn_tokens;
pub mod emit_supply_quote;
pub mod create_pool;
pub mod fund_pool;
pub mod distribute_reward;
pub mod distribute_batch;
pub mod withdraw_pool;
pub mod transfer_pool_admin;
pub mod create_registry;
pub mod create_schedule;
pub mod release;
pub mod revoke;
pub mod emit_vesting_quote;

pub use initialize_supply::*;
pub use pause_supply::*;
pub use unpause_supply::*;
pub use transfer_supply_admin::*;
pub use mint_tokens::*;
pub use mint_batch::*;
pub use burn_tokens::*;
pub use emit_supply_quote::*;
pub use create_pool::*;
pub use fund_pool::*;
pub use distribute_reward::*;
pub use distribute_batch::*;
pub use withdraw_pool::*;
pub use transfer_pool_admin::*;
pub use create_registry::*;
pub use create_schedule::*;
pub use release::*;
pub use revoke::*;
pub use emit_vesting_quote::*;
