pub mod reward_pool;
pub mod supply;
pub mod vesting;

pub use reward_pool::*;
pub use supply::*;
pub use vesting::*;
