pub mod staking;
pub mod types;
pub mod vesting;
pub mod vesting_registry;
