use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Uint128};

/// Length of a staking ledger lock bucket: 4 weeks, in seconds.
/// Every locked deposit lands on a multiple of this interval.
pub const INTERVAL_LENGTH: u64 = 4 * 7 * 24 * 60 * 60;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VestingType {
    /// Token owner's claim is unconditional once staked
    Regular,
    /// Vesting owner can reclaim unvested tokens
    Team,
}

//Row of the per-owner vesting index, recorded at creation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct VestingEntry {
    pub vesting: Addr,
    pub cliff: u64,
    pub duration: u64,
}

/// Authoritative record of a deployed vesting schedule
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct VestingInfo {
    pub token_owner: Addr,
    pub cliff: u64,
    pub duration: u64,
    pub vesting_type: VestingType,
    /// Block time the schedule was deployed at, fixes interval boundaries
    pub start_date: u64,
    /// Cumulative tokens pushed into the schedule via StakeTokens
    pub funded_amount: Uint128,
}
