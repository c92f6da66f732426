use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::Addr;

use crate::types::VestingType;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct InstantiateMsg {
    pub token_owner: String,
    pub cliff: u64,
    pub duration: u64,
    pub vesting_type: VestingType,
    pub token_denom: String,
    pub staking: String,
    pub fee_sharing: String,
    pub vesting_owner: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Registry-only. Splits the attached funds across the schedule's
    /// lock intervals and deposits them into the staking ledger.
    Stake {},
    /// Reclaim unvested tokens back to governance. Disabled on Regular
    /// schedules; vesting-owner-only on Team schedules.
    GovernanceWithdrawTokens { receiver: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Config {
    /// Registry that deployed this schedule, the only account allowed to stake
    pub registry: Addr,
    pub token_owner: Addr,
    pub cliff: u64,
    pub duration: u64,
    /// Fixed at deployment, never moves
    pub start_date: u64,
    pub vesting_type: VestingType,
    pub token_denom: String,
    pub staking: Addr,
    pub fee_sharing: Addr,
    pub vesting_owner: Addr,
}
