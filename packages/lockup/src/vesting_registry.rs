use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};

use crate::types::{VestingEntry, VestingInfo};

#[cw_serde]
pub struct InstantiateMsg {
    /// Contract owner, defaults to info.sender
    pub owner: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// One-time wiring of the registry's collaborators.
    /// Also grants the locked rewards contract admin rights so it can
    /// open schedules on behalf of users.
    Initialize {
        /// Code id the registry instantiates per-schedule contracts from
        vesting_code_id: u64,
        /// Denom of the vested token
        token_denom: String,
        /// Staking ledger contract address
        staking: String,
        /// Fee sharing contract address
        fee_sharing: String,
        /// Account entitled to governance withdrawals on team schedules
        vesting_owner: String,
        /// Locked rewards contract address
        locked_rewards: String,
    },
    /// Swap the code id used for future schedule deployments
    SetVestingCode {
        code_id: u64,
    },
    AddAdmin {
        admin: String,
    },
    RemoveAdmin {
        admin: String,
    },
    /// Owner treasury escape hatch, moves registry-held tokens out
    TransferTokens {
        receiver: String,
        amount: Uint128,
    },
    /// Deploy (or look up) the schedule for (token_owner, cliff, duration).
    /// Funds move separately via StakeTokens; amount is informational.
    CreateVesting {
        token_owner: String,
        amount: Uint128,
        cliff: u64,
        duration: u64,
    },
    CreateTeamVesting {
        token_owner: String,
        amount: Uint128,
        cliff: u64,
        duration: u64,
    },
    /// Push amount from the registry's balance into a schedule's
    /// interval deposits
    StakeTokens {
        vesting: String,
        amount: Uint128,
    },
}

#[cw_serde]
pub enum QueryMsg {
    Config {},
    IsAdmin { account: String },
    VestingAddress { token_owner: String, cliff: u64, duration: u64 },
    TeamVestingAddress { token_owner: String, cliff: u64, duration: u64 },
    Vesting { vesting: String },
    VestingsOf { token_owner: String },
}

#[cw_serde]
pub struct Config {
    pub vesting_code_id: u64,
    pub token_denom: String,
    pub staking: Addr,
    pub fee_sharing: Addr,
    pub vesting_owner: Addr,
    pub locked_rewards: Addr,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    /// None until Initialize has run
    pub config: Option<Config>,
}

#[cw_serde]
pub struct AdminResponse {
    pub is_admin: bool,
}

#[cw_serde]
pub struct AddressResponse {
    /// None if no schedule exists for the identity
    pub vesting: Option<Addr>,
}

#[cw_serde]
pub struct VestingResponse {
    pub vesting: Addr,
    pub info: VestingInfo,
}

#[cw_serde]
pub struct VestingsOfResponse {
    /// In creation order; empty if the owner has no schedules
    pub vestings: Vec<VestingEntry>,
}
