use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

/// Narrow interface of the staking ledger the vesting system consumes.
/// The ledger's checkpoint/vote bookkeeping is its own concern.
#[cw_serde]
pub enum ExecuteMsg {
    /// Credit the sender's locked balance at the unlock_time bucket with
    /// the attached funds and add the same weight to delegate's votes
    DepositLocked {
        unlock_time: u64,
        delegate: String,
    },
    /// Return the sender's unvested balance to receiver
    GovernanceWithdraw {
        receiver: String,
    },
}

#[cw_serde]
pub enum QueryMsg {
    /// Total locked balance of a holder
    BalanceOf { holder: String },
    /// Locked balance of a holder at one unlock bucket
    LockedBalance { holder: String, unlock_time: u64 },
    /// Voting weight delegated to an account
    VotingWeight { delegate: String },
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct VotingWeightResponse {
    pub weight: Uint128,
}
