use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized")]
    Unauthorized {},

    #[error("{label} address invalid")]
    InvalidAddress { label: String },

    #[error("vesting code id invalid")]
    InvalidCode {},

    #[error("token denom invalid")]
    InvalidDenom {},

    #[error("amount invalid")]
    InvalidAmount {},

    #[error("contract is already initialized")]
    AlreadyInitialized {},

    #[error("contract is not initialized")]
    NotInitialized {},

    #[error("vesting address is not registered")]
    UnregisteredVesting {},

    #[error("insufficient funds to stake")]
    InsufficientFunds {},
}
