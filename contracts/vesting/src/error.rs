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

    #[error("amount invalid")]
    InvalidAmount {},

    #[error("duration must be bigger than or equal to the cliff")]
    InvalidSchedule {},

    #[error("operation not supported")]
    OperationNotSupported {},
}
