pub mod auth;
pub mod contract;
mod error;
pub mod helpers;
pub mod query;
pub mod reply;
pub mod state;

pub use crate::error::ContractError;
