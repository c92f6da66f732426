use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::state::{ADMINS, OWNER};

/// Fails unless the sender is the registry owner
pub fn assert_owner(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    if *sender != OWNER.load(storage)? {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

/// Fails unless the sender is the registry owner or an admin
pub fn assert_owner_or_admin(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    if *sender == OWNER.load(storage)? {
        return Ok(());
    }
    if ADMINS.may_load(storage, sender.clone())?.unwrap_or(false) {
        return Ok(());
    }
    Err(ContractError::Unauthorized {})
}
