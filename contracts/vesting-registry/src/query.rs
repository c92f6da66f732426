use cosmwasm_std::{Deps, StdError, StdResult};

use lockup::types::VestingType;
use lockup::vesting_registry::{
    AddressResponse, AdminResponse, ConfigResponse, VestingResponse, VestingsOfResponse,
};

use crate::state::{ADMINS, CONFIG, OWNER, TEAM_VESTINGS, VESTINGS, VESTINGS_OF, VESTING_INFO};

/// Returns the registry owner and, once initialized, the collaborator wiring
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    Ok(ConfigResponse {
        owner: OWNER.load(deps.storage)?,
        config: CONFIG.may_load(deps.storage)?,
    })
}

pub fn query_is_admin(deps: Deps, account: String) -> StdResult<AdminResponse> {
    let valid_account = deps.api.addr_validate(&account)?;
    Ok(AdminResponse {
        is_admin: ADMINS
            .may_load(deps.storage, valid_account)?
            .unwrap_or(false),
    })
}

/// Identity -> address lookup; None if no schedule exists for the identity
pub fn query_vesting_address(
    deps: Deps,
    token_owner: String,
    cliff: u64,
    duration: u64,
    vesting_type: VestingType,
) -> StdResult<AddressResponse> {
    let valid_owner = deps.api.addr_validate(&token_owner)?;
    let lookup = match vesting_type {
        VestingType::Regular => VESTINGS,
        VestingType::Team => TEAM_VESTINGS,
    };

    Ok(AddressResponse {
        vesting: lookup.may_load(deps.storage, (valid_owner.to_string(), cliff, duration))?,
    })
}

/// Returns the authoritative record of a deployed schedule
pub fn query_vesting(deps: Deps, vesting: String) -> StdResult<VestingResponse> {
    let valid_vesting = deps.api.addr_validate(&vesting)?;

    match VESTING_INFO.may_load(deps.storage, valid_vesting.clone())? {
        Some(info) => Ok(VestingResponse {
            vesting: valid_vesting,
            info,
        }),
        None => Err(StdError::GenericErr {
            msg: String::from("vesting address is not registered"),
        }),
    }
}

/// Returns the owner's schedules in creation order; empty if none
pub fn query_vestings_of(deps: Deps, token_owner: String) -> StdResult<VestingsOfResponse> {
    let valid_owner = deps.api.addr_validate(&token_owner)?;

    Ok(VestingsOfResponse {
        vestings: VESTINGS_OF
            .may_load(deps.storage, valid_owner)?
            .unwrap_or_default(),
    })
}
