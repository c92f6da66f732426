use cosmwasm_std::{DepsMut, Env, Reply, Response};
use cw_utils::parse_reply_instantiate_data;

use lockup::types::{VestingEntry, VestingInfo, VestingType};

use crate::contract::creation_attrs;
use crate::error::ContractError;
use crate::state::{PENDING_VESTING, TEAM_VESTINGS, VESTINGS, VESTINGS_OF, VESTING_INFO};

/// Finishes a schedule creation once the deploy submessage has reported
/// the new address: records the identity lookup, the authoritative
/// schedule record and the per-owner index row, then announces the
/// creation. Runs in the same transaction as the deploy, so a failure
/// here unwinds the deployment as well.
pub fn handle_deploy_vesting_reply(
    deps: DepsMut,
    env: Env,
    msg: Reply,
) -> Result<Response, ContractError> {
    let pending = PENDING_VESTING.load(deps.storage)?;

    let res = parse_reply_instantiate_data(msg)
        .map_err(|err| cosmwasm_std::StdError::generic_err(err.to_string()))?;
    let vesting = deps.api.addr_validate(&res.contract_address)?;

    let lookup = match pending.vesting_type {
        VestingType::Regular => VESTINGS,
        VestingType::Team => TEAM_VESTINGS,
    };
    lookup.save(
        deps.storage,
        (pending.token_owner.to_string(), pending.cliff, pending.duration),
        &vesting,
    )?;

    VESTING_INFO.save(
        deps.storage,
        vesting.clone(),
        &VestingInfo {
            token_owner: pending.token_owner.clone(),
            cliff: pending.cliff,
            duration: pending.duration,
            vesting_type: pending.vesting_type,
            start_date: env.block.time.seconds(),
            funded_amount: cosmwasm_std::Uint128::zero(),
        },
    )?;

    let mut entries = VESTINGS_OF
        .may_load(deps.storage, pending.token_owner.clone())?
        .unwrap_or_default();
    entries.push(VestingEntry {
        vesting: vesting.clone(),
        cliff: pending.cliff,
        duration: pending.duration,
    });
    VESTINGS_OF.save(deps.storage, pending.token_owner.clone(), &entries)?;

    PENDING_VESTING.remove(deps.storage);

    Ok(Response::new().add_attributes(creation_attrs(
        pending.vesting_type,
        &pending.token_owner,
        &vesting,
        pending.cliff,
        pending.duration,
        pending.amount,
    )))
}
