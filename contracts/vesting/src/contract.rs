#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    attr, coins, to_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;

use lockup::staking::ExecuteMsg as StakingExecuteMsg;
use lockup::types::{VestingType, INTERVAL_LENGTH};
use lockup::vesting::{Config, ExecuteMsg, InstantiateMsg, QueryMsg};

use crate::error::ContractError;
use crate::query::query_config;
use crate::state::CONFIG;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:vesting";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let config = Config {
        //The deploying registry administers this schedule
        registry: info.sender,
        token_owner: deps.api.addr_validate(&msg.token_owner)?,
        cliff: msg.cliff,
        duration: msg.duration,
        start_date: env.block.time.seconds(),
        vesting_type: msg.vesting_type,
        token_denom: msg.token_denom,
        staking: deps.api.addr_validate(&msg.staking)?,
        fee_sharing: deps.api.addr_validate(&msg.fee_sharing)?,
        vesting_owner: deps.api.addr_validate(&msg.vesting_owner)?,
    };

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("config", format!("{:?}", config))
        .add_attribute("contract_address", env.contract.address))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Stake {} => stake(deps, info),
        ExecuteMsg::GovernanceWithdrawTokens { receiver } => {
            governance_withdraw_tokens(deps, info, receiver)
        }
    }
}

/// Splits the attached funds across the schedule's lock intervals and
/// deposits each slice into the staking ledger, delegating the voting
/// weight to the token owner
fn stake(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    //Only the registry moves funds into the ledger
    if info.sender != config.registry {
        return Err(ContractError::Unauthorized {});
    }

    //The attached funds are the staked amount
    let amount = info
        .funds
        .iter()
        .find(|coin| coin.denom == config.token_denom)
        .map(|coin| coin.amount)
        .unwrap_or_else(Uint128::zero);
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {});
    }

    let deposits = compute_interval_deposits(
        config.start_date,
        config.cliff,
        config.duration,
        amount,
    )?;

    let deposit_msgs = deposits
        .iter()
        .map(|(unlock_time, deposit)| {
            Ok(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: config.staking.to_string(),
                msg: to_binary(&StakingExecuteMsg::DepositLocked {
                    unlock_time: *unlock_time,
                    delegate: config.token_owner.to_string(),
                })?,
                funds: coins(deposit.u128(), config.token_denom.clone()),
            }))
        })
        .collect::<StdResult<Vec<CosmosMsg>>>()?;

    Ok(Response::new().add_messages(deposit_msgs).add_attributes(vec![
        attr("method", "stake"),
        attr("amount", amount),
        attr("intervals", deposits.len().to_string()),
    ]))
}

/// Returns the (unlock_time, amount) deposit for every interval boundary
/// between start_date + cliff and start_date + duration, inclusive. The
/// integer-division remainder is absorbed by the first interval so the
/// deposits sum to amount exactly. Zero deposits are dropped.
pub fn compute_interval_deposits(
    start_date: u64,
    cliff: u64,
    duration: u64,
    amount: Uint128,
) -> Result<Vec<(u64, Uint128)>, ContractError> {
    let start = start_date + cliff;
    let end = start_date + duration;
    if end < start {
        return Err(ContractError::InvalidSchedule {});
    }

    let num_intervals = (end - start) / INTERVAL_LENGTH + 1;
    let per_interval = amount.u128() / num_intervals as u128;
    let first_interval = amount.u128() - per_interval * (num_intervals as u128 - 1);

    let mut deposits = vec![];
    let mut unlock_time = start;
    while unlock_time <= end {
        let deposit = if unlock_time == start {
            first_interval
        } else {
            per_interval
        };
        if deposit != 0 {
            deposits.push((unlock_time, Uint128::new(deposit)));
        }
        unlock_time += INTERVAL_LENGTH;
    }

    Ok(deposits)
}

/// Reclaims unvested tokens back to governance. Permanently disabled on
/// Regular schedules; on Team schedules only the configured vesting owner
/// may call
fn governance_withdraw_tokens(
    deps: DepsMut,
    info: MessageInfo,
    receiver: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.vesting_type == VestingType::Regular {
        return Err(ContractError::OperationNotSupported {});
    }
    if info.sender != config.vesting_owner {
        return Err(ContractError::Unauthorized {});
    }
    if receiver.is_empty() {
        return Err(ContractError::InvalidAddress {
            label: String::from("receiver"),
        });
    }
    let valid_receiver = deps.api.addr_validate(&receiver)?;

    let withdraw_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.staking.to_string(),
        msg: to_binary(&StakingExecuteMsg::GovernanceWithdraw {
            receiver: valid_receiver.to_string(),
        })?,
        funds: vec![],
    });

    Ok(Response::new().add_message(withdraw_msg).add_attributes(vec![
        attr("method", "governance_withdraw_tokens"),
        attr("receiver", valid_receiver),
    ]))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
    }
}
