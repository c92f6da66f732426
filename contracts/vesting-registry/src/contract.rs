#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    attr, coins, to_binary, BankMsg, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Reply,
    Response, StdResult, SubMsg, Uint128, WasmMsg,
};
use cw2::set_contract_version;

use lockup::types::VestingType;
use lockup::vesting::InstantiateMsg as VestingInstantiateMsg;
use lockup::vesting_registry::{Config, ExecuteMsg, InstantiateMsg, QueryMsg};

use crate::auth::{assert_owner, assert_owner_or_admin};
use crate::error::ContractError;
use crate::query::{
    query_config, query_is_admin, query_vesting, query_vesting_address, query_vestings_of,
};
use crate::reply::handle_deploy_vesting_reply;
use crate::state::{
    PendingVesting, ADMINS, CONFIG, OWNER, PENDING_VESTING, TEAM_VESTINGS, VESTINGS, VESTING_INFO,
};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:vesting-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEPLOY_VESTING_REPLY_ID: u64 = 1u64;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let mut owner = info.sender;
    if let Some(address) = msg.owner {
        owner = deps.api.addr_validate(&address)?;
    };

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    OWNER.save(deps.storage, &owner)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("contract_address", env.contract.address))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Initialize {
            vesting_code_id,
            token_denom,
            staking,
            fee_sharing,
            vesting_owner,
            locked_rewards,
        } => initialize(
            deps,
            info,
            vesting_code_id,
            token_denom,
            staking,
            fee_sharing,
            vesting_owner,
            locked_rewards,
        ),
        ExecuteMsg::SetVestingCode { code_id } => set_vesting_code(deps, info, code_id),
        ExecuteMsg::AddAdmin { admin } => add_admin(deps, info, admin),
        ExecuteMsg::RemoveAdmin { admin } => remove_admin(deps, info, admin),
        ExecuteMsg::TransferTokens { receiver, amount } => {
            transfer_tokens(deps, info, receiver, amount)
        }
        ExecuteMsg::CreateVesting {
            token_owner,
            amount,
            cliff,
            duration,
        } => create_vesting_of_type(
            deps,
            env,
            info,
            token_owner,
            amount,
            cliff,
            duration,
            VestingType::Regular,
        ),
        ExecuteMsg::CreateTeamVesting {
            token_owner,
            amount,
            cliff,
            duration,
        } => create_vesting_of_type(
            deps,
            env,
            info,
            token_owner,
            amount,
            cliff,
            duration,
            VestingType::Team,
        ),
        ExecuteMsg::StakeTokens { vesting, amount } => {
            stake_tokens(deps, env, info, vesting, amount)
        }
    }
}

/// One-time wiring of the registry's collaborators. Each handle is checked
/// independently so a misconfigured deployment names the bad argument.
/// The locked rewards contract is granted admin rights so it can open
/// schedules for users without being the owner.
#[allow(clippy::too_many_arguments)]
fn initialize(
    deps: DepsMut,
    info: MessageInfo,
    vesting_code_id: u64,
    token_denom: String,
    staking: String,
    fee_sharing: String,
    vesting_owner: String,
    locked_rewards: String,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    if CONFIG.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized {});
    }

    if vesting_code_id == 0 {
        return Err(ContractError::InvalidCode {});
    }
    if token_denom.is_empty() {
        return Err(ContractError::InvalidDenom {});
    }
    let config = Config {
        vesting_code_id,
        token_denom,
        staking: validate_addr(deps.as_ref(), &staking, "staking")?,
        fee_sharing: validate_addr(deps.as_ref(), &fee_sharing, "fee sharing")?,
        vesting_owner: validate_addr(deps.as_ref(), &vesting_owner, "vesting owner")?,
        locked_rewards: validate_addr(deps.as_ref(), &locked_rewards, "locked rewards")?,
    };

    CONFIG.save(deps.storage, &config)?;
    ADMINS.save(deps.storage, config.locked_rewards.clone(), &true)?;

    Ok(Response::new()
        .add_attribute("method", "initialize")
        .add_attribute("config", format!("{:?}", config)))
}

fn validate_addr(deps: Deps, address: &str, label: &str) -> Result<cosmwasm_std::Addr, ContractError> {
    if address.is_empty() {
        return Err(ContractError::InvalidAddress {
            label: String::from(label),
        });
    }
    deps.api
        .addr_validate(address)
        .map_err(|_| ContractError::InvalidAddress {
            label: String::from(label),
        })
}

/// Swaps the code id used for future schedule deployments. Already
/// deployed schedules keep running the code they were deployed with.
fn set_vesting_code(
    deps: DepsMut,
    info: MessageInfo,
    code_id: u64,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    if code_id == 0 {
        return Err(ContractError::InvalidCode {});
    }

    let mut config = CONFIG.load(deps.storage).map_err(|_| ContractError::NotInitialized {})?;
    config.vesting_code_id = code_id;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_vesting_code")
        .add_attribute("code_id", code_id.to_string()))
}

//Adding an existing admin is a silent no-op on purpose, scripted admin
//rotation replays grants
fn add_admin(deps: DepsMut, info: MessageInfo, admin: String) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let valid_admin = validate_addr(deps.as_ref(), &admin, "admin")?;
    ADMINS.save(deps.storage, valid_admin.clone(), &true)?;

    Ok(Response::new().add_attributes(vec![
        attr("method", "add_admin"),
        attr("admin", valid_admin),
    ]))
}

//Removing a non-admin is likewise a silent no-op
fn remove_admin(
    deps: DepsMut,
    info: MessageInfo,
    admin: String,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let valid_admin = deps.api.addr_validate(&admin)?;
    ADMINS.remove(deps.storage, valid_admin.clone());

    Ok(Response::new().add_attributes(vec![
        attr("method", "remove_admin"),
        attr("admin", valid_admin),
    ]))
}

/// Owner treasury escape hatch, moves registry-held tokens out. Unrelated
/// to the schedule machinery.
fn transfer_tokens(
    deps: DepsMut,
    info: MessageInfo,
    receiver: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let valid_receiver = validate_addr(deps.as_ref(), &receiver, "receiver")?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {});
    }
    let config = CONFIG.load(deps.storage).map_err(|_| ContractError::NotInitialized {})?;

    let transfer_msg = CosmosMsg::Bank(BankMsg::Send {
        to_address: valid_receiver.to_string(),
        amount: coins(amount.u128(), config.token_denom),
    });

    Ok(Response::new().add_message(transfer_msg).add_attributes(vec![
        attr("method", "transfer_tokens"),
        attr("receiver", valid_receiver),
        attr("amount", amount),
    ]))
}

/// Shared creation path for both schedule variants. Repeated creation for
/// the same (token_owner, cliff, duration, variant) is a pure lookup: the
/// recorded address is re-announced and nothing is deployed or indexed.
/// First creation deploys the schedule via a submessage; the registry's
/// records are written in the reply once the address is known.
#[allow(clippy::too_many_arguments)]
fn create_vesting_of_type(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_owner: String,
    amount: Uint128,
    cliff: u64,
    duration: u64,
    vesting_type: VestingType,
) -> Result<Response, ContractError> {
    assert_owner_or_admin(deps.storage, &info.sender)?;

    let valid_owner = validate_addr(deps.as_ref(), &token_owner, "token owner")?;
    let config = CONFIG.load(deps.storage).map_err(|_| ContractError::NotInitialized {})?;

    let lookup = match vesting_type {
        VestingType::Regular => VESTINGS,
        VestingType::Team => TEAM_VESTINGS,
    };
    if let Some(existing) =
        lookup.may_load(deps.storage, (valid_owner.to_string(), cliff, duration))?
    {
        return Ok(Response::new().add_attributes(creation_attrs(
            vesting_type,
            &valid_owner,
            &existing,
            cliff,
            duration,
            amount,
        )));
    }

    PENDING_VESTING.save(
        deps.storage,
        &PendingVesting {
            token_owner: valid_owner.clone(),
            amount,
            cliff,
            duration,
            vesting_type,
        },
    )?;

    //The registry administers every schedule it deploys
    let deploy_msg = SubMsg::reply_on_success(
        WasmMsg::Instantiate {
            admin: Some(env.contract.address.to_string()),
            code_id: config.vesting_code_id,
            msg: to_binary(&VestingInstantiateMsg {
                token_owner: valid_owner.to_string(),
                cliff,
                duration,
                vesting_type,
                token_denom: config.token_denom,
                staking: config.staking.to_string(),
                fee_sharing: config.fee_sharing.to_string(),
                vesting_owner: config.vesting_owner.to_string(),
            })?,
            funds: vec![],
            label: format!("vesting: {}", valid_owner),
        },
        DEPLOY_VESTING_REPLY_ID,
    );

    Ok(Response::new().add_submessage(deploy_msg))
}

pub fn creation_attrs(
    vesting_type: VestingType,
    token_owner: &cosmwasm_std::Addr,
    vesting: &cosmwasm_std::Addr,
    cliff: u64,
    duration: u64,
    amount: Uint128,
) -> Vec<cosmwasm_std::Attribute> {
    let method = match vesting_type {
        VestingType::Regular => "create_vesting",
        VestingType::Team => "create_team_vesting",
    };
    vec![
        attr("method", method),
        attr("token_owner", token_owner),
        attr("vesting", vesting),
        attr("cliff", cliff.to_string()),
        attr("duration", duration.to_string()),
        attr("amount", amount),
    ]
}

/// Moves amount from the registry's balance into a schedule's interval
/// deposits. The registry must already hold the tokens; nothing is staked
/// against an address the registry didn't deploy.
fn stake_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    vesting: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_owner_or_admin(deps.storage, &info.sender)?;

    let valid_vesting = validate_addr(deps.as_ref(), &vesting, "vesting")?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {});
    }
    let config = CONFIG.load(deps.storage).map_err(|_| ContractError::NotInitialized {})?;

    let mut vesting_info = VESTING_INFO
        .may_load(deps.storage, valid_vesting.clone())?
        .ok_or(ContractError::UnregisteredVesting {})?;

    //Hard funding precondition, never partially staked
    let balance = deps
        .querier
        .query_balance(env.contract.address, config.token_denom.clone())?;
    if balance.amount < amount {
        return Err(ContractError::InsufficientFunds {});
    }

    //Reverted along with the transaction if any interval deposit fails
    vesting_info.funded_amount += amount;
    VESTING_INFO.save(deps.storage, valid_vesting.clone(), &vesting_info)?;

    let stake_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: valid_vesting.to_string(),
        msg: to_binary(&lockup::vesting::ExecuteMsg::Stake {})?,
        funds: coins(amount.u128(), config.token_denom),
    });

    Ok(Response::new().add_message(stake_msg).add_attributes(vec![
        attr("method", "stake_tokens"),
        attr("vesting", valid_vesting),
        attr("amount", amount),
    ]))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        DEPLOY_VESTING_REPLY_ID => handle_deploy_vesting_reply(deps, env, msg),
        id => Err(ContractError::Std(cosmwasm_std::StdError::generic_err(
            format!("invalid reply id: {}", id),
        ))),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::IsAdmin { account } => to_binary(&query_is_admin(deps, account)?),
        QueryMsg::VestingAddress {
            token_owner,
            cliff,
            duration,
        } => to_binary(&query_vesting_address(
            deps,
            token_owner,
            cliff,
            duration,
            VestingType::Regular,
        )?),
        QueryMsg::TeamVestingAddress {
            token_owner,
            cliff,
            duration,
        } => to_binary(&query_vesting_address(
            deps,
            token_owner,
            cliff,
            duration,
            VestingType::Team,
        )?),
        QueryMsg::Vesting { vesting } => to_binary(&query_vesting(deps, vesting)?),
        QueryMsg::VestingsOf { token_owner } => to_binary(&query_vestings_of(deps, token_owner)?),
    }
}
