use cosmwasm_std::{Deps, StdResult};
use lockup::vesting::Config;

use crate::state::CONFIG;

/// Returns the schedule's full configuration, start date included
pub fn query_config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}
