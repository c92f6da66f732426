use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use lockup::types::{VestingEntry, VestingInfo, VestingType};
use lockup::vesting_registry::Config;

pub const OWNER: Item<Addr> = Item::new("owner");
pub const ADMINS: Map<Addr, bool> = Map::new("admins");

//Collaborator wiring, absent until Initialize has run
pub const CONFIG: Item<Config> = Item::new("config");

//Identity -> instance address, one map per schedule variant.
//Key: (token_owner, cliff, duration)
pub const VESTINGS: Map<(String, u64, u64), Addr> = Map::new("vestings");
pub const TEAM_VESTINGS: Map<(String, u64, u64), Addr> = Map::new("team_vestings");

//Authoritative schedule records, keyed by instance address
pub const VESTING_INFO: Map<Addr, VestingInfo> = Map::new("vesting_info");

//Per-owner index of created schedules, append-only in creation order
pub const VESTINGS_OF: Map<Addr, Vec<VestingEntry>> = Map::new("vestings_of");

//Creation arguments carried across the deploy submessage into its reply
pub const PENDING_VESTING: Item<PendingVesting> = Item::new("pending_vesting");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct PendingVesting {
    pub token_owner: Addr,
    pub amount: Uint128,
    pub cliff: u64,
    pub duration: u64,
    pub vesting_type: VestingType,
}
