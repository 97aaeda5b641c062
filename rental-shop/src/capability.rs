use common::shop::types::{OwnerCapability, Shop, ShopDataKey as DataKey, ShopError as Error};
use soroban_sdk::{Address, Env};

use crate::storage::{get_persistent, store_persistent};

pub fn load_capability(env: &Env, cap_id: u64) -> Result<OwnerCapability, Error> {
    get_persistent(env, &DataKey::Capability(cap_id)).ok_or(Error::InvalidCapability)
}

/// Checks that `cap_id` is the capability bound to `shop` and that its
/// current holder authorized this invocation.
pub fn require_owner(env: &Env, shop: &Shop, cap_id: u64) -> Result<OwnerCapability, Error> {
    let capability: OwnerCapability = load_capability(env, cap_id)?;

    if capability.shop_id != shop.id || shop.owner_capability_id != capability.id {
        return Err(Error::NotShopOwner);
    }

    capability.holder.require_auth();
    Ok(capability)
}

/// Moves custody of a capability. Returns the updated record and the
/// previous holder.
pub fn transfer_capability(
    env: &Env,
    cap_id: u64,
    to: &Address,
) -> Result<(OwnerCapability, Address), Error> {
    let mut capability: OwnerCapability = load_capability(env, cap_id)?;
    capability.holder.require_auth();

    let from: Address = capability.holder.clone();
    capability.holder = to.clone();
    store_persistent(env, &DataKey::Capability(cap_id), &capability);

    Ok((capability, from))
}
