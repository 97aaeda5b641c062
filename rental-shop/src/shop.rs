use common::shop::types::{
    OwnerCapability, Shop, ShopDataKey as DataKey, ShopError as Error, ADMIN,
};
use soroban_sdk::{Address, Env};

use crate::storage::{get_data, get_persistent, has_data, next_id, store_persistent};

pub fn require_initialized(env: &Env) -> Result<(), Error> {
    if !has_data(env, &ADMIN) {
        return Err(Error::NotInitialized);
    }
    Ok(())
}

/// Allocates a fresh shop and its single owner capability, held by
/// `recipient`.
pub fn open_shop(env: &Env, recipient: &Address) -> (Shop, OwnerCapability) {
    let shop_id: u64 = next_id(env, &DataKey::ShopCount);
    let cap_id: u64 = next_id(env, &DataKey::CapabilityCount);

    let shop: Shop = Shop {
        id: shop_id,
        owner_capability_id: cap_id,
        earnings: 0,
        locked_deposits: 0,
        listed_count: 0,
        next_index: 0,
    };
    let capability: OwnerCapability = OwnerCapability {
        id: cap_id,
        shop_id,
        holder: recipient.clone(),
    };

    save_shop(env, &shop);
    store_persistent(env, &DataKey::Capability(cap_id), &capability);

    (shop, capability)
}

pub fn load_shop(env: &Env, shop_id: u64) -> Result<Shop, Error> {
    get_persistent(env, &DataKey::Shop(shop_id)).ok_or(Error::ShopNotFound)
}

pub fn save_shop(env: &Env, shop: &Shop) {
    store_persistent(env, &DataKey::Shop(shop.id), shop);
}

pub fn shop_count(env: &Env) -> u64 {
    get_data(env, &DataKey::ShopCount).unwrap_or(0)
}
