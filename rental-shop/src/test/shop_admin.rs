#![cfg(test)]

use super::{RentalShopTest, PRICE};
use crate::{Category, OwnerCapability, Shop};
use common::shop::types::{ErrorKind, ListingRecord, ShopError};
use soroban_sdk::{log, testutils::Events, Env, String};

#[test]
pub fn test_initialize_twice_fails() {
    let test: RentalShopTest = RentalShopTest::setup();

    let result = test
        .client
        .try_initialize(&test.admin, &test.token_client.address);
    assert_eq!(result, Err(Ok(ShopError::AlreadyInitialized)));
    assert_eq!(test.client.get_payment_token(), test.token_client.address);
    assert_eq!(test.client.get_deposit(), 10_0_000_000);
}

#[test]
pub fn test_shop_operations_require_initialization() {
    let test: RentalShopTest = RentalShopTest::setup_no_init(Env::default());

    assert_eq!(
        test.client.try_create_shop(&test.alice),
        Err(Ok(ShopError::NotInitialized))
    );
    assert_eq!(
        test.client.try_get_payment_token(),
        Err(Ok(ShopError::NotInitialized))
    );
}

#[test]
pub fn test_create_shop() {
    let test: RentalShopTest = RentalShopTest::setup();

    let (shop_id, cap_id) = test.client.create_shop(&test.alice);
    log!(&test.env, "{}", test.env.events().all());

    let (name, payload) = test.last_event();
    assert_eq!(name, String::from_str(&test.env, "ShopCreated"));
    assert_eq!(test.event_u64(&payload, 0), shop_id);
    assert_eq!(test.event_u64(&payload, 1), cap_id);
    assert_eq!(test.event_address(&payload, 2), test.alice);

    let shop: Shop = test.client.get_shop(&shop_id);
    assert_eq!(shop.owner_capability_id, cap_id);
    assert_eq!(shop.earnings, 0);
    assert_eq!(shop.locked_deposits, 0);
    assert_eq!(shop.listed_count, 0);
    assert_eq!(shop.next_index, 0);
    assert_eq!(test.client.get_listings(&shop_id).len(), 0);

    let capability: OwnerCapability = test.client.get_capability(&cap_id);
    assert_eq!(capability.shop_id, shop_id);
    assert_eq!(capability.holder, test.alice);

    let (other_shop, other_cap) = test.client.create_shop(&test.alice);
    assert_ne!(other_shop, shop_id);
    assert_ne!(other_cap, cap_id);
    assert_eq!(test.client.get_shop_count(), 2);
}

#[test]
pub fn test_add_item() {
    let test: RentalShopTest = RentalShopTest::setup();
    let (shop_id, cap_id) = test.client.create_shop(&test.alice);

    let index: u64 = test.add_item(shop_id, cap_id, PRICE);
    assert_eq!(index, 0);
    assert_eq!(test.env.auths()[0].0, test.alice);

    let (name, payload) = test.last_event();
    assert_eq!(name, String::from_str(&test.env, "ItemAdded"));
    assert_eq!(test.event_u64(&payload, 0), shop_id);
    assert_eq!(test.event_u64(&payload, 1), 0);

    let second: u64 = test.client.add_item(
        &shop_id,
        &cap_id,
        &String::from_str(&test.env, "Camping tent"),
        &String::from_str(&test.env, ""),
        &2_500i128,
        &Category::Outdoor,
    );
    assert_eq!(second, 1);

    let listing: ListingRecord = test.client.get_listing(&shop_id, &second);
    assert_eq!(listing.index, 1);
    assert_eq!(listing.price, 2_500);
    assert_eq!(listing.category, Category::Outdoor);
    assert!(listing.listed);
    assert!(!listing.rented);

    let shop: Shop = test.client.get_shop(&shop_id);
    assert_eq!(shop.next_index, 2);
    assert_eq!(shop.listed_count, 2);
    test.assert_listed_count_consistent(shop_id);
}

#[test]
pub fn test_add_item_validates_price_and_metadata() {
    let test: RentalShopTest = RentalShopTest::setup();
    let (shop_id, cap_id) = test.client.create_shop(&test.alice);
    let title = String::from_str(&test.env, "Kayak");
    let description = String::from_str(&test.env, "Two seats");

    for price in [0i128, -5i128] {
        let result = test.client.try_add_item(
            &shop_id,
            &cap_id,
            &title,
            &description,
            &price,
            &Category::Sports,
        );
        assert_eq!(result, Err(Ok(ShopError::InvalidPrice)));
    }

    let result = test.client.try_add_item(
        &shop_id,
        &cap_id,
        &String::from_str(&test.env, ""),
        &description,
        &PRICE,
        &Category::Sports,
    );
    assert_eq!(result, Err(Ok(ShopError::InvalidMetadata)));

    let long_title = String::from_str(
        &test.env,
        "An inflatable two seat kayak with paddles, pump, dry bag and spray deck",
    );
    let result = test.client.try_add_item(
        &shop_id,
        &cap_id,
        &long_title,
        &description,
        &PRICE,
        &Category::Sports,
    );
    assert_eq!(result, Err(Ok(ShopError::InvalidMetadata)));

    let shop: Shop = test.client.get_shop(&shop_id);
    assert_eq!(shop.next_index, 0);
    assert_eq!(shop.listed_count, 0);
}

#[test]
pub fn test_foreign_capability_is_rejected() {
    let test: RentalShopTest = RentalShopTest::setup();
    let (shop_x, cap_x, _) = test.shop_with_item();
    let (shop_y, cap_y) = test.client.create_shop(&test.carol);
    let index_y: u64 = test.add_item(shop_y, cap_y, PRICE);
    let before: Shop = test.client.get_shop(&shop_y);

    let title = String::from_str(&test.env, "Projector");
    let result = test.client.try_add_item(
        &shop_y,
        &cap_x,
        &title,
        &title,
        &PRICE,
        &Category::Electronics,
    );
    assert_eq!(result, Err(Ok(ShopError::NotShopOwner)));
    assert_eq!(
        test.client.try_unlist_item(&shop_y, &cap_x, &index_y),
        Err(Ok(ShopError::NotShopOwner))
    );
    assert_eq!(
        test.client.try_list_item(&shop_y, &cap_x, &index_y),
        Err(Ok(ShopError::NotShopOwner))
    );
    assert_eq!(
        test.client
            .try_withdraw_from_shop(&shop_y, &cap_x, &1i128, &test.alice),
        Err(Ok(ShopError::NotShopOwner))
    );
    assert_eq!(
        test.client.try_unlist_item(&shop_y, &99u64, &index_y),
        Err(Ok(ShopError::InvalidCapability))
    );
    assert_eq!(ShopError::NotShopOwner.kind(), ErrorKind::Authorization);
    assert_eq!(ShopError::InvalidCapability.kind(), ErrorKind::Authorization);

    assert_eq!(test.client.get_shop(&shop_y), before);
    assert!(test.client.get_listing(&shop_y, &index_y).listed);
    assert_eq!(test.client.get_shop(&shop_x).next_index, 1);
}

#[test]
pub fn test_unlist_and_list_are_strict_toggles() {
    let test: RentalShopTest = RentalShopTest::setup();
    let (shop_id, cap_id, index) = test.shop_with_item();

    test.client.unlist_item(&shop_id, &cap_id, &index);
    let (name, payload) = test.last_event();
    assert_eq!(name, String::from_str(&test.env, "ItemUnlisted"));
    assert_eq!(test.event_u64(&payload, 1), index);
    assert!(!test.client.get_listing(&shop_id, &index).listed);
    assert_eq!(test.client.get_shop(&shop_id).listed_count, 0);

    // a second unlist must not drive the counter below the listed slots
    assert_eq!(
        test.client.try_unlist_item(&shop_id, &cap_id, &index),
        Err(Ok(ShopError::ItemIsNotListed))
    );
    assert_eq!(test.client.get_shop(&shop_id).listed_count, 0);

    test.client.list_item(&shop_id, &cap_id, &index);
    let (name, _) = test.last_event();
    assert_eq!(name, String::from_str(&test.env, "ItemListed"));
    assert!(test.client.get_listing(&shop_id, &index).listed);
    assert_eq!(test.client.get_shop(&shop_id).listed_count, 1);

    assert_eq!(
        test.client.try_list_item(&shop_id, &cap_id, &index),
        Err(Ok(ShopError::ItemAlreadyListed))
    );
    assert_eq!(test.client.get_shop(&shop_id).listed_count, 1);
    test.assert_listed_count_consistent(shop_id);
}

#[test]
pub fn test_toggle_unknown_index_fails() {
    let test: RentalShopTest = RentalShopTest::setup();
    let (shop_id, cap_id, _) = test.shop_with_item();

    assert_eq!(
        test.client.try_unlist_item(&shop_id, &cap_id, &7u64),
        Err(Ok(ShopError::InvalidItemId))
    );
    assert_eq!(
        test.client.try_list_item(&shop_id, &cap_id, &1u64),
        Err(Ok(ShopError::InvalidItemId))
    );
    assert_eq!(
        test.client.try_get_listing(&shop_id, &1u64),
        Err(Ok(ShopError::InvalidItemId))
    );
    assert_eq!(
        test.client.try_get_shop(&42u64),
        Err(Ok(ShopError::ShopNotFound))
    );
}

#[test]
pub fn test_capability_transfer_moves_authority() {
    let test: RentalShopTest = RentalShopTest::setup();
    let (shop_id, cap_id, _) = test.shop_with_item();

    test.client.transfer_capability(&cap_id, &test.carol);
    assert_eq!(test.env.auths()[0].0, test.alice);

    let (name, payload) = test.last_event();
    assert_eq!(name, String::from_str(&test.env, "CapabilityTransferred"));
    assert_eq!(test.event_u64(&payload, 0), shop_id);
    assert_eq!(test.event_address(&payload, 1), test.alice);
    assert_eq!(test.event_address(&payload, 2), test.carol);

    let capability: OwnerCapability = test.client.get_capability(&cap_id);
    assert_eq!(capability.holder, test.carol);
    assert_eq!(test.client.get_shop(&shop_id).owner_capability_id, cap_id);

    let index: u64 = test.add_item(shop_id, cap_id, PRICE);
    assert_eq!(index, 1);
    assert_eq!(test.env.auths()[0].0, test.carol);

    assert_eq!(
        test.client.try_transfer_capability(&77u64, &test.bob),
        Err(Ok(ShopError::InvalidCapability))
    );
}
