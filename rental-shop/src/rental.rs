use common::shop::types::{
    ListingRecord, RentedItem, Shop, ShopDataKey as DataKey, ShopError as Error, MS_PER_DAY,
};
use soroban_sdk::{Address, Env};

use crate::{
    catalog::{get_listing, mark_rented, mark_returned, remove_listing, save_listing},
    ledger::{book_rental, forfeit_deposit, rental_charge, release_deposit},
    storage::{get_persistent, next_id, remove_persistent, store_persistent},
    utils::helpers::{collect_payment, pay_out},
};

/// Ledger time in milliseconds.
pub fn now_ms(env: &Env) -> u64 {
    env.ledger().timestamp().saturating_mul(1_000)
}

pub fn load_rented_item(env: &Env, token_id: u64) -> Result<RentedItem, Error> {
    get_persistent(env, &DataKey::RentedItem(token_id)).ok_or(Error::RentedItemNotFound)
}

fn load_shop_rented_item(env: &Env, shop: &Shop, token_id: u64) -> Result<RentedItem, Error> {
    let rented: RentedItem = load_rented_item(env, token_id)?;
    if rented.shop_id != shop.id {
        return Err(Error::RentedItemShopMismatch);
    }
    Ok(rented)
}

/// Every gate runs before any token moves; the fee lands in earnings and
/// the deposit in the locked account in the same step.
pub fn rent(
    env: &Env,
    shop: &mut Shop,
    index: u64,
    days: u64,
    payer: &Address,
    recipient: &Address,
    payment: i128,
) -> Result<RentedItem, Error> {
    let mut listing: ListingRecord = get_listing(env, shop.id, index)?;
    if !listing.listed {
        return Err(Error::ItemIsNotListed);
    }
    if days < 1 {
        return Err(Error::InvalidDays);
    }

    let (fee, total) = rental_charge(listing.price, days)?;
    if payment != total {
        return Err(Error::InsufficientPayment);
    }

    let expiry: u64 = days
        .checked_mul(MS_PER_DAY)
        .and_then(|span| now_ms(env).checked_add(span))
        .ok_or(Error::AmountOverflow)?;

    book_rental(shop, fee)?;
    mark_rented(shop, &mut listing)?;
    collect_payment(env, payer, payment)?;

    let rented: RentedItem = RentedItem {
        id: next_id(env, &DataKey::RentedItemCount),
        shop_id: shop.id,
        item_index: index,
        title: listing.title.clone(),
        description: listing.description.clone(),
        price: listing.price,
        category: listing.category,
        days,
        expiry,
        renter: recipient.clone(),
        holder: recipient.clone(),
    };

    save_listing(env, shop.id, &listing);
    store_persistent(env, &DataKey::RentedItem(rented.id), &rented);

    Ok(rented)
}

/// Burns the rented item and refunds the deposit to `caller`, who must be
/// its current holder. A return at or after expiry is rejected.
pub fn return_rented(
    env: &Env,
    shop: &mut Shop,
    token_id: u64,
    caller: &Address,
) -> Result<(RentedItem, u64), Error> {
    let rented: RentedItem = load_shop_rented_item(env, shop, token_id)?;
    if rented.holder != *caller {
        return Err(Error::NotItemHolder);
    }
    caller.require_auth();

    let now: u64 = now_ms(env);
    if now >= rented.expiry {
        return Err(Error::ItemExpired);
    }

    let mut listing: ListingRecord = get_listing(env, shop.id, rented.item_index)?;
    let refund: i128 = release_deposit(shop)?;
    mark_returned(shop, &mut listing);

    save_listing(env, shop.id, &listing);
    remove_persistent(env, &DataKey::RentedItem(token_id));
    pay_out(env, caller, refund)?;

    Ok((rented, now))
}

/// Forfeits the deposit of an overdue rental and withdraws its catalog slot
/// for good. The rented item itself stays with its holder.
pub fn declare_expired(env: &Env, shop: &mut Shop, token_id: u64) -> Result<RentedItem, Error> {
    let rented: RentedItem = load_shop_rented_item(env, shop, token_id)?;

    if now_ms(env) <= rented.expiry {
        return Err(Error::ItemNotExpired);
    }

    // A second declaration finds the slot already gone.
    let listing: ListingRecord = get_listing(env, shop.id, rented.item_index)?;
    forfeit_deposit(shop)?;
    remove_listing(env, shop.id, listing.index);

    Ok(rented)
}

pub fn transfer_rented_item(
    env: &Env,
    token_id: u64,
    to: &Address,
) -> Result<(RentedItem, Address), Error> {
    let mut rented: RentedItem = load_rented_item(env, token_id)?;
    rented.holder.require_auth();

    let from: Address = rented.holder.clone();
    rented.holder = to.clone();
    store_persistent(env, &DataKey::RentedItem(token_id), &rented);

    Ok((rented, from))
}
