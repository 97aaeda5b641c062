use common::shop::types::{
    Category, ListingKey, ListingRecord, Shop, ShopDataKey as DataKey, ShopError as Error,
    MAX_DESCRIPTION_LEN, MAX_TITLE_LEN,
};
use soroban_sdk::{Env, String, Vec};

use crate::storage::{get_persistent, remove_persistent, store_persistent};

fn listing_key(shop_id: u64, index: u64) -> DataKey {
    DataKey::Listing(ListingKey { shop_id, index })
}

fn validate_listing(title: &String, description: &String, price: i128) -> Result<(), Error> {
    if price <= 0 {
        return Err(Error::InvalidPrice);
    }
    if title.len() == 0 || title.len() > MAX_TITLE_LEN || description.len() > MAX_DESCRIPTION_LEN
    {
        return Err(Error::InvalidMetadata);
    }
    Ok(())
}

/// Appends a listed slot at `shop.next_index`. The caller persists `shop`.
pub fn append_listing(
    env: &Env,
    shop: &mut Shop,
    title: String,
    description: String,
    price: i128,
    category: Category,
) -> Result<ListingRecord, Error> {
    validate_listing(&title, &description, price)?;

    let listing: ListingRecord = ListingRecord {
        index: shop.next_index,
        title,
        description,
        price,
        listed: true,
        rented: false,
        category,
    };

    shop.next_index = shop.next_index.checked_add(1).ok_or(Error::AmountOverflow)?;
    shop.listed_count += 1;
    save_listing(env, shop.id, &listing);

    Ok(listing)
}

pub fn get_listing(env: &Env, shop_id: u64, index: u64) -> Result<ListingRecord, Error> {
    get_persistent(env, &listing_key(shop_id, index)).ok_or(Error::InvalidItemId)
}

pub fn save_listing(env: &Env, shop_id: u64, listing: &ListingRecord) {
    store_persistent(env, &listing_key(shop_id, listing.index), listing);
}

pub fn remove_listing(env: &Env, shop_id: u64, index: u64) {
    remove_persistent(env, &listing_key(shop_id, index));
}

/// Owner-side toggle. Repeating the current state is rejected, so the
/// counter only ever moves by one per successful call.
pub fn set_listed(shop: &mut Shop, listing: &mut ListingRecord, listed: bool) -> Result<(), Error> {
    if listed {
        if listing.rented {
            return Err(Error::ItemCurrentlyRented);
        }
        if listing.listed {
            return Err(Error::ItemAlreadyListed);
        }
        shop.listed_count += 1;
    } else {
        if !listing.listed {
            return Err(Error::ItemIsNotListed);
        }
        shop.listed_count -= 1;
    }

    listing.listed = listed;
    Ok(())
}

pub fn mark_rented(shop: &mut Shop, listing: &mut ListingRecord) -> Result<(), Error> {
    if !listing.listed {
        return Err(Error::ItemIsNotListed);
    }
    listing.listed = false;
    listing.rented = true;
    shop.listed_count -= 1;
    Ok(())
}

pub fn mark_returned(shop: &mut Shop, listing: &mut ListingRecord) {
    listing.listed = true;
    listing.rented = false;
    shop.listed_count += 1;
}

/// Live catalog slots in index order; slots removed by forfeiture are
/// skipped.
pub fn live_listings(env: &Env, shop: &Shop) -> Vec<ListingRecord> {
    let mut listings: Vec<ListingRecord> = Vec::new(env);

    for index in 0..shop.next_index {
        if let Some(listing) = get_persistent(env, &listing_key(shop.id, index)) {
            listings.push_back(listing);
        }
    }

    listings
}
