#![no_std]

mod capability;
mod catalog;
mod events;
mod ledger;
mod rental;
mod shop;
mod storage;
mod utils;

use common::shop::{
    interface::RentalShopTrait,
    types::{
        Category, ListingRecord, OwnerCapability, RentedItem, Shop, ShopError as Error, ADMIN,
        DEPOSIT, PAYMENT_TOKEN,
    },
};
use events::RentalEvent;
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, Address, BytesN, Env, String, Vec,
};

use crate::{
    capability::{load_capability, require_owner},
    catalog::{append_listing, get_listing, live_listings, save_listing, set_listed},
    ledger::debit_earnings,
    rental::{declare_expired, load_rented_item, rent, return_rented},
    shop::{load_shop, open_shop, require_initialized, save_shop, shop_count},
    storage::{get_data, has_data, store_data},
    utils::helpers::pay_out,
};

#[contract]
pub struct RentalShopContract;

#[contractimpl]
impl RentalShopTrait for RentalShopContract {
    fn initialize(env: Env, admin: Address, payment_token: Address) -> Result<(), Error> {
        admin.require_auth();
        if has_data(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }

        store_data(&env, &ADMIN, &admin);
        store_data(&env, &PAYMENT_TOKEN, &payment_token);

        RentalEvent::Initialized(admin, payment_token).publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = get_data(&env, &ADMIN)
            .unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized));
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        RentalEvent::Upgraded(Self::version()).publish(&env);
    }

    fn get_payment_token(env: Env) -> Result<Address, Error> {
        get_data(&env, &PAYMENT_TOKEN).ok_or(Error::NotInitialized)
    }

    fn get_deposit() -> i128 {
        DEPOSIT
    }

    fn create_shop(env: Env, recipient: Address) -> Result<(u64, u64), Error> {
        require_initialized(&env)?;

        let (shop, capability) = open_shop(&env, &recipient);

        RentalEvent::ShopCreated(shop.id, capability.id, recipient).publish(&env);
        Ok((shop.id, capability.id))
    }

    fn add_item(
        env: Env,
        shop_id: u64,
        cap_id: u64,
        title: String,
        description: String,
        price: i128,
        category: Category,
    ) -> Result<u64, Error> {
        require_initialized(&env)?;
        let mut shop: Shop = load_shop(&env, shop_id)?;
        require_owner(&env, &shop, cap_id)?;

        let listing: ListingRecord =
            append_listing(&env, &mut shop, title, description, price, category)?;
        save_shop(&env, &shop);

        RentalEvent::ItemAdded(shop_id, listing.index).publish(&env);
        Ok(listing.index)
    }

    fn unlist_item(env: Env, shop_id: u64, cap_id: u64, index: u64) -> Result<(), Error> {
        require_initialized(&env)?;
        let mut shop: Shop = load_shop(&env, shop_id)?;
        require_owner(&env, &shop, cap_id)?;

        let mut listing: ListingRecord = get_listing(&env, shop_id, index)?;
        set_listed(&mut shop, &mut listing, false)?;
        save_listing(&env, shop_id, &listing);
        save_shop(&env, &shop);

        RentalEvent::ItemUnlisted(shop_id, index).publish(&env);
        Ok(())
    }

    fn list_item(env: Env, shop_id: u64, cap_id: u64, index: u64) -> Result<(), Error> {
        require_initialized(&env)?;
        let mut shop: Shop = load_shop(&env, shop_id)?;
        require_owner(&env, &shop, cap_id)?;

        let mut listing: ListingRecord = get_listing(&env, shop_id, index)?;
        set_listed(&mut shop, &mut listing, true)?;
        save_listing(&env, shop_id, &listing);
        save_shop(&env, &shop);

        RentalEvent::ItemListed(shop_id, index).publish(&env);
        Ok(())
    }

    fn rent_item(
        env: Env,
        shop_id: u64,
        index: u64,
        days: u64,
        payer: Address,
        recipient: Address,
        payment: i128,
    ) -> Result<u64, Error> {
        require_initialized(&env)?;
        payer.require_auth();
        let mut shop: Shop = load_shop(&env, shop_id)?;

        let rented: RentedItem = rent(&env, &mut shop, index, days, &payer, &recipient, payment)?;
        save_shop(&env, &shop);

        log!(&env, "shop {} item {} rented until {}", shop_id, index, rented.expiry);
        RentalEvent::ItemRented(shop_id, index, days, recipient).publish(&env);
        Ok(rented.id)
    }

    fn return_item(env: Env, shop_id: u64, token_id: u64, caller: Address) -> Result<(), Error> {
        require_initialized(&env)?;
        let mut shop: Shop = load_shop(&env, shop_id)?;

        let (rented, now) = return_rented(&env, &mut shop, token_id, &caller)?;
        save_shop(&env, &shop);

        RentalEvent::ItemReturned(shop_id, rented.item_index, now, rented.renter).publish(&env);
        Ok(())
    }

    fn item_expired(env: Env, shop_id: u64, token_id: u64) -> Result<(), Error> {
        require_initialized(&env)?;
        let mut shop: Shop = load_shop(&env, shop_id)?;

        let rented: RentedItem = declare_expired(&env, &mut shop, token_id)?;
        save_shop(&env, &shop);

        log!(&env, "shop {} item {} forfeited", shop_id, rented.item_index);
        RentalEvent::ItemExpired(shop_id, rented.item_index, rented.renter).publish(&env);
        Ok(())
    }

    fn withdraw_from_shop(
        env: Env,
        shop_id: u64,
        cap_id: u64,
        amount: i128,
        recipient: Address,
    ) -> Result<(), Error> {
        require_initialized(&env)?;
        let mut shop: Shop = load_shop(&env, shop_id)?;
        require_owner(&env, &shop, cap_id)?;

        debit_earnings(&mut shop, amount)?;
        if recipient == env.current_contract_address() {
            return Err(Error::InvalidRecipient);
        }

        save_shop(&env, &shop);
        pay_out(&env, &recipient, amount)?;

        RentalEvent::ShopWithdrawal(shop_id, amount, recipient).publish(&env);
        Ok(())
    }

    fn transfer_capability(env: Env, cap_id: u64, to: Address) -> Result<(), Error> {
        require_initialized(&env)?;
        let (capability, from) = capability::transfer_capability(&env, cap_id, &to)?;

        RentalEvent::CapabilityTransferred(capability.shop_id, from, to).publish(&env);
        Ok(())
    }

    fn transfer_rented_item(env: Env, token_id: u64, to: Address) -> Result<(), Error> {
        require_initialized(&env)?;
        let (_, from) = rental::transfer_rented_item(&env, token_id, &to)?;

        RentalEvent::RentedItemTransferred(token_id, from, to).publish(&env);
        Ok(())
    }

    fn get_shop(env: Env, shop_id: u64) -> Result<Shop, Error> {
        load_shop(&env, shop_id)
    }

    fn get_shop_count(env: Env) -> u64 {
        shop_count(&env)
    }

    fn get_listing(env: Env, shop_id: u64, index: u64) -> Result<ListingRecord, Error> {
        load_shop(&env, shop_id)?;
        get_listing(&env, shop_id, index)
    }

    fn get_listings(env: Env, shop_id: u64) -> Result<Vec<ListingRecord>, Error> {
        let shop: Shop = load_shop(&env, shop_id)?;
        Ok(live_listings(&env, &shop))
    }

    fn get_capability(env: Env, cap_id: u64) -> Result<OwnerCapability, Error> {
        load_capability(&env, cap_id)
    }

    fn get_rented_item(env: Env, token_id: u64) -> Result<RentedItem, Error> {
        load_rented_item(&env, token_id)
    }
}
