use soroban_sdk::{contractclient, Address, BytesN, Env, String, Vec};
use super::types::{Category, ListingRecord, OwnerCapability, RentedItem, Shop, ShopError as Error};

#[contractclient(name = "RentalShopClient")]
pub trait RentalShopTrait {
    fn initialize(env: Env, admin: Address, payment_token: Address) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);
    fn get_payment_token(env: Env) -> Result<Address, Error>;
    fn get_deposit() -> i128;
    fn create_shop(env: Env, recipient: Address) -> Result<(u64, u64), Error>;
    fn add_item(
        env: Env,
        shop_id: u64,
        cap_id: u64,
        title: String,
        description: String,
        price: i128,
        category: Category,
    ) -> Result<u64, Error>;
    fn unlist_item(env: Env, shop_id: u64, cap_id: u64, index: u64) -> Result<(), Error>;
    fn list_item(env: Env, shop_id: u64, cap_id: u64, index: u64) -> Result<(), Error>;
    fn rent_item(
        env: Env,
        shop_id: u64,
        index: u64,
        days: u64,
        payer: Address,
        recipient: Address,
        payment: i128,
    ) -> Result<u64, Error>;
    fn return_item(env: Env, shop_id: u64, token_id: u64, caller: Address) -> Result<(), Error>;
    fn item_expired(env: Env, shop_id: u64, token_id: u64) -> Result<(), Error>;
    fn withdraw_from_shop(
        env: Env,
        shop_id: u64,
        cap_id: u64,
        amount: i128,
        recipient: Address,
    ) -> Result<(), Error>;
    fn transfer_capability(env: Env, cap_id: u64, to: Address) -> Result<(), Error>;
    fn transfer_rented_item(env: Env, token_id: u64, to: Address) -> Result<(), Error>;
    fn get_shop(env: Env, shop_id: u64) -> Result<Shop, Error>;
    fn get_shop_count(env: Env) -> u64;
    fn get_listing(env: Env, shop_id: u64, index: u64) -> Result<ListingRecord, Error>;
    fn get_listings(env: Env, shop_id: u64) -> Result<Vec<ListingRecord>, Error>;
    fn get_capability(env: Env, cap_id: u64) -> Result<OwnerCapability, Error>;
    fn get_rented_item(env: Env, token_id: u64) -> Result<RentedItem, Error>;
}
