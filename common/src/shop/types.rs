use soroban_sdk::{contracterror, contracttype, symbol_short, Address, String, Symbol};

/// Refundable deposit escrowed on every rental: 10 whole units of a
/// 7-decimal settlement token.
pub const DEPOSIT: i128 = 10_0_000_000;
pub const MS_PER_DAY: u64 = 86_400_000;

pub const MAX_TITLE_LEN: u32 = 64;
pub const MAX_DESCRIPTION_LEN: u32 = 512;

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const PAYMENT_TOKEN: Symbol = symbol_short!("PAY_TOKEN");

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ShopError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidCapability = 3,
    NotShopOwner = 4,
    InvalidPrice = 5,
    InvalidMetadata = 6,
    InvalidItemId = 7,
    InvalidDays = 8,
    InvalidRecipient = 9,
    ShopNotFound = 10,
    RentedItemNotFound = 11,
    RentedItemShopMismatch = 12,
    NotItemHolder = 13,
    InsufficientPayment = 14,
    InsufficientBalance = 15,
    AmountOverflow = 16,
    ItemIsNotListed = 17,
    ItemAlreadyListed = 18,
    ItemCurrentlyRented = 19,
    ItemExpired = 20,
    ItemNotExpired = 21,
    InvalidWithdrawalAmount = 22,
    DepositUnderflow = 23,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Authorization,
    Validation,
    Payment,
    State,
    Config,
}

impl ShopError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShopError::AlreadyInitialized | ShopError::NotInitialized => ErrorKind::Config,
            ShopError::InvalidCapability
            | ShopError::NotShopOwner
            | ShopError::NotItemHolder => ErrorKind::Authorization,
            ShopError::InvalidPrice
            | ShopError::InvalidMetadata
            | ShopError::InvalidItemId
            | ShopError::InvalidDays
            | ShopError::InvalidRecipient
            | ShopError::ShopNotFound
            | ShopError::RentedItemNotFound
            | ShopError::RentedItemShopMismatch => ErrorKind::Validation,
            ShopError::InsufficientPayment
            | ShopError::InsufficientBalance
            | ShopError::AmountOverflow => ErrorKind::Payment,
            ShopError::ItemIsNotListed
            | ShopError::ItemAlreadyListed
            | ShopError::ItemCurrentlyRented
            | ShopError::ItemExpired
            | ShopError::ItemNotExpired
            | ShopError::InvalidWithdrawalAmount
            | ShopError::DepositUnderflow => ErrorKind::State,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Category {
    Tools = 1,
    Electronics = 2,
    Vehicles = 3,
    Sports = 4,
    Outdoor = 5,
    Events = 6,
    Other = 7,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Shop {
    pub id: u64,
    pub owner_capability_id: u64,
    pub earnings: i128,
    pub locked_deposits: i128,
    pub listed_count: u64, // slots currently rentable
    pub next_index: u64,   // never reused
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerCapability {
    pub id: u64,
    pub shop_id: u64,
    pub holder: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingRecord {
    pub index: u64,
    pub title: String,
    pub description: String,
    pub price: i128, // per rental-day
    pub listed: bool,
    pub rented: bool,
    pub category: Category,
}

/// Custody record of a rented item. `renter` is fixed at rental time,
/// `holder` follows custody transfers.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentedItem {
    pub id: u64,
    pub shop_id: u64,
    pub item_index: u64,
    pub title: String,
    pub description: String,
    pub price: i128,
    pub category: Category,
    pub days: u64,
    pub expiry: u64, // ms
    pub renter: Address,
    pub holder: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingKey {
    pub shop_id: u64,
    pub index: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ShopDataKey {
    ShopCount,
    CapabilityCount,
    RentedItemCount,
    Shop(u64),
    Capability(u64),
    Listing(ListingKey),
    RentedItem(u64),
}
