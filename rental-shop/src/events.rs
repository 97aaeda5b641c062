use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum RentalEvent {
    Initialized(Address, Address),
    Upgraded(u32),
    ShopCreated(u64, u64, Address),
    ItemAdded(u64, u64),
    ItemUnlisted(u64, u64),
    ItemListed(u64, u64),
    ItemRented(u64, u64, u64, Address),
    ItemReturned(u64, u64, u64, Address),
    ItemExpired(u64, u64, Address),
    ShopWithdrawal(u64, i128, Address),
    CapabilityTransferred(u64, Address, Address),
    RentedItemTransferred(u64, Address, Address),
}

impl RentalEvent {
    pub fn name(&self) -> &'static str {
        match self {
            RentalEvent::Initialized(..) => stringify!(Initialized),
            RentalEvent::Upgraded(..) => stringify!(Upgraded),
            RentalEvent::ShopCreated(..) => stringify!(ShopCreated),
            RentalEvent::ItemAdded(..) => stringify!(ItemAdded),
            RentalEvent::ItemUnlisted(..) => stringify!(ItemUnlisted),
            RentalEvent::ItemListed(..) => stringify!(ItemListed),
            RentalEvent::ItemRented(..) => stringify!(ItemRented),
            RentalEvent::ItemReturned(..) => stringify!(ItemReturned),
            RentalEvent::ItemExpired(..) => stringify!(ItemExpired),
            RentalEvent::ShopWithdrawal(..) => stringify!(ShopWithdrawal),
            RentalEvent::CapabilityTransferred(..) => stringify!(CapabilityTransferred),
            RentalEvent::RentedItemTransferred(..) => stringify!(RentedItemTransferred),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            RentalEvent::Initialized(admin, payment_token) => {
                v.push_back(admin.into_val(env));
                v.push_back(payment_token.into_val(env));
            }
            RentalEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            RentalEvent::ShopCreated(shop_id, cap_id, owner) => {
                v.push_back(shop_id.into_val(env));
                v.push_back(cap_id.into_val(env));
                v.push_back(owner.into_val(env));
            }
            RentalEvent::ItemAdded(shop_id, index)
            | RentalEvent::ItemUnlisted(shop_id, index)
            | RentalEvent::ItemListed(shop_id, index) => {
                v.push_back(shop_id.into_val(env));
                v.push_back(index.into_val(env));
            }
            RentalEvent::ItemRented(shop_id, index, days, renter) => {
                v.push_back(shop_id.into_val(env));
                v.push_back(index.into_val(env));
                v.push_back(days.into_val(env));
                v.push_back(renter.into_val(env));
            }
            RentalEvent::ItemReturned(shop_id, index, timestamp, renter) => {
                v.push_back(shop_id.into_val(env));
                v.push_back(index.into_val(env));
                v.push_back(timestamp.into_val(env));
                v.push_back(renter.into_val(env));
            }
            RentalEvent::ItemExpired(shop_id, index, renter) => {
                v.push_back(shop_id.into_val(env));
                v.push_back(index.into_val(env));
                v.push_back(renter.into_val(env));
            }
            RentalEvent::ShopWithdrawal(shop_id, amount, recipient) => {
                v.push_back(shop_id.into_val(env));
                v.push_back(amount.into_val(env));
                v.push_back(recipient.into_val(env));
            }
            RentalEvent::CapabilityTransferred(shop_id, from, to) => {
                v.push_back(shop_id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
            }
            RentalEvent::RentedItemTransferred(token_id, from, to) => {
                v.push_back(token_id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
