use common::shop::types::{ShopError as Error, PAYMENT_TOKEN};
use soroban_sdk::{token, Address, Env};

use crate::storage::get_data;

pub fn get_token_client(env: &Env) -> Result<token::Client<'_>, Error> {
    let token_addr: Address = get_data(env, &PAYMENT_TOKEN).ok_or(Error::NotInitialized)?;
    Ok(token::Client::new(env, &token_addr))
}

/// Pulls `amount` from `from` into the contract. The balance check turns a
/// host-level transfer failure into a contract error.
pub fn collect_payment(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let token_client: token::Client<'_> = get_token_client(env)?;

    let balance: i128 = token_client.balance(from);
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }
    token_client.transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

pub fn pay_out(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let token_client: token::Client<'_> = get_token_client(env)?;
    token_client.transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}
