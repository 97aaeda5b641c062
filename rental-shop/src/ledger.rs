use common::shop::types::{Shop, ShopError as Error, DEPOSIT};

/// Returns `(fee, total)` for renting at `price` per day for `days`, where
/// `total = fee + DEPOSIT`.
pub fn rental_charge(price: i128, days: u64) -> Result<(i128, i128), Error> {
    let fee: i128 = price
        .checked_mul(i128::from(days))
        .ok_or(Error::AmountOverflow)?;
    let total: i128 = fee.checked_add(DEPOSIT).ok_or(Error::AmountOverflow)?;
    Ok((fee, total))
}

/// Fee is realized immediately; only the deposit stays contingent.
pub fn book_rental(shop: &mut Shop, fee: i128) -> Result<(), Error> {
    let earnings: i128 = shop.earnings.checked_add(fee).ok_or(Error::AmountOverflow)?;
    let locked: i128 = shop
        .locked_deposits
        .checked_add(DEPOSIT)
        .ok_or(Error::AmountOverflow)?;

    shop.earnings = earnings;
    shop.locked_deposits = locked;
    Ok(())
}

/// Every live rented item holds exactly one `DEPOSIT` in `locked_deposits`,
/// so a release with nothing locked means the books are already corrupt.
fn unlock_deposit(shop: &Shop) -> Result<i128, Error> {
    match shop.locked_deposits.checked_sub(DEPOSIT) {
        Some(locked) if locked >= 0 => Ok(locked),
        _ => Err(Error::DepositUnderflow),
    }
}

pub fn release_deposit(shop: &mut Shop) -> Result<i128, Error> {
    shop.locked_deposits = unlock_deposit(shop)?;
    Ok(DEPOSIT)
}

pub fn forfeit_deposit(shop: &mut Shop) -> Result<(), Error> {
    let locked: i128 = unlock_deposit(shop)?;
    let earnings: i128 = shop
        .earnings
        .checked_add(DEPOSIT)
        .ok_or(Error::AmountOverflow)?;

    shop.locked_deposits = locked;
    shop.earnings = earnings;
    Ok(())
}

/// Only realized earnings are withdrawable; locked deposits never are.
pub fn debit_earnings(shop: &mut Shop, amount: i128) -> Result<(), Error> {
    if amount <= 0 || amount > shop.earnings {
        return Err(Error::InvalidWithdrawalAmount);
    }
    shop.earnings -= amount;
    Ok(())
}
