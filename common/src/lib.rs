#![no_std]

pub mod shop {
    pub mod interface;
    pub mod types;
}
