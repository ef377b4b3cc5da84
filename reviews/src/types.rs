use soroban_sdk::{contracterror, contracttype, symbol_short, Address, String, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    ReviewNotFound = 2,
    Unauthorized = 3,
    ProductMismatch = 4,
    InvalidRating = 5,
    StateNotAlreadySet = 6,
}

// Immutable once created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Review {
    pub id: u64,
    pub product_id: u64,
    pub reviewer: Address,
    pub rating: u32,
    pub comment: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Review(u64),
    ReviewCount,
    ProductReviews(u64), // Reviews filed against a product
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const NFT_CONTRACT: Symbol = symbol_short!("NFT_CA");
