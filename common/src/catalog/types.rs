use soroban_sdk::{contracterror, contracttype, symbol_short, Address, String, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CatalogError {
    AlreadyInitialized = 1,
    ProductNotFound = 2,
    Unauthorized = 3,
    OutOfStock = 4,
    StateNotAlreadySet = 5,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Product {
    pub id: u64,
    pub seller: Address,
    pub name: String,
    pub specs: String,
    pub price_a: i128,
    pub price_b: i128,
    pub price_c: i128,
    pub inventory: u64,
}

#[derive(Clone)]
#[contracttype]
pub enum CatalogDataKey {
    Product(u64),
    ProductCount,
    SellerProducts(Address), // Products listed by a seller
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const ORDERS_CONTRACT: Symbol = symbol_short!("ORDERS_CA");
