use soroban_sdk::{contracterror, contracttype, symbol_short, Address, String, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    OrderNotFound = 2,
    ShipmentNotFound = 3,
    Unauthorized = 4,
    OutOfStock = 5,
    AlreadyDelivered = 6,
    NotDelivered = 7,
    EscrowMismatch = 8,
    StateNotAlreadySet = 9,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Order {
    pub id: u64,
    pub product_id: u64,
    pub buyer: Address,
    pub escrow_id: u64,
    pub token_id: u64,
    pub shipment_status: String,
    pub disputed: bool,
}

// One immutable record per status update; the order's own status field is
// the mutable "latest" view.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Shipment {
    pub id: u64,
    pub order_id: u64,
    pub status: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Order(u64),
    OrderCount,
    Shipment(u64),
    ShipmentCount,
    BuyerOrders(Address), // Orders placed by a buyer
}

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_DELIVERED: &str = "delivered";

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const CATALOG_CONTRACT: Symbol = symbol_short!("CAT_CA");
pub const NFT_CONTRACT: Symbol = symbol_short!("NFT_CA");
pub const ESCROW_CONTRACT: Symbol = symbol_short!("ESCROW_CA");
