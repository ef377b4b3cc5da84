use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 1,
    TokenNotFound = 2,
    Unauthorized = 3,
    StateNotAlreadySet = 4,
}

// Proof of purchase. The `owner` field records who the token was minted
// to; ledger-level holdership is tracked separately and moves on transfer.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct OwnershipToken {
    pub id: u64,
    pub product_id: u64,
    pub owner: Address,
}

#[derive(Clone)]
#[contracttype]
pub enum TokenDataKey {
    Token(u64),  // OwnershipToken record
    Holder(u64), // Current ledger-level holder
    TokenCount,
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const ORDERS_CONTRACT: Symbol = symbol_short!("ORDERS_CA");
