use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EscrowError {
    AlreadyInitialized = 1,
    EscrowNotFound = 2,
    StateNotAlreadySet = 3,
}

// Custody record for the three payment currencies. Balances are fixed at
// `open` and only ever leave through the single terminal operation that
// removes the record.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Escrow {
    pub id: u64,
    pub buyer: Address,
    pub seller: Address,
    pub amount_a: i128,
    pub amount_b: i128,
    pub amount_c: i128,
}

#[derive(Clone)]
#[contracttype]
pub enum EscrowDataKey {
    Escrow(u64),
    EscrowCount,
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const ORDERS_CONTRACT: Symbol = symbol_short!("ORDERS_CA");
pub const TOKEN_A: Symbol = symbol_short!("TOKEN_A");
pub const TOKEN_B: Symbol = symbol_short!("TOKEN_B");
pub const TOKEN_C: Symbol = symbol_short!("TOKEN_C");
