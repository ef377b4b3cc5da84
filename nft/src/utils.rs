use crate::storage::get_data;
use common::nft::types::ORDERS_CONTRACT;
use soroban_sdk::{Address, Env};

pub fn require_orders_call(env: &Env) {
    let orders_address: Address = get_data(env, &ORDERS_CONTRACT).unwrap();
    orders_address.require_auth();
}
