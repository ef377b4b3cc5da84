use super::types::{CatalogError as Error, Product};
use soroban_sdk::{contractclient, Address, BytesN, Env, String, Symbol, Vec};

#[contractclient(name = "CatalogContractClient")]
pub trait CatalogContractTrait {
    fn initialize(env: Env, admin: Address, orders_contract_id: Address) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);
    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error>;
    fn add_product(
        env: Env,
        seller: Address,
        name: String,
        specs: String,
        price_a: i128,
        price_b: i128,
        price_c: i128,
        inventory: u64,
    ) -> Result<u64, Error>;
    fn set_inventory(
        env: Env,
        seller: Address,
        product_id: u64,
        inventory: u64,
    ) -> Result<(), Error>;
    fn reserve_unit(env: Env, product_id: u64) -> Result<(), Error>;
    fn get_product(env: Env, product_id: u64) -> Result<Product, Error>;
    fn inventory(env: Env, product_id: u64) -> Result<u64, Error>;
    fn seller_of(env: Env, product_id: u64) -> Result<Address, Error>;
    fn get_seller_products(env: Env, seller: Address) -> Vec<u64>;
    fn get_product_count(env: Env) -> u64;
}
