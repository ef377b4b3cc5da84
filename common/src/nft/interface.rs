use super::types::{OwnershipToken, TokenError as Error};
use soroban_sdk::{contractclient, Address, BytesN, Env, Symbol};

#[contractclient(name = "TokenContractClient")]
pub trait TokenContractTrait {
    fn initialize(env: Env, admin: Address, orders_contract_id: Address) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);
    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error>;
    fn mint(env: Env, to: Address, product_id: u64) -> Result<u64, Error>;
    fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error>;
    fn get_token(env: Env, token_id: u64) -> Result<OwnershipToken, Error>;
    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error>;
    fn holder_of(env: Env, token_id: u64) -> Result<Address, Error>;
    fn product_of(env: Env, token_id: u64) -> Result<u64, Error>;
    fn exists(env: Env, token_id: u64) -> bool;
}
