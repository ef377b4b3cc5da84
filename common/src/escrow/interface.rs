use super::types::{Escrow, EscrowError as Error};
use soroban_sdk::{contractclient, Address, BytesN, Env, Symbol};

#[contractclient(name = "EscrowContractClient")]
pub trait EscrowContractTrait {
    fn initialize(
        env: Env,
        admin: Address,
        orders_contract_id: Address,
        token_a: Address,
        token_b: Address,
        token_c: Address,
    ) -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>);
    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error>;
    fn open(
        env: Env,
        buyer: Address,
        seller: Address,
        amount_a: i128,
        amount_b: i128,
        amount_c: i128,
    ) -> Result<u64, Error>;
    fn release(env: Env, escrow_id: u64) -> Result<(), Error>;
    fn refund(env: Env, escrow_id: u64) -> Result<(), Error>;
    fn get_escrow(env: Env, escrow_id: u64) -> Result<Escrow, Error>;
    fn balances(env: Env, escrow_id: u64) -> Result<(i128, i128, i128), Error>;
    fn buyer_of(env: Env, escrow_id: u64) -> Result<Address, Error>;
    fn seller_of(env: Env, escrow_id: u64) -> Result<Address, Error>;
}
