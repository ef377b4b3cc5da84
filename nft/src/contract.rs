use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol};

use crate::{
    events::TokenEvent,
    storage::{get_data, get_persistent, has_data, has_persistent, store_data, store_persistent},
    utils::require_orders_call,
};
use common::nft::{
    interface::TokenContractTrait,
    types::{OwnershipToken, TokenDataKey as DataKey, TokenError as Error, ADMIN, ORDERS_CONTRACT},
};

#[contract]
pub struct TokenContract;

#[contractimpl]
impl TokenContractTrait for TokenContract {
    fn initialize(env: Env, admin: Address, orders_contract_id: Address) -> Result<(), Error> {
        admin.require_auth();
        if has_data::<Symbol>(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &ORDERS_CONTRACT, &orders_contract_id);
        store_data(&env, &DataKey::TokenCount, &0u64);
        TokenEvent::Initialized.publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        TokenEvent::Upgraded(Self::version()).publish(&env);
    }

    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error> {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();

        if !has_data::<Symbol>(&env, &state_key) {
            return Err(Error::StateNotAlreadySet);
        }

        store_data(&env, &state_key, &state_value);
        env.events()
            .publish(("state_updated", state_key), state_value);

        Ok(())
    }

    // One token per successful order; only the orders contract mints.
    fn mint(env: Env, to: Address, product_id: u64) -> Result<u64, Error> {
        require_orders_call(&env);

        let token_count: u64 = get_data(&env, &DataKey::TokenCount).unwrap_or(0);
        let token_id: u64 = token_count + 1;

        let token: OwnershipToken = OwnershipToken {
            id: token_id,
            product_id,
            owner: to.clone(),
        };

        store_persistent(&env, &DataKey::Token(token_id), &token);
        store_persistent(&env, &DataKey::Holder(token_id), &to);
        store_data(&env, &DataKey::TokenCount, &token_id);

        TokenEvent::Mint(token_id, product_id, to).publish(&env);

        Ok(token_id)
    }

    fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();

        let holder: Address = get_persistent(&env, &DataKey::Holder(token_id))
            .ok_or(Error::TokenNotFound)?;
        if holder != from {
            return Err(Error::Unauthorized);
        }

        // Holdership moves; the record's `owner` field keeps the address the
        // token was minted to, so `owner_of` and `holder_of` can diverge.
        store_persistent(&env, &DataKey::Holder(token_id), &to);

        TokenEvent::Transfer(token_id, from, to).publish(&env);
        Ok(())
    }

    fn get_token(env: Env, token_id: u64) -> Result<OwnershipToken, Error> {
        get_persistent(&env, &DataKey::Token(token_id)).ok_or(Error::TokenNotFound)
    }

    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        let token: OwnershipToken = Self::get_token(env, token_id)?;
        Ok(token.owner)
    }

    fn holder_of(env: Env, token_id: u64) -> Result<Address, Error> {
        get_persistent(&env, &DataKey::Holder(token_id)).ok_or(Error::TokenNotFound)
    }

    fn product_of(env: Env, token_id: u64) -> Result<u64, Error> {
        let token: OwnershipToken = Self::get_token(env, token_id)?;
        Ok(token.product_id)
    }

    fn exists(env: Env, token_id: u64) -> bool {
        has_persistent(&env, &DataKey::Token(token_id))
    }
}
