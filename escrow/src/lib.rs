#![no_std]

mod events;

use common::escrow::{
    interface::EscrowContractTrait,
    types::{
        Escrow, EscrowDataKey as DataKey, EscrowError as Error, ADMIN, ORDERS_CONTRACT, TOKEN_A,
        TOKEN_B, TOKEN_C,
    },
};
use events::EscrowEvent;
use soroban_sdk::{contract, contractimpl, token, Address, BytesN, Env, Symbol};

#[contract]
pub struct EscrowContract;

#[contractimpl]
impl EscrowContractTrait for EscrowContract {
    fn initialize(
        env: Env,
        admin: Address,
        orders_contract_id: Address,
        token_a: Address,
        token_b: Address,
        token_c: Address,
    ) -> Result<(), Error> {
        admin.require_auth();
        if env.storage().instance().has::<Symbol>(&ADMIN) {
            return Err(Error::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage()
            .instance()
            .set(&ORDERS_CONTRACT, &orders_contract_id);
        env.storage().instance().set(&TOKEN_A, &token_a);
        env.storage().instance().set(&TOKEN_B, &token_b);
        env.storage().instance().set(&TOKEN_C, &token_c);
        env.storage().instance().set(&DataKey::EscrowCount, &0u64);
        EscrowEvent::Initialized.publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = env.storage().instance().get(&ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        EscrowEvent::Upgraded(Self::version()).publish(&env);
    }

    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error> {
        let admin: Address = env.storage().instance().get(&ADMIN).unwrap();
        admin.require_auth();

        if !env.storage().instance().has::<Symbol>(&state_key) {
            return Err(Error::StateNotAlreadySet);
        }

        env.storage().instance().set(&state_key, &state_value);
        env.events()
            .publish(("state_updated", state_key), state_value);

        Ok(())
    }

    // Buyer deposits the three amounts up front. Funds stay locked until the
    // orders contract calls `release` or `refund`.
    fn open(
        env: Env,
        buyer: Address,
        seller: Address,
        amount_a: i128,
        amount_b: i128,
        amount_c: i128,
    ) -> Result<u64, Error> {
        buyer.require_auth();

        let escrow_count: u64 = env
            .storage()
            .instance()
            .get(&DataKey::EscrowCount)
            .unwrap_or(0);
        let escrow_id: u64 = escrow_count + 1;

        let contract_address: Address = env.current_contract_address();
        transfer_all(&env, &buyer, &contract_address, amount_a, amount_b, amount_c);

        let escrow: Escrow = Escrow {
            id: escrow_id,
            buyer: buyer.clone(),
            seller: seller.clone(),
            amount_a,
            amount_b,
            amount_c,
        };
        env.storage()
            .persistent()
            .set(&DataKey::Escrow(escrow_id), &escrow);
        env.storage()
            .instance()
            .set(&DataKey::EscrowCount, &escrow_id);

        EscrowEvent::FundsLocked(escrow_id, seller, buyer, amount_a, amount_b, amount_c)
            .publish(&env);
        Ok(escrow_id)
    }

    // Pay the seller. The record is removed before anything moves, so the
    // same escrow can never be the target of a second terminal operation:
    // a repeat call fails with EscrowNotFound.
    fn release(env: Env, escrow_id: u64) -> Result<(), Error> {
        require_orders(&env);

        let escrow: Escrow = take_escrow(&env, escrow_id)?;
        let contract_address: Address = env.current_contract_address();
        transfer_all(
            &env,
            &contract_address,
            &escrow.seller,
            escrow.amount_a,
            escrow.amount_b,
            escrow.amount_c,
        );

        EscrowEvent::FundsReleased(escrow_id, escrow.seller, escrow.amount_a).publish(&env);
        Ok(())
    }

    // Pay the buyer back. Same consumption rule as `release`.
    fn refund(env: Env, escrow_id: u64) -> Result<(), Error> {
        require_orders(&env);

        let escrow: Escrow = take_escrow(&env, escrow_id)?;
        let contract_address: Address = env.current_contract_address();
        transfer_all(
            &env,
            &contract_address,
            &escrow.buyer,
            escrow.amount_a,
            escrow.amount_b,
            escrow.amount_c,
        );

        EscrowEvent::Refunded(escrow_id, escrow.buyer, escrow.amount_a).publish(&env);
        Ok(())
    }

    fn get_escrow(env: Env, escrow_id: u64) -> Result<Escrow, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Escrow(escrow_id))
            .ok_or(Error::EscrowNotFound)
    }

    fn balances(env: Env, escrow_id: u64) -> Result<(i128, i128, i128), Error> {
        let escrow: Escrow = Self::get_escrow(env, escrow_id)?;
        Ok((escrow.amount_a, escrow.amount_b, escrow.amount_c))
    }

    fn buyer_of(env: Env, escrow_id: u64) -> Result<Address, Error> {
        let escrow: Escrow = Self::get_escrow(env, escrow_id)?;
        Ok(escrow.buyer)
    }

    fn seller_of(env: Env, escrow_id: u64) -> Result<Address, Error> {
        let escrow: Escrow = Self::get_escrow(env, escrow_id)?;
        Ok(escrow.seller)
    }
}

fn require_orders(env: &Env) {
    let orders_address: Address = env.storage().instance().get(&ORDERS_CONTRACT).unwrap();
    orders_address.require_auth();
}

// Read and remove in one step, move-out-of-store style.
fn take_escrow(env: &Env, escrow_id: u64) -> Result<Escrow, Error> {
    let escrow: Escrow = env
        .storage()
        .persistent()
        .get(&DataKey::Escrow(escrow_id))
        .ok_or(Error::EscrowNotFound)?;
    env.storage()
        .persistent()
        .remove(&DataKey::Escrow(escrow_id));
    Ok(escrow)
}

// All three currencies move together, zero amounts included.
fn transfer_all(
    env: &Env,
    from: &Address,
    to: &Address,
    amount_a: i128,
    amount_b: i128,
    amount_c: i128,
) {
    let token_a: Address = env.storage().instance().get(&TOKEN_A).unwrap();
    let token_b: Address = env.storage().instance().get(&TOKEN_B).unwrap();
    let token_c: Address = env.storage().instance().get(&TOKEN_C).unwrap();

    token::Client::new(env, &token_a).transfer(from, to, &amount_a);
    token::Client::new(env, &token_b).transfer(from, to, &amount_b);
    token::Client::new(env, &token_c).transfer(from, to, &amount_c);
}

#[cfg(test)]
mod test;
