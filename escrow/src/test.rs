#![cfg(test)]
extern crate std;

use super::*;
use common::escrow::interface::EscrowContractClient;
use common::escrow::types::EscrowError;
use soroban_sdk::testutils::{Address as _, StellarAssetContract};
use soroban_sdk::{token, Address, Env};

struct EscrowTest {
    client: EscrowContractClient<'static>,
    token_a: token::TokenClient<'static>,
    token_b: token::TokenClient<'static>,
    token_c: token::TokenClient<'static>,
    alice: Address,
    bob: Address,
}

fn create_token_contract<'a>(
    e: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let sac: StellarAssetContract = e.register_stellar_asset_contract_v2(admin.clone());
    (
        token::Client::new(e, &sac.address()),
        token::StellarAssetClient::new(e, &sac.address()),
    )
}

impl EscrowTest {
    fn setup() -> Self {
        let env: Env = Env::default();
        env.mock_all_auths();

        let contract_id: Address = env.register(EscrowContract, ());
        let client: EscrowContractClient<'static> = EscrowContractClient::new(&env, &contract_id);

        let admin: Address = Address::generate(&env);
        let orders_ca: Address = Address::generate(&env);
        let alice: Address = Address::generate(&env);
        let bob: Address = Address::generate(&env);

        let (token_a, token_a_admin) = create_token_contract(&env, &admin);
        let (token_b, token_b_admin) = create_token_contract(&env, &admin);
        let (token_c, token_c_admin) = create_token_contract(&env, &admin);
        token_a_admin.mint(&bob, &10_000_i128);
        token_b_admin.mint(&bob, &10_000_i128);
        token_c_admin.mint(&bob, &10_000_i128);

        client.initialize(
            &admin,
            &orders_ca,
            &token_a.address,
            &token_b.address,
            &token_c.address,
        );

        EscrowTest {
            client,
            token_a,
            token_b,
            token_c,
            alice,
            bob,
        }
    }

    // Bob locks (1000, 500, 500) for Alice.
    fn open_escrow(&self) -> u64 {
        self.client
            .open(&self.bob, &self.alice, &1_000_i128, &500_i128, &500_i128)
    }
}

#[test]
fn test_open_locks_funds() {
    let test: EscrowTest = EscrowTest::setup();
    let escrow_id: u64 = test.open_escrow();

    let escrow = test.client.get_escrow(&escrow_id);
    assert_eq!(escrow.buyer, test.bob);
    assert_eq!(escrow.seller, test.alice);
    assert_eq!(test.client.balances(&escrow_id), (1_000, 500, 500));

    // Funds left the buyer and sit with the escrow contract.
    assert_eq!(test.token_a.balance(&test.bob), 9_000);
    assert_eq!(test.token_a.balance(&test.client.address), 1_000);
    assert_eq!(test.token_b.balance(&test.client.address), 500);
    assert_eq!(test.token_c.balance(&test.client.address), 500);
}

#[test]
fn test_release_pays_seller_and_consumes_record() {
    let test: EscrowTest = EscrowTest::setup();
    let escrow_id: u64 = test.open_escrow();

    test.client.release(&escrow_id);

    assert_eq!(test.token_a.balance(&test.alice), 1_000);
    assert_eq!(test.token_b.balance(&test.alice), 500);
    assert_eq!(test.token_c.balance(&test.alice), 500);

    // The record is gone; every further terminal attempt fails not-found.
    assert_eq!(
        test.client.try_get_escrow(&escrow_id),
        Err(Ok(EscrowError::EscrowNotFound))
    );
    assert_eq!(
        test.client.try_release(&escrow_id),
        Err(Ok(EscrowError::EscrowNotFound))
    );
    assert_eq!(
        test.client.try_refund(&escrow_id),
        Err(Ok(EscrowError::EscrowNotFound))
    );
}

#[test]
fn test_refund_pays_buyer_and_consumes_record() {
    let test: EscrowTest = EscrowTest::setup();
    let escrow_id: u64 = test.open_escrow();

    test.client.refund(&escrow_id);

    assert_eq!(test.token_a.balance(&test.bob), 10_000);
    assert_eq!(test.token_b.balance(&test.bob), 10_000);
    assert_eq!(test.token_c.balance(&test.bob), 10_000);
    assert_eq!(test.token_a.balance(&test.alice), 0);

    assert_eq!(
        test.client.try_release(&escrow_id),
        Err(Ok(EscrowError::EscrowNotFound))
    );
}

#[test]
fn test_zero_amounts_are_accepted() {
    let test: EscrowTest = EscrowTest::setup();
    let escrow_id: u64 = test.client.open(&test.bob, &test.alice, &0, &0, &0);

    assert_eq!(test.client.balances(&escrow_id), (0, 0, 0));
    test.client.release(&escrow_id);
    assert_eq!(test.token_a.balance(&test.alice), 0);
}
