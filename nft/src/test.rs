#![cfg(test)]
extern crate std;

use crate::contract::TokenContract;
use common::nft::interface::TokenContractClient;
use common::nft::types::TokenError;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

struct TokenTest {
    client: TokenContractClient<'static>,
    alice: Address,
    bob: Address,
}

impl TokenTest {
    fn setup() -> Self {
        let env: Env = Env::default();
        env.mock_all_auths();

        let contract_id: Address = env.register(TokenContract, ());
        let client: TokenContractClient<'static> = TokenContractClient::new(&env, &contract_id);

        let admin: Address = Address::generate(&env);
        let orders_ca: Address = Address::generate(&env);
        let alice: Address = Address::generate(&env);
        let bob: Address = Address::generate(&env);

        client.initialize(&admin, &orders_ca);

        TokenTest { client, alice, bob }
    }
}

#[test]
fn test_mint() {
    let test: TokenTest = TokenTest::setup();
    let token_id: u64 = test.client.mint(&test.bob, &7);

    assert_eq!(token_id, 1);
    assert!(test.client.exists(&token_id));
    assert_eq!(test.client.owner_of(&token_id), test.bob);
    assert_eq!(test.client.holder_of(&token_id), test.bob);
    assert_eq!(test.client.product_of(&token_id), 7);
}

#[test]
fn test_transfer_moves_holdership_only() {
    let test: TokenTest = TokenTest::setup();
    let token_id: u64 = test.client.mint(&test.bob, &7);

    test.client.transfer(&test.bob, &test.alice, &token_id);

    // The holder changed but the minted owner field did not.
    assert_eq!(test.client.holder_of(&token_id), test.alice);
    assert_eq!(test.client.owner_of(&token_id), test.bob);
}

#[test]
fn test_transfer_requires_current_holder() {
    let test: TokenTest = TokenTest::setup();
    let token_id: u64 = test.client.mint(&test.bob, &7);

    let result = test.client.try_transfer(&test.alice, &test.alice, &token_id);
    assert_eq!(result, Err(Ok(TokenError::Unauthorized)));
    assert_eq!(test.client.holder_of(&token_id), test.bob);
}

#[test]
fn test_missing_token() {
    let test: TokenTest = TokenTest::setup();

    assert!(!test.client.exists(&42));
    let result = test.client.try_transfer(&test.bob, &test.alice, &42);
    assert_eq!(result, Err(Ok(TokenError::TokenNotFound)));
}

#[test]
fn test_initialize_once() {
    let test: TokenTest = TokenTest::setup();
    let env: Env = test.client.env.clone();
    let admin: Address = Address::generate(&env);
    let orders_ca: Address = Address::generate(&env);

    let result = test.client.try_initialize(&admin, &orders_ca);
    assert_eq!(result, Err(Ok(TokenError::AlreadyInitialized)));
}
