#![cfg(test)]
extern crate std;

use super::*;
use common::nft::interface::TokenContractClient;
use nft::contract::TokenContract;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

struct ReviewTest {
    env: Env,
    client: ReviewContractClient<'static>,
    nft_client: TokenContractClient<'static>,
    alice: Address,
    bob: Address,
}

impl ReviewTest {
    fn setup() -> Self {
        let env: Env = Env::default();
        env.mock_all_auths();

        let review_ca: Address = env.register(ReviewContract, ());
        let client: ReviewContractClient<'static> = ReviewContractClient::new(&env, &review_ca);

        let nft_ca: Address = env.register(TokenContract, ());
        let nft_client: TokenContractClient<'static> = TokenContractClient::new(&env, &nft_ca);

        let admin: Address = Address::generate(&env);
        let orders_ca: Address = Address::generate(&env);
        let alice: Address = Address::generate(&env);
        let bob: Address = Address::generate(&env);

        nft_client.initialize(&admin, &orders_ca);
        client.initialize(&admin, &nft_ca);

        ReviewTest {
            env,
            client,
            nft_client,
            alice,
            bob,
        }
    }
}

#[test]
fn test_submit_review() {
    let test: ReviewTest = ReviewTest::setup();
    let token_id: u64 = test.nft_client.mint(&test.bob, &7);

    let comment = String::from_str(&test.env, "Arrived intact, great preamps");
    let review_id: u64 = test.client.submit(&test.bob, &token_id, &7, &5, &comment);

    let review = test.client.get_review(&review_id);
    assert_eq!(review.product_id, 7);
    assert_eq!(review.reviewer, test.bob);
    assert_eq!(review.rating, 5);
    assert_eq!(review.comment, comment);

    assert_eq!(test.client.get_product_reviews(&7).len(), 1);
    assert_eq!(test.client.get_review_count(), 1);
}

#[test]
fn test_submit_requires_token_owner() {
    let test: ReviewTest = ReviewTest::setup();
    let token_id: u64 = test.nft_client.mint(&test.bob, &7);

    let comment = String::from_str(&test.env, "never bought this");
    let result = test
        .client
        .try_submit(&test.alice, &token_id, &7, &4, &comment);
    assert_eq!(result, Err(Ok(types::Error::Unauthorized)));
    assert_eq!(test.client.get_review_count(), 0);
}

#[test]
fn test_submit_rejects_product_mismatch() {
    let test: ReviewTest = ReviewTest::setup();
    let token_id: u64 = test.nft_client.mint(&test.bob, &7);

    let comment = String::from_str(&test.env, "wrong product");
    let result = test.client.try_submit(&test.bob, &token_id, &8, &4, &comment);
    assert_eq!(result, Err(Ok(types::Error::ProductMismatch)));
    assert_eq!(test.client.get_review_count(), 0);
}

#[test]
fn test_submit_rejects_out_of_range_rating() {
    let test: ReviewTest = ReviewTest::setup();
    let token_id: u64 = test.nft_client.mint(&test.bob, &7);
    let comment = String::from_str(&test.env, "eleven out of ten");

    let result = test.client.try_submit(&test.bob, &token_id, &7, &6, &comment);
    assert_eq!(result, Err(Ok(types::Error::InvalidRating)));

    let result = test.client.try_submit(&test.bob, &token_id, &7, &0, &comment);
    assert_eq!(result, Err(Ok(types::Error::InvalidRating)));

    assert_eq!(test.client.get_review_count(), 0);
}

// The review gate reads the token's minted owner field, which a transfer
// does not touch: the original buyer keeps the right to review and the new
// holder does not gain it.
#[test]
fn test_review_gate_follows_minted_owner_not_holder() {
    let test: ReviewTest = ReviewTest::setup();
    let token_id: u64 = test.nft_client.mint(&test.bob, &7);

    test.nft_client.transfer(&test.bob, &test.alice, &token_id);
    assert_eq!(test.nft_client.holder_of(&token_id), test.alice);

    let comment = String::from_str(&test.env, "bought it second hand");
    let result = test
        .client
        .try_submit(&test.alice, &token_id, &7, &4, &comment);
    assert_eq!(result, Err(Ok(types::Error::Unauthorized)));

    let comment = String::from_str(&test.env, "original purchase");
    let review_id: u64 = test.client.submit(&test.bob, &token_id, &7, &4, &comment);
    assert_eq!(test.client.get_review(&review_id).reviewer, test.bob);
}
