#![no_std]

mod events;
mod types;

use common::nft::interface::TokenContractClient;
use events::ReviewEvent;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Symbol, Vec};
use types::{DataKey, Error, Review, ADMIN, NFT_CONTRACT};

#[contract]
pub struct ReviewContract;

#[contractimpl]
impl ReviewContract {
    pub fn initialize(env: Env, admin: Address, nft_contract_id: Address) -> Result<(), Error> {
        admin.require_auth();
        if env.storage().instance().has::<Symbol>(&ADMIN) {
            return Err(Error::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&NFT_CONTRACT, &nft_contract_id);
        env.storage().instance().set(&DataKey::ReviewCount, &0u64);
        ReviewEvent::Initialized.publish(&env);
        Ok(())
    }

    pub fn version() -> u32 {
        1
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = env.storage().instance().get(&ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        ReviewEvent::Upgraded(Self::version()).publish(&env);
    }

    pub fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error> {
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

    // A review is accepted only from the recorded owner of an ownership
    // token minted for the reviewed product.
    pub fn submit(
        env: Env,
        reviewer: Address,
        token_id: u64,
        product_id: u64,
        rating: u32,
        comment: String,
    ) -> Result<u64, Error> {
        reviewer.require_auth();

        let nft_ca: Address = env.storage().instance().get(&NFT_CONTRACT).unwrap();
        let token = TokenContractClient::new(&env, &nft_ca).get_token(&token_id);

        if token.owner != reviewer {
            return Err(Error::Unauthorized);
        }
        if token.product_id != product_id {
            return Err(Error::ProductMismatch);
        }
        if !(1..=5).contains(&rating) {
            return Err(Error::InvalidRating);
        }

        let review_count: u64 = env
            .storage()
            .instance()
            .get(&DataKey::ReviewCount)
            .unwrap_or(0);
        let review_id: u64 = review_count + 1;

        let review: Review = Review {
            id: review_id,
            product_id,
            reviewer: reviewer.clone(),
            rating,
            comment,
        };
        env.storage()
            .persistent()
            .set(&DataKey::Review(review_id), &review);
        env.storage()
            .instance()
            .set(&DataKey::ReviewCount, &review_id);

        let mut product_reviews: Vec<u64> = env
            .storage()
            .persistent()
            .get(&DataKey::ProductReviews(product_id))
            .unwrap_or_else(|| Vec::new(&env));
        product_reviews.push_back(review_id);
        env.storage()
            .persistent()
            .set(&DataKey::ProductReviews(product_id), &product_reviews);

        ReviewEvent::NewReview(review_id, product_id, reviewer, rating).publish(&env);

        Ok(review_id)
    }

    pub fn get_review(env: Env, review_id: u64) -> Result<Review, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Review(review_id))
            .ok_or(Error::ReviewNotFound)
    }

    pub fn get_product_reviews(env: Env, product_id: u64) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::ProductReviews(product_id))
            .unwrap_or_else(|| Vec::new(&env))
    }

    pub fn get_review_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::ReviewCount)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod test;
