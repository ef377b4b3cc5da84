#![no_std]

mod events;

use common::catalog::{
    interface::CatalogContractTrait,
    types::{CatalogDataKey as DataKey, CatalogError as Error, Product, ADMIN, ORDERS_CONTRACT},
};
use events::CatalogEvent;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Symbol, Vec};

#[contract]
pub struct CatalogContract;

#[contractimpl]
impl CatalogContractTrait for CatalogContract {
    fn initialize(env: Env, admin: Address, orders_contract_id: Address) -> Result<(), Error> {
        admin.require_auth();
        if env.storage().instance().has::<Symbol>(&ADMIN) {
            return Err(Error::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage()
            .instance()
            .set(&ORDERS_CONTRACT, &orders_contract_id);
        env.storage().instance().set(&DataKey::ProductCount, &0u64);
        CatalogEvent::Initialized.publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = env.storage().instance().get(&ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        CatalogEvent::Upgraded(Self::version()).publish(&env);
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

    fn add_product(
        env: Env,
        seller: Address,
        name: String,
        specs: String,
        price_a: i128,
        price_b: i128,
        price_c: i128,
        inventory: u64,
    ) -> Result<u64, Error> {
        seller.require_auth();

        let product_count: u64 = env
            .storage()
            .instance()
            .get(&DataKey::ProductCount)
            .unwrap_or(0);
        let product_id: u64 = product_count + 1;

        let product: Product = Product {
            id: product_id,
            seller: seller.clone(),
            name,
            specs,
            price_a,
            price_b,
            price_c,
            inventory,
        };

        env.storage()
            .persistent()
            .set(&DataKey::Product(product_id), &product);
        env.storage()
            .instance()
            .set(&DataKey::ProductCount, &product_id);

        let mut seller_products: Vec<u64> = env
            .storage()
            .persistent()
            .get(&DataKey::SellerProducts(seller.clone()))
            .unwrap_or_else(|| Vec::new(&env));
        seller_products.push_back(product_id);
        env.storage()
            .persistent()
            .set(&DataKey::SellerProducts(seller.clone()), &seller_products);

        CatalogEvent::NewProduct(product_id, seller, inventory).publish(&env);

        Ok(product_id)
    }

    fn set_inventory(
        env: Env,
        seller: Address,
        product_id: u64,
        inventory: u64,
    ) -> Result<(), Error> {
        seller.require_auth();

        let mut product: Product = Self::get_product(env.clone(), product_id)?;
        if product.seller != seller {
            return Err(Error::Unauthorized);
        }

        // No upper bound; sellers may restock or zero out freely.
        product.inventory = inventory;
        env.storage()
            .persistent()
            .set(&DataKey::Product(product_id), &product);

        CatalogEvent::InventorySet(product_id, inventory).publish(&env);
        Ok(())
    }

    // Check-and-decrement as one atomic unit, called by the orders contract
    // inside the order-creation transaction. Keeping both halves here is what
    // rules out overselling under concurrent orders.
    fn reserve_unit(env: Env, product_id: u64) -> Result<(), Error> {
        require_orders_call(&env);

        let mut product: Product = Self::get_product(env.clone(), product_id)?;
        if product.inventory == 0 {
            return Err(Error::OutOfStock);
        }

        product.inventory -= 1;
        env.storage()
            .persistent()
            .set(&DataKey::Product(product_id), &product);

        CatalogEvent::UnitReserved(product_id, product.inventory).publish(&env);
        Ok(())
    }

    fn get_product(env: Env, product_id: u64) -> Result<Product, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Product(product_id))
            .ok_or(Error::ProductNotFound)
    }

    fn inventory(env: Env, product_id: u64) -> Result<u64, Error> {
        let product: Product = Self::get_product(env, product_id)?;
        Ok(product.inventory)
    }

    fn seller_of(env: Env, product_id: u64) -> Result<Address, Error> {
        let product: Product = Self::get_product(env, product_id)?;
        Ok(product.seller)
    }

    fn get_seller_products(env: Env, seller: Address) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::SellerProducts(seller))
            .unwrap_or_else(|| Vec::new(&env))
    }

    fn get_product_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::ProductCount)
            .unwrap_or(0)
    }
}

fn require_orders_call(env: &Env) {
    let orders_address: Address = env.storage().instance().get(&ORDERS_CONTRACT).unwrap();
    orders_address.require_auth();
}
