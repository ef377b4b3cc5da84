#![no_std]

mod events;
mod storage;
mod types;
mod utils {
    pub mod contract_clients;
}

use events::OrderEvent;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Symbol, Vec};
use storage::{get_data, get_persistent, has_data, store_data, store_persistent};
use types::{
    DataKey, Error, Order, Shipment, ADMIN, CATALOG_CONTRACT, ESCROW_CONTRACT, NFT_CONTRACT,
    STATUS_DELIVERED, STATUS_PENDING,
};
use utils::contract_clients::{get_catalog_client, get_escrow_client, get_nft_client};

#[contract]
pub struct OrdersContract;

#[contractimpl]
impl OrdersContract {
    pub fn initialize(
        env: Env,
        admin: Address,
        catalog_ca: Address,
        nft_ca: Address,
        escrow_ca: Address,
    ) -> Result<(), Error> {
        admin.require_auth();
        if has_data::<Symbol>(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &CATALOG_CONTRACT, &catalog_ca);
        store_data(&env, &NFT_CONTRACT, &nft_ca);
        store_data(&env, &ESCROW_CONTRACT, &escrow_ca);
        store_data(&env, &DataKey::OrderCount, &0u64);
        store_data(&env, &DataKey::ShipmentCount, &0u64);

        OrderEvent::Initialized(catalog_ca, nft_ca, escrow_ca).publish(&env);
        Ok(())
    }

    pub fn version() -> u32 {
        1
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let admin: Address = get_data(&env, &ADMIN).unwrap();
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        OrderEvent::Upgraded(Self::version()).publish(&env);
    }

    pub fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error> {
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

    // Creates the order, reserves a unit of inventory and mints the
    // proof-of-purchase token, all inside this one transaction. A failure at
    // any step aborts the whole invocation with nothing written.
    pub fn create_order(
        env: Env,
        buyer: Address,
        product_id: u64,
        escrow_id: u64,
    ) -> Result<u64, Error> {
        buyer.require_auth();

        let catalog_client = get_catalog_client(&env);
        let product = catalog_client.get_product(&product_id);
        if product.inventory == 0 {
            return Err(Error::OutOfStock);
        }

        // The escrow must belong to this buyer and designate this product's
        // seller, otherwise a confirmed delivery would pay the wrong party.
        let escrow_client = get_escrow_client(&env);
        let escrow = escrow_client.get_escrow(&escrow_id);
        if escrow.buyer != buyer {
            return Err(Error::Unauthorized);
        }
        if escrow.seller != product.seller {
            return Err(Error::EscrowMismatch);
        }

        // Check-and-decrement happens inside the catalog so a concurrent
        // restock cannot interleave between the check above and the write.
        catalog_client.reserve_unit(&product_id);

        let token_id: u64 = get_nft_client(&env).mint(&buyer, &product_id);

        let order_count: u64 = get_data(&env, &DataKey::OrderCount).unwrap_or(0);
        let order_id: u64 = order_count + 1;

        let order: Order = Order {
            id: order_id,
            product_id,
            buyer: buyer.clone(),
            escrow_id,
            token_id,
            shipment_status: String::from_str(&env, STATUS_PENDING),
            disputed: false,
        };

        store_persistent(&env, &DataKey::Order(order_id), &order);
        store_data(&env, &DataKey::OrderCount, &order_id);

        let mut buyer_orders: Vec<u64> = get_persistent(&env, &DataKey::BuyerOrders(buyer.clone()))
            .unwrap_or_else(|| Vec::new(&env));
        buyer_orders.push_back(order_id);
        store_persistent(&env, &DataKey::BuyerOrders(buyer.clone()), &buyer_orders);

        OrderEvent::NewOrder(order_id, product_id, token_id, buyer).publish(&env);

        Ok(order_id)
    }

    // Dispute is a flag only; resolution happens off-contract.
    pub fn dispute(env: Env, caller: Address, order_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let mut order: Order = get_order_by_id(&env, order_id)?;
        if order.buyer != caller {
            return Err(Error::Unauthorized);
        }

        order.disputed = true;
        store_persistent(&env, &DataKey::Order(order_id), &order);

        OrderEvent::Disputed(order_id, caller).publish(&env);
        Ok(())
    }

    // Any authenticated caller may report status; the only gate is that a
    // delivered order accepts no further updates. Each call appends an
    // immutable Shipment record and overwrites the order's latest status.
    pub fn update_status(
        env: Env,
        caller: Address,
        order_id: u64,
        status: String,
    ) -> Result<u64, Error> {
        caller.require_auth();

        let mut order: Order = get_order_by_id(&env, order_id)?;
        if order.shipment_status == String::from_str(&env, STATUS_DELIVERED) {
            return Err(Error::AlreadyDelivered);
        }

        let shipment_count: u64 = get_data(&env, &DataKey::ShipmentCount).unwrap_or(0);
        let shipment_id: u64 = shipment_count + 1;

        let shipment: Shipment = Shipment {
            id: shipment_id,
            order_id,
            status: status.clone(),
        };
        store_persistent(&env, &DataKey::Shipment(shipment_id), &shipment);
        store_data(&env, &DataKey::ShipmentCount, &shipment_id);

        order.shipment_status = status.clone();
        store_persistent(&env, &DataKey::Order(order_id), &order);

        OrderEvent::StatusUpdated(order_id, shipment_id, status).publish(&env);
        Ok(shipment_id)
    }

    // The only path to Escrow::release: the buyer confirms a delivered
    // order, and the escrow contract accepts the call because it comes from
    // this contract.
    pub fn confirm_delivery(
        env: Env,
        caller: Address,
        order_id: u64,
        escrow_id: u64,
    ) -> Result<(), Error> {
        caller.require_auth();

        let order: Order = get_order_by_id(&env, order_id)?;
        if order.buyer != caller {
            return Err(Error::Unauthorized);
        }
        if order.escrow_id != escrow_id {
            return Err(Error::EscrowMismatch);
        }
        if order.shipment_status != String::from_str(&env, STATUS_DELIVERED) {
            return Err(Error::NotDelivered);
        }

        get_escrow_client(&env).release(&escrow_id);

        OrderEvent::ConfirmedDelivery(order_id, escrow_id, caller).publish(&env);
        Ok(())
    }

    // Buyer-side cancellation; refuses once the order reads delivered.
    pub fn cancel_order(
        env: Env,
        caller: Address,
        order_id: u64,
        escrow_id: u64,
    ) -> Result<(), Error> {
        caller.require_auth();

        let order: Order = get_order_by_id(&env, order_id)?;
        if order.buyer != caller {
            return Err(Error::Unauthorized);
        }
        if order.escrow_id != escrow_id {
            return Err(Error::EscrowMismatch);
        }
        if order.shipment_status == String::from_str(&env, STATUS_DELIVERED) {
            return Err(Error::AlreadyDelivered);
        }

        get_escrow_client(&env).refund(&escrow_id);

        OrderEvent::OrderCancelled(order_id, caller).publish(&env);
        Ok(())
    }

    pub fn get_order(env: Env, order_id: u64) -> Result<Order, Error> {
        get_order_by_id(&env, order_id)
    }

    pub fn shipment_status(env: Env, order_id: u64) -> Result<String, Error> {
        let order: Order = get_order_by_id(&env, order_id)?;
        Ok(order.shipment_status)
    }

    pub fn buyer_of(env: Env, order_id: u64) -> Result<Address, Error> {
        let order: Order = get_order_by_id(&env, order_id)?;
        Ok(order.buyer)
    }

    pub fn get_shipment(env: Env, shipment_id: u64) -> Result<Shipment, Error> {
        get_persistent(&env, &DataKey::Shipment(shipment_id)).ok_or(Error::ShipmentNotFound)
    }

    pub fn status(env: Env, shipment_id: u64) -> Result<String, Error> {
        let shipment: Shipment = Self::get_shipment(env, shipment_id)?;
        Ok(shipment.status)
    }

    pub fn get_buyer_orders(env: Env, buyer: Address) -> Vec<u64> {
        get_persistent(&env, &DataKey::BuyerOrders(buyer)).unwrap_or_else(|| Vec::new(&env))
    }

    pub fn get_order_count(env: Env) -> u64 {
        get_data(&env, &DataKey::OrderCount).unwrap_or(0)
    }
}

fn get_order_by_id(env: &Env, order_id: u64) -> Result<Order, Error> {
    get_persistent(env, &DataKey::Order(order_id)).ok_or(Error::OrderNotFound)
}
