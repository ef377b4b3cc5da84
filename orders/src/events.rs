use soroban_sdk::{Address, Env, IntoVal, String, Val, Vec};

pub enum OrderEvent {
    Initialized(Address, Address, Address),
    Upgraded(u32),
    NewOrder(u64, u64, u64, Address),
    Disputed(u64, Address),
    StatusUpdated(u64, u64, String),
    ConfirmedDelivery(u64, u64, Address),
    OrderCancelled(u64, Address),
}

impl OrderEvent {
    pub fn name(&self) -> &'static str {
        match self {
            OrderEvent::Initialized(..) => stringify!(Initialized),
            OrderEvent::Upgraded(..) => stringify!(Upgraded),
            OrderEvent::NewOrder(..) => stringify!(NewOrder),
            OrderEvent::Disputed(..) => stringify!(Disputed),
            OrderEvent::StatusUpdated(..) => stringify!(StatusUpdated),
            OrderEvent::ConfirmedDelivery(..) => stringify!(ConfirmedDelivery),
            OrderEvent::OrderCancelled(..) => stringify!(OrderCancelled),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            OrderEvent::Initialized(catalog_contract, nft_contract, escrow_contract) => {
                v.push_back(catalog_contract.into_val(env));
                v.push_back(nft_contract.into_val(env));
                v.push_back(escrow_contract.into_val(env));
            }
            OrderEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            OrderEvent::NewOrder(order_id, product_id, token_id, buyer) => {
                v.push_back(order_id.into_val(env));
                v.push_back(product_id.into_val(env));
                v.push_back(token_id.into_val(env));
                v.push_back(buyer.into_val(env));
            }
            OrderEvent::Disputed(order_id, buyer) => {
                v.push_back(order_id.into_val(env));
                v.push_back(buyer.into_val(env));
            }
            OrderEvent::StatusUpdated(order_id, shipment_id, status) => {
                v.push_back(order_id.into_val(env));
                v.push_back(shipment_id.into_val(env));
                v.push_back(status.into_val(env));
            }
            OrderEvent::ConfirmedDelivery(order_id, escrow_id, buyer) => {
                v.push_back(order_id.into_val(env));
                v.push_back(escrow_id.into_val(env));
                v.push_back(buyer.into_val(env));
            }
            OrderEvent::OrderCancelled(order_id, buyer) => {
                v.push_back(order_id.into_val(env));
                v.push_back(buyer.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
