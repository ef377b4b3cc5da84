use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum CatalogEvent {
    Initialized,
    Upgraded(u32),
    NewProduct(u64, Address, u64),
    InventorySet(u64, u64),
    UnitReserved(u64, u64),
}

impl CatalogEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CatalogEvent::Initialized => stringify!(Initialized),
            CatalogEvent::Upgraded(..) => stringify!(Upgraded),
            CatalogEvent::NewProduct(..) => stringify!(NewProduct),
            CatalogEvent::InventorySet(..) => stringify!(InventorySet),
            CatalogEvent::UnitReserved(..) => stringify!(UnitReserved),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            CatalogEvent::Initialized => {}
            CatalogEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            CatalogEvent::NewProduct(product_id, seller, inventory) => {
                v.push_back(product_id.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(inventory.into_val(env));
            }
            CatalogEvent::InventorySet(product_id, inventory) => {
                v.push_back(product_id.into_val(env));
                v.push_back(inventory.into_val(env));
            }
            CatalogEvent::UnitReserved(product_id, remaining) => {
                v.push_back(product_id.into_val(env));
                v.push_back(remaining.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
