use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum TokenEvent {
    Initialized,
    Upgraded(u32),
    Mint(u64, u64, Address),
    Transfer(u64, Address, Address),
}

impl TokenEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TokenEvent::Initialized => stringify!(Initialized),
            TokenEvent::Upgraded(..) => stringify!(Upgraded),
            TokenEvent::Mint(..) => stringify!(Mint),
            TokenEvent::Transfer(..) => stringify!(Transfer),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            TokenEvent::Initialized => {}
            TokenEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            TokenEvent::Mint(token_id, product_id, owner) => {
                v.push_back(token_id.into_val(env));
                v.push_back(product_id.into_val(env));
                v.push_back(owner.into_val(env));
            }
            TokenEvent::Transfer(token_id, from, to) => {
                v.push_back(token_id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
