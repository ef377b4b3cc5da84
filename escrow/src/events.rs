use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum EscrowEvent {
    Initialized,
    Upgraded(u32),
    FundsLocked(u64, Address, Address, i128, i128, i128),
    FundsReleased(u64, Address, i128),
    Refunded(u64, Address, i128),
}

impl EscrowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EscrowEvent::Initialized => stringify!(Initialized),
            EscrowEvent::Upgraded(..) => stringify!(Upgraded),
            EscrowEvent::FundsLocked(..) => stringify!(FundsLocked),
            EscrowEvent::FundsReleased(..) => stringify!(FundsReleased),
            EscrowEvent::Refunded(..) => stringify!(Refunded),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            EscrowEvent::Initialized => {}
            EscrowEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            EscrowEvent::FundsLocked(escrow_id, seller, buyer, amount_a, amount_b, amount_c) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(amount_a.into_val(env));
                v.push_back(amount_b.into_val(env));
                v.push_back(amount_c.into_val(env));
            }
            EscrowEvent::FundsReleased(escrow_id, seller, amount_a) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(amount_a.into_val(env));
            }
            EscrowEvent::Refunded(escrow_id, buyer, amount_a) => {
                v.push_back(escrow_id.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(amount_a.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
