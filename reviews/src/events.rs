use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum ReviewEvent {
    Initialized,
    Upgraded(u32),
    NewReview(u64, u64, Address, u32),
}

impl ReviewEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ReviewEvent::Initialized => stringify!(Initialized),
            ReviewEvent::Upgraded(..) => stringify!(Upgraded),
            ReviewEvent::NewReview(..) => stringify!(NewReview),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(&env);

        match self {
            ReviewEvent::Initialized => {}
            ReviewEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            ReviewEvent::NewReview(review_id, product_id, reviewer, rating) => {
                v.push_back(review_id.into_val(env));
                v.push_back(product_id.into_val(env));
                v.push_back(reviewer.into_val(env));
                v.push_back(rating.into_val(env));
            }
        }

        env.events().publish((self.name(),), v)
    }
}
