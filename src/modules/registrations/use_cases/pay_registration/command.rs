use uuid::Uuid;

/// Record money received for a registration. `payment_id` is chosen by the caller so a retried
/// request is rejected as a duplicate instead of being counted twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayRegistration {
    pub payment_id: Uuid,
    pub registration_id: Uuid,
    pub amount_in_cents: i64,
}

impl PayRegistration {
    pub fn new(registration_id: Uuid, amount_in_cents: i64) -> Self {
        Self {
            payment_id: Uuid::now_v7(),
            registration_id,
            amount_in_cents,
        }
    }
}
