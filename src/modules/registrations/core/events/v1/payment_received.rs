// Event payload: PaymentReceivedV1.
//
// Purpose
// - Record money received for a registration. Amounts are integer cents.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceivedV1 {
    pub payment_id: Uuid,
    pub registration_id: Uuid,
    pub amount_in_cents: i64,
}
