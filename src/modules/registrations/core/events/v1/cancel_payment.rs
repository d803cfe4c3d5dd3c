// Event payload: CancelPaymentV1. Voids an earlier PaymentReceivedV1 by its payment id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelPaymentV1 {
    pub payment_id: Uuid,
}
