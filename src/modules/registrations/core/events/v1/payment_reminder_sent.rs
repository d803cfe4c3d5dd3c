// Event payload: PaymentReminderSentV1.
//
// Purpose
// - Record that a reminder went out, so the projection can count reminders per registration.
//   The message itself is dispatched after the event is stored.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReminderSentV1 {
    pub registration_id: Uuid,
}
