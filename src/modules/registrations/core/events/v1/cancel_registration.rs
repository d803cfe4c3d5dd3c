// Event payload: CancelRegistrationV1. Cancels the registration and every participant on it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelRegistrationV1 {
    pub registration_id: Uuid,
}
