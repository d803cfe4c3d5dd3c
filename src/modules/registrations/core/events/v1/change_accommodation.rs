use crate::modules::registrations::core::tickets::Accommodation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeAccommodationV1 {
    pub participant_id: Uuid,
    pub accommodation: Accommodation,
}
