use crate::modules::registrations::core::tickets::Accommodation;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeAccommodation {
    pub participant_id: Uuid,
    pub accommodation: Accommodation,
}
