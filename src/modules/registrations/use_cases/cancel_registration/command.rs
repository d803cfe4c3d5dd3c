use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelRegistration {
    pub registration_id: Uuid,
}
