use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendPaymentReminder {
    pub registration_id: Uuid,
}
