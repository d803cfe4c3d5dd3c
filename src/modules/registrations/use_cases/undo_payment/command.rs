use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoPayment {
    pub payment_id: Uuid,
}
