// Outbound notification port.
//
// Purpose
// - Let the ledger hand finished messages to whatever delivers them (mail relay, chat hook, log).
//
// Boundaries
// - Called only after an event is durable and folded. A failed send is reported back to the
//   caller, who logs it. It never undoes the event.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod in_memory;
pub mod logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationKind {
    RegistrationConfirmation,
    CancellationConfirmation,
    PaymentConfirmation,
    PaymentReminder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMessage {
    pub kind: NotificationKind,
    pub registration_id: Uuid,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("notification rejected: {0}")]
    Rejected(String),

    #[error("transport error: {0}")]
    Transport(String),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: NotificationMessage) -> Result<(), NotifierError>;
}
