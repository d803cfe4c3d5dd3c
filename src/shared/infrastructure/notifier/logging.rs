// Notifier that writes each message to the tracing log. Default for local runs.

use crate::shared::infrastructure::notifier::{NotificationMessage, Notifier, NotifierError};

#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

#[async_trait::async_trait]
impl Notifier for TracingNotifier {
    async fn send(&self, message: NotificationMessage) -> Result<(), NotifierError> {
        tracing::info!(
            kind = ?message.kind,
            registration_id = %message.registration_id,
            to = %message.to,
            subject = %message.subject,
            "notification"
        );
        Ok(())
    }
}
