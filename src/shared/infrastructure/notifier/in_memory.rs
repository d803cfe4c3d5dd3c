// In memory implementation of the Notifier port.
//
// Purpose
// - Let tests inspect which messages a command produced.
//
// Responsibilities
// - Collect sent messages in a list.
// - Fail every send while offline.

use crate::shared::infrastructure::notifier::{NotificationMessage, Notifier, NotifierError};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryNotifier {
    pub sent: Mutex<Vec<NotificationMessage>>,
    is_offline: AtomicBool,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub async fn messages(&self) -> Vec<NotificationMessage> {
        self.sent.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl Notifier for InMemoryNotifier {
    async fn send(&self, message: NotificationMessage) -> Result<(), NotifierError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(NotifierError::Transport("Notifier offline".into()));
        }
        self.sent.lock().await.push(message);
        Ok(())
    }
}
