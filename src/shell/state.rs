use crate::modules::registrations::application::ledger::Ledger;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<Ledger>,
}
