// Shared fixtures for the integration tests. Each test file pulls this in with `mod fixtures;`.
#![allow(dead_code)]

use registration_ledger::modules::registrations::application::ledger::{Ledger, LedgerSettings};
use registration_ledger::modules::registrations::core::events::RegistrationEvent;
use registration_ledger::modules::registrations::core::tickets::{
    Accommodation, AgeCategory, StayDuration, SupporterCategory,
};
use registration_ledger::modules::registrations::use_cases::register::command::{
    ParticipantRequest, RegisterAttendees,
};
use registration_ledger::shared::infrastructure::event_store::EventStore;
use registration_ledger::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use std::sync::Arc;

pub fn participant(accommodation: Accommodation) -> ParticipantRequest {
    ParticipantRequest::new(
        AgeCategory::OlderThan12,
        StayDuration::FridayToSunday,
        accommodation,
        SupporterCategory::Normal,
    )
}

pub fn register_command(email: &str, participants: Vec<ParticipantRequest>) -> RegisterAttendees {
    RegisterAttendees::new(email, "", participants)
}

pub async fn replayed_ledger(store: Arc<dyn EventStore<RegistrationEvent>>) -> (Ledger, Arc<InMemoryNotifier>) {
    let notifier = Arc::new(InMemoryNotifier::new());
    let ledger = Ledger::new(store, notifier.clone(), LedgerSettings::default());
    ledger.replay().await.unwrap();
    (ledger, notifier)
}
