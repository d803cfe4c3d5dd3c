// Shared test fixtures for events and envelopes.

use crate::modules::registrations::core::events::RegistrationEvent;
use crate::modules::registrations::core::events::v1::register::{RegisterV1, RegisteredParticipantV1};
use crate::modules::registrations::use_cases::register::decide::RegistrationPolicy;
use crate::shared::infrastructure::event_store::{EventEnvelope, Version};
use crate::tests::fixtures::commands::RegisterAttendeesBuilder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimal payload for exercising the stores without the ledger domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEvent {
    pub name: String,
}

impl DomainEvent {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Canonical Register event built from the default command fixture, as the first registration.
pub fn make_register_v1_event() -> RegisterV1 {
    let command = RegisterAttendeesBuilder::new().build();
    let policy = RegistrationPolicy::default();
    RegisterV1 {
        registration_id: command.registration_id,
        email: command.email,
        comment: command.comment,
        payment_reason: policy.payment_reason(1),
        participants: command
            .participants
            .into_iter()
            .map(|p| RegisteredParticipantV1 {
                participant_id: p.participant_id,
                ticket: policy.prices.ticket(p.age_category, p.duration, p.supporter_category),
                accommodation: p.accommodation,
                birthday: p.birthday,
            })
            .collect(),
    }
}

pub fn envelope(version: Version, event: RegistrationEvent) -> EventEnvelope<RegistrationEvent> {
    EventEnvelope::seal(event, version)
}

pub fn envelope_at(
    version: Version,
    at: DateTime<Utc>,
    event: RegistrationEvent,
) -> EventEnvelope<RegistrationEvent> {
    EventEnvelope {
        id: Uuid::now_v7(),
        version,
        timestamp: at,
        payload: event,
    }
}
