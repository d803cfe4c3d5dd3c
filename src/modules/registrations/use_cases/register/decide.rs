// Pure decision function for registration.
//
// Purpose
// - Validate the command against the current state and produce the Register event on success.
//
// Responsibilities
// - Enforce rules: a usable email, at least one participant, fresh ids, enough places left in
//   every requested accommodation.
// - Price every ticket and number the payment reason here, so the event is self-contained.
// - Never perform input or output.

use crate::modules::registrations::core::decision::{DecideError, Decision};
use crate::modules::registrations::core::events::RegistrationEvent;
use crate::modules::registrations::core::events::v1::register::{RegisterV1, RegisteredParticipantV1};
use crate::modules::registrations::core::intents::RegistrationIntent;
use crate::modules::registrations::core::state::LedgerState;
use crate::modules::registrations::core::tickets::{Accommodation, TicketPrices};
use crate::modules::registrations::use_cases::register::command::RegisterAttendees;
use std::collections::{BTreeMap, HashSet};

/// Settings the register decision depends on besides state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationPolicy {
    pub prices: TicketPrices,
    pub payment_reason_prefix: String,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            prices: TicketPrices::default(),
            payment_reason_prefix: "REG".to_string(),
        }
    }
}

impl RegistrationPolicy {
    pub fn payment_reason(&self, sequence: usize) -> String {
        format!("{}-{sequence:04}", self.payment_reason_prefix)
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

pub fn decide_register(state: &LedgerState, command: RegisterAttendees, policy: &RegistrationPolicy) -> Decision {
    let email = command.email.trim().to_string();
    if !is_plausible_email(&email) {
        return Decision::reject(DecideError::InvalidEmail(command.email));
    }
    if command.participants.is_empty() {
        return Decision::reject(DecideError::NoParticipants);
    }
    if state.registrations.contains_key(&command.registration_id) {
        return Decision::reject(DecideError::RegistrationExists(command.registration_id));
    }

    let mut seen = HashSet::new();
    for p in &command.participants {
        if state.participants.contains_key(&p.participant_id) || !seen.insert(p.participant_id) {
            return Decision::reject(DecideError::ParticipantExists(p.participant_id));
        }
    }

    let mut requested: BTreeMap<Accommodation, usize> = BTreeMap::new();
    for p in &command.participants {
        *requested.entry(p.accommodation).or_default() += 1;
    }
    for (accommodation, requested) in requested {
        if let Some(limit) = state.limits.limit(accommodation) {
            let remaining = limit.saturating_sub(state.accommodation_taken(accommodation));
            if requested > remaining {
                return Decision::reject(DecideError::CapacityExceeded {
                    accommodation,
                    requested,
                    remaining,
                });
            }
        }
    }

    let participants = command
        .participants
        .into_iter()
        .map(|p| RegisteredParticipantV1 {
            participant_id: p.participant_id,
            ticket: policy.prices.ticket(p.age_category, p.duration, p.supporter_category),
            accommodation: p.accommodation,
            birthday: p.birthday,
        })
        .collect();

    let event = RegisterV1 {
        registration_id: command.registration_id,
        email,
        comment: command.comment,
        payment_reason: policy.payment_reason(state.counters.registrations_total + 1),
        participants,
    };
    Decision::accept(RegistrationEvent::Register(event)).with_intent(
        RegistrationIntent::SendRegistrationConfirmation {
            registration_id: command.registration_id,
        },
    )
}
