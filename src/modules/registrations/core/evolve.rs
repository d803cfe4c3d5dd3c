// Evolve function: combine a prior state with one stored envelope to produce the next state.
//
// Purpose
// - Define deterministic transitions for each event. Replay and live application both go through
//   here, so they cannot drift apart.
//
// Boundaries
// - No input or output. No side effects. No wildcard arm: every event kind is handled.
// - Events reference entities that may be missing (a log written by an older build, a manual
//   edit). Such events only advance the version.

use crate::modules::registrations::core::events::RegistrationEvent;
use crate::modules::registrations::core::state::{LedgerState, Participant, Payment, Registration};
use crate::shared::infrastructure::event_store::EventEnvelope;

pub fn evolve(mut state: LedgerState, envelope: &EventEnvelope<RegistrationEvent>) -> LedgerState {
    match &envelope.payload {
        RegistrationEvent::Register(e) => {
            state.registrations.insert(
                e.registration_id,
                Registration {
                    id: e.registration_id,
                    email: e.email.clone(),
                    comment: e.comment.clone(),
                    payment_reason: e.payment_reason.clone(),
                    registered_at: envelope.timestamp,
                    is_cancelled: false,
                    payment_reminders_sent: 0,
                    last_payment_reminder_at: None,
                },
            );
            for p in &e.participants {
                state.participants.insert(
                    p.participant_id,
                    Participant {
                        id: p.participant_id,
                        registration_id: e.registration_id,
                        ticket: p.ticket.clone(),
                        accommodation: p.accommodation,
                        birthday: p.birthday,
                        is_cancelled: false,
                    },
                );
            }
            state.counters.registrations_total += 1;
            state.counters.registrations_active += 1;
            state.counters.participants_active += e.participants.len();
        }
        RegistrationEvent::CancelRegistration(e) => {
            if let Some(registration) = state.registrations.get_mut(&e.registration_id) {
                if !registration.is_cancelled {
                    registration.is_cancelled = true;
                    state.counters.registrations_active -= 1;
                    state.counters.registrations_cancelled += 1;
                    for participant in state
                        .participants
                        .values_mut()
                        .filter(|p| p.registration_id == e.registration_id && !p.is_cancelled)
                    {
                        participant.is_cancelled = true;
                        state.counters.participants_active -= 1;
                    }
                }
            }
        }
        RegistrationEvent::PaymentReceived(e) => {
            state.payments.push(Payment {
                id: e.payment_id,
                registration_id: e.registration_id,
                amount_in_cents: e.amount_in_cents,
                received_at: envelope.timestamp,
            });
        }
        RegistrationEvent::CancelPayment(e) => {
            state.payments.retain(|p| p.id != e.payment_id);
        }
        RegistrationEvent::ChangeAccommodation(e) => {
            if let Some(participant) = state.participants.get_mut(&e.participant_id) {
                participant.accommodation = e.accommodation;
            }
        }
        RegistrationEvent::PaymentReminderSent(e) => {
            if let Some(registration) = state.registrations.get_mut(&e.registration_id) {
                registration.payment_reminders_sent += 1;
                registration.last_payment_reminder_at = Some(envelope.timestamp);
            }
        }
    }
    state.latest_version = envelope.version;
    state
}
