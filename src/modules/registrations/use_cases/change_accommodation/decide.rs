// Pure decision function for moving a participant to another accommodation.
//
// Rules
// - Unknown participant: skipped. Cancelled participant or same accommodation: skipped.
// - The target accommodation must have a free place.

use crate::modules::registrations::core::decision::{DecideError, Decision, NoOp};
use crate::modules::registrations::core::events::RegistrationEvent;
use crate::modules::registrations::core::events::v1::change_accommodation::ChangeAccommodationV1;
use crate::modules::registrations::core::state::LedgerState;
use crate::modules::registrations::use_cases::change_accommodation::command::ChangeAccommodation;

pub fn decide_change_accommodation(state: &LedgerState, command: ChangeAccommodation) -> Decision {
    let Some(participant) = state.participants.get(&command.participant_id) else {
        return Decision::skip(NoOp::ParticipantNotFound(command.participant_id));
    };
    if participant.is_cancelled {
        return Decision::skip(NoOp::ParticipantCancelled(participant.id));
    }
    if participant.accommodation == command.accommodation {
        return Decision::skip(NoOp::AccommodationUnchanged(participant.id));
    }
    if let Some(limit) = state.limits.limit(command.accommodation) {
        let remaining = limit.saturating_sub(state.accommodation_taken(command.accommodation));
        if remaining == 0 {
            return Decision::reject(DecideError::CapacityExceeded {
                accommodation: command.accommodation,
                requested: 1,
                remaining,
            });
        }
    }
    Decision::accept(RegistrationEvent::ChangeAccommodation(ChangeAccommodationV1 {
        participant_id: participant.id,
        accommodation: command.accommodation,
    }))
}
