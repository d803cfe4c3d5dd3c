// Pure decision function for cancelling a registration.
//
// Rules
// - Unknown registration: skipped, not an error.
// - Cancelling twice: skipped. Cancelled is terminal.
// - Otherwise one CancelRegistration event that cancels every participant of the registration.

use crate::modules::registrations::core::decision::{Decision, NoOp};
use crate::modules::registrations::core::events::RegistrationEvent;
use crate::modules::registrations::core::events::v1::cancel_registration::CancelRegistrationV1;
use crate::modules::registrations::core::intents::RegistrationIntent;
use crate::modules::registrations::core::state::LedgerState;
use crate::modules::registrations::use_cases::cancel_registration::command::CancelRegistration;

pub fn decide_cancel_registration(state: &LedgerState, command: CancelRegistration) -> Decision {
    let Some(registration) = state.registration(command.registration_id) else {
        return Decision::skip(NoOp::RegistrationNotFound(command.registration_id));
    };
    if registration.is_cancelled {
        return Decision::skip(NoOp::AlreadyCancelled(registration.id));
    }
    Decision::accept(RegistrationEvent::CancelRegistration(CancelRegistrationV1 {
        registration_id: registration.id,
    }))
    .with_intent(RegistrationIntent::SendCancellationConfirmation {
        registration_id: registration.id,
    })
}

#[cfg(test)]
mod cancel_registration_decide_tests {
    use super::*;
    use crate::modules::registrations::core::evolve::evolve;
    use crate::modules::registrations::core::state::AccommodationLimits;
    use crate::tests::fixtures::events::{envelope, make_register_v1_event};
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    #[fixture]
    fn registered() -> (Uuid, LedgerState) {
        let event = make_register_v1_event();
        let id = event.registration_id;
        let state = evolve(
            LedgerState::new(AccommodationLimits::unlimited()),
            &envelope(1, RegistrationEvent::Register(event)),
        );
        (id, state)
    }

    #[rstest]
    fn it_should_decide_to_cancel(registered: (Uuid, LedgerState)) {
        let (id, state) = registered;
        let decision = decide_cancel_registration(&state, CancelRegistration { registration_id: id });
        assert_eq!(
            decision,
            Decision::Accepted {
                event: RegistrationEvent::CancelRegistration(CancelRegistrationV1 { registration_id: id }),
                intents: vec![RegistrationIntent::SendCancellationConfirmation { registration_id: id }],
            }
        );
    }

    #[rstest]
    fn it_should_skip_an_unknown_registration(registered: (Uuid, LedgerState)) {
        let (_, state) = registered;
        let unknown = Uuid::now_v7();
        let decision = decide_cancel_registration(&state, CancelRegistration { registration_id: unknown });
        assert_eq!(decision, Decision::skip(NoOp::RegistrationNotFound(unknown)));
    }

    #[rstest]
    fn it_should_skip_a_cancelled_registration(registered: (Uuid, LedgerState)) {
        let (id, state) = registered;
        let state = evolve(
            state,
            &envelope(
                2,
                RegistrationEvent::CancelRegistration(CancelRegistrationV1 { registration_id: id }),
            ),
        );
        let decision = decide_cancel_registration(&state, CancelRegistration { registration_id: id });
        assert_eq!(decision, Decision::skip(NoOp::AlreadyCancelled(id)));
    }
}
