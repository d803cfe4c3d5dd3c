// Pure decision function for reminding a registration about an open balance.
//
// Rules
// - Unknown registration: skipped. Cancelled or fully paid: skipped.
// - The reminder is recorded as an event so the count and last reminder date survive a replay.

use crate::modules::registrations::core::decision::{Decision, NoOp};
use crate::modules::registrations::core::events::RegistrationEvent;
use crate::modules::registrations::core::events::v1::payment_reminder_sent::PaymentReminderSentV1;
use crate::modules::registrations::core::intents::RegistrationIntent;
use crate::modules::registrations::core::projections::PaymentStatus;
use crate::modules::registrations::core::state::LedgerState;
use crate::modules::registrations::use_cases::send_payment_reminder::command::SendPaymentReminder;

pub fn decide_send_payment_reminder(state: &LedgerState, command: SendPaymentReminder) -> Decision {
    let Some(registration) = state.registration(command.registration_id) else {
        return Decision::skip(NoOp::RegistrationNotFound(command.registration_id));
    };
    if registration.is_cancelled {
        return Decision::skip(NoOp::AlreadyCancelled(registration.id));
    }
    if state.payment_status(registration.id) == PaymentStatus::Paid {
        return Decision::skip(NoOp::AlreadyPaid(registration.id));
    }
    Decision::accept(RegistrationEvent::PaymentReminderSent(PaymentReminderSentV1 {
        registration_id: registration.id,
    }))
    .with_intent(RegistrationIntent::SendPaymentReminder {
        registration_id: registration.id,
    })
}

#[cfg(test)]
mod send_payment_reminder_decide_tests {
    use super::*;
    use crate::modules::registrations::core::events::v1::cancel_registration::CancelRegistrationV1;
    use crate::modules::registrations::core::events::v1::payment_received::PaymentReceivedV1;
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
    fn it_should_decide_to_remind_an_unpaid_registration(registered: (Uuid, LedgerState)) {
        let (id, state) = registered;
        let decision = decide_send_payment_reminder(&state, SendPaymentReminder { registration_id: id });
        assert_eq!(
            decision,
            Decision::Accepted {
                event: RegistrationEvent::PaymentReminderSent(PaymentReminderSentV1 { registration_id: id }),
                intents: vec![RegistrationIntent::SendPaymentReminder { registration_id: id }],
            }
        );
    }

    #[rstest]
    fn it_should_skip_a_fully_paid_registration(registered: (Uuid, LedgerState)) {
        let (id, state) = registered;
        let state = evolve(
            state,
            &envelope(
                2,
                RegistrationEvent::PaymentReceived(PaymentReceivedV1 {
                    payment_id: Uuid::now_v7(),
                    registration_id: id,
                    amount_in_cents: 3500,
                }),
            ),
        );
        let decision = decide_send_payment_reminder(&state, SendPaymentReminder { registration_id: id });
        assert_eq!(decision, Decision::skip(NoOp::AlreadyPaid(id)));
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
        let decision = decide_send_payment_reminder(&state, SendPaymentReminder { registration_id: id });
        assert_eq!(decision, Decision::skip(NoOp::AlreadyCancelled(id)));
    }

    #[rstest]
    fn it_should_skip_an_unknown_registration(registered: (Uuid, LedgerState)) {
        let (_, state) = registered;
        let unknown = Uuid::now_v7();
        let decision = decide_send_payment_reminder(&state, SendPaymentReminder { registration_id: unknown });
        assert_eq!(decision, Decision::skip(NoOp::RegistrationNotFound(unknown)));
    }
}
