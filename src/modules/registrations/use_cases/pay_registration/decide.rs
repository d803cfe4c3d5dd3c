// Pure decision function for recording a payment.
//
// Rules
// - The amount must be positive and the payment id unused.
// - Unknown registration: skipped.
// - Payments on a cancelled registration are still recorded; the money arrived either way.

use crate::modules::registrations::core::decision::{DecideError, Decision, NoOp};
use crate::modules::registrations::core::events::RegistrationEvent;
use crate::modules::registrations::core::events::v1::payment_received::PaymentReceivedV1;
use crate::modules::registrations::core::intents::RegistrationIntent;
use crate::modules::registrations::core::state::LedgerState;
use crate::modules::registrations::use_cases::pay_registration::command::PayRegistration;

pub fn decide_pay_registration(state: &LedgerState, command: PayRegistration) -> Decision {
    if command.amount_in_cents <= 0 {
        return Decision::reject(DecideError::NonPositiveAmount(command.amount_in_cents));
    }
    if state.payments.iter().any(|p| p.id == command.payment_id) {
        return Decision::reject(DecideError::PaymentExists(command.payment_id));
    }
    if state.registration(command.registration_id).is_none() {
        return Decision::skip(NoOp::RegistrationNotFound(command.registration_id));
    }
    Decision::accept(RegistrationEvent::PaymentReceived(PaymentReceivedV1 {
        payment_id: command.payment_id,
        registration_id: command.registration_id,
        amount_in_cents: command.amount_in_cents,
    }))
    .with_intent(RegistrationIntent::SendPaymentConfirmation {
        registration_id: command.registration_id,
        amount_in_cents: command.amount_in_cents,
    })
}
