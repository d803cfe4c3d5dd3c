// Pure decision function for voiding a recorded payment.
//
// Rules
// - Unknown payment (never recorded or already voided): skipped.
// - No notification is sent for a voided payment.

use crate::modules::registrations::core::decision::{Decision, NoOp};
use crate::modules::registrations::core::events::RegistrationEvent;
use crate::modules::registrations::core::events::v1::cancel_payment::CancelPaymentV1;
use crate::modules::registrations::core::state::LedgerState;
use crate::modules::registrations::use_cases::undo_payment::command::UndoPayment;

pub fn decide_undo_payment(state: &LedgerState, command: UndoPayment) -> Decision {
    if !state.payments.iter().any(|p| p.id == command.payment_id) {
        return Decision::skip(NoOp::PaymentNotFound(command.payment_id));
    }
    Decision::accept(RegistrationEvent::CancelPayment(CancelPaymentV1 {
        payment_id: command.payment_id,
    }))
}
