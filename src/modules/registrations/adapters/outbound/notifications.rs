use crate::modules::registrations::core::intents::RegistrationIntent;
use crate::modules::registrations::core::state::LedgerState;
use crate::shared::infrastructure::notifier::{NotificationKind, NotificationMessage, Notifier};

fn euros(cents: i64) -> String {
    format!("{}.{:02} EUR", cents / 100, (cents % 100).abs())
}

/// Turn an intent into a message, reading recipient and amounts from the state the event was
/// folded into. Returns `None` when the registration is gone from the projection.
pub fn render_intent(state: &LedgerState, intent: &RegistrationIntent) -> Option<NotificationMessage> {
    let registration_id = match intent {
        RegistrationIntent::SendRegistrationConfirmation { registration_id }
        | RegistrationIntent::SendCancellationConfirmation { registration_id }
        | RegistrationIntent::SendPaymentConfirmation { registration_id, .. }
        | RegistrationIntent::SendPaymentReminder { registration_id } => *registration_id,
    };
    let registration = state.registration(registration_id)?;
    let due = state.amount_due(registration_id);
    let paid = state.paid_amount(registration_id);

    let (kind, subject, body) = match intent {
        RegistrationIntent::SendRegistrationConfirmation { .. } => (
            NotificationKind::RegistrationConfirmation,
            "Registration received".to_string(),
            format!(
                "We registered {} participant(s). Please transfer {} with reference {}.",
                state.participants_of(registration_id).count(),
                euros(due),
                registration.payment_reason
            ),
        ),
        RegistrationIntent::SendCancellationConfirmation { .. } => (
            NotificationKind::CancellationConfirmation,
            "Registration cancelled".to_string(),
            format!("Registration {} has been cancelled.", registration.payment_reason),
        ),
        RegistrationIntent::SendPaymentConfirmation { amount_in_cents, .. } => (
            NotificationKind::PaymentConfirmation,
            "Payment received".to_string(),
            format!(
                "We received {} for {}. Paid so far: {} of {}.",
                euros(*amount_in_cents),
                registration.payment_reason,
                euros(paid),
                euros(due)
            ),
        ),
        RegistrationIntent::SendPaymentReminder { .. } => (
            NotificationKind::PaymentReminder,
            "Payment reminder".to_string(),
            format!(
                "{} is still open for {}. Please use reference {}.",
                euros(due - paid),
                registration.payment_reason,
                registration.payment_reason
            ),
        ),
    };

    Some(NotificationMessage {
        kind,
        registration_id,
        to: registration.email.clone(),
        subject,
        body,
    })
}

pub fn render_intents(state: &LedgerState, intents: &[RegistrationIntent]) -> Vec<NotificationMessage> {
    intents
        .iter()
        .filter_map(|intent| {
            let message = render_intent(state, intent);
            if message.is_none() {
                tracing::warn!(?intent, "notification target missing from projection");
            }
            message
        })
        .collect()
}

/// Send every message. Failures are logged and swallowed: the event is already committed.
pub async fn deliver(notifier: &dyn Notifier, messages: Vec<NotificationMessage>) {
    for message in messages {
        let kind = message.kind;
        let registration_id = message.registration_id;
        if let Err(error) = notifier.send(message).await {
            tracing::warn!(?kind, %registration_id, %error, "notification failed");
        }
    }
}
