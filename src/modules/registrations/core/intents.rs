use uuid::Uuid;

/// Side effects requested by an accepted decision. Dispatched only after the event is stored and
/// folded; the outbound notification adapter turns them into messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationIntent {
    SendRegistrationConfirmation { registration_id: Uuid },
    SendCancellationConfirmation { registration_id: Uuid },
    SendPaymentConfirmation { registration_id: Uuid, amount_in_cents: i64 },
    SendPaymentReminder { registration_id: Uuid },
}
