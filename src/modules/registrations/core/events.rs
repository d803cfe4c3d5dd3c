// Root event enumeration for the registration ledger and re-exports of versioned payloads.
//
// Purpose
// - Provide a single closed type to pattern match in evolve. Adding a variant breaks the build
//   until evolve handles it.
//
// Versioning and evolution
// - Prefer additive changes. If a breaking change is needed, add a new payload version and a new
//   variant. Do not change the meaning of historical events.
//
// Wire shape
// - Internally tagged: `{"type": "Register", ...payload fields}`.

pub mod v1 {
    pub mod cancel_payment;
    pub mod cancel_registration;
    pub mod change_accommodation;
    pub mod payment_received;
    pub mod payment_reminder_sent;
    pub mod register;
}

use v1::{
    cancel_payment::CancelPaymentV1, cancel_registration::CancelRegistrationV1,
    change_accommodation::ChangeAccommodationV1, payment_received::PaymentReceivedV1,
    payment_reminder_sent::PaymentReminderSentV1, register::RegisterV1,
};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RegistrationEvent {
    Register(RegisterV1),
    CancelRegistration(CancelRegistrationV1),
    PaymentReceived(PaymentReceivedV1),
    CancelPayment(CancelPaymentV1),
    ChangeAccommodation(ChangeAccommodationV1),
    PaymentReminderSent(PaymentReminderSentV1),
}

impl RegistrationEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            RegistrationEvent::Register(_) => "Register",
            RegistrationEvent::CancelRegistration(_) => "CancelRegistration",
            RegistrationEvent::PaymentReceived(_) => "PaymentReceived",
            RegistrationEvent::CancelPayment(_) => "CancelPayment",
            RegistrationEvent::ChangeAccommodation(_) => "ChangeAccommodation",
            RegistrationEvent::PaymentReminderSent(_) => "PaymentReminderSent",
        }
    }
}

#[cfg(test)]
mod registration_event_tests {
    use super::*;
    use crate::modules::registrations::core::tickets::Accommodation;
    use crate::tests::fixtures::events::make_register_v1_event;
    use rstest::rstest;
    use uuid::Uuid;

    #[rstest]
    fn it_should_tag_the_payload_with_its_type() {
        let event = RegistrationEvent::ChangeAccommodation(ChangeAccommodationV1 {
            participant_id: Uuid::nil(),
            accommodation: Accommodation::Indoor,
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "ChangeAccommodation",
                "participantId": "00000000-0000-0000-0000-000000000000",
                "accommodation": "indoor",
            })
        );
    }

    #[rstest]
    fn it_should_serialize_the_register_event_stable() {
        let event = RegistrationEvent::Register(make_register_v1_event());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "Register");
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["paymentReason"], "REG-0001");
        let participant = &json["participants"][0];
        assert_eq!(participant["accommodation"], "tent");
        assert_eq!(participant["birthday"], "1990-04-12");
        assert_eq!(participant["ticket"]["ageCategory"], "OlderThan12");
        assert_eq!(participant["ticket"]["duration"], "Fr-Su");
        assert_eq!(participant["ticket"]["supporterCategory"], "Normal");
        assert_eq!(participant["ticket"]["priceInCents"], 3500);

        let back: RegistrationEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[rstest]
    #[case(serde_json::json!({ "type": "Unregister", "registrationId": "00000000-0000-0000-0000-000000000000" }))]
    #[case(serde_json::json!({ "type": "CancelPayment" }))]
    #[case(serde_json::json!({ "type": "PaymentReceived", "paymentId": "00000000-0000-0000-0000-000000000000", "registrationId": "00000000-0000-0000-0000-000000000000", "amountInCents": "3500" }))]
    #[case(serde_json::json!({ "registrationId": "00000000-0000-0000-0000-000000000000" }))]
    fn it_should_reject_malformed_payloads(#[case] json: serde_json::Value) {
        assert!(serde_json::from_value::<RegistrationEvent>(json).is_err());
    }
}
