// Event payload: RegisterV1.
//
// Purpose
// - Record that a group of participants registered under one contact email.
//
// Responsibilities
// - Carry everything replay needs: generated ids, the payment reason, and each ticket with its
//   price as decided at the time. Nothing is looked up again on replay.
//
// Versioning and evolution
// - Prefer adding optional fields. For breaking changes, add RegisterV2 and a new variant.

use crate::modules::registrations::core::tickets::{Accommodation, Ticket};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterV1 {
    pub registration_id: Uuid,
    pub email: String,
    pub comment: String,
    pub payment_reason: String,
    pub participants: Vec<RegisteredParticipantV1>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredParticipantV1 {
    pub participant_id: Uuid,
    pub ticket: Ticket,
    pub accommodation: Accommodation,
    pub birthday: Option<NaiveDate>,
}
