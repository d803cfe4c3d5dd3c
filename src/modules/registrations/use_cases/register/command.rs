// Command data type for registering a group of participants.
//
// Purpose
// - Express intent to register one or more participants under a contact email.
//
// Responsibilities
// - Carry input data for the decider to validate and convert into an event.
// - Carry caller-generated ids so a retried command can be recognised as a duplicate.
// - Be independent of transport layer details (not tied to HTTP).

use crate::modules::registrations::core::tickets::{
    Accommodation, AgeCategory, StayDuration, SupporterCategory,
};
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterAttendees {
    pub registration_id: Uuid,
    pub email: String,
    pub comment: String,
    pub participants: Vec<ParticipantRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRequest {
    pub participant_id: Uuid,
    pub age_category: AgeCategory,
    pub duration: StayDuration,
    pub accommodation: Accommodation,
    pub supporter_category: SupporterCategory,
    pub birthday: Option<NaiveDate>,
}

impl RegisterAttendees {
    pub fn new(email: impl Into<String>, comment: impl Into<String>, participants: Vec<ParticipantRequest>) -> Self {
        Self {
            registration_id: Uuid::now_v7(),
            email: email.into(),
            comment: comment.into(),
            participants,
        }
    }
}

impl ParticipantRequest {
    pub fn new(
        age_category: AgeCategory,
        duration: StayDuration,
        accommodation: Accommodation,
        supporter_category: SupporterCategory,
    ) -> Self {
        Self {
            participant_id: Uuid::now_v7(),
            age_category,
            duration,
            accommodation,
            supporter_category,
            birthday: None,
        }
    }

    pub fn born_on(mut self, birthday: NaiveDate) -> Self {
        self.birthday = Some(birthday);
        self
    }
}
