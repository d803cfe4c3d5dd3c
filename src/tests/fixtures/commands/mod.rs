// Shared test fixtures for ledger commands.
// Compiled into the crate only during tests (cfg(test) in src/lib.rs).

use crate::modules::registrations::core::tickets::{
    Accommodation, AgeCategory, StayDuration, SupporterCategory,
};
use crate::modules::registrations::use_cases::register::command::{ParticipantRequest, RegisterAttendees};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use uuid::Uuid;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantRequestDto {
    pub participant_id: Uuid,
    pub age_category: AgeCategory,
    pub duration: StayDuration,
    pub accommodation: Accommodation,
    pub supporter_category: SupporterCategory,
    pub birthday: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterAttendeesDto {
    pub registration_id: Uuid,
    pub email: String,
    pub comment: String,
    pub participants: Vec<ParticipantRequestDto>,
}

pub struct RegisterAttendeesBuilder {
    inner: RegisterAttendees,
}

impl Default for RegisterAttendeesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterAttendeesBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/commands/json/register_attendees.json").unwrap();
        let dto: RegisterAttendeesDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: RegisterAttendees {
                registration_id: dto.registration_id,
                email: dto.email,
                comment: dto.comment,
                participants: dto
                    .participants
                    .into_iter()
                    .map(|p| ParticipantRequest {
                        participant_id: p.participant_id,
                        age_category: p.age_category,
                        duration: p.duration,
                        accommodation: p.accommodation,
                        supporter_category: p.supporter_category,
                        birthday: p.birthday,
                    })
                    .collect(),
            },
        }
    }

    pub fn registration_id(mut self, v: Uuid) -> Self {
        self.inner.registration_id = v;
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn comment(mut self, v: impl Into<String>) -> Self {
        self.inner.comment = v.into();
        self
    }

    pub fn participants(mut self, v: Vec<ParticipantRequest>) -> Self {
        self.inner.participants = v;
        self
    }

    /// New registration and participant ids, so the command can be decided next to the default one.
    pub fn fresh_ids(mut self) -> Self {
        self.inner.registration_id = Uuid::now_v7();
        for p in &mut self.inner.participants {
            p.participant_id = Uuid::now_v7();
        }
        self
    }

    pub fn build(self) -> RegisterAttendees {
        self.inner
    }
}

pub fn adult_full_weekend_in_tent() -> ParticipantRequest {
    ParticipantRequest::new(
        AgeCategory::OlderThan12,
        StayDuration::FridayToSunday,
        Accommodation::Tent,
        SupporterCategory::Normal,
    )
}

#[cfg(test)]
mod register_attendees_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RegisterAttendeesBuilder::default().build();
        assert_eq!(built.email, "a@b.com");
        assert_eq!(built.comment, "");
        assert_eq!(built.participants.len(), 1);
        assert_eq!(built.participants[0].accommodation, Accommodation::Tent);
        assert_eq!(built.participants[0].birthday, NaiveDate::from_ymd_opt(1990, 4, 12));
    }

    #[rstest]
    fn fresh_ids_replace_every_id() {
        let default = RegisterAttendeesBuilder::new().build();
        let fresh = RegisterAttendeesBuilder::new().fresh_ids().build();
        assert_ne!(default.registration_id, fresh.registration_id);
        assert_ne!(default.participants[0].participant_id, fresh.participants[0].participant_id);
    }
}
