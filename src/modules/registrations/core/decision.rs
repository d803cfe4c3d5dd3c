// Outcome of a pure decide function.
//
// Purpose
// - Separate "rejected" (the command is malformed or breaks a rule) from "skipped" (the command
//   targets something missing or is already satisfied). Only Accepted leads to an event.

use crate::modules::registrations::core::events::RegistrationEvent;
use crate::modules::registrations::core::intents::RegistrationIntent;
use crate::modules::registrations::core::tickets::Accommodation;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("email address is invalid: {0:?}")]
    InvalidEmail(String),

    #[error("a registration needs at least one participant")]
    NoParticipants,

    #[error("registration {0} already exists")]
    RegistrationExists(Uuid),

    #[error("participant {0} already exists")]
    ParticipantExists(Uuid),

    #[error("payment {0} already exists")]
    PaymentExists(Uuid),

    #[error("payment amount must be positive, got {0}")]
    NonPositiveAmount(i64),

    #[error("not enough {accommodation:?} places: {requested} requested, {remaining} remaining")]
    CapacityExceeded {
        accommodation: Accommodation,
        requested: usize,
        remaining: usize,
    },
}

/// Why a command produced no event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "id", rename_all = "camelCase")]
pub enum NoOp {
    RegistrationNotFound(Uuid),
    ParticipantNotFound(Uuid),
    PaymentNotFound(Uuid),
    AlreadyCancelled(Uuid),
    ParticipantCancelled(Uuid),
    AccommodationUnchanged(Uuid),
    AlreadyPaid(Uuid),
}

impl NoOp {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            NoOp::RegistrationNotFound(_) | NoOp::ParticipantNotFound(_) | NoOp::PaymentNotFound(_)
        )
    }
}

impl fmt::Display for NoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoOp::RegistrationNotFound(id) => write!(f, "registration {id} not found"),
            NoOp::ParticipantNotFound(id) => write!(f, "participant {id} not found"),
            NoOp::PaymentNotFound(id) => write!(f, "payment {id} not found"),
            NoOp::AlreadyCancelled(id) => write!(f, "registration {id} is already cancelled"),
            NoOp::ParticipantCancelled(id) => write!(f, "participant {id} is cancelled"),
            NoOp::AccommodationUnchanged(id) => write!(f, "participant {id} already has that accommodation"),
            NoOp::AlreadyPaid(id) => write!(f, "registration {id} is fully paid"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted {
        event: RegistrationEvent,
        intents: Vec<RegistrationIntent>,
    },
    Skipped {
        reason: NoOp,
    },
    Rejected {
        reason: DecideError,
    },
}

impl Decision {
    pub fn accept(event: RegistrationEvent) -> Self {
        Decision::Accepted {
            event,
            intents: Vec::new(),
        }
    }

    pub fn with_intent(self, intent: RegistrationIntent) -> Self {
        match self {
            Decision::Accepted { event, mut intents } => {
                intents.push(intent);
                Decision::Accepted { event, intents }
            }
            other => other,
        }
    }

    pub fn skip(reason: NoOp) -> Self {
        Decision::Skipped { reason }
    }

    pub fn reject(reason: DecideError) -> Self {
        Decision::Rejected { reason }
    }
}
