// LedgerState is the projection produced by folding every envelope in version order.
//
// Boundaries
// - This file must not perform input or output.
// - State is never persisted. It is rebuilt from the log on every start.
//
// Notes
// - Payments are a list. Voiding a payment removes it, so sums never need a "voided" filter.
// - Capacity limits come from configuration and survive a replay untouched.

use crate::modules::registrations::core::tickets::{Accommodation, Ticket};
use crate::shared::infrastructure::event_store::Version;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: Uuid,
    pub email: String,
    pub comment: String,
    pub payment_reason: String,
    pub registered_at: DateTime<Utc>,
    pub is_cancelled: bool,
    pub payment_reminders_sent: u32,
    pub last_payment_reminder_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: Uuid,
    pub registration_id: Uuid,
    pub ticket: Ticket,
    pub accommodation: Accommodation,
    pub birthday: Option<NaiveDate>,
    pub is_cancelled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub registration_id: Uuid,
    pub amount_in_cents: i64,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Counters {
    /// Every registration ever recorded, cancelled ones included. Numbers payment reasons.
    pub registrations_total: usize,
    pub registrations_active: usize,
    pub registrations_cancelled: usize,
    pub participants_active: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccommodationLimits {
    limits: BTreeMap<Accommodation, usize>,
}

impl AccommodationLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, accommodation: Accommodation, limit: usize) -> Self {
        self.limits.insert(accommodation, limit);
        self
    }

    pub fn limit(&self, accommodation: Accommodation) -> Option<usize> {
        self.limits.get(&accommodation).copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerState {
    pub latest_version: Version,
    pub registrations: BTreeMap<Uuid, Registration>,
    pub participants: BTreeMap<Uuid, Participant>,
    pub payments: Vec<Payment>,
    pub counters: Counters,
    pub limits: AccommodationLimits,
}

impl LedgerState {
    pub fn new(limits: AccommodationLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Empty projection that keeps the configured limits.
    pub fn reset(&self) -> Self {
        Self::new(self.limits.clone())
    }

    pub fn next_version(&self) -> Version {
        self.latest_version + 1
    }
}
