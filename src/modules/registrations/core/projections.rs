// Read views over LedgerState.
//
// Purpose
// - Answer reporting and administration questions: who is coming, who paid, how full is each
//   accommodation, how registrations arrived over time.
//
// Boundaries
// - Pure reads. Every number is recomputed from the projection, never cached, so a voided payment
//   or a cancellation is reflected immediately.

use crate::modules::registrations::core::state::{LedgerState, Participant, Payment, Registration};
use crate::modules::registrations::core::tickets::Accommodation;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantView {
    pub participant: Participant,
    pub email: String,
    pub ticket_price_in_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationCapacity {
    pub accommodation: Accommodation,
    pub taken: usize,
    pub limit: Option<usize>,
    pub remaining: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentStatus {
    NotPaid,
    PartiallyPaid,
    Paid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    pub registration_id: Uuid,
    pub amount_due_in_cents: i64,
    pub paid_in_cents: i64,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBucket {
    pub day: NaiveDate,
    pub registrations: usize,
    pub participants: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub latest_version: i64,
    pub registrations_active: usize,
    pub registrations_cancelled: usize,
    pub participants_active: usize,
    pub total_paid_in_cents: i64,
    pub total_due_in_cents: i64,
}

impl LedgerState {
    pub fn registration(&self, id: Uuid) -> Option<&Registration> {
        self.registrations.get(&id)
    }

    pub fn participants_of(&self, registration_id: Uuid) -> impl Iterator<Item = &Participant> {
        self.participants
            .values()
            .filter(move |p| p.registration_id == registration_id)
    }

    pub fn active_participants(&self) -> Vec<ParticipantView> {
        self.participants
            .values()
            .filter(|p| !p.is_cancelled)
            .map(|p| ParticipantView {
                participant: p.clone(),
                email: self
                    .registrations
                    .get(&p.registration_id)
                    .map(|r| r.email.clone())
                    .unwrap_or_default(),
                ticket_price_in_cents: p.ticket.price_in_cents,
            })
            .collect()
    }

    pub fn payments_of(&self, registration_id: Uuid) -> Vec<Payment> {
        self.payments
            .iter()
            .filter(|p| p.registration_id == registration_id)
            .cloned()
            .collect()
    }

    pub fn paid_amount(&self, registration_id: Uuid) -> i64 {
        self.payments
            .iter()
            .filter(|p| p.registration_id == registration_id)
            .map(|p| p.amount_in_cents)
            .sum()
    }

    /// Ticket total of the participants still attending.
    pub fn amount_due(&self, registration_id: Uuid) -> i64 {
        self.participants_of(registration_id)
            .filter(|p| !p.is_cancelled)
            .map(|p| p.ticket.price_in_cents)
            .sum()
    }

    pub fn payment_status(&self, registration_id: Uuid) -> PaymentStatus {
        let paid = self.paid_amount(registration_id);
        let due = self.amount_due(registration_id);
        if paid <= 0 && due > 0 {
            PaymentStatus::NotPaid
        } else if paid < due {
            PaymentStatus::PartiallyPaid
        } else {
            PaymentStatus::Paid
        }
    }

    pub fn payment_summary(&self, registration_id: Uuid) -> Option<PaymentSummary> {
        self.registrations.get(&registration_id)?;
        Some(PaymentSummary {
            registration_id,
            amount_due_in_cents: self.amount_due(registration_id),
            paid_in_cents: self.paid_amount(registration_id),
            status: self.payment_status(registration_id),
        })
    }

    pub fn total_paid(&self) -> i64 {
        self.payments.iter().map(|p| p.amount_in_cents).sum()
    }

    pub fn total_due(&self) -> i64 {
        self.participants
            .values()
            .filter(|p| !p.is_cancelled)
            .map(|p| p.ticket.price_in_cents)
            .sum()
    }

    /// Active registrations that still owe money.
    pub fn unpaid_registrations(&self) -> Vec<PaymentSummary> {
        self.registrations
            .values()
            .filter(|r| !r.is_cancelled)
            .filter_map(|r| self.payment_summary(r.id))
            .filter(|s| s.status != PaymentStatus::Paid)
            .collect()
    }

    pub fn accommodation_taken(&self, accommodation: Accommodation) -> usize {
        self.participants
            .values()
            .filter(|p| !p.is_cancelled && p.accommodation == accommodation)
            .count()
    }

    pub fn accommodation_capacity(&self) -> Vec<AccommodationCapacity> {
        Accommodation::ALL
            .into_iter()
            .map(|accommodation| {
                let taken = self.accommodation_taken(accommodation);
                let limit = self.limits.limit(accommodation);
                AccommodationCapacity {
                    accommodation,
                    taken,
                    limit,
                    remaining: limit.map(|l| l.saturating_sub(taken)),
                }
            })
            .collect()
    }

    /// Registrations per calendar day (UTC) of arrival, cancelled ones included.
    pub fn registration_histogram(&self) -> Vec<HistogramBucket> {
        let mut buckets: BTreeMap<NaiveDate, HistogramBucket> = BTreeMap::new();
        for registration in self.registrations.values() {
            let day = registration.registered_at.date_naive();
            let bucket = buckets.entry(day).or_insert(HistogramBucket {
                day,
                registrations: 0,
                participants: 0,
            });
            bucket.registrations += 1;
            bucket.participants += self.participants_of(registration.id).count();
        }
        buckets.into_values().collect()
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            latest_version: self.latest_version,
            registrations_active: self.counters.registrations_active,
            registrations_cancelled: self.counters.registrations_cancelled,
            participants_active: self.counters.participants_active,
            total_paid_in_cents: self.total_paid(),
            total_due_in_cents: self.total_due(),
        }
    }
}
