// Ledger aggregate: the single owner of the event store, the projection and the mutation lock.
//
// Purpose
// - Run every command through the same sequence: lock, decide, save, fold, unlock, notify.
// - Rebuild the projection from the store on start and on demand.
//
// Responsibilities
// - Serialize commands through one tokio mutex acquired with a timeout.
// - Fold an envelope only after the store confirmed it, so a failed save leaves state untouched.
// - Hand notifications to the notifier after the lock is released.
//
// Boundaries
// - Decisions live in the use case modules. The ledger never inspects a command itself.
// - Queries take a short read lock on the projection and never touch the mutation lock.

use crate::modules::registrations::adapters::outbound::notifications::{deliver, render_intents};
use crate::modules::registrations::application::errors::LedgerError;
use crate::modules::registrations::core::decision::{Decision, NoOp};
use crate::modules::registrations::core::events::RegistrationEvent;
use crate::modules::registrations::core::evolve::evolve;
use crate::modules::registrations::core::projections::{
    AccommodationCapacity, HistogramBucket, ParticipantView, PaymentSummary, Statistics,
};
use crate::modules::registrations::core::state::{AccommodationLimits, LedgerState, Payment, Registration};
use crate::modules::registrations::use_cases::cancel_registration::command::CancelRegistration;
use crate::modules::registrations::use_cases::cancel_registration::decide::decide_cancel_registration;
use crate::modules::registrations::use_cases::change_accommodation::command::ChangeAccommodation;
use crate::modules::registrations::use_cases::change_accommodation::decide::decide_change_accommodation;
use crate::modules::registrations::use_cases::pay_registration::command::PayRegistration;
use crate::modules::registrations::use_cases::pay_registration::decide::decide_pay_registration;
use crate::modules::registrations::use_cases::register::command::RegisterAttendees;
use crate::modules::registrations::use_cases::register::decide::{RegistrationPolicy, decide_register};
use crate::modules::registrations::use_cases::send_payment_reminder::command::SendPaymentReminder;
use crate::modules::registrations::use_cases::send_payment_reminder::decide::decide_send_payment_reminder;
use crate::modules::registrations::use_cases::undo_payment::command::UndoPayment;
use crate::modules::registrations::use_cases::undo_payment::decide::decide_undo_payment;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError, Version};
use crate::shared::infrastructure::notifier::Notifier;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard, RwLock};
use uuid::Uuid;

pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct LedgerSettings {
    pub lock_timeout: Duration,
    pub policy: RegistrationPolicy,
    pub limits: AccommodationLimits,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
            policy: RegistrationPolicy::default(),
            limits: AccommodationLimits::unlimited(),
        }
    }
}

/// Result of a command that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome<T> {
    Applied { version: Version, value: T },
    Skipped { reason: NoOp },
}

impl<T> CommandOutcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, CommandOutcome::Applied { .. })
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CommandOutcome<U> {
        match self {
            CommandOutcome::Applied { version, value } => CommandOutcome::Applied {
                version,
                value: f(value),
            },
            CommandOutcome::Skipped { reason } => CommandOutcome::Skipped { reason },
        }
    }
}

pub struct Ledger {
    store: Arc<dyn EventStore<RegistrationEvent>>,
    notifier: Arc<dyn Notifier>,
    policy: RegistrationPolicy,
    lock_timeout: Duration,
    write_lock: Mutex<()>,
    state: RwLock<LedgerState>,
    hydrated: AtomicBool,
}

impl Ledger {
    pub fn new(
        store: Arc<dyn EventStore<RegistrationEvent>>,
        notifier: Arc<dyn Notifier>,
        settings: LedgerSettings,
    ) -> Self {
        Self {
            store,
            notifier,
            policy: settings.policy,
            lock_timeout: settings.lock_timeout,
            write_lock: Mutex::new(()),
            state: RwLock::new(LedgerState::new(settings.limits)),
            hydrated: AtomicBool::new(false),
        }
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated.load(Ordering::SeqCst)
    }

    async fn acquire(&self) -> Result<MutexGuard<'_, ()>, LedgerError> {
        tokio::time::timeout(self.lock_timeout, self.write_lock.lock())
            .await
            .map_err(|_| LedgerError::LockTimeout(self.lock_timeout))
    }

    async fn rebuild(&self, blank: LedgerState) -> Result<LedgerState, LedgerError> {
        let envelopes = self.store.read_all().await?;
        let mut state = blank;
        for envelope in &envelopes {
            if envelope.version != state.next_version() {
                return Err(EventStoreError::OutOfSequence {
                    expected: state.next_version(),
                    actual: envelope.version,
                }
                .into());
            }
            state = evolve(state, envelope);
        }
        Ok(state)
    }

    /// Rebuild the projection from the full store. Safe to call repeatedly.
    #[tracing::instrument(skip(self))]
    pub async fn replay(&self) -> Result<Version, LedgerError> {
        let _guard = self.acquire().await?;
        let blank = self.state.read().await.reset();
        match self.rebuild(blank).await {
            Ok(rebuilt) => {
                let version = rebuilt.latest_version;
                let registrations = rebuilt.registrations.len();
                *self.state.write().await = rebuilt;
                self.hydrated.store(true, Ordering::SeqCst);
                tracing::info!(version, registrations, "ledger replayed");
                Ok(version)
            }
            Err(err) => {
                let mut state = self.state.write().await;
                *state = state.reset();
                self.hydrated.store(false, Ordering::SeqCst);
                Err(err)
            }
        }
    }

    /// Wipe the store and the projection.
    #[tracing::instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), LedgerError> {
        let _guard = self.acquire().await?;
        self.store.clear().await?;
        let mut state = self.state.write().await;
        *state = state.reset();
        self.hydrated.store(true, Ordering::SeqCst);
        tracing::info!("ledger reset");
        Ok(())
    }

    async fn execute<T>(
        &self,
        value: T,
        decide: impl FnOnce(&LedgerState) -> Decision + Send,
    ) -> Result<CommandOutcome<T>, LedgerError>
    where
        T: Send,
    {
        if !self.is_hydrated() {
            return Err(LedgerError::NotReplayed);
        }
        let guard = self.acquire().await?;
        // A replay that held the lock meanwhile may have failed and blanked the projection.
        if !self.is_hydrated() {
            return Err(LedgerError::NotReplayed);
        }

        let decision = {
            let state = self.state.read().await;
            decide(&state)
        };
        let (event, intents) = match decision {
            Decision::Accepted { event, intents } => (event, intents),
            Decision::Skipped { reason } => {
                tracing::debug!(%reason, "command skipped");
                return Ok(CommandOutcome::Skipped { reason });
            }
            Decision::Rejected { reason } => return Err(LedgerError::Validation(reason)),
        };

        let proposed = self.state.read().await.next_version();
        let envelope = self.store.save(event, proposed).await?;
        let messages = {
            let mut state = self.state.write().await;
            *state = evolve(std::mem::take(&mut *state), &envelope);
            render_intents(&state, &intents)
        };
        tracing::debug!(version = envelope.version, kind = envelope.payload.kind(), "event applied");
        drop(guard);

        deliver(self.notifier.as_ref(), messages).await;
        Ok(CommandOutcome::Applied {
            version: envelope.version,
            value,
        })
    }

    #[tracing::instrument(skip(self, command), fields(registration_id = %command.registration_id))]
    pub async fn register(&self, command: RegisterAttendees) -> Result<CommandOutcome<Uuid>, LedgerError> {
        let policy = &self.policy;
        self.execute(command.registration_id, |state| decide_register(state, command, policy))
            .await
    }

    #[tracing::instrument(skip(self, command), fields(registration_id = %command.registration_id))]
    pub async fn cancel_registration(&self, command: CancelRegistration) -> Result<CommandOutcome<()>, LedgerError> {
        self.execute((), |state| decide_cancel_registration(state, command)).await
    }

    #[tracing::instrument(
        skip(self, command),
        fields(registration_id = %command.registration_id, payment_id = %command.payment_id)
    )]
    pub async fn pay_registration(&self, command: PayRegistration) -> Result<CommandOutcome<Uuid>, LedgerError> {
        self.execute(command.payment_id, |state| decide_pay_registration(state, command))
            .await
    }

    #[tracing::instrument(skip(self, command), fields(payment_id = %command.payment_id))]
    pub async fn undo_payment(&self, command: UndoPayment) -> Result<CommandOutcome<()>, LedgerError> {
        self.execute((), |state| decide_undo_payment(state, command)).await
    }

    #[tracing::instrument(skip(self, command), fields(participant_id = %command.participant_id))]
    pub async fn change_accommodation(&self, command: ChangeAccommodation) -> Result<CommandOutcome<()>, LedgerError> {
        self.execute((), |state| decide_change_accommodation(state, command)).await
    }

    #[tracing::instrument(skip(self, command), fields(registration_id = %command.registration_id))]
    pub async fn send_payment_reminder(&self, command: SendPaymentReminder) -> Result<CommandOutcome<()>, LedgerError> {
        self.execute((), |state| decide_send_payment_reminder(state, command)).await
    }

    /// Run an arbitrary read against the projection.
    pub async fn query<R>(&self, read: impl FnOnce(&LedgerState) -> R) -> R {
        let state = self.state.read().await;
        read(&state)
    }

    pub async fn snapshot(&self) -> LedgerState {
        self.state.read().await.clone()
    }

    pub async fn latest_version(&self) -> Version {
        self.query(|s| s.latest_version).await
    }

    pub async fn registrations(&self) -> Vec<Registration> {
        self.query(|s| s.registrations.values().cloned().collect()).await
    }

    pub async fn registration(&self, id: Uuid) -> Option<Registration> {
        self.query(|s| s.registration(id).cloned()).await
    }

    pub async fn active_participants(&self) -> Vec<ParticipantView> {
        self.query(LedgerState::active_participants).await
    }

    pub async fn registration_count(&self) -> usize {
        self.query(|s| s.counters.registrations_active).await
    }

    pub async fn participant_count(&self) -> usize {
        self.query(|s| s.counters.participants_active).await
    }

    pub async fn accommodation_capacity(&self) -> Vec<AccommodationCapacity> {
        self.query(LedgerState::accommodation_capacity).await
    }

    pub async fn payments_of(&self, registration_id: Uuid) -> Vec<Payment> {
        self.query(|s| s.payments_of(registration_id)).await
    }

    pub async fn payment_summary(&self, registration_id: Uuid) -> Option<PaymentSummary> {
        self.query(|s| s.payment_summary(registration_id)).await
    }

    pub async fn total_paid(&self) -> i64 {
        self.query(LedgerState::total_paid).await
    }

    pub async fn unpaid_registrations(&self) -> Vec<PaymentSummary> {
        self.query(LedgerState::unpaid_registrations).await
    }

    pub async fn registration_histogram(&self) -> Vec<HistogramBucket> {
        self.query(LedgerState::registration_histogram).await
    }

    pub async fn statistics(&self) -> Statistics {
        self.query(LedgerState::statistics).await
    }
}
