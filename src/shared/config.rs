// Process configuration read from environment variables.
//
// Purpose
// - Collect every tunable of the ledger service in one typed struct.
//
// Boundaries
// - Parsing goes through a lookup closure. The binary passes `std::env::var`, tests pass a map,
//   so no test ever mutates the process environment.

use crate::modules::registrations::application::ledger::{DEFAULT_LOCK_TIMEOUT, LedgerSettings};
use crate::modules::registrations::core::state::AccommodationLimits;
use crate::modules::registrations::core::tickets::{Accommodation, TicketPrices};
use crate::modules::registrations::use_cases::register::decide::RegistrationPolicy;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    File { path: PathBuf },
    Object { root: PathBuf, key: String },
}

#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub store: StoreBackend,
    pub lock_timeout: Duration,
    /// `None` disables periodic backups.
    pub backup_interval: Option<Duration>,
    pub payment_reason_prefix: String,
    pub limits: AccommodationLimits,
    pub http_addr: SocketAddr,
}

fn parse<T: FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid { key, value })
}

impl LedgerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let store = match get("LEDGER_STORE", "file").as_str() {
            "file" => StoreBackend::File {
                path: PathBuf::from(get("LEDGER_FILE_PATH", "data/events.jsonl")),
            },
            "object" => StoreBackend::Object {
                root: PathBuf::from(get("LEDGER_OBJECT_ROOT", "data/objects")),
                key: get("LEDGER_OBJECT_KEY", "events.json"),
            },
            other => {
                return Err(ConfigError::Invalid {
                    key: "LEDGER_STORE",
                    value: other.to_string(),
                });
            }
        };

        let lock_timeout = match lookup("LEDGER_LOCK_TIMEOUT_MS") {
            Some(value) => Duration::from_millis(parse("LEDGER_LOCK_TIMEOUT_MS", value)?),
            None => DEFAULT_LOCK_TIMEOUT,
        };

        let backup_secs: u64 = parse("LEDGER_BACKUP_INTERVAL_SECS", get("LEDGER_BACKUP_INTERVAL_SECS", "3600"))?;
        let backup_interval = (backup_secs > 0).then(|| Duration::from_secs(backup_secs));

        let payment_reason_prefix = get("LEDGER_PAYMENT_REASON_PREFIX", "REG");
        if payment_reason_prefix.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "LEDGER_PAYMENT_REASON_PREFIX",
                value: payment_reason_prefix,
            });
        }

        let mut limits = AccommodationLimits::unlimited();
        for (key, accommodation) in [
            ("LEDGER_CAPACITY_TENT", Accommodation::Tent),
            ("LEDGER_CAPACITY_INDOOR", Accommodation::Indoor),
            ("LEDGER_CAPACITY_CAMPER", Accommodation::Camper),
        ] {
            if let Some(value) = lookup(key) {
                limits = limits.with_limit(accommodation, parse(key, value)?);
            }
        }

        let http_addr = parse("LEDGER_HTTP_ADDR", get("LEDGER_HTTP_ADDR", "0.0.0.0:8080"))?;

        Ok(Self {
            store,
            lock_timeout,
            backup_interval,
            payment_reason_prefix,
            limits,
            http_addr,
        })
    }

    pub fn ledger_settings(&self) -> LedgerSettings {
        LedgerSettings {
            lock_timeout: self.lock_timeout,
            policy: RegistrationPolicy {
                prices: TicketPrices::default(),
                payment_reason_prefix: self.payment_reason_prefix.clone(),
            },
            limits: self.limits.clone(),
        }
    }
}
