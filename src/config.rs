use std::time::Duration;

use crate::error::PollerError;

pub const BACKEND_URL_ENV: &str = "BACKEND_URL";
pub const SESSION_ID_ENV: &str = "SESSION_ID";
pub const POLL_INTERVAL_ENV: &str = "POLL_INTERVAL";
pub const REQUEST_TIMEOUT_ENV: &str = "REQUEST_TIMEOUT";
pub const DELIVERY_MODE_ENV: &str = "DELIVERY_MODE";

const DEFAULT_BACKEND_URL: &str = "http://web:8080";
const DEFAULT_SESSION_ID: &str = "unknown";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 3;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// When the poller treats a snapshot as delivered and stops re-sending it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DeliveryPolicy {
    /// Remember the snapshot as soon as the POST was attempted, whatever
    /// its outcome. A failed send drops that state for good.
    #[default]
    BestEffort,
    /// Remember the snapshot only after a 2xx response. Failed sends are
    /// retried on the next tick.
    Confirmed,
}

impl std::str::FromStr for DeliveryPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "best-effort" => Ok(Self::BestEffort),
            "confirmed" => Ok(Self::Confirmed),
            _ => Err(format!(
                "unknown delivery mode `{value}`; expected `best-effort` or `confirmed`"
            )),
        }
    }
}

impl std::fmt::Display for DeliveryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BestEffort => write!(f, "best-effort"),
            Self::Confirmed => write!(f, "confirmed"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PollerConfig {
    backend_url: String,
    session_id: String,
    poll_interval: Duration,
    request_timeout: Duration,
    delivery: DeliveryPolicy,
}

impl PollerConfig {
    pub fn new() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            session_id: DEFAULT_SESSION_ID.to_string(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            delivery: DeliveryPolicy::default(),
        }
    }

    /// Reads every setting from the process environment, falling back to
    /// the defaults for unset keys.
    pub fn from_env() -> Result<Self, PollerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, PollerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(url) = lookup(BACKEND_URL_ENV) {
            config = config.backend_url(url);
        }
        if let Some(session_id) = lookup(SESSION_ID_ENV) {
            config = config.session_id(session_id);
        }
        if let Some(raw) = lookup(POLL_INTERVAL_ENV) {
            config.poll_interval = parse_seconds(POLL_INTERVAL_ENV, &raw)?;
        }
        if let Some(raw) = lookup(REQUEST_TIMEOUT_ENV) {
            config.request_timeout = parse_seconds(REQUEST_TIMEOUT_ENV, &raw)?;
        }
        if let Some(raw) = lookup(DELIVERY_MODE_ENV) {
            config.delivery = raw
                .trim()
                .parse()
                .map_err(|reason| PollerError::Config { reason })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn backend_url(mut self, backend_url: impl Into<String>) -> Self {
        self.backend_url = backend_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    pub fn poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    pub fn delivery(mut self, delivery: DeliveryPolicy) -> Self {
        self.delivery = delivery;
        self
    }

    pub fn validate(&self) -> Result<(), PollerError> {
        if self.backend_url.is_empty() {
            return Err(PollerError::Config {
                reason: format!("{BACKEND_URL_ENV} must not be empty"),
            });
        }
        if self.session_id.is_empty() || self.session_id.contains('/') {
            return Err(PollerError::Config {
                reason: format!(
                    "{SESSION_ID_ENV} must be a single non-empty path segment, got `{}`",
                    self.session_id
                ),
            });
        }
        if self.poll_interval.is_zero() {
            return Err(PollerError::Config {
                reason: "poll interval must be greater than zero".to_string(),
            });
        }
        if self.request_timeout.is_zero() {
            return Err(PollerError::Config {
                reason: "request timeout must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    pub fn events_url(&self) -> String {
        format!(
            "{}/api/poller/{}/events",
            self.backend_url, self.session_id
        )
    }

    pub fn backend(&self) -> &str {
        &self.backend_url
    }

    pub fn session(&self) -> &str {
        &self.session_id
    }

    pub fn interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn delivery_policy(&self) -> DeliveryPolicy {
        self.delivery
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_seconds(key: &str, raw: &str) -> Result<Duration, PollerError> {
    let seconds: u64 = raw.trim().parse().map_err(|_| PollerError::Config {
        reason: format!("{key} must be a whole number of seconds, got `{raw}`"),
    })?;

    if seconds == 0 {
        return Err(PollerError::Config {
            reason: format!("{key} must be greater than zero"),
        });
    }

    Ok(Duration::from_secs(seconds))
}
