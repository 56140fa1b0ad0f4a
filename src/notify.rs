use std::future::Future;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::config::PollerConfig;
use crate::error::PollerError;
use crate::model::snapshot::BoardSnapshot;

/// Body of one POST to the backend's event endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PollEvent {
    /// Capture time in seconds since the Unix epoch.
    pub timestamp: f64,
    pub snapshot: BoardSnapshot,
}

impl PollEvent {
    pub fn new(snapshot: BoardSnapshot) -> Self {
        Self {
            timestamp: unix_timestamp(),
            snapshot,
        }
    }
}

fn unix_timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs_f64())
        .unwrap_or(0.0)
}

/// What the backend answered; the poller decides what a status means.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeliveryReceipt {
    pub status: u16,
}

impl DeliveryReceipt {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound side of the poller: delivers one event per changed snapshot.
pub trait Notifier {
    fn notify(
        &self,
        event: &PollEvent,
    ) -> impl Future<Output = Result<DeliveryReceipt, PollerError>> + Send;
}

#[derive(Clone, Debug)]
pub struct HttpNotifier {
    client: Client,
    events_url: String,
    timeout: Duration,
}

impl HttpNotifier {
    pub fn new(config: &PollerConfig) -> Result<Self, PollerError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Uses a caller-built client; the request timeout is still taken from
    /// `config`.
    pub fn with_client(client: Client, config: &PollerConfig) -> Self {
        Self {
            client,
            events_url: config.events_url(),
            timeout: config.timeout(),
        }
    }

    pub fn events_url(&self) -> &str {
        &self.events_url
    }
}

impl Notifier for HttpNotifier {
    async fn notify(&self, event: &PollEvent) -> Result<DeliveryReceipt, PollerError> {
        let response = self
            .client
            .post(&self.events_url)
            .timeout(self.timeout)
            .json(event)
            .send()
            .await?;
        let status = response.status().as_u16();
        debug!(url = %self.events_url, status, "posted board snapshot");

        Ok(DeliveryReceipt { status })
    }
}
