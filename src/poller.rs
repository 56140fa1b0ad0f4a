use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::{DeliveryPolicy, PollerConfig};
use crate::error::PollerError;
use crate::model::snapshot::{BoardSnapshot, SnapshotHash};
use crate::notify::{Notifier, PollEvent};
use crate::source::BoardSource;

/// Creates a linked trigger/signal pair for stopping [`Poller::run`].
pub fn shutdown_channel() -> (ShutdownTrigger, ShutdownSignal) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger { tx }, ShutdownSignal { rx })
}

#[derive(Debug)]
pub struct ShutdownTrigger {
    tx: watch::Sender<bool>,
}

impl ShutdownTrigger {
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

#[derive(Clone, Debug)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the trigger fires. Never resolves if the trigger was
    /// dropped without firing.
    pub async fn triggered(&mut self) {
        if self.rx.wait_for(|stop| *stop).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TickOutcome {
    /// No board is loaded in the editor.
    NoBoard,
    /// The board hashes the same as the last sent snapshot.
    Unchanged,
    Sent { hash: SnapshotHash },
}

/// Polls a [`BoardSource`] and forwards changed snapshots to a [`Notifier`].
///
/// The only state carried between ticks is the hash of the last snapshot
/// that counted as delivered under the configured [`DeliveryPolicy`].
#[derive(Debug)]
pub struct Poller<S, N> {
    source: S,
    notifier: N,
    interval: Duration,
    delivery: DeliveryPolicy,
    previous_hash: Option<SnapshotHash>,
}

impl<S, N> Poller<S, N>
where
    S: BoardSource,
    N: Notifier,
{
    pub fn new(source: S, notifier: N, config: &PollerConfig) -> Self {
        Self {
            source,
            notifier,
            interval: config.interval(),
            delivery: config.delivery_policy(),
            previous_hash: None,
        }
    }

    pub fn previous_hash(&self) -> Option<SnapshotHash> {
        self.previous_hash.clone()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Runs one poll cycle without sleeping.
    pub async fn tick(&mut self) -> Result<TickOutcome, PollerError> {
        let Some(board) = self.source.current_board().await? else {
            return Ok(TickOutcome::NoBoard);
        };

        let snapshot = BoardSnapshot::capture(&board);
        let hash = snapshot.content_hash()?;
        if self.previous_hash.as_ref() == Some(&hash) {
            return Ok(TickOutcome::Unchanged);
        }

        let footprints = snapshot.footprints.len();
        let tracks = snapshot.tracks.len();
        let zones = snapshot.zones.len();
        let delivered = self.notifier.notify(&PollEvent::new(snapshot)).await;

        match self.delivery {
            DeliveryPolicy::BestEffort => {
                self.previous_hash = Some(hash.clone());
                let receipt = delivered?;
                if !receipt.is_success() {
                    warn!(
                        status = receipt.status,
                        %hash,
                        "backend did not accept snapshot; it will not be resent"
                    );
                }
            }
            DeliveryPolicy::Confirmed => {
                let receipt = delivered?;
                if !receipt.is_success() {
                    return Err(PollerError::DeliveryRejected {
                        status: receipt.status,
                    });
                }
                self.previous_hash = Some(hash.clone());
            }
        }

        info!(%hash, footprints, tracks, zones, "sent board snapshot");
        Ok(TickOutcome::Sent { hash })
    }

    /// Ticks every interval until `shutdown` fires. A failed tick is logged
    /// and the loop carries on after the usual sleep.
    pub async fn run(mut self, mut shutdown: ShutdownSignal) {
        info!(
            interval = ?self.interval,
            delivery = %self.delivery,
            "board poller started"
        );

        while !shutdown.is_triggered() {
            match self.tick().await {
                Ok(TickOutcome::NoBoard) => debug!("no board loaded"),
                Ok(TickOutcome::Unchanged) => debug!("board unchanged"),
                Ok(TickOutcome::Sent { .. }) => {}
                Err(err) => warn!(error = %err, "poll tick failed"),
            }

            tokio::select! {
                () = tokio::time::sleep(self.interval) => {}
                () = shutdown.triggered() => break,
            }
        }

        info!("board poller stopped");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::{shutdown_channel, Poller, TickOutcome};
    use crate::config::{DeliveryPolicy, PollerConfig};
    use crate::error::PollerError;
    use crate::testing::{resistor_board, FakeHost, RecordingNotifier};

    fn poller(
        host: &FakeHost,
        notifier: &RecordingNotifier,
        delivery: DeliveryPolicy,
    ) -> Poller<FakeHost, RecordingNotifier> {
        let config = PollerConfig::new()
            .poll_interval(Duration::from_millis(5))
            .delivery(delivery);
        Poller::new(host.clone(), notifier.clone(), &config)
    }

    #[tokio::test]
    async fn absent_board_never_notifies() {
        let host = FakeHost::new();
        let notifier = RecordingNotifier::new();
        let mut poller = poller(&host, &notifier, DeliveryPolicy::BestEffort);

        for _ in 0..20 {
            let outcome = poller.tick().await.expect("absent board is not an error");
            assert_eq!(outcome, TickOutcome::NoBoard);
        }

        assert_eq!(notifier.attempts(), 0);
        assert!(poller.previous_hash().is_none());
    }

    #[tokio::test]
    async fn first_tick_sends_full_snapshot() {
        let host = FakeHost::with_board(resistor_board());
        let notifier = RecordingNotifier::new();
        let mut poller = poller(&host, &notifier, DeliveryPolicy::BestEffort);

        let outcome = poller.tick().await.expect("tick should succeed");
        let TickOutcome::Sent { hash } = &outcome else {
            panic!("first tick should send, got {outcome:?}");
        };
        assert_eq!(poller.previous_hash().as_ref(), Some(hash));

        let events = notifier.events();
        assert_eq!(events.len(), 1);
        let payload = serde_json::to_value(&events[0]).expect("event should serialize");
        assert!(payload["timestamp"].is_f64());
        assert_eq!(
            payload["snapshot"],
            json!({
                "footprints": [{
                    "reference": "R1",
                    "value": "10k",
                    "footprint": "R_0603_1608Metric",
                    "position": {"x": 10.0, "y": 5.0},
                    "orientation": 0.0,
                    "layer": "front",
                }],
                "tracks": [],
                "zones": [],
            })
        );
    }

    #[tokio::test]
    async fn unchanged_board_is_sent_once() {
        let host = FakeHost::with_board(resistor_board());
        let notifier = RecordingNotifier::new();
        let mut poller = poller(&host, &notifier, DeliveryPolicy::BestEffort);

        poller.tick().await.expect("first tick should succeed");
        for _ in 0..10 {
            let outcome = poller.tick().await.expect("tick should succeed");
            assert_eq!(outcome, TickOutcome::Unchanged);
        }

        assert_eq!(notifier.events().len(), 1);
    }

    #[tokio::test]
    async fn moving_a_footprint_sends_exactly_one_more_event() {
        let host = FakeHost::with_board(resistor_board());
        let notifier = RecordingNotifier::new();
        let mut poller = poller(&host, &notifier, DeliveryPolicy::BestEffort);

        poller.tick().await.expect("first tick should succeed");
        let first_hash = poller.previous_hash();

        host.edit(|board| board.footprints[0].position.x_nm = 12_000_000);
        let outcome = poller.tick().await.expect("tick should succeed");
        assert!(matches!(outcome, TickOutcome::Sent { .. }));
        assert_ne!(poller.previous_hash(), first_hash);

        assert_eq!(
            poller.tick().await.expect("tick should succeed"),
            TickOutcome::Unchanged
        );

        let events = notifier.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].snapshot.footprints[0].position.x, 12.0);
    }

    #[tokio::test]
    async fn host_read_failure_leaves_previous_hash_alone() {
        let host = FakeHost::with_board(resistor_board());
        let notifier = RecordingNotifier::new();
        let mut poller = poller(&host, &notifier, DeliveryPolicy::BestEffort);

        poller.tick().await.expect("first tick should succeed");
        let sent_hash = poller.previous_hash();

        host.fail_next(1);
        host.edit(|board| board.footprints[0].value = "22k".to_string());
        let result = poller.tick().await;
        assert!(matches!(result, Err(PollerError::HostRead { .. })));
        assert_eq!(poller.previous_hash(), sent_hash);

        let outcome = poller.tick().await.expect("host recovered");
        assert!(matches!(outcome, TickOutcome::Sent { .. }));
        assert_eq!(notifier.events()[1].snapshot.footprints[0].value, "22k");
    }

    #[tokio::test]
    async fn best_effort_drops_snapshot_when_send_fails() {
        let host = FakeHost::with_board(resistor_board());
        let notifier = RecordingNotifier::new();
        notifier.fail_next(1);
        let mut poller = poller(&host, &notifier, DeliveryPolicy::BestEffort);

        assert!(poller.tick().await.is_err());
        assert!(poller.previous_hash().is_some());

        assert_eq!(
            poller.tick().await.expect("tick should succeed"),
            TickOutcome::Unchanged
        );
        assert_eq!(notifier.attempts(), 1);
        assert!(notifier.events().is_empty());
    }

    #[tokio::test]
    async fn best_effort_ignores_error_status() {
        let host = FakeHost::with_board(resistor_board());
        let notifier = RecordingNotifier::new();
        notifier.respond_with(500);
        let mut poller = poller(&host, &notifier, DeliveryPolicy::BestEffort);

        let outcome = poller.tick().await.expect("status is not inspected");
        assert!(matches!(outcome, TickOutcome::Sent { .. }));
        assert_eq!(
            poller.tick().await.expect("tick should succeed"),
            TickOutcome::Unchanged
        );
    }

    #[tokio::test]
    async fn confirmed_delivery_resends_after_failure() {
        let host = FakeHost::with_board(resistor_board());
        let notifier = RecordingNotifier::new();
        notifier.fail_next(1);
        let mut poller = poller(&host, &notifier, DeliveryPolicy::Confirmed);

        assert!(poller.tick().await.is_err());
        assert!(poller.previous_hash().is_none());

        let outcome = poller.tick().await.expect("retry should succeed");
        assert!(matches!(outcome, TickOutcome::Sent { .. }));
        assert_eq!(notifier.attempts(), 2);
        assert_eq!(notifier.events().len(), 1);
    }

    #[tokio::test]
    async fn confirmed_delivery_requires_success_status() {
        let host = FakeHost::with_board(resistor_board());
        let notifier = RecordingNotifier::new();
        notifier.respond_with(503);
        let mut poller = poller(&host, &notifier, DeliveryPolicy::Confirmed);

        let result = poller.tick().await;
        assert!(matches!(
            result,
            Err(PollerError::DeliveryRejected { status: 503 })
        ));
        assert!(poller.previous_hash().is_none());

        notifier.respond_with(200);
        let outcome = poller.tick().await.expect("backend recovered");
        assert!(matches!(outcome, TickOutcome::Sent { .. }));
        assert_eq!(
            poller.tick().await.expect("tick should succeed"),
            TickOutcome::Unchanged
        );
    }

    #[tokio::test]
    async fn run_keeps_ticking_after_failures() {
        let host = FakeHost::with_board(resistor_board());
        host.fail_next(2);
        let notifier = RecordingNotifier::new();
        let poller = poller(&host, &notifier, DeliveryPolicy::BestEffort);
        let (trigger, signal) = shutdown_channel();

        let watcher = async {
            while notifier.events().is_empty() {
                tokio::time::sleep(Duration::from_millis(2)).await;
            }
            trigger.trigger();
        };

        tokio::time::timeout(Duration::from_secs(5), async {
            tokio::join!(poller.run(signal), watcher)
        })
        .await
        .expect("poller should stop once triggered");

        assert!(host.reads() >= 3);
        assert_eq!(notifier.events().len(), 1);
    }

    #[tokio::test]
    async fn run_returns_without_ticking_when_already_triggered() {
        let host = FakeHost::with_board(resistor_board());
        let notifier = RecordingNotifier::new();
        let poller = poller(&host, &notifier, DeliveryPolicy::BestEffort);
        let (trigger, signal) = shutdown_channel();
        trigger.trigger();

        tokio::time::timeout(Duration::from_secs(5), poller.run(signal))
            .await
            .expect("poller should not start");
        assert_eq!(host.reads(), 0);
    }

    #[tokio::test]
    async fn trigger_interrupts_a_long_sleep() {
        let host = FakeHost::new();
        let notifier = RecordingNotifier::new();
        let config = PollerConfig::new().poll_interval(Duration::from_secs(3600));
        let poller = Poller::new(host.clone(), notifier.clone(), &config);
        let (trigger, signal) = shutdown_channel();

        let watcher = async {
            while host.reads() == 0 {
                tokio::time::sleep(Duration::from_millis(2)).await;
            }
            trigger.trigger();
        };

        tokio::time::timeout(Duration::from_secs(5), async {
            tokio::join!(poller.run(signal), watcher)
        })
        .await
        .expect("trigger should cut the sleep short");
        assert_eq!(host.reads(), 1);
    }

    #[tokio::test]
    async fn dropped_trigger_leaves_loop_running() {
        let host = FakeHost::new();
        let notifier = RecordingNotifier::new();
        let poller = poller(&host, &notifier, DeliveryPolicy::BestEffort);
        let (trigger, signal) = shutdown_channel();
        drop(trigger);

        let result = tokio::time::timeout(Duration::from_millis(100), poller.run(signal)).await;
        assert!(result.is_err(), "loop should still be running");
        assert!(host.reads() > 1);
    }
}
