//! In-memory stand-ins for the editor and the backend.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::error::PollerError;
use crate::model::board::{Board, PcbFootprint, Vector2Nm};
use crate::notify::{DeliveryReceipt, Notifier, PollEvent};
use crate::source::BoardSource;

pub(crate) fn resistor_board() -> Board {
    Board {
        footprints: vec![PcbFootprint {
            reference: "R1".to_string(),
            value: "10k".to_string(),
            library_item_name: "R_0603_1608Metric".to_string(),
            position: Vector2Nm {
                x_nm: 10_000_000,
                y_nm: 5_000_000,
            },
            orientation_degrees: 0.0,
            flipped: false,
        }],
        tracks: Vec::new(),
        zones: Vec::new(),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Default)]
struct HostState {
    board: Option<Board>,
    failures_left: usize,
    reads: usize,
}

/// Editor double. Clones share one board.
#[derive(Clone, Debug, Default)]
pub(crate) struct FakeHost {
    state: Arc<Mutex<HostState>>,
}

impl FakeHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_board(board: Board) -> Self {
        let host = Self::new();
        lock(&host.state).board = Some(board);
        host
    }

    pub(crate) fn edit(&self, change: impl FnOnce(&mut Board)) {
        if let Some(board) = lock(&self.state).board.as_mut() {
            change(board);
        }
    }

    /// Makes the next `count` reads fail as if the board changed mid-read.
    pub(crate) fn fail_next(&self, count: usize) {
        lock(&self.state).failures_left = count;
    }

    pub(crate) fn reads(&self) -> usize {
        lock(&self.state).reads
    }
}

impl BoardSource for FakeHost {
    async fn current_board(&mut self) -> Result<Option<Board>, PollerError> {
        let mut state = lock(&self.state);
        state.reads += 1;

        if state.failures_left > 0 {
            state.failures_left -= 1;
            return Err(PollerError::HostRead {
                reason: "footprint list changed during read".to_string(),
            });
        }

        Ok(state.board.clone())
    }
}

#[derive(Debug)]
struct RecorderState {
    events: Vec<PollEvent>,
    attempts: usize,
    failures_left: usize,
    status: u16,
}

/// Backend double. Clones share one event log.
#[derive(Clone, Debug)]
pub(crate) struct RecordingNotifier {
    state: Arc<Mutex<RecorderState>>,
}

impl RecordingNotifier {
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(RecorderState {
                events: Vec::new(),
                attempts: 0,
                failures_left: 0,
                status: 200,
            })),
        }
    }

    pub(crate) fn fail_next(&self, count: usize) {
        lock(&self.state).failures_left = count;
    }

    pub(crate) fn respond_with(&self, status: u16) {
        lock(&self.state).status = status;
    }

    pub(crate) fn attempts(&self) -> usize {
        lock(&self.state).attempts
    }

    /// Events that reached the backend, failed sends excluded.
    pub(crate) fn events(&self) -> Vec<PollEvent> {
        lock(&self.state).events.clone()
    }
}

impl Notifier for RecordingNotifier {
    async fn notify(&self, event: &PollEvent) -> Result<DeliveryReceipt, PollerError> {
        let mut state = lock(&self.state);
        state.attempts += 1;

        if state.failures_left > 0 {
            state.failures_left -= 1;
            return Err(PollerError::Timeout {
                timeout: Duration::from_secs(5),
            });
        }

        state.events.push(event.clone());
        Ok(DeliveryReceipt {
            status: state.status,
        })
    }
}
