use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::error::PollerError;
use crate::notify::Notifier;
use crate::poller::{shutdown_channel, Poller, ShutdownTrigger};
use crate::source::BoardSource;

const THREAD_NAME: &str = "kicad-poller";

/// A [`Poller`] running on its own OS thread with a private current-thread
/// runtime, for hosts that have no async runtime of their own.
///
/// Dropping the handle detaches the thread; it then runs until the process
/// exits and never holds exit up.
#[derive(Debug)]
pub struct PollerThread {
    trigger: ShutdownTrigger,
    handle: JoinHandle<()>,
}

impl PollerThread {
    pub fn spawn<S, N>(poller: Poller<S, N>) -> Result<Self, PollerError>
    where
        S: BoardSource + Send + 'static,
        N: Notifier + Send + 'static,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| PollerError::Runtime(err.to_string()))?;
        let (trigger, signal) = shutdown_channel();

        let handle = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || runtime.block_on(poller.run(signal)))
            .map_err(|err| PollerError::Runtime(err.to_string()))?;

        debug!(thread = THREAD_NAME, "spawned poller thread");
        Ok(Self { trigger, handle })
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stops the loop at its next await point and waits for the thread.
    pub fn shutdown(self) -> Result<(), PollerError> {
        self.trigger.trigger();
        self.handle
            .join()
            .map_err(|_| PollerError::Runtime("poller thread panicked".to_string()))
    }
}
