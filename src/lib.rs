//! # kicad-poller
//!
//! Watches the board open in KiCad and tells an HTTP backend whenever it
//! changes.
//!
//! Every poll tick reads the whole board (footprints, tracks, zones),
//! turns it into a [`BoardSnapshot`] in millimetres, and hashes its JSON
//! form. When the hash differs from the last delivered one, the snapshot is
//! POSTed to `{BACKEND_URL}/api/poller/{SESSION_ID}/events` as
//! `{"timestamp": <unix seconds>, "snapshot": {...}}`.
//!
//! ## Quickstart
//!
//! ```no_run
//! # #[cfg(feature = "kicad-ipc")]
//! # fn run() -> Result<(), kicad_poller::PollerError> {
//! use kicad_poller::{ClientBuilder, HttpNotifier, KiCadBoardSource, Poller, PollerConfig, PollerThread};
//!
//! let config = PollerConfig::from_env()?;
//! let source = KiCadBoardSource::new(ClientBuilder::new());
//! let notifier = HttpNotifier::new(&config)?;
//! let thread = PollerThread::spawn(Poller::new(source, notifier, &config))?;
//! // ... later
//! thread.shutdown()?;
//! # Ok(())
//! # }
//! ```
//!
//! Layers:
//! - transport (nng, `kicad-ipc` feature)
//! - envelope and protobuf schema
//! - board model and snapshot
//! - poller loop and notifier

/// Background thread runner for hosts without an async runtime.
pub mod blocking;
/// KiCad IPC client and the KiCad-backed board source.
#[cfg(feature = "kicad-ipc")]
pub mod client;
/// Poller settings read from the environment.
pub mod config;
pub(crate) mod envelope;
/// Error type shared by every layer.
pub mod error;
/// Board entities and the serialized snapshot.
pub mod model;
/// Event payload and the HTTP notifier.
pub mod notify;
/// The change-detection loop.
pub mod poller;
pub(crate) mod proto;
/// Board access seam between the poller and the editor.
pub mod source;
#[cfg(feature = "kicad-ipc")]
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::blocking::PollerThread;
#[cfg(feature = "kicad-ipc")]
pub use crate::client::{ClientBuilder, KiCadBoardSource, KiCadClient};
pub use crate::config::{DeliveryPolicy, PollerConfig};
pub use crate::error::PollerError;
pub use crate::model::board::{
    Board, BoardLayerInfo, BoardNet, PcbFootprint, PcbTrack, PcbZone, Vector2Nm,
};
pub use crate::model::common::{DocumentSpecifier, DocumentType, ProjectInfo, VersionInfo};
pub use crate::model::snapshot::{
    BoardSide, BoardSnapshot, FootprintRecord, PointMm, SnapshotHash, TrackRecord, ZoneRecord,
};
pub use crate::notify::{DeliveryReceipt, HttpNotifier, Notifier, PollEvent};
pub use crate::poller::{
    shutdown_channel, Poller, ShutdownSignal, ShutdownTrigger, TickOutcome,
};
pub use crate::source::BoardSource;
