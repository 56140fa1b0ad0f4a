use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PollerError {
    #[error("invalid configuration: {reason}")]
    Config { reason: String },

    #[error("KiCad IPC socket not available at `{socket_uri}`")]
    SocketUnavailable { socket_uri: String },

    #[error("connection failed for `{socket_uri}`: {reason}")]
    Connection { socket_uri: String, reason: String },

    #[error("transport send failed: {reason}")]
    TransportSend { reason: String },

    #[error("transport receive failed: {reason}")]
    TransportReceive { reason: String },

    #[error("transport task is unavailable")]
    TransportClosed,

    #[error("request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("API status error `{code}`: {message}")]
    ApiStatus { code: String, message: String },

    #[error("item request status error `{code}`")]
    ItemStatus { code: String },

    #[error("API response missing payload for `{expected_type_url}`")]
    MissingPayload { expected_type_url: String },

    #[error("unexpected payload type; expected `{expected_type_url}`, got `{actual_type_url}`")]
    UnexpectedPayloadType {
        expected_type_url: String,
        actual_type_url: String,
    },

    #[error("protobuf decode failed: {0}")]
    ProtobufDecode(String),

    #[error("mutex poisoned")]
    InternalPoisoned,

    #[error("no open PCB document found")]
    BoardNotOpen,

    #[error("multiple PCB documents are open; unable to choose one board context: {boards:?}")]
    AmbiguousBoardSelection { boards: Vec<String> },

    #[error("board read failed: {reason}")]
    HostRead { reason: String },

    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend rejected event with HTTP status {status}")]
    DeliveryRejected { status: u16 },

    #[error("runtime setup failed: {0}")]
    Runtime(String),
}

impl PollerError {
    /// Errors meaning "KiCad has no board for us right now" rather than a
    /// failed read.
    pub fn is_board_absent(&self) -> bool {
        matches!(
            self,
            Self::BoardNotOpen | Self::SocketUnavailable { .. }
        )
    }
}
