use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::{debug, info, warn};

use crate::envelope;
use crate::error::PollerError;
use crate::model::board::Board;
use crate::model::common::{DocumentSpecifier, DocumentType, VersionInfo};
use crate::proto::kiapi::common::commands as common_commands;
use crate::proto::kiapi::common::types as common_types;
use crate::proto::kiapi::common::ApiResponse;
use crate::source::BoardSource;
use crate::transport::Transport;

pub const KICAD_API_SOCKET_ENV: &str = "KICAD_API_SOCKET";
pub const KICAD_API_TOKEN_ENV: &str = "KICAD_API_TOKEN";

const CMD_GET_VERSION: &str = "kiapi.common.commands.GetVersion";
const CMD_GET_OPEN_DOCUMENTS: &str = "kiapi.common.commands.GetOpenDocuments";
const CMD_GET_ITEMS: &str = "kiapi.common.commands.GetItems";

const RES_GET_VERSION: &str = "kiapi.common.commands.GetVersionResponse";
const RES_GET_OPEN_DOCUMENTS: &str = "kiapi.common.commands.GetOpenDocumentsResponse";
const RES_GET_ITEMS: &str = "kiapi.common.commands.GetItemsResponse";

/// Item kinds that make up a board snapshot.
const SNAPSHOT_ITEM_TYPES: [common_types::KiCadObjectType; 5] = [
    common_types::KiCadObjectType::KotPcbFootprint,
    common_types::KiCadObjectType::KotPcbTrace,
    common_types::KiCadObjectType::KotPcbArc,
    common_types::KiCadObjectType::KotPcbVia,
    common_types::KiCadObjectType::KotPcbZone,
];

#[derive(Clone, Debug)]
pub struct KiCadClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    transport: Transport,
    token: Mutex<String>,
    client_name: String,
    socket_uri: String,
}

#[derive(Clone, Debug)]
pub struct ClientBuilder {
    timeout: Duration,
    socket_uri: Option<String>,
    token: Option<String>,
    client_name: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_millis(3_000),
            socket_uri: None,
            token: None,
            client_name: None,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn socket_path(mut self, socket_path: impl Into<String>) -> Self {
        self.socket_uri = Some(socket_path.into());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    pub async fn connect(self) -> Result<KiCadClient, PollerError> {
        let socket_uri = resolve_socket_uri(self.socket_uri.as_deref());
        if is_missing_ipc_socket(&socket_uri) {
            return Err(PollerError::SocketUnavailable { socket_uri });
        }

        let transport = Transport::connect(&socket_uri, self.timeout)?;
        let token = self
            .token
            .or_else(|| std::env::var(KICAD_API_TOKEN_ENV).ok())
            .unwrap_or_default();
        let client_name = self.client_name.unwrap_or_else(default_client_name);

        debug!(%socket_uri, %client_name, "connected KiCad IPC transport");
        Ok(KiCadClient {
            inner: Arc::new(ClientInner {
                transport,
                token: Mutex::new(token),
                client_name,
                socket_uri,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KiCadClient {
    pub fn socket_uri(&self) -> &str {
        &self.inner.socket_uri
    }

    pub async fn get_version(&self) -> Result<VersionInfo, PollerError> {
        let command = envelope::pack_any(&common_commands::GetVersion {}, CMD_GET_VERSION);
        let response = self.send_command(command).await?;

        let payload: common_commands::GetVersionResponse =
            envelope::unpack_any(&response, RES_GET_VERSION)?;
        let version = payload.version.ok_or_else(|| PollerError::MissingPayload {
            expected_type_url: envelope::type_url("kiapi.common.types.KiCadVersion"),
        })?;

        Ok(VersionInfo {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            full_version: version.full_version,
        })
    }

    pub async fn get_open_documents(
        &self,
        document_type: DocumentType,
    ) -> Result<Vec<DocumentSpecifier>, PollerError> {
        let command = common_commands::GetOpenDocuments {
            r#type: document_type.to_proto(),
        };

        let response = self
            .send_command(envelope::pack_any(&command, CMD_GET_OPEN_DOCUMENTS))
            .await?;
        let payload: common_commands::GetOpenDocumentsResponse =
            envelope::unpack_any(&response, RES_GET_OPEN_DOCUMENTS)?;

        Ok(payload
            .documents
            .into_iter()
            .filter_map(DocumentSpecifier::from_proto)
            .collect())
    }

    /// Reads every footprint, track (segments, arcs, vias) and zone of the
    /// single open board.
    pub async fn get_board(&self) -> Result<Board, PollerError> {
        let docs = self.get_open_documents(DocumentType::Pcb).await?;
        let document = select_single_board_document(&docs)?;

        let command = common_commands::GetItems {
            header: Some(common_types::ItemHeader {
                document: Some(document.to_proto()),
                container: None,
                field_mask: None,
            }),
            types: SNAPSHOT_ITEM_TYPES.iter().map(|ty| *ty as i32).collect(),
        };

        let response = self
            .send_command(envelope::pack_any(&command, CMD_GET_ITEMS))
            .await?;
        let payload: common_commands::GetItemsResponse =
            envelope::unpack_any(&response, RES_GET_ITEMS)?;

        let request_status = common_types::ItemRequestStatus::try_from(payload.status)
            .unwrap_or(common_types::ItemRequestStatus::IrsUnknown);
        if request_status != common_types::ItemRequestStatus::IrsOk {
            return Err(PollerError::ItemStatus {
                code: request_status.as_str_name().to_string(),
            });
        }

        Board::from_items(&payload.items)
    }

    async fn send_command(&self, command: prost_types::Any) -> Result<ApiResponse, PollerError> {
        let token = self
            .inner
            .token
            .lock()
            .map_err(|_| PollerError::InternalPoisoned)?
            .clone();

        let request = envelope::encode_request(&token, &self.inner.client_name, command);
        let reply = self.inner.transport.roundtrip(request).await?;
        let response = envelope::decode_response(&reply)?;

        if let Some(err) = envelope::status_error(&response) {
            return Err(err);
        }

        if token.is_empty() {
            self.adopt_token(&response)?;
        }

        Ok(response)
    }

    fn adopt_token(&self, response: &ApiResponse) -> Result<(), PollerError> {
        let Some(header) = response.header.as_ref() else {
            return Ok(());
        };
        if header.kicad_token.is_empty() {
            return Ok(());
        }

        let mut guard = self
            .inner
            .token
            .lock()
            .map_err(|_| PollerError::InternalPoisoned)?;
        *guard = header.kicad_token.clone();
        Ok(())
    }
}

/// [`BoardSource`] backed by a running KiCad instance.
///
/// Connects lazily and reconnects after transport failures, so KiCad may be
/// started, closed and reopened while the poller runs. A missing socket or
/// no open PCB counts as "no board".
#[derive(Debug)]
pub struct KiCadBoardSource {
    builder: ClientBuilder,
    client: Option<KiCadClient>,
}

impl KiCadBoardSource {
    pub fn new(builder: ClientBuilder) -> Self {
        Self {
            builder,
            client: None,
        }
    }

    async fn client(&mut self) -> Result<KiCadClient, PollerError> {
        if let Some(client) = self.client.as_ref() {
            return Ok(client.clone());
        }

        let client = self.builder.clone().connect().await?;
        match client.get_version().await {
            Ok(version) => info!(
                socket_uri = client.socket_uri(),
                version = %version.full_version,
                "connected to KiCad"
            ),
            Err(err) if err.is_board_absent() => return Err(err),
            Err(err) => warn!(%err, "connected to KiCad, version unavailable"),
        }
        self.client = Some(client.clone());
        Ok(client)
    }
}

impl BoardSource for KiCadBoardSource {
    async fn current_board(&mut self) -> Result<Option<Board>, PollerError> {
        let result = match self.client().await {
            Ok(client) => client.get_board().await,
            Err(err) => Err(err),
        };

        match result {
            Ok(board) => Ok(Some(board)),
            Err(err) if err.is_board_absent() => Ok(None),
            Err(err) => {
                if is_transport_failure(&err) {
                    self.client = None;
                }
                Err(err)
            }
        }
    }
}

fn is_transport_failure(err: &PollerError) -> bool {
    matches!(
        err,
        PollerError::Timeout { .. }
            | PollerError::TransportSend { .. }
            | PollerError::TransportReceive { .. }
            | PollerError::TransportClosed
    )
}

fn select_single_board_document(
    docs: &[DocumentSpecifier],
) -> Result<&DocumentSpecifier, PollerError> {
    match docs {
        [] => Err(PollerError::BoardNotOpen),
        [single] => Ok(single),
        _ => Err(PollerError::AmbiguousBoardSelection {
            boards: docs
                .iter()
                .map(|doc| doc.display_name().to_string())
                .collect(),
        }),
    }
}

fn resolve_socket_uri(explicit: Option<&str>) -> String {
    if let Some(socket) = explicit {
        return normalize_socket_uri(socket);
    }

    if let Ok(socket) = std::env::var(KICAD_API_SOCKET_ENV) {
        if !socket.is_empty() {
            return normalize_socket_uri(&socket);
        }
    }

    normalize_socket_uri(default_socket_path().to_string_lossy().as_ref())
}

fn default_socket_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::temp_dir().join("kicad").join("api.sock")
    }

    #[cfg(not(target_os = "windows"))]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let flatpak = PathBuf::from(home)
                .join(".var/app/org.kicad.KiCad/cache/tmp/kicad/api.sock");
            if flatpak.exists() {
                return flatpak;
            }
        }

        PathBuf::from("/tmp/kicad/api.sock")
    }
}

fn normalize_socket_uri(socket: &str) -> String {
    if socket.contains("://") {
        return socket.to_string();
    }

    format!("ipc://{socket}")
}

fn is_missing_ipc_socket(socket_uri: &str) -> bool {
    socket_uri
        .strip_prefix("ipc://")
        .is_some_and(|path| !PathBuf::from(path).exists())
}

fn default_client_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0);

    format!("kicad-poller-{}-{millis}", std::process::id())
}
