use std::thread;
use std::time::Duration;

use nng::options::{Options, RecvTimeout, SendTimeout};
use nng::{Error as NngError, Protocol, Socket};
use tokio::sync::{mpsc, oneshot};
use tracing::trace;

use crate::error::PollerError;

const TRANSPORT_QUEUE_CAPACITY: usize = 16;

/// Request/reply channel to KiCad's IPC socket.
///
/// nng sockets block, so exchanges run on a dedicated worker thread fed by
/// a bounded queue; callers await a oneshot reply.
#[derive(Debug)]
pub(crate) struct Transport {
    request_tx: mpsc::Sender<Exchange>,
}

#[derive(Debug)]
struct Exchange {
    request: Vec<u8>,
    reply_tx: oneshot::Sender<Result<Vec<u8>, PollerError>>,
}

impl Transport {
    pub(crate) fn connect(socket_uri: &str, timeout: Duration) -> Result<Self, PollerError> {
        let connection_error = |reason: String| PollerError::Connection {
            socket_uri: socket_uri.to_string(),
            reason,
        };

        let socket = Socket::new(Protocol::Req0).map_err(|err| connection_error(err.to_string()))?;
        socket
            .set_opt::<SendTimeout>(Some(timeout))
            .map_err(|err| connection_error(err.to_string()))?;
        socket
            .set_opt::<RecvTimeout>(Some(timeout))
            .map_err(|err| connection_error(err.to_string()))?;
        socket
            .dial(socket_uri)
            .map_err(|err| connection_error(err.to_string()))?;

        let (request_tx, mut request_rx) = mpsc::channel::<Exchange>(TRANSPORT_QUEUE_CAPACITY);

        thread::Builder::new()
            .name(format!("kicad-poller-ipc-{}", std::process::id()))
            .spawn(move || {
                while let Some(exchange) = request_rx.blocking_recv() {
                    let reply = exchange_once(&socket, &exchange.request, timeout);
                    let _ = exchange.reply_tx.send(reply);
                }
                trace!("IPC transport worker exiting");
            })
            .map_err(|err| connection_error(err.to_string()))?;

        Ok(Self { request_tx })
    }

    pub(crate) async fn roundtrip(&self, request: Vec<u8>) -> Result<Vec<u8>, PollerError> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.request_tx
            .send(Exchange { request, reply_tx })
            .await
            .map_err(|_| PollerError::TransportClosed)?;

        reply_rx.await.map_err(|_| PollerError::TransportClosed)?
    }
}

fn exchange_once(socket: &Socket, request: &[u8], timeout: Duration) -> Result<Vec<u8>, PollerError> {
    socket.send(request).map_err(|(_, err)| match err {
        NngError::TimedOut => PollerError::Timeout { timeout },
        other => PollerError::TransportSend {
            reason: other.to_string(),
        },
    })?;

    let reply = socket.recv().map_err(|err| match err {
        NngError::TimedOut => PollerError::Timeout { timeout },
        other => PollerError::TransportReceive {
            reason: other.to_string(),
        },
    })?;

    Ok(reply.as_slice().to_vec())
}
