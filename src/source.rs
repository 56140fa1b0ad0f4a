use std::future::Future;

use crate::error::PollerError;
use crate::model::board::Board;

/// Read-only access to whatever board the editor currently has loaded.
///
/// `Ok(None)` means no board is open; the poller skips that tick without
/// notifying. Errors are logged by the poller and the tick is abandoned.
pub trait BoardSource {
    fn current_board(
        &mut self,
    ) -> impl Future<Output = Result<Option<Board>, PollerError>> + Send;
}
