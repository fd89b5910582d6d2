//! # Single-Record Fetch
//!
//! The boundary to the data-access layer, plus the machinery the controller
//! uses to observe fetch completion as messages instead of awaiting inline.
//!
//! Each issued fetch runs in its own task and reports back over an mpsc
//! channel, tagged with the epoch it was issued under. The controller only
//! applies outcomes whose epoch is still current, which is how superseded
//! in-flight fetches get discarded when the (resource, id) pair changes.

use crate::error::FetchError;
use crate::identifier::Identifier;
use crate::record::Record;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Loading lifecycle of a single-record fetch.
///
/// Transitions are driven entirely by outcome messages; the controller
/// reads and reacts, it never invents a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Boundary to the data-access layer.
///
/// Retry policy lives behind this trait, not in the controller. A missing
/// identifier is passed through untouched; how to answer it is the
/// implementation's concern.
#[async_trait]
pub trait RecordFetcher: Send + Sync {
    async fn get_one(
        &self,
        resource: &str,
        id: Option<Identifier>,
    ) -> Result<Record, FetchError>;
}

/// Completion message delivered back to the controller.
#[derive(Debug)]
pub struct FetchOutcome {
    pub epoch: u64,
    pub result: Result<Record, FetchError>,
}

/// Spawn one fetch attempt, reporting its outcome over `tx` under `epoch`.
pub(crate) fn spawn_fetch(
    fetcher: Arc<dyn RecordFetcher>,
    resource: String,
    id: Option<Identifier>,
    epoch: u64,
    tx: mpsc::UnboundedSender<FetchOutcome>,
) {
    tokio::spawn(async move {
        let result = fetcher.get_one(&resource, id).await;
        // A closed receiver means the controller is gone; nothing to report.
        let _ = tx.send(FetchOutcome { epoch, result });
    });
}
