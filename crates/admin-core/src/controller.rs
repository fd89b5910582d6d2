//! # Show Controller
//!
//! The orchestrator behind a "show one record" page. It resolves the
//! resource name and identifier, issues the single-record fetch, reacts to
//! failures through the active failure policy, and assembles the result
//! aggregate the presentation layer reads.
//!
//! # Re-entrancy
//!
//! The controller is safe to re-evaluate at any time: [`ShowController::result`]
//! is a pure read that recomputes the aggregate from current state. Side
//! effects fire only while an outcome message is applied in
//! [`ShowController::next_transition`] — a transition, not a value read — so
//! repeated evaluation can never duplicate them.
//!
//! # Supersession
//!
//! Every issued fetch carries an epoch. When the resolved (resource, id)
//! pair changes or a refetch is requested, the epoch is bumped and outcomes
//! from older fetches are discarded on arrival, never applied to state for
//! the wrong pair.

use crate::context::{AdminContext, RouteParams, ShowProps};
use crate::error::{ControllerError, FetchError};
use crate::failure::{DefaultFailurePolicy, FailureHandler};
use crate::fetch::{self, FetchOutcome, FetchStatus, RecordFetcher};
use crate::identifier::{self, Identifier};
use crate::ports::{LabelResolver, RefreshPort, Translator};
use crate::record::Record;
use crate::title;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

#[derive(Debug)]
enum Command {
    Refetch,
}

/// Handle that re-triggers the controller's fetch on demand.
///
/// Cheap to clone; requests queue until the controller pumps events.
#[derive(Debug, Clone)]
pub struct RefetchHandle {
    tx: mpsc::UnboundedSender<Command>,
}

impl RefetchHandle {
    pub fn request(&self) {
        // A closed receiver means the controller is gone; dropped silently.
        let _ = self.tx.send(Command::Refetch);
    }
}

/// Read-only aggregate handed to the presentation layer.
///
/// Recomputed on every [`ShowController::result`] call; owned solely by the
/// rendering layer that requested it.
#[derive(Debug, Clone)]
pub struct ShowResult {
    pub title: String,
    pub record: Option<Record>,
    pub error: Option<FetchError>,
    pub loading: bool,
    pub loaded: bool,
    pub resource: String,
    pub refetch: RefetchHandle,
    /// Current global freshness token; changes whenever the surrounding
    /// application signals a refresh.
    pub version: u64,
}

/// Mediates between a routed show page and the data-access layer.
pub struct ShowController {
    resource: String,
    id: Option<Identifier>,
    default_resource: Option<String>,
    fetcher: Arc<dyn RecordFetcher>,
    failure: Arc<dyn FailureHandler>,
    labels: Arc<dyn LabelResolver>,
    translator: Arc<dyn Translator>,
    refresh: Arc<dyn RefreshPort>,
    status: FetchStatus,
    record: Option<Record>,
    error: Option<FetchError>,
    epoch: u64,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    command_tx: mpsc::UnboundedSender<Command>,
    command_rx: mpsc::UnboundedReceiver<Command>,
}

impl ShowController {
    /// Build a controller and issue its first fetch.
    ///
    /// The resource comes from props, falling back to the ambient resource
    /// in the context; with neither this is a wiring mistake and the only
    /// condition `new` refuses. The failure handler is selected here, once:
    /// the caller's if given, else [`DefaultFailurePolicy`].
    pub fn new(
        ctx: &AdminContext,
        props: ShowProps,
        route: RouteParams,
    ) -> Result<Self, ControllerError> {
        let resource = props
            .resource
            .or_else(|| ctx.default_resource.clone())
            .filter(|r| !r.is_empty())
            .ok_or(ControllerError::NoResource)?;
        let id = identifier::resolve(props.id, route.id.as_deref());
        let failure: Arc<dyn FailureHandler> = match props.on_failure {
            Some(handler) => handler,
            None => Arc::new(DefaultFailurePolicy::from_context(ctx)),
        };

        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let mut controller = Self {
            resource,
            id,
            default_resource: ctx.default_resource.clone(),
            fetcher: ctx.fetcher.clone(),
            failure,
            labels: ctx.labels.clone(),
            translator: ctx.translator.clone(),
            refresh: ctx.refresh.clone(),
            status: FetchStatus::Idle,
            record: None,
            error: None,
            epoch: 0,
            outcome_tx,
            outcome_rx,
            command_tx,
            command_rx,
        };
        controller.issue_fetch();
        Ok(controller)
    }

    /// Re-resolve resource and identifier from fresh inputs.
    ///
    /// A change of the resolved (resource, id) pair re-keys the fetch:
    /// state resets and a new attempt is issued under a new epoch, which
    /// also condemns any fetch still in flight for the old pair. Unchanged
    /// inputs are a no-op. The failure handler chosen at construction stays.
    pub fn update(&mut self, props: ShowProps, route: RouteParams) {
        let resource = props
            .resource
            .or_else(|| self.default_resource.clone())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| self.resource.clone());
        let id = identifier::resolve(props.id, route.id.as_deref());
        if resource == self.resource && id == self.id {
            return;
        }
        debug!(
            from_resource = %self.resource,
            to_resource = %resource,
            from_id = ?self.id,
            to_id = ?id,
            "show inputs changed, re-keying fetch"
        );
        self.resource = resource;
        self.id = id;
        self.record = None;
        self.issue_fetch();
    }

    fn issue_fetch(&mut self) {
        self.epoch += 1;
        self.status = FetchStatus::Loading;
        self.error = None;
        debug!(
            resource = %self.resource,
            id = ?self.id,
            epoch = self.epoch,
            "issuing show fetch"
        );
        fetch::spawn_fetch(
            self.fetcher.clone(),
            self.resource.clone(),
            self.id.clone(),
            self.epoch,
            self.outcome_tx.clone(),
        );
    }

    /// Await the next event and return the status it produced.
    ///
    /// Events are fetch outcomes for the current epoch (applied, with the
    /// failure policy running exactly once on a transition into error) and
    /// queued refetch requests (which re-enter loading). Outcomes from
    /// superseded epochs are skipped with a debug line.
    pub async fn next_transition(&mut self) -> FetchStatus {
        loop {
            tokio::select! {
                Some(command) = self.command_rx.recv() => match command {
                    Command::Refetch => {
                        info!(resource = %self.resource, id = ?self.id, "refetch requested");
                        self.issue_fetch();
                        return FetchStatus::Loading;
                    }
                },
                Some(outcome) = self.outcome_rx.recv() => {
                    if self.apply(outcome) {
                        return self.status;
                    }
                }
            }
        }
    }

    fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.epoch != self.epoch {
            debug!(
                stale = outcome.epoch,
                current = self.epoch,
                "discarding superseded fetch outcome"
            );
            return false;
        }
        match outcome.result {
            Ok(record) => {
                info!(resource = %self.resource, id = ?self.id, "show fetch succeeded");
                self.record = Some(record);
                self.error = None;
                self.status = FetchStatus::Success;
            }
            Err(error) => {
                self.record = None;
                self.status = FetchStatus::Error;
                self.failure.on_failure(&self.resource, &error);
                self.error = Some(error);
            }
        }
        true
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Assemble the result aggregate from current state.
    ///
    /// Idempotent: identical state yields an identical aggregate, and no
    /// side effect ever fires from here.
    pub fn result(&self) -> ShowResult {
        ShowResult {
            title: title::compose_title(
                self.translator.as_ref(),
                self.labels.as_ref(),
                &self.resource,
                self.id.as_ref(),
                self.record.as_ref(),
            ),
            record: self.record.clone(),
            error: self.error.clone(),
            loading: self.status == FetchStatus::Loading,
            loaded: self.status == FetchStatus::Success,
            resource: self.resource.clone(),
            refetch: RefetchHandle {
                tx: self.command_tx.clone(),
            },
            version: self.refresh.version(),
        }
    }
}
