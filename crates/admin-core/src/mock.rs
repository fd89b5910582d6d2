//! # Test Doubles
//!
//! Deterministic stand-ins for every collaborator boundary, so controller
//! logic can be tested without a real data layer or UI.
//!
//! Two fetcher styles are provided, mirroring the two ways a test wants to
//! drive a fetch:
//!
//! - [`MockFetcher`] — a fluent expectation queue. Responses are scripted up
//!   front (`expect_get_one().return_ok(..)`) and consumed in order; good
//!   for straight-line scenarios.
//! - [`fetcher_channel`] — a probe channel. Each `get_one` call arrives as a
//!   [`FetchProbe`] carrying its own responder, so the test controls exactly
//!   when (and in what order) fetches resolve; good for supersession and
//!   in-flight scenarios.
//!
//! The recording sinks all share one [`EffectLog`], an ordered list of
//! observed side effects across notifier, redirector and refresh — ordering
//! assertions need a single timeline, not three separate ones.

use crate::error::FetchError;
use crate::fetch::RecordFetcher;
use crate::identifier::Identifier;
use crate::ports::{
    LabelResolver, NotificationType, Notifier, RedirectTarget, Redirector, RefreshPort,
    RefreshSignal, Translator,
};
use crate::record::Record;
use crate::title::TitleArgs;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// SIDE-EFFECT RECORDING
// =============================================================================

/// One observed side effect, in call order across all recording sinks.
#[derive(Debug, Clone, PartialEq)]
pub enum SideEffect {
    Notify {
        key: String,
        kind: NotificationType,
    },
    Redirect {
        target: RedirectTarget,
        resource: String,
    },
    Refresh,
}

/// Shared ordered log of side effects.
#[derive(Debug, Clone, Default)]
pub struct EffectLog(Arc<Mutex<Vec<SideEffect>>>);

impl EffectLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, effect: SideEffect) {
        self.0.lock().unwrap().push(effect);
    }

    pub fn snapshot(&self) -> Vec<SideEffect> {
        self.0.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Notification sink that appends to an [`EffectLog`].
pub struct RecordingNotifier {
    log: EffectLog,
}

impl RecordingNotifier {
    pub fn new(log: EffectLog) -> Self {
        Self { log }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, key: &str, kind: NotificationType) {
        self.log.push(SideEffect::Notify {
            key: key.to_string(),
            kind,
        });
    }
}

/// Redirect sink that appends to an [`EffectLog`].
pub struct RecordingRedirector {
    log: EffectLog,
}

impl RecordingRedirector {
    pub fn new(log: EffectLog) -> Self {
        Self { log }
    }
}

impl Redirector for RecordingRedirector {
    fn redirect(&self, target: RedirectTarget, resource: &str) {
        self.log.push(SideEffect::Redirect {
            target,
            resource: resource.to_string(),
        });
    }
}

/// A real [`RefreshSignal`] that also appends each bump to an [`EffectLog`].
pub struct RecordingRefresh {
    log: EffectLog,
    inner: RefreshSignal,
}

impl RecordingRefresh {
    pub fn new(log: EffectLog) -> Self {
        Self {
            log,
            inner: RefreshSignal::new(),
        }
    }
}

impl RefreshPort for RecordingRefresh {
    fn refresh(&self) {
        self.log.push(SideEffect::Refresh);
        self.inner.refresh();
    }

    fn version(&self) -> u64 {
        self.inner.version()
    }
}

// =============================================================================
// PLAIN LOOKUP COLLABORATORS
// =============================================================================

/// Label resolver that returns the resource name verbatim.
pub struct PlainLabels;

impl LabelResolver for PlainLabels {
    fn label_for(&self, resource: &str, _count: usize) -> String {
        resource.to_string()
    }
}

/// Translator that renders `"show {name} {id}"` for any key.
pub struct PlainTranslator;

impl Translator for PlainTranslator {
    fn translate(&self, _key: &str, args: &TitleArgs<'_>) -> String {
        match args.id {
            Some(id) => format!("show {} {}", args.name, id),
            None => format!("show {}", args.name),
        }
    }
}

// =============================================================================
// EXPECTATION-QUEUE FETCHER
// =============================================================================

/// Scripted fetcher: responses are queued up front and consumed in order.
///
/// # Example
/// ```ignore
/// let fetcher = Arc::new(MockFetcher::new());
/// fetcher.expect_get_one().return_ok(record);
/// fetcher.expect_get_one().return_err(FetchError::StoreClosed);
/// // ... run the code under test ...
/// fetcher.verify();
/// ```
#[derive(Default)]
pub struct MockFetcher {
    responses: Mutex<VecDeque<Result<Record, FetchError>>>,
    calls: Mutex<Vec<(String, Option<Identifier>)>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the response for the next `get_one` call.
    pub fn expect_get_one(&self) -> GetOneExpectation<'_> {
        GetOneExpectation {
            responses: &self.responses,
        }
    }

    /// The (resource, id) arguments seen so far, in call order.
    pub fn calls(&self) -> Vec<(String, Option<Identifier>)> {
        self.calls.lock().unwrap().clone()
    }

    /// Panics if scripted responses remain unconsumed.
    pub fn verify(&self) {
        let remaining = self.responses.lock().unwrap().len();
        if remaining > 0 {
            panic!("not all fetch expectations were met, {remaining} remaining");
        }
    }
}

#[async_trait]
impl RecordFetcher for MockFetcher {
    async fn get_one(
        &self,
        resource: &str,
        id: Option<Identifier>,
    ) -> Result<Record, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push((resource.to_string(), id.clone()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected get_one({resource}, {id:?})"))
    }
}

/// Builder for one scripted `get_one` response.
pub struct GetOneExpectation<'a> {
    responses: &'a Mutex<VecDeque<Result<Record, FetchError>>>,
}

impl GetOneExpectation<'_> {
    pub fn return_ok(self, record: Record) {
        self.responses.lock().unwrap().push_back(Ok(record));
    }

    pub fn return_err(self, error: FetchError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }
}

// =============================================================================
// PROBE-CHANNEL FETCHER
// =============================================================================

/// One in-flight `get_one` call, waiting for the test to answer it.
#[derive(Debug)]
pub struct FetchProbe {
    pub resource: String,
    pub id: Option<Identifier>,
    pub respond_to: oneshot::Sender<Result<Record, FetchError>>,
}

/// Fetcher whose calls surface as [`FetchProbe`] messages.
pub struct ChannelFetcher {
    tx: mpsc::Sender<FetchProbe>,
}

#[async_trait]
impl RecordFetcher for ChannelFetcher {
    async fn get_one(
        &self,
        resource: &str,
        id: Option<Identifier>,
    ) -> Result<Record, FetchError> {
        let (respond_to, response) = oneshot::channel();
        self.tx
            .send(FetchProbe {
                resource: resource.to_string(),
                id,
                respond_to,
            })
            .await
            .map_err(|_| FetchError::StoreClosed)?;
        response.await.map_err(|_| FetchError::StoreClosed)?
    }
}

/// Create a probe-channel fetcher and the receiver its calls arrive on.
pub fn fetcher_channel(buffer_size: usize) -> (Arc<ChannelFetcher>, mpsc::Receiver<FetchProbe>) {
    let (tx, rx) = mpsc::channel(buffer_size);
    (Arc::new(ChannelFetcher { tx }), rx)
}
