//! # Admin Core
//!
//! The control layer of an admin-panel framework: the **record-detail
//! (show) controller** and the boundaries it coordinates. Given a resource
//! name and an identifier — explicit or lifted from the route — it drives a
//! single-record fetch through its lifecycle, reacts to failures with an
//! overridable fallback policy, derives a page title, and hands the
//! presentation layer one read-only result aggregate.
//!
//! ## Architecture
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Port layer** ([`ports`], [`fetch`]) — trait boundaries to the
//!    surrounding application: the data-access layer, notification and
//!    redirect sinks, the global refresh signal, label and translation
//!    lookups. The controller owns none of these.
//! 2. **Policy layer** ([`identifier`], [`failure`], [`title`]) — the leaf
//!    rules: id source precedence and percent-decoding, the
//!    notify/redirect/refresh fallback, title composition.
//! 3. **Orchestration layer** ([`controller`]) — [`ShowController`] wires
//!    the above together and owns the fetch state machine.
//!
//! ## Concurrency Model
//!
//! One controller, one task, no locks. Fetches run in spawned tasks and
//! report back as epoch-tagged messages; the controller applies outcomes
//! for the current epoch and discards superseded ones. Failure side effects
//! fire while an outcome is applied — a status *transition* — never while
//! the result is read, so re-evaluation is idempotent by construction.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use admin_core::mock::{
//!     EffectLog, MockFetcher, PlainLabels, PlainTranslator, RecordingNotifier,
//!     RecordingRedirector, RecordingRefresh,
//! };
//! use admin_core::{AdminContext, Record, RouteParams, ShowController, ShowProps};
//!
//! #[tokio::main]
//! async fn main() {
//!     let fetcher = Arc::new(MockFetcher::new());
//!     fetcher
//!         .expect_get_one()
//!         .return_ok(Record::new().with("id", 1).with("title", "Dune"));
//!
//!     let log = EffectLog::new();
//!     let ctx = AdminContext {
//!         fetcher: fetcher.clone(),
//!         notifier: Arc::new(RecordingNotifier::new(log.clone())),
//!         redirector: Arc::new(RecordingRedirector::new(log.clone())),
//!         labels: Arc::new(PlainLabels),
//!         translator: Arc::new(PlainTranslator),
//!         refresh: Arc::new(RecordingRefresh::new(log.clone())),
//!         default_resource: Some("books".into()),
//!     };
//!
//!     let mut controller = ShowController::new(
//!         &ctx,
//!         ShowProps::default(),
//!         RouteParams { id: Some("1".into()) },
//!     )
//!     .unwrap();
//!     controller.next_transition().await;
//!
//!     let result = controller.result();
//!     assert!(result.loaded);
//!     assert_eq!(result.title, "show books 1");
//!     assert!(log.is_empty());
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module ships recording sinks and two scripted fetchers so
//! controller logic can be exercised deterministically without a real data
//! layer; see its docs for when to use which.

pub mod context;
pub mod controller;
pub mod error;
pub mod failure;
pub mod fetch;
pub mod identifier;
pub mod mock;
pub mod ports;
pub mod record;
pub mod title;

// Re-export core types for convenience
pub use context::{AdminContext, RouteParams, ShowProps};
pub use controller::{RefetchHandle, ShowController, ShowResult};
pub use error::{ControllerError, FetchError};
pub use failure::{DefaultFailurePolicy, FailureHandler, ITEM_DOESNT_EXIST_KEY};
pub use fetch::{FetchStatus, RecordFetcher};
pub use identifier::Identifier;
pub use ports::{
    LabelResolver, NotificationType, Notifier, RedirectTarget, Redirector, RefreshPort,
    RefreshSignal, Translator,
};
pub use record::Record;
pub use title::{compose_title, TitleArgs, PAGE_SHOW_KEY};
