//! # Context and Inputs
//!
//! A controller receives its collaborators through [`AdminContext`] rather
//! than reaching for globals. Dependencies arrive as cheap cloneable
//! handles, so several controllers can share one surrounding application.

use crate::failure::FailureHandler;
use crate::fetch::RecordFetcher;
use crate::identifier::Identifier;
use crate::ports::{LabelResolver, Notifier, Redirector, RefreshPort, Translator};
use std::sync::Arc;

/// The surrounding-application surface a controller runs against.
#[derive(Clone)]
pub struct AdminContext {
    pub fetcher: Arc<dyn RecordFetcher>,
    pub notifier: Arc<dyn Notifier>,
    pub redirector: Arc<dyn Redirector>,
    pub labels: Arc<dyn LabelResolver>,
    pub translator: Arc<dyn Translator>,
    pub refresh: Arc<dyn RefreshPort>,
    /// Ambient resource name, used when props don't name one.
    pub default_resource: Option<String>,
}

/// Caller-supplied overrides for one show page.
#[derive(Clone, Default)]
pub struct ShowProps {
    pub resource: Option<String>,
    pub id: Option<Identifier>,
    /// Replaces the default failure policy entirely; never composed with it.
    pub on_failure: Option<Arc<dyn FailureHandler>>,
}

/// Parameters bound from the current route.
#[derive(Debug, Clone, Default)]
pub struct RouteParams {
    /// Raw, still percent-encoded id segment.
    pub id: Option<String>,
}
