//! # Failure Policy
//!
//! What happens when the single-record fetch fails. Exactly one handler is
//! active per controller instance: the caller's, or [`DefaultFailurePolicy`].
//! The choice is made once at construction and never revisited, so handlers
//! with identity-sensitive semantics keep a stable identity.

use crate::context::AdminContext;
use crate::error::FetchError;
use crate::ports::{NotificationType, Notifier, RedirectTarget, Redirector, RefreshPort};
use std::sync::Arc;
use tracing::warn;

/// Notification key shown when the requested record cannot be fetched.
pub const ITEM_DOESNT_EXIST_KEY: &str = "ra.notification.item_doesnt_exist";

/// Strategy invoked once per failed fetch attempt.
///
/// Handlers are infallible by signature; one that panics propagates to the
/// surrounding task's error boundary.
pub trait FailureHandler: Send + Sync {
    fn on_failure(&self, resource: &str, error: &FetchError);
}

/// Default fallback for a failed show fetch.
///
/// In order: warn the user that the item doesn't exist, navigate back to
/// the resource's list view, then bump the global freshness token so the
/// now-missing record disappears from cached lists too.
pub struct DefaultFailurePolicy {
    notifier: Arc<dyn Notifier>,
    redirector: Arc<dyn Redirector>,
    refresh: Arc<dyn RefreshPort>,
}

impl DefaultFailurePolicy {
    pub fn new(
        notifier: Arc<dyn Notifier>,
        redirector: Arc<dyn Redirector>,
        refresh: Arc<dyn RefreshPort>,
    ) -> Self {
        Self {
            notifier,
            redirector,
            refresh,
        }
    }

    pub fn from_context(ctx: &AdminContext) -> Self {
        Self::new(
            ctx.notifier.clone(),
            ctx.redirector.clone(),
            ctx.refresh.clone(),
        )
    }
}

impl FailureHandler for DefaultFailurePolicy {
    fn on_failure(&self, resource: &str, error: &FetchError) {
        warn!(resource, %error, "show fetch failed, falling back to list view");
        self.notifier
            .notify(ITEM_DOESNT_EXIST_KEY, NotificationType::Warning);
        self.redirector.redirect(RedirectTarget::List, resource);
        self.refresh.refresh();
    }
}
