//! # Collaborator Ports
//!
//! The controller coordinates cross-cutting UI side effects without owning
//! any of them. Each surrounding-application capability sits behind a small
//! trait: notifications, navigation, the global freshness signal, and the
//! label/translation lookups used for the page title.
//!
//! All ports are fire-and-forget from the controller's perspective; none of
//! them can fail back into it.

use crate::title::TitleArgs;
use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Severity attached to a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Warning,
    Error,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Info => "info",
            NotificationType::Warning => "warning",
            NotificationType::Error => "error",
        }
    }
}

impl Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Views a redirect can target within a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    List,
    Show,
    Edit,
}

impl RedirectTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            RedirectTarget::List => "list",
            RedirectTarget::Show => "show",
            RedirectTarget::Edit => "edit",
        }
    }
}

impl Display for RedirectTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sink for transient user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, key: &str, kind: NotificationType);
}

/// Sink for navigation requests.
pub trait Redirector: Send + Sync {
    fn redirect(&self, target: RedirectTarget, resource: &str);
}

/// The global freshness signal.
///
/// `refresh` broadcasts that cached collection data may be stale; `version`
/// is the monotonic token dependents compare to decide whether to
/// re-evaluate.
pub trait RefreshPort: Send + Sync {
    fn refresh(&self);
    fn version(&self) -> u64;
}

/// Resolves a resource name to its human-readable label.
pub trait LabelResolver: Send + Sync {
    fn label_for(&self, resource: &str, count: usize) -> String;
}

/// Renders a message key with template arguments.
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str, args: &TitleArgs<'_>) -> String;
}

/// Shared monotonic freshness counter.
///
/// Clones observe the same underlying counter, so any number of independent
/// controllers can watch one signal without coordination.
#[derive(Debug, Clone, Default)]
pub struct RefreshSignal(Arc<AtomicU64>);

impl RefreshSignal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RefreshPort for RefreshSignal {
    fn refresh(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    fn version(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_signal_is_monotonic_and_shared() {
        let signal = RefreshSignal::new();
        let observer = signal.clone();
        assert_eq!(observer.version(), 0);

        signal.refresh();
        signal.refresh();
        assert_eq!(observer.version(), 2);
    }
}
