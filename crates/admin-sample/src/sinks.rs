//! # Observability Sinks
//!
//! Demo implementations of the notification and redirect boundaries that
//! log through `tracing` instead of touching a UI, plus the subscriber
//! setup for the binary.

use admin_core::{NotificationType, Notifier, RedirectTarget, Redirector};
use tracing::{error, info, warn};

/// Notification sink that logs at the notification's own severity.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, key: &str, kind: NotificationType) {
        match kind {
            NotificationType::Info => info!(key, "notification"),
            NotificationType::Warning => warn!(key, "notification"),
            NotificationType::Error => error!(key, "notification"),
        }
    }
}

/// Redirect sink that logs the navigation request.
pub struct TracingRedirector;

impl Redirector for TracingRedirector {
    fn redirect(&self, target: RedirectTarget, resource: &str) {
        info!(%target, resource, "redirect requested");
    }
}

/// Initializes structured logging for the application.
///
/// Verbosity is controlled via `RUST_LOG`, e.g. `RUST_LOG=debug cargo run`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
