//! Demo wiring: one show controller against the in-memory record store.
//!
//! Shows the full lifecycle — a successful show, a refetch, and the default
//! failure fallback after the record disappears. Run with
//! `RUST_LOG=info cargo run -p admin-sample`.

use admin_core::{
    AdminContext, Identifier, Record, RefreshSignal, RouteParams, ShowController, ShowProps,
};
use admin_sample::i18n::{EnglishTranslator, StaticLabels};
use admin_sample::sinks::{setup_tracing, TracingNotifier, TracingRedirector};
use admin_sample::store::RecordStore;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let (store, client) = RecordStore::new(32);
    tokio::spawn(store.run());

    client
        .insert(
            "books",
            Record::new()
                .with("id", "42")
                .with("title", "The Left Hand of Darkness"),
        )
        .await
        .map_err(|e| e.to_string())?;

    let ctx = AdminContext {
        fetcher: Arc::new(client.clone()),
        notifier: Arc::new(TracingNotifier),
        redirector: Arc::new(TracingRedirector),
        labels: Arc::new(StaticLabels::new().with("books", "Book", "Books")),
        translator: Arc::new(EnglishTranslator::new()),
        refresh: Arc::new(RefreshSignal::new()),
        default_resource: Some("books".to_string()),
    };

    let mut controller = ShowController::new(
        &ctx,
        ShowProps::default(),
        RouteParams {
            id: Some("42".to_string()),
        },
    )
    .map_err(|e| e.to_string())?;

    controller.next_transition().await;
    let result = controller.result();
    info!(title = %result.title, loaded = result.loaded, "show page ready");

    // Re-fetch on demand; same record, same outcome.
    result.refetch.request();
    controller.next_transition().await;
    controller.next_transition().await;
    info!(version = controller.result().version, "after refetch");

    // Remove the record and refetch: the default failure policy notifies,
    // redirects to the list and bumps the freshness token.
    client
        .remove("books", Identifier::from("42"))
        .await
        .map_err(|e| e.to_string())?;
    controller.result().refetch.request();
    controller.next_transition().await;
    controller.next_transition().await;

    let result = controller.result();
    info!(
        error = ?result.error,
        version = result.version,
        "after the record disappeared"
    );

    Ok(())
}
