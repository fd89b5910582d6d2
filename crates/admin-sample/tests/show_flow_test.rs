//! End-to-end show flows: a real controller over the real store actor, with
//! recording sinks standing in for the UI.

use admin_core::mock::{EffectLog, RecordingNotifier, RecordingRedirector, RecordingRefresh, SideEffect};
use admin_core::{
    AdminContext, FetchStatus, Identifier, NotificationType, Record, RedirectTarget, RouteParams,
    ShowController, ShowProps, ITEM_DOESNT_EXIST_KEY,
};
use admin_sample::i18n::{EnglishTranslator, StaticLabels};
use admin_sample::store::{RecordStore, StoreClient};
use std::sync::Arc;

fn context(client: StoreClient, log: &EffectLog) -> AdminContext {
    AdminContext {
        fetcher: Arc::new(client),
        notifier: Arc::new(RecordingNotifier::new(log.clone())),
        redirector: Arc::new(RecordingRedirector::new(log.clone())),
        labels: Arc::new(StaticLabels::new().with("books", "Book", "Books")),
        translator: Arc::new(EnglishTranslator::new()),
        refresh: Arc::new(RecordingRefresh::new(log.clone())),
        default_resource: Some("books".to_string()),
    }
}

#[tokio::test]
async fn show_page_loads_a_stored_record() {
    let (store, client) = RecordStore::new(8);
    tokio::spawn(store.run());
    client
        .insert("books", Record::new().with("id", 42).with("title", "Dune"))
        .await
        .unwrap();

    let log = EffectLog::new();
    let ctx = context(client, &log);

    let props = ShowProps {
        id: Some(Identifier::Number(42)),
        ..Default::default()
    };
    let mut controller = ShowController::new(&ctx, props, RouteParams::default()).unwrap();
    assert_eq!(controller.next_transition().await, FetchStatus::Success);

    let result = controller.result();
    assert!(result.loaded);
    assert_eq!(result.title, "Show Book 42");
    assert_eq!(
        result.record.unwrap().get("title"),
        Some(&serde_json::Value::from("Dune"))
    );
    assert!(log.is_empty());
}

#[tokio::test]
async fn missing_record_triggers_the_fallback_sequence() {
    let (store, client) = RecordStore::new(8);
    tokio::spawn(store.run());

    let log = EffectLog::new();
    let ctx = context(client, &log);

    let props = ShowProps {
        id: Some(Identifier::Number(42)),
        ..Default::default()
    };
    let mut controller = ShowController::new(&ctx, props, RouteParams::default()).unwrap();
    let version_before = controller.result().version;

    assert_eq!(controller.next_transition().await, FetchStatus::Error);
    assert_eq!(
        log.snapshot(),
        vec![
            SideEffect::Notify {
                key: ITEM_DOESNT_EXIST_KEY.to_string(),
                kind: NotificationType::Warning,
            },
            SideEffect::Redirect {
                target: RedirectTarget::List,
                resource: "books".to_string(),
            },
            SideEffect::Refresh,
        ]
    );
    assert_eq!(controller.result().version, version_before + 1);
}

#[tokio::test]
async fn record_removed_between_show_and_refetch() {
    let (store, client) = RecordStore::new(8);
    tokio::spawn(store.run());
    client
        .insert("books", Record::new().with("id", 7).with("title", "Ubik"))
        .await
        .unwrap();

    let log = EffectLog::new();
    let ctx = context(client.clone(), &log);

    let props = ShowProps {
        id: Some(Identifier::Number(7)),
        ..Default::default()
    };
    let mut controller = ShowController::new(&ctx, props, RouteParams::default()).unwrap();
    assert_eq!(controller.next_transition().await, FetchStatus::Success);
    assert!(log.is_empty());

    client.remove("books", Identifier::Number(7)).await.unwrap();

    controller.result().refetch.request();
    assert_eq!(controller.next_transition().await, FetchStatus::Loading);
    assert_eq!(controller.next_transition().await, FetchStatus::Error);

    // One failure, one fallback sequence.
    assert_eq!(log.len(), 3);
    let result = controller.result();
    assert!(!result.loaded);
    assert!(result.record.is_none());
}

#[tokio::test]
async fn route_bound_identifier_reaches_the_store_decoded() {
    let (store, client) = RecordStore::new(8);
    tokio::spawn(store.run());
    client
        .insert(
            "books",
            Record::new().with("id", " Title ").with("title", "Spaces"),
        )
        .await
        .unwrap();

    let log = EffectLog::new();
    let ctx = context(client, &log);

    let route = RouteParams {
        id: Some("%20Title%20".to_string()),
    };
    let mut controller = ShowController::new(&ctx, ShowProps::default(), route).unwrap();
    assert_eq!(controller.next_transition().await, FetchStatus::Success);

    let record = controller.result().record.unwrap();
    assert_eq!(record.id(), Some(Identifier::from(" Title ")));
}
