//! # In-Memory Record Store
//!
//! A sample data-access layer behind the [`RecordFetcher`] boundary. The
//! store is an actor: it owns a resource → id → record map and processes
//! requests sequentially off an mpsc channel, so no locking is needed.
//! [`StoreClient`] is the cheap-to-clone sender half.

use admin_core::{FetchError, Identifier, Record, RecordFetcher};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

type StoreResponse<T> = oneshot::Sender<Result<T, FetchError>>;

/// Requests the store actor understands.
#[derive(Debug)]
pub enum StoreRequest {
    GetOne {
        resource: String,
        id: Option<Identifier>,
        respond_to: StoreResponse<Record>,
    },
    Insert {
        resource: String,
        record: Record,
        respond_to: StoreResponse<Identifier>,
    },
    Remove {
        resource: String,
        id: Identifier,
        respond_to: StoreResponse<()>,
    },
}

/// The server half: owns the collections and the receiver.
pub struct RecordStore {
    receiver: mpsc::Receiver<StoreRequest>,
    collections: HashMap<String, HashMap<Identifier, Record>>,
    next_id: i64,
}

impl RecordStore {
    /// Create a store and its associated client.
    pub fn new(buffer_size: usize) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            collections: HashMap::new(),
            next_id: 1,
        };
        (store, StoreClient { sender })
    }

    /// Run the store's event loop until every client is dropped.
    pub async fn run(mut self) {
        info!("Record store started");

        while let Some(request) = self.receiver.recv().await {
            match request {
                StoreRequest::GetOne {
                    resource,
                    id,
                    respond_to,
                } => {
                    let result = self.get_one(&resource, id.as_ref());
                    let found = result.is_ok();
                    debug!(%resource, id = ?id, found, "GetOne");
                    let _ = respond_to.send(result);
                }
                StoreRequest::Insert {
                    resource,
                    record,
                    respond_to,
                } => {
                    let id = self.insert(&resource, record);
                    info!(%resource, %id, "Inserted");
                    let _ = respond_to.send(Ok(id));
                }
                StoreRequest::Remove {
                    resource,
                    id,
                    respond_to,
                } => {
                    let removed = self
                        .collections
                        .get_mut(&resource)
                        .and_then(|records| records.remove(&id));
                    if removed.is_some() {
                        info!(%resource, %id, "Removed");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(%resource, %id, "Not found");
                        let _ = respond_to.send(Err(FetchError::NotFound {
                            resource,
                            id: id.to_string(),
                        }));
                    }
                }
            }
        }

        info!(collections = self.collections.len(), "Record store shutdown");
    }

    fn get_one(&self, resource: &str, id: Option<&Identifier>) -> Result<Record, FetchError> {
        let Some(id) = id else {
            // An unresolved identifier reaches us untouched; answer it the
            // only way an id-keyed store can.
            warn!(resource, "GetOne without an identifier");
            return Err(FetchError::NotFound {
                resource: resource.to_string(),
                id: "-".to_string(),
            });
        };
        self.collections
            .get(resource)
            .and_then(|records| records.get(id))
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                resource: resource.to_string(),
                id: id.to_string(),
            })
    }

    fn insert(&mut self, resource: &str, record: Record) -> Identifier {
        let (id, record) = match record.id() {
            Some(id) => (id, record),
            None => {
                let id = Identifier::Number(self.next_id);
                self.next_id += 1;
                let record = record.with("id", serde_json::Value::from(&id));
                (id, record)
            }
        };
        self.collections
            .entry(resource.to_string())
            .or_default()
            .insert(id.clone(), record);
        id
    }
}

/// Cheap-to-clone client for the store actor.
#[derive(Debug, Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub async fn insert(&self, resource: &str, record: Record) -> Result<Identifier, FetchError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Insert {
                resource: resource.to_string(),
                record,
                respond_to,
            })
            .await
            .map_err(|_| FetchError::StoreClosed)?;
        response.await.map_err(|_| FetchError::StoreClosed)?
    }

    pub async fn remove(&self, resource: &str, id: Identifier) -> Result<(), FetchError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Remove {
                resource: resource.to_string(),
                id,
                respond_to,
            })
            .await
            .map_err(|_| FetchError::StoreClosed)?;
        response.await.map_err(|_| FetchError::StoreClosed)?
    }
}

#[async_trait]
impl RecordFetcher for StoreClient {
    async fn get_one(
        &self,
        resource: &str,
        id: Option<Identifier>,
    ) -> Result<Record, FetchError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::GetOne {
                resource: resource.to_string(),
                id,
                respond_to,
            })
            .await
            .map_err(|_| FetchError::StoreClosed)?;
        response.await.map_err(|_| FetchError::StoreClosed)?
    }
}
