//! Record Store Gateway
//!
//! CRUD against the external document store. The dyn-safe [`RecordStore`]
//! trait works at the [`RawRecord`] level so the editor can be driven by
//! test doubles; [`RecordStoreExt`] layers the typed entity operations on
//! top of any implementation.
//!
//! Reads that fail to decode are skipped with a warning rather than
//! failing the whole list. Writes validate before leaving the process.

mod surreal;

pub use surreal::SurrealStore;

use async_trait::async_trait;
use serde_json::Value;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Entity, RawRecord, entity_fields};

/// Schemaless CRUD against one store
///
/// Implementations map their transport errors to `StoreUnavailable` and
/// report a vanished key on update/delete as `NotFound`. An empty list is
/// a valid result, distinct from failure.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch every record of a collection
    async fn list(&self, collection: &str) -> AppResult<Vec<RawRecord>>;

    /// Fetch one record by key
    async fn get(&self, collection: &str, key: &str) -> AppResult<Option<RawRecord>>;

    /// Persist a new record; the store mints the key
    async fn create(&self, collection: &str, fields: Value) -> AppResult<RawRecord>;

    /// Merge fields into an existing record
    async fn update(&self, collection: &str, key: &str, fields: Value) -> AppResult<RawRecord>;

    /// Remove a record
    async fn delete(&self, collection: &str, key: &str) -> AppResult<()>;
}

/// Typed entity operations over any [`RecordStore`]
#[allow(async_fn_in_trait)]
pub trait RecordStoreExt: RecordStore {
    /// List a collection as typed entities, skipping undecodable records
    async fn list_all<E: Entity>(&self) -> AppResult<Vec<E>> {
        let raws = self.list(E::COLLECTION).await?;
        let mut records = Vec::with_capacity(raws.len());
        for raw in raws {
            let key = raw.key.clone();
            match raw.decode::<E>() {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!(
                        collection = E::COLLECTION,
                        key = %key,
                        error = %err,
                        "Skipping undecodable record"
                    );
                }
            }
        }
        Ok(records)
    }

    /// Fetch one typed entity by key
    async fn get_record<E: Entity>(&self, key: &str) -> AppResult<Option<E>> {
        match self.get(E::COLLECTION, key).await? {
            Some(raw) => Ok(Some(raw.decode()?)),
            None => Ok(None),
        }
    }

    /// Validate and persist a new entity, returning it with its key set
    async fn create_record<E: Entity>(&self, record: &E) -> AppResult<E> {
        record.validate()?;
        let raw = self.create(E::COLLECTION, entity_fields(record)?).await?;
        raw.decode()
    }

    /// Validate and persist changes to an existing entity
    async fn update_record<E: Entity>(&self, record: &E) -> AppResult<E> {
        record.validate()?;
        let key = record.id().ok_or_else(|| {
            AppError::with_message(ErrorCode::InvalidRequest, "record has no key yet")
        })?;
        let raw = self
            .update(E::COLLECTION, key, entity_fields(record)?)
            .await?;
        raw.decode()
    }

    /// Remove an entity's record by key
    async fn delete_record<E: Entity>(&self, key: &str) -> AppResult<()> {
        self.delete(E::COLLECTION, key).await
    }
}

impl<S: RecordStore + ?Sized> RecordStoreExt for S {}
