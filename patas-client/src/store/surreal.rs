//! SurrealDB-backed record store
//!
//! Keys are minted client side as hyphen-free UUIDs so a record's public
//! key never depends on the store's id generation. Ids come back from
//! queries as `<string>id` projections (`collection:key`), which
//! [`strip_key`] reduces to the bare key.

use async_trait::async_trait;
use serde_json::Value;
use shared::error::{AppError, AppResult};
use shared::models::RawRecord;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::opt::auth::Root;
use uuid::Uuid;

use crate::config::Config;
use crate::store::RecordStore;

/// Record store over a SurrealDB connection
///
/// The endpoint scheme picks the engine: `ws://` / `wss://` for a remote
/// server, `mem://` for the embedded in-memory engine used in tests.
#[derive(Clone)]
pub struct SurrealStore {
    db: Surreal<Any>,
}

impl SurrealStore {
    /// Connect, optionally sign in, and select namespace and database
    pub async fn connect(
        endpoint: &str,
        namespace: &str,
        database: &str,
        credentials: Option<(&str, &str)>,
    ) -> AppResult<Self> {
        let db = surrealdb::engine::any::connect(endpoint)
            .await
            .map_err(store_err)?;
        if let Some((username, password)) = credentials {
            db.signin(Root { username, password })
                .await
                .map_err(store_err)?;
        }
        db.use_ns(namespace)
            .use_db(database)
            .await
            .map_err(store_err)?;
        tracing::info!(endpoint, namespace, database, "Connected to record store");
        Ok(Self { db })
    }

    pub async fn from_config(config: &Config) -> AppResult<Self> {
        Self::connect(
            &config.store_endpoint,
            &config.store_namespace,
            &config.store_database,
            config.store_credentials(),
        )
        .await
    }
}

#[async_trait]
impl RecordStore for SurrealStore {
    async fn list(&self, collection: &str) -> AppResult<Vec<RawRecord>> {
        let mut response = self
            .db
            .query("SELECT *, <string>id AS id FROM type::table($tb)")
            .bind(("tb", collection.to_string()))
            .await
            .map_err(store_err)?;
        let rows: Vec<Value> = response.take(0).map_err(store_err)?;
        rows.into_iter()
            .map(|row| row_into_record(collection, row))
            .collect()
    }

    async fn get(&self, collection: &str, key: &str) -> AppResult<Option<RawRecord>> {
        let mut response = self
            .db
            .query("SELECT *, <string>id AS id FROM type::thing($tb, $key)")
            .bind(("tb", collection.to_string()))
            .bind(("key", key.to_string()))
            .await
            .map_err(store_err)?;
        let mut rows: Vec<Value> = response.take(0).map_err(store_err)?;
        match rows.pop() {
            Some(row) => Ok(Some(row_into_record(collection, row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, collection: &str, fields: Value) -> AppResult<RawRecord> {
        let key = Uuid::new_v4().simple().to_string();
        self.db
            .query("CREATE type::thing($tb, $key) CONTENT $data")
            .bind(("tb", collection.to_string()))
            .bind(("key", key.clone()))
            .bind(("data", fields))
            .await
            .map_err(store_err)?
            .check()
            .map_err(store_err)?;
        // Re-fetch so the caller sees exactly what the store persisted
        self.get(collection, &key)
            .await?
            .ok_or_else(|| AppError::internal("created record did not come back"))
    }

    async fn update(&self, collection: &str, key: &str, fields: Value) -> AppResult<RawRecord> {
        let mut response = self
            .db
            .query("UPDATE type::thing($tb, $key) MERGE $data")
            .bind(("tb", collection.to_string()))
            .bind(("key", key.to_string()))
            .bind(("data", fields))
            .await
            .map_err(store_err)?;
        // UPDATE touches nothing when the record is gone
        let rows: Vec<Value> = response.take(0).map_err(store_err)?;
        if rows.is_empty() {
            return Err(AppError::not_found(format!("{collection} record {key}")));
        }
        self.get(collection, key)
            .await?
            .ok_or_else(|| AppError::internal("updated record did not come back"))
    }

    async fn delete(&self, collection: &str, key: &str) -> AppResult<()> {
        let mut response = self
            .db
            .query("DELETE type::thing($tb, $key) RETURN BEFORE")
            .bind(("tb", collection.to_string()))
            .bind(("key", key.to_string()))
            .await
            .map_err(store_err)?;
        let rows: Vec<Value> = response.take(0).map_err(store_err)?;
        if rows.is_empty() {
            return Err(AppError::not_found(format!("{collection} record {key}")));
        }
        Ok(())
    }
}

fn store_err(err: surrealdb::Error) -> AppError {
    AppError::store_unavailable(err.to_string())
}

fn row_into_record(collection: &str, mut row: Value) -> AppResult<RawRecord> {
    let Some(map) = row.as_object_mut() else {
        return Err(AppError::internal("store returned a non-object row"));
    };
    let id = map
        .remove("id")
        .and_then(|v| v.as_str().map(|s| s.to_string()))
        .ok_or_else(|| AppError::internal("store row has no id"))?;
    Ok(RawRecord::new(strip_key(collection, &id), row))
}

/// `animal:⟨abc…⟩` -> `abc…`
///
/// SurrealDB brackets ids that are not plain identifiers; hyphen-free
/// UUIDs starting with a digit fall in that bucket.
fn strip_key(collection: &str, raw: &str) -> String {
    let rest = raw
        .strip_prefix(collection)
        .and_then(|r| r.strip_prefix(':'))
        .unwrap_or(raw);
    rest.trim_start_matches('⟨')
        .trim_end_matches('⟩')
        .to_string()
}
