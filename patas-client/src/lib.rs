//! Service gateways for the Patas record editor
//!
//! Explicitly constructed clients for the three hosted services the app
//! talks to: the document store ([`store`]), object storage ([`storage`])
//! and authentication ([`auth`]), plus the device media-picker seam
//! ([`picker`]), runtime configuration and logging bootstrap.
//!
//! Nothing in here is a global. Hosts build clients from a [`Config`] at
//! startup and inject them where they are needed.

pub mod auth;
pub mod config;
pub mod logging;
pub mod picker;
pub mod storage;
pub mod store;

// Re-exports
pub use auth::{AuthClient, AuthSession};
pub use config::Config;
pub use picker::{MediaPicker, PickedImage};
pub use storage::{MediaStorage, S3Storage, object_key};
pub use store::{RecordStore, RecordStoreExt, SurrealStore};
