//! Shared types for the Patas record editor
//!
//! Common types used across the client and editor crates:
//! entity models, geo types, and the unified error system.

pub mod dates;
pub mod error;
pub mod geo;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use geo::{GeoPoint, MapRegion};
pub use models::{Entity, Geolocated, RawRecord};
