//! Raw record envelope and the entity traits

use crate::error::{AppError, AppResult};
use crate::geo::GeoPoint;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A schemaless document as the store sees it
///
/// `key` is the record's opaque key, stable for the record's lifetime.
/// `fields` is the document body, always a JSON object. The key is never
/// part of the body; it travels next to it, like a document id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub key: String,
    pub fields: Value,
}

impl RawRecord {
    pub fn new(key: impl Into<String>, fields: Value) -> Self {
        Self {
            key: key.into(),
            fields,
        }
    }

    /// Decode the document body into a typed entity
    ///
    /// The key is injected as the entity's `id`. Fields missing from the
    /// body fall back to their defaults; unknown fields are ignored.
    pub fn decode<E: Entity>(self) -> AppResult<E> {
        let mut fields = self.fields;
        let Some(map) = fields.as_object_mut() else {
            return Err(AppError::invalid_format(format!(
                "record {} body is not an object",
                self.key
            )));
        };
        map.insert("id".to_string(), Value::String(self.key.clone()));
        serde_json::from_value(fields).map_err(|e| {
            AppError::invalid_format(format!("record {} failed to decode: {}", self.key, e))
        })
    }
}

/// Serialize an entity into a document body, stripping the id
pub fn entity_fields<E: Entity>(entity: &E) -> AppResult<Value> {
    let mut value = serde_json::to_value(entity)
        .map_err(|e| AppError::internal(format!("entity serialization failed: {}", e)))?;
    if let Some(map) = value.as_object_mut() {
        map.remove("id");
    }
    Ok(value)
}

/// A typed record kind persisted in the store
///
/// One implementation per collection. `validate` is called before every
/// write; a record that fails validation never reaches the store.
pub trait Entity:
    Serialize + DeserializeOwned + Clone + std::fmt::Debug + Send + Sync + 'static
{
    /// Collection this entity kind lives in
    const COLLECTION: &'static str;

    /// Store key, `None` until first persisted
    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: String);

    /// Public URL of the record's image, empty when none
    fn image_url(&self) -> &str;
    fn set_image_url(&mut self, url: String);

    /// Display name, used to derive storage object names
    fn label(&self) -> &str;

    /// Check required fields and value ranges
    fn validate(&self) -> AppResult<()>;
}

/// Entities that carry a map coordinate
pub trait Geolocated {
    fn location(&self) -> Option<GeoPoint>;
    fn set_location(&mut self, point: GeoPoint);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Animal;
    use serde_json::json;

    #[test]
    fn test_decode_injects_key_as_id() {
        let raw = RawRecord::new(
            "abc123",
            json!({"name": "Rex", "species": "Dog", "breed": "Mutt", "gender": "Male"}),
        );
        let animal: Animal = raw.decode().unwrap();
        assert_eq!(animal.id.as_deref(), Some("abc123"));
        assert_eq!(animal.name, "Rex");
    }

    #[test]
    fn test_decode_tolerates_missing_and_unknown_fields() {
        let raw = RawRecord::new(
            "abc123",
            json!({"name": "Rex", "legacy_field": true}),
        );
        let animal: Animal = raw.decode().unwrap();
        assert_eq!(animal.name, "Rex");
        assert_eq!(animal.species, "");
        assert_eq!(animal.image_url, "");
    }

    #[test]
    fn test_decode_rejects_non_object_body() {
        let raw = RawRecord::new("abc123", json!("not an object"));
        assert!(raw.decode::<Animal>().is_err());
    }

    #[test]
    fn test_entity_fields_strips_id() {
        let mut animal = Animal::default();
        animal.name = "Rex".to_string();
        animal.set_id("abc123".to_string());

        let fields = entity_fields(&animal).unwrap();
        assert!(fields.get("id").is_none());
        assert_eq!(fields["name"], "Rex");
    }
}
