//! Supply inventory model

use crate::dates;
use crate::error::{AppError, AppResult};
use crate::models::Entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inventory category
///
/// `Uncategorized` is the read-side bucket for legacy documents that
/// predate the category field; validation refuses to save it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplyCategory {
    Food,
    Medication,
    Toys,
    Hygiene,
    Accessories,
    #[default]
    Uncategorized,
}

/// A donated supply item tracked in inventory
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplyItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub category: SupplyCategory,
    pub quantity: u32,
    pub expires_on: Option<NaiveDate>,
    pub description: String,
    pub image_url: String,
}

impl Entity for SupplyItem {
    const COLLECTION: &'static str = "supply_item";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn image_url(&self) -> &str {
        &self.image_url
    }

    fn set_image_url(&mut self, url: String) {
        self.image_url = url;
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::required_field("name"));
        }
        if self.category == SupplyCategory::Uncategorized {
            return Err(AppError::required_field("category"));
        }
        if self.quantity == 0 {
            return Err(AppError::out_of_range("quantity must be at least 1"));
        }
        match self.expires_on {
            None => Err(AppError::required_field("expires_on")),
            Some(date) if !dates::is_future(date) => {
                Err(AppError::out_of_range("expiry date must be in the future"))
            }
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::{Duration, Utc};

    fn valid_item() -> SupplyItem {
        SupplyItem {
            name: "Dry food 10kg".to_string(),
            category: SupplyCategory::Food,
            quantity: 4,
            expires_on: Some(Utc::now().date_naive() + Duration::days(90)),
            ..SupplyItem::default()
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid_item().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_quantity() {
        let mut item = valid_item();
        item.quantity = 0;
        let err = item.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_validate_requires_future_expiry() {
        let mut item = valid_item();
        item.expires_on = Some(Utc::now().date_naive());
        assert!(item.validate().is_err());

        item.expires_on = Some(Utc::now().date_naive() - Duration::days(1));
        assert!(item.validate().is_err());

        item.expires_on = None;
        let err = item.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_legacy_documents_decode_as_uncategorized() {
        let item: SupplyItem = serde_json::from_str(r#"{"name":"Old stock"}"#).unwrap();
        assert_eq!(item.category, SupplyCategory::Uncategorized);
        assert!(item.validate().is_err());
    }
}
