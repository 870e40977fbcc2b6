//! Shelter animal model

use crate::error::{AppError, AppResult};
use crate::models::Entity;
use serde::{Deserialize, Serialize};

/// Size bracket shown on adoption listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Adoption pipeline status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdoptionStatus {
    #[default]
    Available,
    UnderTreatment,
    Adopted,
}

/// An animal in the shelter registry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Animal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub gender: String,
    pub age_years: u32,
    pub vaccinated: bool,
    pub neutered: bool,
    pub size: AnimalSize,
    pub adoption_status: AdoptionStatus,
    pub description: String,
    pub image_url: String,
}

impl Entity for Animal {
    const COLLECTION: &'static str = "animal";

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
        if self.species.trim().is_empty() {
            return Err(AppError::required_field("species"));
        }
        if self.breed.trim().is_empty() {
            return Err(AppError::required_field("breed"));
        }
        if self.gender.trim().is_empty() {
            return Err(AppError::required_field("gender"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn valid_animal() -> Animal {
        Animal {
            name: "Rex".to_string(),
            species: "Dog".to_string(),
            breed: "Mutt".to_string(),
            gender: "Male".to_string(),
            age_years: 3,
            vaccinated: true,
            ..Animal::default()
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid_animal().validate().is_ok());
    }

    #[test]
    fn test_validate_requires_core_fields() {
        let mut animal = valid_animal();
        animal.name = "  ".to_string();
        let err = animal.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let mut animal = valid_animal();
        animal.species = String::new();
        assert!(animal.validate().is_err());

        let mut animal = valid_animal();
        animal.gender = String::new();
        assert!(animal.validate().is_err());
    }

    #[test]
    fn test_serde_enum_wire_values() {
        let animal = Animal {
            size: AnimalSize::Large,
            adoption_status: AdoptionStatus::UnderTreatment,
            ..valid_animal()
        };
        let json = serde_json::to_value(&animal).unwrap();
        assert_eq!(json["size"], "large");
        assert_eq!(json["adoption_status"], "under_treatment");
    }

    #[test]
    fn test_missing_enum_fields_fall_back() {
        let animal: Animal = serde_json::from_str(r#"{"name":"Rex"}"#).unwrap();
        assert_eq!(animal.size, AnimalSize::Medium);
        assert_eq!(animal.adoption_status, AdoptionStatus::Available);
        assert_eq!(animal.age_years, 0);
        assert!(!animal.vaccinated);
    }
}
