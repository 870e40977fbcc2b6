//! Donation method model

use crate::error::{AppError, AppResult};
use crate::models::Entity;
use serde::{Deserialize, Serialize};

/// A way to donate to the NGO
///
/// The description holds the bank or PIX instructions; the image is the
/// payment QR code.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DonationMethod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub image_url: String,
}

impl Entity for DonationMethod {
    const COLLECTION: &'static str = "donation_method";

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
        if self.description.trim().is_empty() {
            return Err(AppError::required_field("description"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let mut method = DonationMethod {
            name: "PIX".to_string(),
            description: "Key: donate@patas.org".to_string(),
            ..DonationMethod::default()
        };
        assert!(method.validate().is_ok());

        method.description = String::new();
        assert!(method.validate().is_err());
    }
}
