//! Fundraising and adoption event model

use crate::error::{AppError, AppResult};
use crate::models::Entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled NGO event (adoption fair, fundraiser, vaccination drive)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub venue: String,
    pub image_url: String,
}

impl Entity for EventItem {
    const COLLECTION: &'static str = "event";

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
        if self.venue.trim().is_empty() {
            return Err(AppError::required_field("venue"));
        }
        if self.date.is_none() {
            return Err(AppError::required_field("date"));
        }
        Ok(())
    }
}
