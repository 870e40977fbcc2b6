//! Entity models
//!
//! The store itself is schemaless; typing lives here, at the client
//! boundary. [`RawRecord`] is the wire shape, the entity structs are the
//! typed views, and [`Entity::validate`] gates every write.

pub mod animal;
pub mod donation_method;
pub mod event;
pub mod record;
pub mod stray_report;
pub mod supply_item;

// Re-exports
pub use animal::{AdoptionStatus, Animal, AnimalSize};
pub use donation_method::DonationMethod;
pub use event::EventItem;
pub use record::{Entity, Geolocated, RawRecord, entity_fields};
pub use stray_report::StrayReport;
pub use supply_item::{SupplyCategory, SupplyItem};
