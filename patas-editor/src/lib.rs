//! Record editing core
//!
//! Everything a host UI needs to list, view, edit and delete records:
//! a working-copy [`Draft`] over a persisted record, an [`AssetStager`]
//! that turns a locally picked image into an uploaded URL at save time,
//! a [`GeoPicker`] for map-driven coordinate selection, and the
//! [`EditorController`] state machine tying them together.
//!
//! The controller owns no I/O of its own. Store, storage and picker are
//! injected as trait objects, so the whole flow runs under test against
//! in-memory doubles.

pub mod controller;
pub mod draft;
pub mod geo_picker;
pub mod stager;

pub use controller::{EditorController, EditorState};
pub use draft::Draft;
pub use geo_picker::GeoPicker;
pub use stager::AssetStager;
