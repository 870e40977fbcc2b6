//! Editor state machine
//!
//! One controller drives one collection's editing surface. It is Idle
//! over the list, Viewing an open record, Editing a draft, or Saving
//! while a commit is in flight. Every operation checks state first and
//! fails with a typed error instead of panicking, so a host UI can wire
//! buttons straight to these methods.
//!
//! A failed save returns to Editing with the draft intact, staged image
//! included. Nothing the user typed is lost.

use std::sync::Arc;

use patas_client::{RecordStore, RecordStoreExt};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::geo::GeoPoint;
use shared::models::{Entity, Geolocated};

use crate::draft::Draft;
use crate::geo_picker::GeoPicker;
use crate::stager::AssetStager;

/// Where the editor is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Over the list, nothing open
    Idle,
    /// A record is open read-only
    Viewing,
    /// A draft is accumulating changes
    Editing,
    /// A commit is in flight; everything else is rejected
    Saving,
}

/// Drives list, view, edit, save and delete for one collection
pub struct EditorController<E: Entity> {
    store: Arc<dyn RecordStore>,
    stager: AssetStager,
    default_center: GeoPoint,
    state: EditorState,
    draft: Option<Draft<E>>,
    records: Vec<E>,
}

impl<E: Entity> EditorController<E> {
    pub fn new(store: Arc<dyn RecordStore>, stager: AssetStager, default_center: GeoPoint) -> Self {
        Self {
            store,
            stager,
            default_center,
            state: EditorState::Idle,
            draft: None,
            records: Vec::new(),
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// The most recently fetched list
    pub fn records(&self) -> &[E] {
        &self.records
    }

    pub fn draft(&self) -> Option<&Draft<E>> {
        self.draft.as_ref()
    }

    /// Re-fetch the collection from the store
    ///
    /// The previous list stays available when the fetch fails.
    pub async fn refresh(&mut self) -> AppResult<()> {
        self.records = self.store.list_all::<E>().await?;
        Ok(())
    }

    /// Open a record read-only
    ///
    /// A key that no longer exists fails with `NotFound` and leaves the
    /// editor where it was.
    pub async fn open(&mut self, key: &str) -> AppResult<()> {
        match self.state {
            EditorState::Saving => return Err(AppError::busy()),
            EditorState::Idle | EditorState::Viewing => {}
            EditorState::Editing => {
                return Err(AppError::with_message(
                    ErrorCode::EditorBusy,
                    "finish or cancel the current edit first",
                ));
            }
        }
        let record = self
            .store
            .get_record::<E>(key)
            .await?
            .ok_or_else(|| AppError::not_found(format!("{} record {key}", E::COLLECTION)))?;
        self.draft = Some(Draft::from_record(record));
        self.state = EditorState::Viewing;
        Ok(())
    }

    /// Start a draft for a record that does not exist yet
    pub fn open_new(&mut self) -> AppResult<()>
    where
        E: Default,
    {
        match self.state {
            EditorState::Saving => return Err(AppError::busy()),
            EditorState::Idle => {}
            _ => {
                return Err(AppError::with_message(
                    ErrorCode::EditorBusy,
                    "close the open record first",
                ));
            }
        }
        self.draft = Some(Draft::new_record());
        self.state = EditorState::Editing;
        Ok(())
    }

    /// Switch the open record from read-only to editable
    pub fn begin_edit(&mut self) -> AppResult<()> {
        match self.state {
            EditorState::Saving => Err(AppError::busy()),
            EditorState::Viewing => {
                self.state = EditorState::Editing;
                Ok(())
            }
            _ => Err(AppError::new(ErrorCode::NotViewing)),
        }
    }

    /// Mutate the draft; the store is not touched
    pub fn edit(&mut self, f: impl FnOnce(&mut E)) -> AppResult<()> {
        if self.state != EditorState::Editing {
            return Err(AppError::new(ErrorCode::NotEditing));
        }
        let Some(draft) = self.draft.as_mut() else {
            return Err(AppError::no_open_record());
        };
        f(&mut draft.edited);
        Ok(())
    }

    /// Ask the device for an image and stage it on the draft
    ///
    /// Returns `false` when the user cancelled the dialog. Nothing is
    /// uploaded until save.
    pub async fn pick_image(&mut self) -> AppResult<bool> {
        if self.state != EditorState::Editing {
            return Err(AppError::new(ErrorCode::NotEditing));
        }
        let Some(image) = self.stager.pick().await else {
            return Ok(false);
        };
        let Some(draft) = self.draft.as_mut() else {
            return Err(AppError::no_open_record());
        };
        draft.stage_image(image);
        Ok(true)
    }

    /// Drop the draft and return to the list
    pub fn cancel(&mut self) -> AppResult<()> {
        match self.state {
            EditorState::Saving => Err(AppError::busy()),
            EditorState::Viewing | EditorState::Editing => {
                self.draft = None;
                self.state = EditorState::Idle;
                Ok(())
            }
            EditorState::Idle => Err(AppError::no_open_record()),
        }
    }

    /// Validate, commit the staged image, and write the draft to the store
    ///
    /// Validation failure aborts before anything leaves the process.
    /// Upload or store failure returns to Editing with the draft, staged
    /// image included, ready for a retry. On success the editor goes
    /// Idle and re-fetches the list; a refresh failure at that point is
    /// returned, but the write has already landed.
    pub async fn save(&mut self) -> AppResult<()> {
        match self.state {
            EditorState::Saving => return Err(AppError::busy()),
            EditorState::Editing => {}
            _ => return Err(AppError::new(ErrorCode::NotEditing)),
        }
        let draft = self.draft.as_ref().ok_or_else(AppError::no_open_record)?;
        draft.edited.validate()?;

        self.state = EditorState::Saving;
        match self.commit().await {
            Ok(()) => {
                self.draft = None;
                self.state = EditorState::Idle;
                self.refresh().await
            }
            Err(err) => {
                self.state = EditorState::Editing;
                if err.code == ErrorCode::NotFound {
                    // The record vanished under us; let the list show that
                    let _ = self.refresh().await;
                }
                Err(err)
            }
        }
    }

    async fn commit(&mut self) -> AppResult<()> {
        let Some(draft) = self.draft.as_mut() else {
            return Err(AppError::no_open_record());
        };

        let previous_url = draft
            .base()
            .map(|base| base.image_url().to_string())
            .unwrap_or_default();
        let image_changed = draft.staged_image().is_some();

        let resolved = self
            .stager
            .resolve(
                draft.staged_image(),
                draft.edited.image_url(),
                E::COLLECTION,
                draft.edited.label(),
            )
            .await?;
        draft.edited.set_image_url(resolved);

        let saved = match draft.edited.id() {
            Some(_) => self.store.update_record(&draft.edited).await?,
            None => self.store.create_record(&draft.edited).await?,
        };
        tracing::info!(
            collection = E::COLLECTION,
            key = saved.id().unwrap_or(""),
            "Record saved"
        );

        // Only after the write landed is the replaced blob fair game
        if image_changed && !previous_url.is_empty() && previous_url != saved.image_url() {
            self.stager.discard_previous(&previous_url).await;
        }
        Ok(())
    }

    /// Delete the open record
    ///
    /// A record already gone from the store counts as deleted; any other
    /// failure leaves the record open.
    pub async fn delete(&mut self) -> AppResult<()> {
        match self.state {
            EditorState::Saving => return Err(AppError::busy()),
            EditorState::Viewing => {}
            EditorState::Idle => return Err(AppError::no_open_record()),
            EditorState::Editing => return Err(AppError::new(ErrorCode::NotViewing)),
        }
        let key = self
            .draft
            .as_ref()
            .and_then(|draft| draft.edited.id())
            .ok_or_else(AppError::no_open_record)?
            .to_string();

        match self.store.delete_record::<E>(&key).await {
            Ok(()) => {}
            Err(err) if err.code == ErrorCode::NotFound => {
                tracing::debug!(
                    collection = E::COLLECTION,
                    key = %key,
                    "Record was already gone"
                );
            }
            Err(err) => return Err(err),
        }
        tracing::info!(collection = E::COLLECTION, key = %key, "Record deleted");
        self.draft = None;
        self.state = EditorState::Idle;
        self.refresh().await
    }
}

impl<E: Entity + Geolocated> EditorController<E> {
    /// Start a map session seeded from the draft's location
    pub fn geo_picker(&self) -> AppResult<GeoPicker> {
        let draft = self.draft.as_ref().ok_or_else(AppError::no_open_record)?;
        Ok(GeoPicker::seed(draft.edited.location(), self.default_center))
    }

    /// Set the draft's coordinate, as committed from a map session
    pub fn set_location(&mut self, latitude: f64, longitude: f64) -> AppResult<()> {
        if self.state != EditorState::Editing {
            return Err(AppError::new(ErrorCode::NotEditing));
        }
        let point = GeoPoint::checked(latitude, longitude)?;
        let Some(draft) = self.draft.as_mut() else {
            return Err(AppError::no_open_record());
        };
        draft.edited.set_location(point);
        Ok(())
    }
}
