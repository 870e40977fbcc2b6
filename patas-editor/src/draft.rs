//! Working copy of a record under edit

use patas_client::PickedImage;
use shared::models::Entity;

/// A record's working copy
///
/// `base` is the record as last persisted, `None` for a record that does
/// not exist yet. `edited` accumulates the user's changes. A staged image
/// stays on the device until save commits it.
#[derive(Debug, Clone)]
pub struct Draft<E: Entity> {
    base: Option<E>,
    pub edited: E,
    staged_image: Option<PickedImage>,
}

impl<E: Entity> Draft<E> {
    /// Draft over an existing record
    pub fn from_record(record: E) -> Self {
        Self {
            base: Some(record.clone()),
            edited: record,
            staged_image: None,
        }
    }

    /// Draft for a record not yet persisted
    pub fn new_record() -> Self
    where
        E: Default,
    {
        Self {
            base: None,
            edited: E::default(),
            staged_image: None,
        }
    }

    /// The persisted state this draft started from
    pub fn base(&self) -> Option<&E> {
        self.base.as_ref()
    }

    pub fn stage_image(&mut self, image: PickedImage) {
        self.staged_image = Some(image);
    }

    pub fn staged_image(&self) -> Option<&PickedImage> {
        self.staged_image.as_ref()
    }

    pub fn clear_staged_image(&mut self) {
        self.staged_image = None;
    }

    /// Whether the working copy differs from the persisted state
    pub fn is_dirty(&self) -> bool
    where
        E: PartialEq,
    {
        self.staged_image.is_some() || self.base.as_ref() != Some(&self.edited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Animal;

    fn rex() -> Animal {
        Animal {
            id: Some("k1".into()),
            name: "Rex".into(),
            species: "Dog".into(),
            breed: "Mixed".into(),
            gender: "male".into(),
            ..Animal::default()
        }
    }

    #[test]
    fn fresh_draft_over_record_is_clean() {
        let draft = Draft::from_record(rex());
        assert!(!draft.is_dirty());
        assert_eq!(draft.base().unwrap().name, "Rex");
    }

    #[test]
    fn editing_marks_dirty() {
        let mut draft = Draft::from_record(rex());
        draft.edited.name = "Max".into();
        assert!(draft.is_dirty());
    }

    #[test]
    fn staged_image_marks_dirty() {
        let mut draft = Draft::from_record(rex());
        draft.stage_image(PickedImage::new("/tmp/photo.png"));
        assert!(draft.is_dirty());
        draft.clear_staged_image();
        assert!(!draft.is_dirty());
    }

    #[test]
    fn new_record_draft_is_dirty_from_the_start() {
        let draft = Draft::<Animal>::new_record();
        assert!(draft.base().is_none());
        assert!(draft.is_dirty());
    }
}
