use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::{RecipeError, Thumbnail};
use crate::ids::{ImageRef, RecipeId};

/// A saved recipe.
///
/// Equality and hashing use the identity only, so two snapshots of the same
/// recipe taken before and after an edit compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub notes: Option<String>,
    /// Number of generated menus this recipe was selected into.
    pub usage_count: u32,
    pub thumbnail: Option<Thumbnail>,
    pub image_ref: Option<ImageRef>,
}

/// User-editable recipe fields, as submitted for creation or update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub name: String,
    pub notes: Option<String>,
    pub thumbnail: Option<Thumbnail>,
    pub image_ref: Option<ImageRef>,
}

impl RecipeDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: Thumbnail) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    pub fn with_image_ref(mut self, image_ref: ImageRef) -> Self {
        self.image_ref = Some(image_ref);
        self
    }
}

/// Trim a recipe name and reject it when nothing is left.
pub fn validate_name(name: &str) -> Result<String, RecipeError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RecipeError::EmptyName);
    }
    Ok(trimmed.to_string())
}

impl Recipe {
    /// Create a brand-new recipe with a fresh id and a zero usage count.
    pub fn create(draft: RecipeDraft) -> Result<Self, RecipeError> {
        let name = validate_name(&draft.name)?;
        Ok(Self {
            id: RecipeId::new(),
            name,
            notes: draft.notes,
            usage_count: 0,
            thumbnail: draft.thumbnail,
            image_ref: draft.image_ref,
        })
    }

    /// Rebuild a recipe from stored values. No validation is performed.
    pub fn restore(
        id: RecipeId,
        name: String,
        notes: Option<String>,
        usage_count: u32,
        thumbnail: Option<Thumbnail>,
        image_ref: Option<ImageRef>,
    ) -> Self {
        Self {
            id,
            name,
            notes,
            usage_count,
            thumbnail,
            image_ref,
        }
    }

    /// Overwrite the editable fields. Identity and usage count are untouched.
    pub fn apply(&mut self, draft: RecipeDraft) -> Result<(), RecipeError> {
        self.name = validate_name(&draft.name)?;
        self.notes = draft.notes;
        self.thumbnail = draft.thumbnail;
        self.image_ref = draft.image_ref;
        Ok(())
    }

    pub fn record_usage(&mut self) {
        self.usage_count = self.usage_count.saturating_add(1);
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Recipe {}

impl Hash for Recipe {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
