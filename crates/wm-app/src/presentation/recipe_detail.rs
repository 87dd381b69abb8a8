use wm_core::Recipe;

/// Display helpers for a single recipe.
#[derive(Debug, Clone, Copy)]
pub struct RecipeDetail<'a> {
    recipe: &'a Recipe,
}

impl<'a> RecipeDetail<'a> {
    pub fn new(recipe: &'a Recipe) -> Self {
        Self { recipe }
    }

    pub fn name(&self) -> &'a str {
        &self.recipe.name
    }

    /// "Used 1 time" / "Used N times".
    pub fn usage_count_text(&self) -> String {
        match self.recipe.usage_count {
            1 => "Used 1 time".to_string(),
            n => format!("Used {n} times"),
        }
    }

    /// Whitespace-only notes count as absent.
    pub fn has_notes(&self) -> bool {
        self.notes_text().is_some()
    }

    pub fn notes_text(&self) -> Option<&'a str> {
        self.recipe
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    /// True when either the stored original or a thumbnail can be shown.
    pub fn has_image(&self) -> bool {
        self.recipe.image_ref.is_some() || self.has_thumbnail()
    }

    pub fn has_thumbnail(&self) -> bool {
        self.recipe.thumbnail.as_ref().is_some_and(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wm_core::{ImageRef, RecipeDraft, Thumbnail};

    fn recipe(draft: RecipeDraft) -> Recipe {
        Recipe::create(draft).unwrap()
    }

    #[test]
    fn test_usage_text_pluralizes() {
        let mut r = recipe(RecipeDraft::named("Soup"));
        assert_eq!(RecipeDetail::new(&r).usage_count_text(), "Used 0 times");
        r.record_usage();
        assert_eq!(RecipeDetail::new(&r).usage_count_text(), "Used 1 time");
        r.record_usage();
        assert_eq!(RecipeDetail::new(&r).usage_count_text(), "Used 2 times");
    }

    #[test]
    fn test_blank_notes_are_hidden() {
        let r = recipe(RecipeDraft::named("Soup").with_notes("  \n "));
        let detail = RecipeDetail::new(&r);
        assert!(!detail.has_notes());
        assert_eq!(detail.notes_text(), None);
    }

    #[test]
    fn test_notes_are_trimmed() {
        let r = recipe(RecipeDraft::named("Soup").with_notes("  salt to taste "));
        assert_eq!(RecipeDetail::new(&r).notes_text(), Some("salt to taste"));
    }

    #[test]
    fn test_image_flags() {
        let r = recipe(
            RecipeDraft::named("Soup")
                .with_thumbnail(Thumbnail::new(vec![1, 2]))
                .with_image_ref(ImageRef::new("img_0a1b2c3d.jpg")),
        );
        let detail = RecipeDetail::new(&r);
        assert!(detail.has_image());
        assert!(detail.has_thumbnail());

        let thumb_only = recipe(RecipeDraft::named("Tart").with_thumbnail(Thumbnail::new(vec![3])));
        assert!(RecipeDetail::new(&thumb_only).has_image());

        let plain = recipe(RecipeDraft::named("Bread"));
        assert!(!RecipeDetail::new(&plain).has_image());
        assert!(!RecipeDetail::new(&plain).has_thumbnail());
    }
}
