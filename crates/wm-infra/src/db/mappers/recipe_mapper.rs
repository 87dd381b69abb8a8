use anyhow::{Context, Result};
use wm_core::{ImageRef, Recipe, RecipeId, Thumbnail};

use crate::db::models::{NewRecipeRow, RecipeRow};
use crate::db::ports::{InsertMapper, RowMapper};

pub struct RecipeRowMapper;

impl InsertMapper<Recipe, NewRecipeRow> for RecipeRowMapper {
    fn to_row(&self, domain: &Recipe) -> Result<NewRecipeRow> {
        Ok(NewRecipeRow {
            id: domain.id.as_str().to_string(),
            name: domain.name.clone(),
            notes: domain.notes.clone(),
            usage_count: i64::from(domain.usage_count),
            thumbnail: domain.thumbnail.as_ref().map(|t| t.as_bytes().to_vec()),
            image_filename: domain.image_ref.as_ref().map(|r| r.as_str().to_string()),
        })
    }
}

impl RowMapper<RecipeRow, Recipe> for RecipeRowMapper {
    fn to_domain(&self, row: &RecipeRow) -> Result<Recipe> {
        let usage_count = u32::try_from(row.usage_count).with_context(|| {
            format!(
                "usage count {} of recipe {} out of range",
                row.usage_count, row.id
            )
        })?;

        Ok(Recipe::restore(
            RecipeId::from(row.id.clone()),
            row.name.clone(),
            row.notes.clone(),
            usage_count,
            row.thumbnail.clone().map(Thumbnail::new),
            row.image_filename.clone().map(ImageRef::from),
        ))
    }
}
