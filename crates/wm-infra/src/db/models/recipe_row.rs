use diesel::prelude::*;

use crate::db::schema::recipes;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = recipes)]
pub struct RecipeRow {
    pub id: String,
    pub name: String,
    pub notes: Option<String>,
    pub usage_count: i64,
    pub thumbnail: Option<Vec<u8>>,
    pub image_filename: Option<String>,
}

/// Full column set written on insert and on update.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = recipes)]
#[diesel(treat_none_as_null = true)]
pub struct NewRecipeRow {
    pub id: String,
    pub name: String,
    pub notes: Option<String>,
    pub usage_count: i64,
    pub thumbnail: Option<Vec<u8>>,
    pub image_filename: Option<String>,
}
