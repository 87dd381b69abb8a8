use diesel::prelude::*;

use crate::db::schema::{menu_selections, menus};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = menus)]
pub struct MenuRow {
    pub id: String,
    pub generated_at_ms: i64,
    /// JSON array of day labels.
    pub days: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = menus)]
pub struct NewMenuRow {
    pub id: String,
    pub generated_at_ms: i64,
    pub days: String,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = menu_selections)]
pub struct MenuSelectionRow {
    pub menu_id: String,
    pub position: i32,
    pub recipe_id: String,
    pub recipe_name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = menu_selections)]
pub struct NewMenuSelectionRow {
    pub menu_id: String,
    pub position: i32,
    pub recipe_id: String,
    pub recipe_name: String,
}
