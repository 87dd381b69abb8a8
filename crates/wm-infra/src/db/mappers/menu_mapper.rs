use anyhow::{Context, Result};
use wm_core::{Menu, MenuId, MenuSelection, RecipeId, TimestampMs};

use crate::db::models::{MenuRow, MenuSelectionRow, NewMenuRow, NewMenuSelectionRow};
use crate::db::ports::{InsertMapper, RowMapper};

/// A menu row together with its selection rows, ordered by position.
pub type StoredMenu = (MenuRow, Vec<MenuSelectionRow>);

pub struct MenuRowMapper;

impl InsertMapper<Menu, (NewMenuRow, Vec<NewMenuSelectionRow>)> for MenuRowMapper {
    fn to_row(&self, domain: &Menu) -> Result<(NewMenuRow, Vec<NewMenuSelectionRow>)> {
        let menu_id = domain.id.as_str().to_string();
        let days = serde_json::to_string(&domain.days).context("serialize menu days")?;

        let selections = domain
            .selections
            .iter()
            .enumerate()
            .map(|(position, selection)| {
                Ok(NewMenuSelectionRow {
                    menu_id: menu_id.clone(),
                    position: i32::try_from(position).context("menu position exceeds i32")?,
                    recipe_id: selection.recipe_id.as_str().to_string(),
                    recipe_name: selection.recipe_name.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((
            NewMenuRow {
                id: menu_id,
                generated_at_ms: domain.generated_at.as_millis(),
                days,
            },
            selections,
        ))
    }
}

impl RowMapper<StoredMenu, Menu> for MenuRowMapper {
    fn to_domain(&self, row: &StoredMenu) -> Result<Menu> {
        let (menu, selections) = row;
        let days: Vec<String> = serde_json::from_str(&menu.days)
            .with_context(|| format!("invalid days column for menu {}", menu.id))?;

        Ok(Menu {
            id: MenuId::from(menu.id.clone()),
            generated_at: TimestampMs::from_epoch_millis(menu.generated_at_ms),
            days,
            selections: selections
                .iter()
                .map(|s| MenuSelection {
                    recipe_id: RecipeId::from(s.recipe_id.clone()),
                    recipe_name: s.recipe_name.clone(),
                })
                .collect(),
        })
    }
}
