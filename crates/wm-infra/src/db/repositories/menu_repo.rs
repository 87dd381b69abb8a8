use std::collections::HashMap;

use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::sql_types::BigInt;
use diesel::{Connection, ExpressionMethods, QueryDsl, RunQueryDsl};
use tracing::debug;
use wm_core::ports::{MenuRepositoryPort, RepositoryError};
use wm_core::Menu;

use super::storage_error;
use crate::db::mappers::MenuRowMapper;
use crate::db::models::{MenuRow, MenuSelectionRow};
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::{menu_selections, menus};

pub struct DieselMenuRepository<E>
where
    E: DbExecutor,
{
    executor: E,
}

impl<E> DieselMenuRepository<E>
where
    E: DbExecutor,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl<E> MenuRepositoryPort for DieselMenuRepository<E>
where
    E: DbExecutor,
{
    async fn add(&self, menu: &Menu) -> Result<(), RepositoryError> {
        let (menu_row, selection_rows) = MenuRowMapper.to_row(menu).map_err(storage_error)?;
        self.executor
            .run(|conn| {
                conn.transaction::<_, diesel::result::Error, _>(|conn| {
                    diesel::insert_into(menus::table)
                        .values(&menu_row)
                        .execute(conn)?;
                    if !selection_rows.is_empty() {
                        diesel::insert_into(menu_selections::table)
                            .values(&selection_rows)
                            .execute(conn)?;
                    }
                    Ok(())
                })?;
                Ok(())
            })
            .map_err(storage_error)
    }

    async fn fetch_all(&self) -> Result<Vec<Menu>, RepositoryError> {
        let (menu_rows, selection_rows) = self
            .executor
            .run(|conn| {
                // rowid breaks ties between menus generated in the same millisecond
                let menu_rows = menus::table
                    .order(menus::generated_at_ms.desc())
                    .then_order_by(sql::<BigInt>("menus.rowid DESC"))
                    .load::<MenuRow>(conn)?;
                let selection_rows = menu_selections::table
                    .order((menu_selections::menu_id.asc(), menu_selections::position.asc()))
                    .load::<MenuSelectionRow>(conn)?;
                Ok((menu_rows, selection_rows))
            })
            .map_err(storage_error)?;

        let mut by_menu: HashMap<String, Vec<MenuSelectionRow>> = HashMap::new();
        for row in selection_rows {
            by_menu.entry(row.menu_id.clone()).or_default().push(row);
        }

        menu_rows
            .into_iter()
            .map(|menu_row| {
                let selections = by_menu.remove(&menu_row.id).unwrap_or_default();
                MenuRowMapper.to_domain(&(menu_row, selections))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(storage_error)
    }

    async fn delete(&self, menu: &Menu) -> Result<(), RepositoryError> {
        let menu_id = menu.id.as_str();
        let affected = self
            .executor
            .run(|conn| {
                let n = conn.transaction::<_, diesel::result::Error, _>(|conn| {
                    diesel::delete(
                        menu_selections::table.filter(menu_selections::menu_id.eq(menu_id)),
                    )
                    .execute(conn)?;
                    diesel::delete(menus::table.filter(menus::id.eq(menu_id))).execute(conn)
                })?;
                Ok(n)
            })
            .map_err(storage_error)?;

        if affected == 0 {
            debug!(menu_id, "delete of unknown menu ignored");
        }
        Ok(())
    }
}
