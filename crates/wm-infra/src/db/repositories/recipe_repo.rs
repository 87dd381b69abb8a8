use async_trait::async_trait;
use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl};
use tracing::debug;
use wm_core::ports::{RecipeRepositoryPort, RepositoryError};
use wm_core::Recipe;

use super::storage_error;
use crate::db::mappers::RecipeRowMapper;
use crate::db::models::RecipeRow;
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::recipes;

pub struct DieselRecipeRepository<E>
where
    E: DbExecutor,
{
    executor: E,
}

impl<E> DieselRecipeRepository<E>
where
    E: DbExecutor,
{
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl<E> RecipeRepositoryPort for DieselRecipeRepository<E>
where
    E: DbExecutor,
{
    async fn add(&self, recipe: &Recipe) -> Result<(), RepositoryError> {
        let row = RecipeRowMapper.to_row(recipe).map_err(storage_error)?;
        self.executor
            .run(|conn| {
                diesel::insert_into(recipes::table)
                    .values(&row)
                    .execute(conn)?;
                Ok(())
            })
            .map_err(storage_error)
    }

    async fn update(&self, recipe: &Recipe) -> Result<(), RepositoryError> {
        let row = RecipeRowMapper.to_row(recipe).map_err(storage_error)?;
        let affected = self
            .executor
            .run(|conn| {
                let n = diesel::update(recipes::table.filter(recipes::id.eq(&row.id)))
                    .set(&row)
                    .execute(conn)?;
                Ok(n)
            })
            .map_err(storage_error)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound(recipe.id.to_string()));
        }
        Ok(())
    }

    async fn delete(&self, recipe: &Recipe) -> Result<(), RepositoryError> {
        let recipe_id = recipe.id.as_str();
        let affected = self
            .executor
            .run(|conn| {
                let n = diesel::delete(recipes::table.filter(recipes::id.eq(recipe_id)))
                    .execute(conn)?;
                Ok(n)
            })
            .map_err(storage_error)?;

        if affected == 0 {
            debug!(recipe_id, "delete of unknown recipe ignored");
        }
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<Recipe>, RepositoryError> {
        let rows: Vec<RecipeRow> = self
            .executor
            .run(|conn| {
                let rows = recipes::table
                    .order((recipes::name.asc(), recipes::id.asc()))
                    .load::<RecipeRow>(conn)?;
                Ok(rows)
            })
            .map_err(storage_error)?;

        rows.iter()
            .map(|row| RecipeRowMapper.to_domain(row))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(storage_error)
    }
}
