//! Request-scoped batch loaders for the category/ingredient relationship.
//!
//! Resolving `category` on N ingredients, or `ingredients` on N categories,
//! costs one `IN (...)` statement per batch instead of one per parent.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dataloader::{DataLoader, Loader};

use crate::db::{self, DbPool};
use crate::error::CatalogError;
use crate::models::{Category, Ingredient};
use crate::query;

/// Category looked up by primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryKey(pub i32);

/// All ingredients owned by the category with this primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IngredientsOfCategory(pub i32);

pub struct CatalogLoader {
    pool: DbPool,
}

impl CatalogLoader {
    pub fn new(pool: DbPool) -> Self {
        CatalogLoader { pool }
    }

    /// Uncached loader; a fresh one is attached to every request.
    pub fn for_request(pool: &DbPool) -> DataLoader<Self> {
        DataLoader::new(Self::new(pool.clone()), actix_web::rt::spawn)
    }
}

impl Loader<CategoryKey> for CatalogLoader {
    type Value = Category;
    type Error = Arc<CatalogError>;

    async fn load(
        &self,
        keys: &[CategoryKey],
    ) -> Result<HashMap<CategoryKey, Self::Value>, Self::Error> {
        let ids: Vec<i32> = keys.iter().map(|key| key.0).collect();
        log::debug!("batch loading {} categories", ids.len());
        let found = db::run(&self.pool, move |conn| query::find_categories_by_ids(conn, ids))
            .await
            .map_err(Arc::new)?;
        Ok(found
            .into_iter()
            .map(|category| (CategoryKey(category.id), category))
            .collect())
    }
}

impl Loader<IngredientsOfCategory> for CatalogLoader {
    type Value = Vec<Ingredient>;
    type Error = Arc<CatalogError>;

    async fn load(
        &self,
        keys: &[IngredientsOfCategory],
    ) -> Result<HashMap<IngredientsOfCategory, Self::Value>, Self::Error> {
        let ids: Vec<i32> = keys.iter().map(|key| key.0).collect();
        log::debug!("batch loading ingredients of {} categories", ids.len());
        let found = db::run(&self.pool, move |conn| {
            query::find_ingredients_by_category_ids(conn, ids)
        })
        .await
        .map_err(Arc::new)?;

        //categories without ingredients still get an (empty) entry
        let mut grouped: HashMap<IngredientsOfCategory, Vec<Ingredient>> = keys
            .iter()
            .map(|key| (*key, Vec::new()))
            .collect();
        for ingredient in found {
            grouped
                .entry(IngredientsOfCategory(ingredient.category_id))
                .or_default()
                .push(ingredient);
        }
        Ok(grouped)
    }
}
