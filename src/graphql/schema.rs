use async_graphql::{Context, EmptySubscription, Object, Request, ResultExt, Schema, ID};

use super::loaders::CatalogLoader;
use super::types::{
    parse_id, CategoryObject, CreateCategoryPayload, DeleteCategoryPayload, IngredientObject,
    UpdateCategoryPayload,
};
use crate::db::{self, DbPool};
use crate::query;

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub const DELETED_MESSAGE: &str = "Successfully deleted";

pub fn build_schema(pool: DbPool) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(pool)
        .finish()
}

/// Attaches the per-request batch loader; every executed request needs it.
pub fn with_request_data(request: Request, pool: &DbPool) -> Request {
    request.data(CatalogLoader::for_request(pool))
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn all_ingredients(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<IngredientObject>> {
        let pool = ctx.data::<DbPool>()?;
        let rows = db::run(pool, query::find_all_ingredients).await.extend()?;
        Ok(rows
            .into_iter()
            .map(|(ingredient, category)| IngredientObject::with_category(ingredient, category))
            .collect())
    }

    async fn all_categories(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<CategoryObject>> {
        let pool = ctx.data::<DbPool>()?;
        let categories = db::run(pool, query::find_all_categories).await.extend()?;
        Ok(categories.into_iter().map(CategoryObject).collect())
    }

    /// Null when no category has this name.
    async fn category_by_name(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<CategoryObject>> {
        let pool = ctx.data::<DbPool>()?;
        let category = db::run(pool, move |conn| query::find_category_by_name(conn, &name))
            .await
            .extend()?;
        Ok(category.map(CategoryObject))
    }

    /// Null when no ingredient has this id.
    async fn ingredient_by_id(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<IngredientObject>> {
        let ingredient_id = parse_id(&id).extend()?;
        let pool = ctx.data::<DbPool>()?;
        let ingredient = db::run(pool, move |conn| {
            query::find_ingredient_by_id(conn, ingredient_id)
        })
        .await
        .extend()?;
        Ok(ingredient.map(IngredientObject::new))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_category(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<CreateCategoryPayload> {
        let pool = ctx.data::<DbPool>()?;
        let category = db::run(pool, move |conn| query::insert_category(conn, &name))
            .await
            .extend()?;
        log::info!("created category {} ({:?})", category.id, category.name);
        Ok(CreateCategoryPayload {
            category: CategoryObject(category),
        })
    }

    async fn update_category(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
    ) -> async_graphql::Result<UpdateCategoryPayload> {
        let category_id = parse_id(&id).extend()?;
        let pool = ctx.data::<DbPool>()?;
        let category = db::run(pool, move |conn| {
            query::update_category(conn, category_id, &name)
        })
        .await
        .extend()?;
        log::info!("renamed category {} to {:?}", category.id, category.name);
        Ok(UpdateCategoryPayload {
            category: CategoryObject(category),
        })
    }

    async fn delete_category(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<DeleteCategoryPayload> {
        let category_id = parse_id(&id).extend()?;
        let pool = ctx.data::<DbPool>()?;
        db::run(pool, move |conn| query::delete_category(conn, category_id))
            .await
            .extend()?;
        log::info!("deleted category {}", category_id);
        Ok(DeleteCategoryPayload {
            msg: DELETED_MESSAGE.to_string(),
        })
    }
}
