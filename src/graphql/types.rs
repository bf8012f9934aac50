use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, ErrorExtensions, Object, Result, SimpleObject, ID};

use super::loaders::{CatalogLoader, CategoryKey, IngredientsOfCategory};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Category, Ingredient};

/// Integer primary key carried by a GraphQL `ID`.
pub fn parse_id(id: &ID) -> CatalogResult<i32> {
    id.0.trim()
        .parse()
        .map_err(|_| CatalogError::InvalidId(id.0.clone()))
}

pub fn to_id(key: i32) -> ID {
    ID(key.to_string())
}

#[derive(Debug, Clone)]
pub struct CategoryObject(pub Category);

#[Object(name = "CategoryType")]
impl CategoryObject {
    async fn id(&self) -> ID {
        to_id(self.0.id)
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn ingredients(&self, ctx: &Context<'_>) -> Result<Vec<IngredientObject>> {
        let loader = ctx.data::<DataLoader<CatalogLoader>>()?;
        let ingredients = loader
            .load_one(IngredientsOfCategory(self.0.id))
            .await
            .map_err(|e| (*e).extend())?
            .unwrap_or_default();
        Ok(ingredients.into_iter().map(IngredientObject::new).collect())
    }
}

/// An ingredient, optionally with its category already fetched.
#[derive(Debug, Clone)]
pub struct IngredientObject {
    ingredient: Ingredient,
    category: Option<Category>,
}

impl IngredientObject {
    /// Category resolved later through the batch loader.
    pub fn new(ingredient: Ingredient) -> Self {
        IngredientObject {
            ingredient,
            category: None,
        }
    }

    pub fn with_category(ingredient: Ingredient, category: Category) -> Self {
        IngredientObject {
            ingredient,
            category: Some(category),
        }
    }
}

#[Object(name = "IngredientType")]
impl IngredientObject {
    async fn id(&self) -> ID {
        to_id(self.ingredient.id)
    }

    async fn name(&self) -> &str {
        &self.ingredient.name
    }

    async fn notes(&self) -> Option<&str> {
        self.ingredient.notes.as_deref()
    }

    async fn category(&self, ctx: &Context<'_>) -> Result<CategoryObject> {
        if let Some(category) = &self.category {
            return Ok(CategoryObject(category.clone()));
        }
        let category_id = self.ingredient.category_id;
        let loader = ctx.data::<DataLoader<CatalogLoader>>()?;
        loader
            .load_one(CategoryKey(category_id))
            .await
            .map_err(|e| (*e).extend())?
            .map(CategoryObject)
            .ok_or_else(|| {
                CatalogError::NotFound {
                    entity: "Category",
                    id: category_id,
                }
                .extend()
            })
    }
}

#[derive(SimpleObject)]
#[graphql(name = "CreateCategory")]
pub struct CreateCategoryPayload {
    pub category: CategoryObject,
}

#[derive(SimpleObject)]
#[graphql(name = "UpdateCategory")]
pub struct UpdateCategoryPayload {
    pub category: CategoryObject,
}

#[derive(SimpleObject)]
#[graphql(name = "DeleteCategory")]
pub struct DeleteCategoryPayload {
    pub msg: String,
}
