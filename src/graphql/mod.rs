//! GraphQL surface of the catalog.
//!
//! ## Schema
//!
//! - **Queries**: `allIngredients`, `allCategories`, `categoryByName`, `ingredientById`
//! - **Mutations**: `createCategory`, `updateCategory`, `deleteCategory`
//!
//! ```graphql
//! { allIngredients { id name notes category { id name } } }
//! mutation { createCategory(name: "Spices") { category { id name } } }
//! ```

mod loaders;
mod schema;
mod types;

pub use loaders::{CatalogLoader, CategoryKey, IngredientsOfCategory};
pub use schema::{
    build_schema, with_request_data, CatalogSchema, MutationRoot, QueryRoot, DELETED_MESSAGE,
};
pub use types::*;
