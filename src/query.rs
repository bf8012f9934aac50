use diesel::prelude::*;

use crate::db::DbConnection;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    Category, CategoryChangeset, CategoryRow, Ingredient, NewCategory, NewIngredient,
};
use crate::schema::{categories, ingredients};

pub fn find_all_categories(conn: &DbConnection) -> CatalogResult<Vec<Category>> {
    Ok(categories::table.order(categories::id.asc()).load(conn)?)
}

/// Every ingredient paired with its category, fetched in one joined statement.
pub fn find_all_ingredients(conn: &DbConnection) -> CatalogResult<Vec<(Ingredient, Category)>> {
    Ok(ingredients::table
        .inner_join(categories::table)
        .order(ingredients::id.asc())
        .load(conn)?)
}

/// Names are not unique at this layer; with duplicates the lowest id wins.
pub fn find_category_by_name(conn: &DbConnection, name: &str) -> CatalogResult<Option<Category>> {
    Ok(categories::table
        .filter(categories::name.eq(name))
        .order(categories::id.asc())
        .first(conn)
        .optional()?)
}

pub fn find_category(conn: &DbConnection, category_id: i32) -> CatalogResult<Option<Category>> {
    Ok(categories::table
        .find(category_id)
        .first(conn)
        .optional()?)
}

pub fn find_ingredient_by_id(
    conn: &DbConnection,
    ingredient_id: i32,
) -> CatalogResult<Option<Ingredient>> {
    Ok(ingredients::table
        .find(ingredient_id)
        .first(conn)
        .optional()?)
}

pub fn find_categories_by_ids(conn: &DbConnection, ids: Vec<i32>) -> CatalogResult<Vec<Category>> {
    Ok(categories::table
        .filter(categories::id.eq_any(ids))
        .load(conn)?)
}

pub fn find_ingredients_by_category_ids(
    conn: &DbConnection,
    ids: Vec<i32>,
) -> CatalogResult<Vec<Ingredient>> {
    Ok(ingredients::table
        .filter(ingredients::category_id.eq_any(ids))
        .order(ingredients::id.asc())
        .load(conn)?)
}

#[cfg(not(feature = "mysql"))]
no_arg_sql_function!(
    last_insert_rowid,
    diesel::sql_types::BigInt,
    "Rowid of the last insert made on this connection"
);
#[cfg(feature = "mysql")]
no_arg_sql_function!(
    last_insert_id,
    diesel::sql_types::BigInt,
    "AUTO_INCREMENT value of the last insert made on this connection"
);

/// Key assigned by this connection's most recent insert, whatever other
/// clients have inserted since.
fn last_inserted_key(conn: &DbConnection) -> CatalogResult<i32> {
    #[cfg(not(feature = "mysql"))]
    let key: i64 = diesel::select(last_insert_rowid).get_result(conn)?;
    #[cfg(feature = "mysql")]
    let key: i64 = diesel::select(last_insert_id).get_result(conn)?;
    Ok(key as i32)
}

pub fn insert_category(conn: &DbConnection, name: &str) -> CatalogResult<Category> {
    diesel::insert_into(categories::table)
        .values(&NewCategory { name })
        .execute(conn)?;
    let category_id = last_inserted_key(conn)?;
    Ok(categories::table.find(category_id).first(conn)?)
}

/// One `UPDATE`; a miss is detected from the affected-row count.
pub fn update_category(conn: &DbConnection, category_id: i32, name: &str) -> CatalogResult<Category> {
    let updated = diesel::update(categories::table.find(category_id))
        .set(&CategoryChangeset { name })
        .execute(conn)?;
    if updated == 0 {
        return Err(CatalogError::NotFound {
            entity: "Category",
            id: category_id,
        });
    }
    Ok(Category {
        id: category_id,
        name: name.to_string(),
    })
}

pub fn has_categories(conn: &DbConnection) -> CatalogResult<bool> {
    let any = categories::table
        .select(categories::id)
        .first::<i32>(conn)
        .optional()?;
    Ok(any.is_some())
}

pub fn delete_category(conn: &DbConnection, category_id: i32) -> CatalogResult<()> {
    let deleted = diesel::delete(categories::table.find(category_id)).execute(conn)?;
    if deleted == 0 {
        return Err(CatalogError::NotFound {
            entity: "Category",
            id: category_id,
        });
    }
    Ok(())
}

pub fn insert_category_row(conn: &DbConnection, row: &CategoryRow<'_>) -> CatalogResult<()> {
    diesel::insert_into(categories::table)
        .values(row)
        .execute(conn)?;
    Ok(())
}

pub fn insert_ingredient(conn: &DbConnection, new: &NewIngredient<'_>) -> CatalogResult<()> {
    diesel::insert_into(ingredients::table)
        .values(new)
        .execute(conn)?;
    Ok(())
}
