//! Loads catalog fixtures in Django's `dumpdata` JSON layout:
//!
//! ```json
//! [
//!   {"model": "ingredients.category", "pk": 1, "fields": {"name": "Dairy"}},
//!   {"model": "ingredients.ingredient", "pk": 1,
//!    "fields": {"name": "Eggs", "notes": "Good old eggs", "category": 1}}
//! ]
//! ```
//!
//! Records keep their primary keys so ingredient `category` references stay valid.

use std::path::Path;

use diesel::Connection;
use serde::Deserialize;

use crate::db::{DbConnection, DbPool};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{CategoryRow, NewIngredient};
use crate::query;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "model")]
pub enum FixtureRecord {
    #[serde(rename = "ingredients.category")]
    Category { pk: i32, fields: CategoryFields },
    #[serde(rename = "ingredients.ingredient")]
    Ingredient { pk: i32, fields: IngredientFields },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryFields {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IngredientFields {
    pub name: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub category: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub ingredients: usize,
}

pub fn parse_fixture(json: &str) -> CatalogResult<Vec<FixtureRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Seeds an empty catalog from `path`; a catalog that already holds
/// categories is left untouched.
pub fn seed_pool(pool: &DbPool, path: impl AsRef<Path>) -> CatalogResult<SeedSummary> {
    let conn = pool.get()?;
    if query::has_categories(&conn)? {
        log::info!("catalog already populated, skipping fixture");
        return Ok(SeedSummary::default());
    }
    load_fixture(&conn, path)
}

pub fn load_fixture(conn: &DbConnection, path: impl AsRef<Path>) -> CatalogResult<SeedSummary> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let records = parse_fixture(&raw)?;
    let summary = apply_fixture(conn, &records)?;
    log::info!(
        "loaded fixture {} ({} categories, {} ingredients)",
        path.display(),
        summary.categories,
        summary.ingredients
    );
    Ok(summary)
}

/// Inserts all records in one transaction, categories before ingredients.
pub fn apply_fixture(conn: &DbConnection, records: &[FixtureRecord]) -> CatalogResult<SeedSummary> {
    conn.transaction::<_, CatalogError, _>(|| {
        let mut summary = SeedSummary::default();
        for record in records {
            if let FixtureRecord::Category { pk, fields } = record {
                query::insert_category_row(
                    conn,
                    &CategoryRow {
                        id: *pk,
                        name: &fields.name,
                    },
                )?;
                summary.categories += 1;
            }
        }
        for record in records {
            if let FixtureRecord::Ingredient { pk, fields } = record {
                if query::find_category(conn, fields.category)?.is_none() {
                    return Err(CatalogError::Seed(format!(
                        "ingredient {} references missing category {}",
                        pk, fields.category
                    )));
                }
                query::insert_ingredient(
                    conn,
                    &NewIngredient {
                        id: *pk,
                        name: &fields.name,
                        notes: fields.notes.as_deref(),
                        category_id: fields.category,
                    },
                )?;
                summary.ingredients += 1;
            }
        }
        Ok(summary)
    })
}
