#![allow(dead_code)]

use async_graphql::{Request, Response};
use ingredient_catalog::db::{self, DbPool};
use ingredient_catalog::graphql::{build_schema, with_request_data, CatalogSchema};
use ingredient_catalog::seed;
use serde_json::Value;
use tempfile::TempDir;

pub const FIXTURE: &str = include_str!("../../fixtures/ingredients.json");

/// A migrated SQLite catalog living in its own temporary directory.
pub struct TestCatalog {
    pub pool: DbPool,
    pub schema: CatalogSchema,
    _dir: TempDir,
}

pub fn empty_catalog() -> TestCatalog {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    let pool = db::build_pool(path.to_str().unwrap(), 4).unwrap();
    let schema = build_schema(pool.clone());
    TestCatalog {
        pool,
        schema,
        _dir: dir,
    }
}

/// Dairy(1): Eggs(1), Milk(2); Meat(2): Beef(3), Chicken(4).
pub fn seeded_catalog() -> TestCatalog {
    let catalog = empty_catalog();
    let conn = catalog.pool.get().unwrap();
    let records = seed::parse_fixture(FIXTURE).unwrap();
    seed::apply_fixture(&conn, &records).unwrap();
    catalog
}

impl TestCatalog {
    pub async fn execute(&self, query: &str) -> Response {
        self.schema
            .execute(with_request_data(Request::new(query), &self.pool))
            .await
    }

    /// Runs `query`, asserting it produced no errors, and returns `data` as JSON.
    pub async fn data(&self, query: &str) -> Value {
        let response = self.execute(query).await;
        assert!(
            response.errors.is_empty(),
            "unexpected errors: {:?}",
            response.errors
        );
        response.data.into_json().unwrap()
    }

    /// Runs `query`, asserting it failed, and returns the first error code.
    pub async fn error_code(&self, query: &str) -> String {
        let response = self.execute(query).await;
        let error = response
            .errors
            .first()
            .unwrap_or_else(|| panic!("expected an error for {}", query));
        match error.extensions.as_ref().and_then(|ext| ext.get("code")) {
            Some(async_graphql::Value::String(code)) => code.clone(),
            other => panic!("error without code: {:?} ({:?})", error.message, other),
        }
    }
}
