#![cfg(not(feature = "mysql"))]

mod common;

use common::{empty_catalog, seeded_catalog};
use async_graphql::Request;
use serde_json::json;

#[actix_web::test]
async fn all_ingredients_returns_each_row_once_with_its_category() {
    let catalog = seeded_catalog();
    let data = catalog
        .data("{ allIngredients { id name notes category { id name } } }")
        .await;
    assert_eq!(
        data["allIngredients"],
        json!([
            {"id": "1", "name": "Eggs", "notes": "Good old eggs", "category": {"id": "1", "name": "Dairy"}},
            {"id": "2", "name": "Milk", "notes": "Comes from a cow", "category": {"id": "1", "name": "Dairy"}},
            {"id": "3", "name": "Beef", "notes": "Much like milk, this comes from a cow", "category": {"id": "2", "name": "Meat"}},
            {"id": "4", "name": "Chicken", "notes": "Definitely doesn't come from a cow", "category": {"id": "2", "name": "Meat"}},
        ])
    );
}

#[actix_web::test]
async fn all_ingredients_sees_current_category_names() {
    let catalog = seeded_catalog();
    catalog
        .data(r#"mutation { updateCategory(id: "1", name: "Dairy & Eggs") { category { id } } }"#)
        .await;

    let data = catalog.data("{ allIngredients { name category { name } } }").await;
    let names: Vec<_> = data["allIngredients"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["category"]["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Dairy & Eggs", "Dairy & Eggs", "Meat", "Meat"]);
}

#[actix_web::test]
async fn empty_catalog_lists_nothing() {
    let catalog = empty_catalog();
    let data = catalog
        .data("{ allIngredients { id } allCategories { id } }")
        .await;
    assert_eq!(data, json!({"allIngredients": [], "allCategories": []}));
}

#[actix_web::test]
async fn all_categories_resolves_nested_ingredients() {
    let catalog = seeded_catalog();
    catalog
        .data(r#"mutation { createCategory(name: "Spices") { category { id } } }"#)
        .await;

    let data = catalog
        .data("{ allCategories { id name ingredients { name category { name } } } }")
        .await;
    assert_eq!(
        data["allCategories"],
        json!([
            {"id": "1", "name": "Dairy", "ingredients": [
                {"name": "Eggs", "category": {"name": "Dairy"}},
                {"name": "Milk", "category": {"name": "Dairy"}},
            ]},
            {"id": "2", "name": "Meat", "ingredients": [
                {"name": "Beef", "category": {"name": "Meat"}},
                {"name": "Chicken", "category": {"name": "Meat"}},
            ]},
            {"id": "3", "name": "Spices", "ingredients": []},
        ])
    );
}

#[actix_web::test]
async fn category_by_name_finds_existing_category() {
    let catalog = seeded_catalog();
    let data = catalog
        .data(r#"{ categoryByName(name: "Meat") { id name ingredients { id } } }"#)
        .await;
    assert_eq!(
        data["categoryByName"],
        json!({"id": "2", "name": "Meat", "ingredients": [{"id": "3"}, {"id": "4"}]})
    );
}

#[actix_web::test]
async fn category_by_name_miss_is_null_not_error() {
    let catalog = seeded_catalog();
    let data = catalog
        .data(r#"{ categoryByName(name: "Vegetables") { id } }"#)
        .await;
    assert_eq!(data, json!({"categoryByName": null}));
}

#[actix_web::test]
async fn ingredient_by_id_resolves_category() {
    let catalog = seeded_catalog();
    let data = catalog
        .data(r#"{ ingredientById(id: "3") { id name notes category { id name } } }"#)
        .await;
    assert_eq!(
        data["ingredientById"],
        json!({
            "id": "3",
            "name": "Beef",
            "notes": "Much like milk, this comes from a cow",
            "category": {"id": "2", "name": "Meat"}
        })
    );
}

#[actix_web::test]
async fn ingredient_by_id_accepts_integer_literal() {
    let catalog = seeded_catalog();
    let data = catalog.data("{ ingredientById(id: 1) { name } }").await;
    assert_eq!(data, json!({"ingredientById": {"name": "Eggs"}}));
}

#[actix_web::test]
async fn ingredient_by_id_miss_is_null_not_error() {
    let catalog = seeded_catalog();
    let data = catalog.data(r#"{ ingredientById(id: "99") { id } }"#).await;
    assert_eq!(data, json!({"ingredientById": null}));
}

#[actix_web::test]
async fn ingredient_by_id_rejects_non_integer_id() {
    let catalog = seeded_catalog();
    let code = catalog
        .error_code(r#"{ ingredientById(id: "eggs") { id } }"#)
        .await;
    assert_eq!(code, "INVALID_ID");
}

#[actix_web::test]
async fn object_type_names_are_stable() {
    let catalog = seeded_catalog();
    let data = catalog
        .data(r#"{ ingredientById(id: "1") { __typename category { __typename } } }"#)
        .await;
    assert_eq!(
        data["ingredientById"],
        json!({"__typename": "IngredientType", "category": {"__typename": "CategoryType"}})
    );
}

#[actix_web::test]
async fn all_ingredients_takes_categories_from_the_join() {
    let catalog = seeded_catalog();
    // no batch loader attached: any per-ingredient category lookup would fail
    let response = catalog
        .schema
        .execute(Request::new("{ allIngredients { name category { name } } }"))
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["allIngredients"][0]["category"]["name"], "Dairy");
    assert_eq!(data["allIngredients"][3]["category"]["name"], "Meat");
}

#[actix_web::test]
async fn nested_relationships_need_the_batch_loader() {
    let catalog = seeded_catalog();
    let response = catalog
        .schema
        .execute(Request::new(r#"{ ingredientById(id: "1") { category { name } } }"#))
        .await;
    assert!(!response.errors.is_empty());
}
