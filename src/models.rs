use crate::schema::{categories, ingredients};

#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable)]
#[table_name = "categories"]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable)]
#[table_name = "ingredients"]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
    pub notes: Option<String>,
    pub category_id: i32, //foreign key
}

#[derive(Debug, Insertable)]
#[table_name = "categories"]
pub struct NewCategory<'a> {
    pub name: &'a str,
}

/// Category row with a caller-chosen primary key, used when loading fixtures.
#[derive(Debug, Insertable)]
#[table_name = "categories"]
pub struct CategoryRow<'a> {
    pub id: i32,
    pub name: &'a str,
}

/// Ingredients are only written at the storage layer (fixtures); the
/// graph surface never creates them.
#[derive(Debug, Insertable)]
#[table_name = "ingredients"]
pub struct NewIngredient<'a> {
    pub id: i32,
    pub name: &'a str,
    pub notes: Option<&'a str>,
    pub category_id: i32,
}

#[derive(Debug, AsChangeset)]
#[table_name = "categories"]
pub struct CategoryChangeset<'a> {
    pub name: &'a str,
}
