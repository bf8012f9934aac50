#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;

pub mod config;
pub mod db;
pub mod error;
pub mod graphql;
pub mod models;
pub mod query;
pub mod schema;
pub mod seed;
pub mod server;

pub use error::{CatalogError, CatalogResult};
