//! Connection pool, schema migrations and the bridge from async resolvers to
//! diesel's blocking connections.
//!
//! SQLite is the default backend; building with `--no-default-features
//! --features mysql` switches every alias here to MySQL.

use actix_web::web;
use diesel::r2d2::{self, ConnectionManager};

use crate::error::{CatalogError, CatalogResult};

#[cfg(feature = "mysql")]
pub type DbConnection = diesel::MysqlConnection;
#[cfg(not(feature = "mysql"))]
pub type DbConnection = diesel::SqliteConnection;

pub type DbPool = r2d2::Pool<ConnectionManager<DbConnection>>;

#[cfg(feature = "mysql")]
embed_migrations!("migrations/mysql");
#[cfg(not(feature = "mysql"))]
embed_migrations!("migrations/sqlite");

/// Per-connection SQLite settings. Foreign keys are off by default in SQLite;
/// turning them on makes category deletes behave as they do on MySQL.
#[cfg(not(feature = "mysql"))]
#[derive(Debug)]
struct SqlitePragmas;

#[cfg(not(feature = "mysql"))]
impl r2d2::CustomizeConnection<DbConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut DbConnection) -> Result<(), r2d2::Error> {
        use diesel::connection::SimpleConnection;

        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(r2d2::Error::QueryError)
    }
}

/// Builds the pool and brings the schema up to date before handing it out.
pub fn build_pool(database_url: &str, max_size: u32) -> CatalogResult<DbPool> {
    let manager = ConnectionManager::<DbConnection>::new(database_url);
    let builder = r2d2::Pool::builder().max_size(max_size);
    #[cfg(not(feature = "mysql"))]
    let builder = builder.connection_customizer(Box::new(SqlitePragmas));
    let pool = builder.build(manager)?;
    log::info!("database pool ready (max_size={})", max_size);

    let conn = pool.get()?;
    run_migrations(&conn)?;
    Ok(pool)
}

pub fn run_migrations(conn: &DbConnection) -> CatalogResult<()> {
    embedded_migrations::run(conn).map_err(|e| CatalogError::Migration(e.to_string()))?;
    log::debug!("migrations applied");
    Ok(())
}

/// Runs `f` with a pooled connection on actix's blocking thread pool.
///
/// The connection is checked out for the duration of `f` only.
pub async fn run<F, T>(pool: &DbPool, f: F) -> CatalogResult<T>
where
    F: FnOnce(&DbConnection) -> CatalogResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    web::block(move || {
        let conn = pool.get()?;
        f(&conn)
    })
    .await?
}
