use std::io;

use actix_web::{middleware, web, App, HttpServer};

use ingredient_catalog::config::Settings;
use ingredient_catalog::{db, graphql, seed, server};

fn startup_error<E>(err: E) -> io::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    log::error!("startup failed: {}", err);
    io::Error::new(io::ErrorKind::Other, err)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = Settings::from_env().map_err(startup_error)?;

    // set up database connection pool
    let pool = db::build_pool(&settings.database_url, settings.pool_max_size)
        .map_err(startup_error)?;

    if let Some(path) = &settings.seed_file {
        seed::seed_pool(&pool, path).map_err(startup_error)?;
    }

    let schema = graphql::build_schema(pool.clone());

    log::info!(
        "starting HTTP server at http://{}:{}/graphql",
        settings.bind_address,
        settings.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(schema.clone()))
            .wrap(middleware::Logger::default())
            .configure(server::configure)
    })
    .bind((settings.bind_address.as_str(), settings.port))?
    .run()
    .await
}
