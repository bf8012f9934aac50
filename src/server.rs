use actix_web::{get, post, web, HttpResponse, Responder};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::db::DbPool;
use crate::graphql::{with_request_data, CatalogSchema};

#[post("/graphql")]
async fn graphql(
    schema: web::Data<CatalogSchema>,
    pool: web::Data<DbPool>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = with_request_data(request.into_inner(), pool.get_ref());
    schema.execute(request).await.into()
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Routes served by the catalog; the pool and schema must be registered as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(graphql).service(health);
}
