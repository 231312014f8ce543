mod error;
pub mod mw_res_map;
pub mod rest;
pub mod routes_fallback;

pub use self::error::{ClientError, Error, Result};

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;

use crate::model::ModelManager;
use crate::web::mw_res_map::mw_response_map;

/// The full application router. Unknown paths and known paths hit with the
/// wrong method both answer with the JSON 404.
pub fn routes_all(mm: ModelManager) -> Router {
    Router::new()
        .merge(rest::routes(mm))
        .method_not_allowed_fallback(routes_fallback::handler_not_found)
        .fallback(routes_fallback::handler_not_found)
        .layer(middleware::map_response(mw_response_map))
        .layer(CorsLayer::permissive())
}
