use axum::{
    routing::{delete, post},
    Router,
};
use cat_rest::{add_cat, get_cats, remove_cat};

use crate::model::ModelManager;

mod cat_rest;

pub fn routes(mm: ModelManager) -> Router {
    Router::new()
        .route("/cats", post(add_cat).get(get_cats))
        .route("/cats/{id}", delete(remove_cat))
        .with_state(mm)
}
