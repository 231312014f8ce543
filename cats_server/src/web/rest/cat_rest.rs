use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::model::cat::{CatBmc, CatCreated, CatForCreate, CatList, CatRemoved};
use crate::model::ModelManager;
use crate::web::{Error, Result};

pub async fn add_cat(
    State(mm): State<ModelManager>,
    cat_c: core::result::Result<Json<CatForCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<CatCreated>)> {
    debug!("{:<12} - add_cat", "HANDLER");

    let Json(cat_c) = cat_c.map_err(|rejection| Error::BodyRejected {
        detail: rejection.body_text(),
    })?;
    let created = CatBmc::add_cat(&mm, cat_c).await;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_cats(State(mm): State<ModelManager>) -> Json<CatList> {
    debug!("{:<12} - get_cats", "HANDLER");

    Json(CatBmc::get_cats(&mm).await)
}

pub async fn remove_cat(
    State(mm): State<ModelManager>,
    Path(id): Path<String>,
) -> Result<Json<CatRemoved>> {
    debug!("{:<12} - remove_cat - {id}", "HANDLER");

    let removed = CatBmc::remove_cat(&mm, &id).await?;

    Ok(Json(removed))
}
