use axum::http::{Method, Uri};

use crate::web::Error;

pub async fn handler_not_found(method: Method, uri: Uri) -> Error {
    Error::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
