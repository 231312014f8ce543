use crate::model;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::debug;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Serialize, strum_macros::AsRefStr)]
#[serde(tag = "type", content = "data")]
pub enum Error {
    RouteNotFound { method: String, path: String },
    BodyRejected { detail: String },

    Model(model::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        debug!("{:<12} - web::Error {self:?}", "INTO_RES");
        // Placeholder; mw_response_map renders the client body.
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for Error {}

impl From<model::Error> for Error {
    fn from(value: model::Error) -> Self {
        Self::Model(value)
    }
}

impl Error {
    pub fn client_status_and_error(&self) -> (StatusCode, ClientError) {
        use model::Error::CatNotFound;
        use Error::*;

        match self {
            Model(CatNotFound { .. }) => (StatusCode::NOT_FOUND, ClientError::CAT_NOT_FOUND),
            BodyRejected { .. } => (StatusCode::BAD_REQUEST, ClientError::INVALID_BODY),
            RouteNotFound { method, path } => (
                StatusCode::NOT_FOUND,
                ClientError::ROUTE_NOT_FOUND {
                    method: method.clone(),
                    path: path.clone(),
                },
            ),
        }
    }
}

#[derive(Debug, Clone, strum_macros::AsRefStr)]
#[allow(non_camel_case_types)]
pub enum ClientError {
    CAT_NOT_FOUND,
    INVALID_BODY,
    ROUTE_NOT_FOUND { method: String, path: String },
}

impl ClientError {
    /// Text sent to the client in the `message` field.
    pub fn message(&self) -> String {
        match self {
            Self::CAT_NOT_FOUND => model::MSG_CAT_NOT_FOUND.to_string(),
            Self::INVALID_BODY => "Invalid request body".to_string(),
            Self::ROUTE_NOT_FOUND { method, path } => format!("Cannot {method} {path}"),
        }
    }

    /// Status reason added as `error` to route-level failures.
    pub fn error_label(&self) -> Option<&'static str> {
        match self {
            Self::ROUTE_NOT_FOUND { .. } => Some("Not Found"),
            Self::CAT_NOT_FOUND | Self::INVALID_BODY => None,
        }
    }
}
