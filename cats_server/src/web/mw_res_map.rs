use crate::web::{self, ClientError};
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{debug, info};
use uuid::Uuid;

/// Turns a `web::Error` left in the response extensions into the client
/// body `{ statusCode, message }`, and logs every request.
pub async fn mw_response_map(uri: Uri, req_method: Method, res: Response) -> Response {
    debug!("{:<12} - mw_response_map", "RES_MAPPER");

    let uuid = Uuid::new_v4();
    let web_error = res.extensions().get::<web::Error>();
    let client_status_error = web_error.map(|se| se.client_status_and_error());

    let error_response = client_status_error
        .as_ref()
        .map(|(status_code, client_error)| {
            let mut client_error_body = json!({
                "statusCode": status_code.as_u16(),
                "message": client_error.message(),
            });
            if let Some(error) = client_error.error_label() {
                client_error_body["error"] = json!(error);
            }
            debug!("CLIENT ERROR BODY:\n{client_error_body}");
            (*status_code, Json(client_error_body)).into_response()
        });

    let client_error = client_status_error.map(|(_, client_error)| client_error);
    let status = error_response.as_ref().unwrap_or(&res).status();
    log_request(uuid, &req_method, &uri, status.as_u16(), web_error, client_error);

    error_response.unwrap_or(res)
}

fn log_request(
    uuid: Uuid,
    req_method: &Method,
    uri: &Uri,
    status: u16,
    web_error: Option<&web::Error>,
    client_error: Option<ClientError>,
) {
    match (web_error, client_error) {
        (Some(web_error), Some(client_error)) => info!(
            "{:<12} - {uuid} {req_method} {uri} -> {status} {} ({})",
            "REQUEST",
            client_error.as_ref(),
            web_error.as_ref(),
        ),
        _ => info!("{:<12} - {uuid} {req_method} {uri} -> {status}", "REQUEST"),
    }
}
