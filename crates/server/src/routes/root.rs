use axum::http::StatusCode;

/// Returns "OK" when the service is up
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", content_type = "text/plain", body = String)
    ),
    tag = ""
)]
pub async fn root() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
