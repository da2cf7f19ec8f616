use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use sitewright::common::StoreError;

pub const USER_HEADER: &str = "X-User-Id";

pub fn current_user_id(req: &HttpRequest) -> Option<Uuid> {
    req.headers()
        .get(USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| Uuid::parse_str(s).ok())
}

pub fn require_user(req: &HttpRequest) -> Result<Uuid, HttpResponse> {
    current_user_id(req).ok_or_else(|| {
        HttpResponse::Unauthorized().json(json!({
            "error": format!("missing or invalid {USER_HEADER} header")
        }))
    })
}

pub fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "not found" }))
}

pub fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": message.into() }))
}

/// Maps a store failure onto a response. Database details stay in the log.
pub fn store_error(err: StoreError) -> HttpResponse {
    match err {
        StoreError::InvalidRequest(message) => bad_request(message),
        StoreError::Database { .. } => {
            log::error!("request failed: {err}");
            HttpResponse::InternalServerError()
                .json(json!({ "error": "internal server error" }))
        }
    }
}

pub fn json_or_not_found<T: Serialize>(
    result: Result<Option<T>, StoreError>,
) -> HttpResponse {
    match result {
        Ok(Some(value)) => HttpResponse::Ok().json(value),
        Ok(None) => not_found(),
        Err(e) => store_error(e),
    }
}

pub fn created_or_not_found<T: Serialize>(
    result: Result<Option<T>, StoreError>,
) -> HttpResponse {
    match result {
        Ok(Some(value)) => HttpResponse::Created().json(value),
        Ok(None) => not_found(),
        Err(e) => store_error(e),
    }
}

pub fn no_content_or_not_found(result: Result<bool, StoreError>) -> HttpResponse {
    match result {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => not_found(),
        Err(e) => store_error(e),
    }
}
