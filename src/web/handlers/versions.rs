use actix_web::{get, post, web, HttpRequest, Responder};
use uuid::Uuid;

use crate::web::forms::VersionForm;
use crate::web::helpers::{created_or_not_found, json_or_not_found, require_user};
use crate::web::state::AppState;

#[get("/api/templates/{id}/versions")]
pub async fn list_versions(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    json_or_not_found(state.db.list_versions(path.into_inner(), uid).await)
}

#[post("/api/templates/{id}/versions")]
pub async fn create_version(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: Option<web::Json<VersionForm>>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    let form = body.map(web::Json::into_inner).unwrap_or_default();
    created_or_not_found(
        state
            .db
            .create_version(path.into_inner(), uid, form.changes_note.as_deref())
            .await,
    )
}

#[get("/api/templates/{id}/versions/{version_id}")]
pub async fn get_version(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(Uuid, Uuid)>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    let (template_id, version_id) = path.into_inner();
    json_or_not_found(state.db.get_version(template_id, version_id, uid).await)
}

#[post("/api/templates/{id}/versions/{version_id}/restore")]
pub async fn restore_version(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(Uuid, Uuid)>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    let (template_id, version_id) = path.into_inner();
    json_or_not_found(
        state
            .db
            .restore_version(template_id, version_id, uid)
            .await,
    )
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_versions)
        .service(create_version)
        .service(get_version)
        .service(restore_version);
}
