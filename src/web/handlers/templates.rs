use actix_web::{delete, get, patch, post, web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;

use sitewright::models::{TemplateCreate, TemplateUpdate};

use crate::web::forms::SearchQuery;
use crate::web::helpers::{
    bad_request, created_or_not_found, json_or_not_found, no_content_or_not_found,
    require_user, store_error,
};
use crate::web::state::AppState;

#[get("/api/templates")]
pub async fn search_templates(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    let search = match query.into_inner().into_search() {
        Ok(search) => search,
        Err(message) => return bad_request(message),
    };

    match state.db.search_templates(uid, &search).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => store_error(e),
    }
}

#[post("/api/templates")]
pub async fn create_template(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<TemplateCreate>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    created_or_not_found(state.db.create_template(uid, &body).await)
}

#[get("/api/templates/{id}")]
pub async fn get_template(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    json_or_not_found(state.db.get_template(path.into_inner(), Some(uid)).await)
}

#[patch("/api/templates/{id}")]
pub async fn update_template(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<TemplateUpdate>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    json_or_not_found(
        state
            .db
            .update_template(path.into_inner(), uid, &body)
            .await,
    )
}

#[delete("/api/templates/{id}")]
pub async fn delete_template(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    let id = path.into_inner();
    let result = state.db.delete_template(id, uid).await;
    if matches!(result, Ok(true)) {
        log::info!("template {id} deleted by {uid}");
    }
    no_content_or_not_found(result)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(search_templates)
        .service(create_template)
        .service(get_template)
        .service(update_template)
        .service(delete_template);
}
