use actix_web::{delete, get, patch, post, put, web, HttpRequest, Responder};
use uuid::Uuid;

use sitewright::models::{PageCreate, PageUpdate};

use crate::web::forms::ReorderForm;
use crate::web::helpers::{
    created_or_not_found, json_or_not_found, no_content_or_not_found,
    require_user, store_error,
};
use crate::web::state::AppState;

#[get("/api/templates/{id}/pages")]
pub async fn list_pages(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    let found = state.db.get_template(path.into_inner(), Some(uid)).await;
    json_or_not_found(found.map(|t| t.map(|t| t.pages)))
}

#[post("/api/templates/{id}/pages")]
pub async fn create_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<PageCreate>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    created_or_not_found(
        state
            .db
            .create_page(path.into_inner(), uid, &body)
            .await,
    )
}

#[put("/api/templates/{id}/pages/order")]
pub async fn reorder_pages(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<ReorderForm>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    json_or_not_found(
        state
            .db
            .reorder_pages(path.into_inner(), uid, &body.page_ids)
            .await,
    )
}

#[get("/api/templates/{id}/pages/{page_id}")]
pub async fn get_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(Uuid, Uuid)>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    let (template_id, page_id) = path.into_inner();
    let page = match state.db.get_template(template_id, Some(uid)).await {
        Ok(found) => found.and_then(|t| t.pages.into_iter().find(|p| p.id == page_id)),
        Err(e) => return store_error(e),
    };

    json_or_not_found(Ok(page))
}

#[patch("/api/templates/{id}/pages/{page_id}")]
pub async fn update_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<PageUpdate>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    let (template_id, page_id) = path.into_inner();
    json_or_not_found(
        state
            .db
            .update_page(template_id, page_id, uid, &body)
            .await,
    )
}

#[delete("/api/templates/{id}/pages/{page_id}")]
pub async fn delete_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(Uuid, Uuid)>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    let (template_id, page_id) = path.into_inner();
    no_content_or_not_found(state.db.delete_page(template_id, page_id, uid).await)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_pages)
        .service(create_page)
        .service(reorder_pages)
        .service(get_page)
        .service(update_page)
        .service(delete_page);
}
