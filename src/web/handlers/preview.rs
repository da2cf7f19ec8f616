use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;

use sitewright::render::generate_css;

use crate::web::forms::PreviewQuery;
use crate::web::helpers::{json_or_not_found, not_found, require_user, store_error};
use crate::web::state::AppState;

#[get("/api/templates/{id}/preview")]
pub async fn preview_page(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    query: web::Query<PreviewQuery>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    match state
        .db
        .generate_template_preview(path.into_inner(), uid, query.page.as_deref())
        .await
    {
        Ok(Some(page)) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(page.html),
        Ok(None) => not_found(),
        Err(e) => store_error(e),
    }
}

#[get("/api/templates/{id}/site")]
pub async fn generate_site(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    json_or_not_found(state.db.generate_template_site(path.into_inner(), uid).await)
}

#[get("/api/templates/{id}/theme.css")]
pub async fn theme_css(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    match state.db.get_template(path.into_inner(), Some(uid)).await {
        Ok(Some(found)) => HttpResponse::Ok()
            .content_type("text/css; charset=utf-8")
            .body(generate_css(&found.template.theme)),
        Ok(None) => not_found(),
        Err(e) => store_error(e),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(preview_page)
        .service(generate_site)
        .service(theme_css);
}
