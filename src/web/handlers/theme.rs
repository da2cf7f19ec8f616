use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;

use sitewright::theme::{font_pairings, palette_presets};

use crate::web::helpers::{json_or_not_found, not_found, require_user};
use crate::web::state::AppState;

#[get("/api/theme/palettes")]
pub async fn list_palettes() -> impl Responder {
    let palettes: Vec<_> = palette_presets()
        .into_iter()
        .map(|p| json!({ "name": p.name, "colors": p.colors }))
        .collect();
    HttpResponse::Ok().json(palettes)
}

#[get("/api/theme/font-pairings")]
pub async fn list_font_pairings() -> impl Responder {
    let pairings: Vec<_> = font_pairings()
        .into_iter()
        .map(|f| json!({ "name": f.name, "heading": f.heading, "body": f.body }))
        .collect();
    HttpResponse::Ok().json(pairings)
}

#[post("/api/templates/{id}/palette/{name}")]
pub async fn apply_palette(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(Uuid, String)>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    let (template_id, name) = path.into_inner();
    let Some(palette) = palette_presets().into_iter().find(|p| p.name == name) else {
        return not_found();
    };

    json_or_not_found(
        state
            .db
            .apply_palette(template_id, uid, &palette.colors)
            .await,
    )
}

#[post("/api/templates/{id}/font-pairing/{name}")]
pub async fn apply_font_pairing(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(Uuid, String)>,
) -> impl Responder {
    let uid = match require_user(&req) {
        Ok(uid) => uid,
        Err(resp) => return resp,
    };

    let (template_id, name) = path.into_inner();
    let Some(pairing) = font_pairings().into_iter().find(|f| f.name == name) else {
        return not_found();
    };

    json_or_not_found(
        state
            .db
            .apply_font_pairing(template_id, uid, &pairing.to_patch())
            .await,
    )
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_palettes)
        .service(list_font_pairings)
        .service(apply_palette)
        .service(apply_font_pairing);
}
