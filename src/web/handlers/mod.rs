pub mod pages;
pub mod preview;
pub mod templates;
pub mod theme;
pub mod versions;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    templates::configure(cfg);
    pages::configure(cfg);
    versions::configure(cfg);
    theme::configure(cfg);
    preview::configure(cfg);
}
