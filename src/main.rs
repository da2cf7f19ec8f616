mod web;

use actix_web::middleware::Logger;
use actix_web::web::{Data, JsonConfig};
use actix_web::{App, HttpServer};

use sitewright::config::AppConfig;
use sitewright::db::Database;

use crate::web::helpers::bad_request;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let db = Database::new(&config.database_url, config.max_connections, config.defaults)
        .await
        .map_err(std::io::Error::other)?;

    log::info!("listening on {}", config.bind_addr);

    let state = Data::new(web::AppState { db });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(JsonConfig::default().error_handler(|err, _req| {
                let message = err.to_string();
                actix_web::error::InternalError::from_response(err, bad_request(message))
                    .into()
            }))
            .wrap(Logger::default())
            .configure(web::handlers::configure)
    })
    .bind(config.bind_addr)?
    .run()
    .await
}
