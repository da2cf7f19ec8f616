use sqlx::postgres::{PgPool, PgPoolOptions};

use std::sync::Arc;
use std::time::Duration;

use crate::common::GeneralError;
use crate::config::SiteDefaults;

/// Handle to the content store: the Template, Page and Version operations
/// are implemented on it in the sibling modules.
#[derive(Clone)]
pub struct Database {
    pub pool: PgPool,
    pub defaults: Arc<SiteDefaults>,
}

impl Database {
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        defaults: SiteDefaults,
    ) -> Result<Self, GeneralError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self::from_pool(pool, defaults))
    }

    pub fn from_pool(pool: PgPool, defaults: SiteDefaults) -> Self {
        Self {
            pool,
            defaults: Arc::new(defaults),
        }
    }
}
