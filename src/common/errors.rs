use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failures surfaced by the template, page and version stores.
///
/// A missing record and a refused caller are both reported as `Ok(None)` or
/// `Ok(false)`, never as an error.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Database error while {context}: {source}")]
    Database {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }
}

pub trait DbContext<T> {
    fn context(self, context: &'static str) -> Result<T, StoreError>;
}

impl<T> DbContext<T> for Result<T, sqlx::Error> {
    fn context(self, context: &'static str) -> Result<T, StoreError> {
        self.map_err(|source| {
            log::error!("database failure while {context}: {source}");
            StoreError::Database { context, source }
        })
    }
}

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
        }
        _ => false,
    }
}
