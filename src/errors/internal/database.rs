use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {operation} failed: {source}")]
    Operation {
        operation: &'static str,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Database connection to {url} failed: {source}")]
    Connect {
        url: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Running migrations failed: {source}")]
    Migration {
        #[source]
        source: sea_orm::DbErr,
    },
}
