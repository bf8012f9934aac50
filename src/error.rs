use actix_web::error::BlockingError;
use async_graphql::ErrorExtensions;
use diesel::r2d2::PoolError;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A mutation targeted a row that does not exist.
    #[error("{entity} matching id {id} does not exist")]
    NotFound { entity: &'static str, id: i32 },

    /// An `ID` argument that does not coerce to an integer key.
    #[error("invalid id {0:?}: expected an integer")]
    InvalidId(String),

    #[error("storage error: {0}")]
    Storage(#[from] diesel::result::Error),

    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),

    #[error("blocking database task was cancelled")]
    Blocking,

    #[error("migration failed: {0}")]
    Migration(String),

    #[error("invalid fixture: {0}")]
    Seed(String),

    #[error("could not read fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse fixture: {0}")]
    Fixture(#[from] serde_json::Error),
}

impl CatalogError {
    /// Stable code reported in `extensions.code` of a GraphQL error.
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::NotFound { .. } => "NOT_FOUND",
            CatalogError::InvalidId(_) => "INVALID_ID",
            _ => "STORAGE_ERROR",
        }
    }
}

impl From<BlockingError> for CatalogError {
    fn from(_: BlockingError) -> Self {
        CatalogError::Blocking
    }
}

impl ErrorExtensions for CatalogError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}
