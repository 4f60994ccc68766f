use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    /// A starred entry points at a restaurant the catalog doesn't know.
    #[error("inconsistent data: {0}")]
    Inconsistent(String),
    #[error("catalog error: {0}")]
    Catalog(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => "not_found",
            ServiceError::BadRequest(_) => "bad_request",
            ServiceError::Inconsistent(_) => "inconsistent",
            ServiceError::Catalog(_) => "catalog",
        }
    }
}
