use thiserror::Error;

use crate::model::Id;

/// Failure to render a persisted entity for the wire.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("{label} has no identifier")]
    MissingId { label: &'static str },
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{label} not found with id: {id}")]
    NotFound { label: &'static str, id: String },

    #[error("invalid id '{id}': {source}")]
    InvalidId {
        id: String,
        #[source]
        source: uuid::Error,
    },

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error("{0:#}")]
    Store(#[from] anyhow::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Parse a wire identifier into the native id type.
pub fn parse_id(id: &str) -> ServiceResult<Id> {
    Id::parse_str(id).map_err(|source| ServiceError::InvalidId {
        id: id.to_string(),
        source,
    })
}
