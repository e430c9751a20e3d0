//! Bridges between GraphQL requests and the domain services.
//!
//! Reads fail loudly with a [`ServiceError`]. Creates never fail: every
//! outcome is encoded as a [`QueryResult`].

pub mod blog;
pub mod gallery;
pub mod stem_player;

pub use blog::*;
pub use gallery::*;
pub use stem_player::*;

use crate::error::{ServiceError, ServiceResult};
use crate::graphql::mappers::wire_id;
use crate::graphql::types::QueryResult;
use crate::model::Entity;

/// Turn a lookup miss into `NotFound` carrying the requested id.
pub(crate) fn found<E: Entity>(entity: Option<E>, id: &str) -> ServiceResult<E> {
    entity.ok_or_else(|| ServiceError::NotFound {
        label: E::LABEL,
        id: id.to_string(),
    })
}

/// Encode the outcome of a create as a mutation result.
pub(crate) fn creation_result<E: Entity>(saved: ServiceResult<E>) -> QueryResult {
    let id = saved.and_then(|entity| Ok(wire_id(&entity)?));
    match id {
        Ok(id) => {
            log::info!("Successfully created {} with id: {}", E::LABEL.to_lowercase(), id);
            QueryResult::success(format!("{} created successfully", E::LABEL), id)
        }
        Err(err) => {
            let label = E::LABEL.to_lowercase();
            log::error!("Failed to create {}: {}", label, err);
            QueryResult::error(format!("Failed to create {}: {}", label, err))
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use anyhow::{anyhow, Result};

    use crate::model::{Entity, Id};
    use crate::store::traits::{GalleryItemRepository, Repository};

    /// Repository whose every call fails like an unreachable database.
    #[derive(Debug, Default)]
    pub struct FailingRepository;

    #[async_trait::async_trait]
    impl<E: Entity> Repository<E> for FailingRepository {
        async fn find_all(&self) -> Result<Vec<E>> {
            Err(anyhow!("Database error"))
        }

        async fn find_by_id(&self, _id: &Id) -> Result<Option<E>> {
            Err(anyhow!("Database error"))
        }

        async fn save(&self, _entity: E) -> Result<E> {
            Err(anyhow!("Database error"))
        }

        async fn delete_by_id(&self, _id: &Id) -> Result<()> {
            Err(anyhow!("Database error"))
        }
    }

    #[async_trait::async_trait]
    impl GalleryItemRepository for FailingRepository {
        async fn find_by_foreign_objects_in(
            &self,
            _ids: &[String],
        ) -> Result<Vec<crate::model::GalleryItem>> {
            Err(anyhow!("Database error"))
        }
    }
}
