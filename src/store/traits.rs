use crate::model::{Entity, GalleryItem, Id};
use anyhow::Result;

/// Generic persistence contract shared by every vertical.
///
/// A miss in `find_by_id` is `Ok(None)`; turning it into a user facing error
/// is up to the caller.
#[async_trait::async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<E>>;
    async fn find_by_id(&self, id: &Id) -> Result<Option<E>>;
    /// Insert when the entity has no id (assigning one), update otherwise.
    async fn save(&self, entity: E) -> Result<E>;
    async fn delete_by_id(&self, id: &Id) -> Result<()>;
}

#[async_trait::async_trait]
pub trait GalleryItemRepository: Repository<GalleryItem> {
    /// Items whose foreign object list intersects `ids`, each at most once.
    async fn find_by_foreign_objects_in(&self, ids: &[String]) -> Result<Vec<GalleryItem>>;
}
