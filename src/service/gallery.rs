use anyhow::Result;
use std::sync::Arc;

use crate::model::{GalleryItem, Id};
use crate::service::BaseService;
use crate::store::traits::GalleryItemRepository;

/// Domain service of the gallery vertical
#[derive(Clone)]
pub struct GalleryService {
    base: BaseService<GalleryItem, dyn GalleryItemRepository>,
}

impl GalleryService {
    pub fn new(repository: Arc<dyn GalleryItemRepository>) -> Self {
        Self {
            base: BaseService::new(repository),
        }
    }

    pub async fn list(&self) -> Result<Vec<GalleryItem>> {
        self.base.find_all().await
    }

    pub async fn locate(&self, id: &Id) -> Result<Option<GalleryItem>> {
        self.base.find_by_id(id).await
    }

    /// Items referencing any of the given foreign object ids
    pub async fn list_by_foreign_objects(&self, ids: &[String]) -> Result<Vec<GalleryItem>> {
        self.base.repository().find_by_foreign_objects_in(ids).await
    }

    pub async fn save(&self, item: GalleryItem) -> Result<GalleryItem> {
        self.base.save(item).await
    }
}
