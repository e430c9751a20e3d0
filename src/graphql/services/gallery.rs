use std::sync::Arc;

use crate::error::{parse_id, ServiceResult};
use crate::graphql::mappers::GalleryItemMapper;
use crate::graphql::services::{creation_result, found};
use crate::graphql::types::{GalleryItem, GalleryItemInput, QueryResult};
use crate::model;
use crate::service::GalleryService;

/// GraphQL facing service of the gallery.
pub struct GalleryGraphQlService {
    gallery: Arc<GalleryService>,
    mapper: GalleryItemMapper,
}

impl GalleryGraphQlService {
    pub fn new(gallery: Arc<GalleryService>, mapper: GalleryItemMapper) -> Self {
        Self { gallery, mapper }
    }

    fn map_all(&self, items: &[model::GalleryItem]) -> ServiceResult<Vec<GalleryItem>> {
        Ok(items
            .iter()
            .map(|item| self.mapper.map(item))
            .collect::<Result<Vec<_>, _>>()?)
    }

    pub async fn list(&self) -> ServiceResult<Vec<GalleryItem>> {
        log::info!("Retrieving gallery items");
        let items = self.map_all(&self.gallery.list().await?)?;
        log::info!("Retrieved {} gallery items", items.len());
        Ok(items)
    }

    pub async fn locate(&self, id: &str) -> ServiceResult<GalleryItem> {
        log::info!("Retrieving gallery item by ID: {}", id);
        let item = found(self.gallery.locate(&parse_id(id)?).await?, id)?;
        let item = self.mapper.map(&item)?;
        log::info!("Retrieved gallery item {} with id {}", item.title, item.id);
        Ok(item)
    }

    pub async fn list_by_foreign_object(&self, ids: &[String]) -> ServiceResult<Vec<GalleryItem>> {
        log::info!("Retrieving gallery items by foreign object ids: {:?}", ids);
        let items = self.map_all(&self.gallery.list_by_foreign_objects(ids).await?)?;
        log::info!("Retrieved {} gallery items matching foreign object ids", items.len());
        Ok(items)
    }

    pub async fn create(&self, input: &GalleryItemInput) -> QueryResult {
        log::info!("Creating gallery item with title: {}", input.title);
        let item = self.mapper.map_input(input);
        creation_result(self.gallery.save(item).await.map_err(Into::into))
    }
}
