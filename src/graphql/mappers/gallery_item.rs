use crate::error::MappingError;
use crate::graphql::mappers::wire_id;
use crate::graphql::types::{self, GalleryItemInput};
use crate::model::GalleryItem;

#[derive(Debug, Clone, Copy, Default)]
pub struct GalleryItemMapper;

impl GalleryItemMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map(&self, item: &GalleryItem) -> Result<types::GalleryItem, MappingError> {
        log::debug!("Mapping gallery item {}", item.title);
        let mapped = types::GalleryItem {
            id: wire_id(item)?,
            title: item.title.clone(),
            description: item.description.clone(),
            content: item.content.clone(),
            image_path: item.image_path.clone(),
            foreign_object: item.foreign_object.clone(),
            created_at: item.timestamps.created_at,
            updated_at: item.timestamps.updated_at,
        };
        log::debug!("Mapped gallery item {} with id {}", mapped.title, mapped.id);
        Ok(mapped)
    }

    pub fn map_input(&self, input: &GalleryItemInput) -> GalleryItem {
        log::debug!("Mapping input for gallery item with title: {}", input.title);
        GalleryItem {
            description: input.description.clone(),
            content: input.content.clone(),
            image_path: input.image_path.clone(),
            foreign_object: input.foreign_object.clone(),
            ..GalleryItem::new(input.title.clone())
        }
    }
}
