//! Pure conversions between persisted entities and GraphQL types.

pub mod blog_post;
pub mod gallery_item;
pub mod song;

pub use blog_post::*;
pub use gallery_item::*;
pub use song::*;

use crate::error::MappingError;
use crate::model::Entity;

/// Canonical string form of an entity's id, failing for unsaved entities.
pub(crate) fn wire_id<E: Entity>(entity: &E) -> Result<String, MappingError> {
    entity
        .id()
        .map(|id| id.to_string())
        .ok_or(MappingError::MissingId { label: E::LABEL })
}
